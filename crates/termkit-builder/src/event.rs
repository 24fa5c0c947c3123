use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// Event delivered to a widget listener
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetEvent {
    pub name: String,
    pub detail: Value,
}

impl WidgetEvent {
    pub fn new(name: impl Into<String>) -> Self {
        WidgetEvent {
            name: name.into(),
            detail: Value::Null,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Handler bound to a widget event
///
/// Configs written in Rust bind callbacks directly. Configs loaded from JSON
/// can only name a handler; the name is carried into the widget tree for the
/// host application to resolve.
#[derive(Clone)]
pub enum EventHandler {
    Named(String),
    Callback(Rc<dyn Fn(&WidgetEvent)>),
}

impl EventHandler {
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&WidgetEvent) + 'static,
    {
        EventHandler::Callback(Rc::new(f))
    }

    pub fn named(name: impl Into<String>) -> Self {
        EventHandler::Named(name.into())
    }

    /// Run the handler; named handlers are not invoked
    pub fn invoke(&self, event: &WidgetEvent) -> bool {
        match self {
            EventHandler::Callback(f) => {
                f(event);
                true
            }
            EventHandler::Named(_) => false,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            EventHandler::Named(name) => Some(name.as_str()),
            EventHandler::Callback(_) => None,
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventHandler::Named(name) => f.debug_tuple("Named").field(name).finish(),
            EventHandler::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl Serialize for EventHandler {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EventHandler::Named(name) => serializer.serialize_str(name),
            EventHandler::Callback(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for EventHandler {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(EventHandler::Named)
    }
}
