use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::config::ConfigNode;
use crate::event::{EventHandler, WidgetEvent};

/// A constructed widget instance
///
/// Mirrors what a widget accepts after construction: an id, a class list,
/// a flattened style string, property bindings, attributes and event
/// listeners. Boolean attributes follow HTML presence semantics: a set flag
/// is stored with an empty value, a cleared flag is absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WidgetNode {
    pub tag: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Value>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listeners: Vec<Listener>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Event listener attached to a widget
#[derive(Debug, Clone, Serialize)]
pub struct Listener {
    pub event: String,
    pub handler: EventHandler,
}

/// Child of a widget
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(WidgetNode),
    Text(String),
    /// Inert placeholder, renders nothing
    Empty,
}

impl WidgetNode {
    pub fn new(tag: impl Into<String>) -> Self {
        WidgetNode {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// `div` wrapper assigned to a named slot of its parent
    pub fn slot(name: &str) -> Self {
        let mut wrapper = WidgetNode::new("div");
        wrapper.set_attribute("slot", name);
        wrapper
    }

    /// Apply id, classes and style from a config node
    pub fn apply_presentation(&mut self, config: &ConfigNode) {
        self.id = config.id.clone().filter(|id| !id.is_empty());
        self.classes = config.classes.clone();
        self.style = config
            .style
            .as_ref()
            .map(|style| style.flatten())
            .filter(|css| !css.is_empty());
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set or clear a boolean presence attribute
    pub fn toggle_attribute(&mut self, name: impl Into<String>, present: bool) {
        let name = name.into();
        if present {
            self.attributes.insert(name, String::new());
        } else {
            self.attributes.shift_remove(&name);
        }
    }

    pub fn add_listener(&mut self, event: impl Into<String>, handler: EventHandler) {
        self.listeners.push(Listener {
            event: event.into(),
            handler,
        });
    }

    /// Attach every handler of an events map
    pub fn bind_events(&mut self, events: &IndexMap<String, EventHandler>) {
        for (event, handler) in events {
            self.add_listener(event.clone(), handler.clone());
        }
    }

    /// Append a child; empty placeholders are dropped
    pub fn append(&mut self, child: Node) {
        if !matches!(child, Node::Empty) {
            self.children.push(child);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Run every callback listening for `event.name`, returning how many ran
    pub fn dispatch(&self, event: &WidgetEvent) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.event == event.name)
            .filter(|listener| listener.handler.invoke(event))
            .count()
    }

    /// Direct element children
    pub fn elements(&self) -> impl Iterator<Item = &WidgetNode> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&WidgetNode> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a WidgetNode>) {
        for child in self.elements() {
            if child.tag == tag {
                found.push(child);
            }
            child.collect(tag, found);
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => text.push_str(t),
                Node::Element(e) => text.push_str(&e.text_content()),
                Node::Empty => {}
            }
        }
        text
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&WidgetNode> {
        match self {
            Node::Element(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }
}

impl From<WidgetNode> for Node {
    fn from(widget: WidgetNode) -> Self {
        Node::Element(widget)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_attribute() {
        let mut widget = WidgetNode::new("t-btn");
        widget.toggle_attribute("disabled", true);
        assert_eq!(widget.attribute("disabled"), Some(""));

        widget.toggle_attribute("disabled", false);
        assert!(!widget.has_attribute("disabled"));
    }

    #[test]
    fn test_dispatch_only_matching_callbacks() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();

        let mut widget = WidgetNode::new("t-btn");
        widget.add_listener(
            "click",
            EventHandler::callback(move |_| counter.set(counter.get() + 1)),
        );
        widget.add_listener("click", EventHandler::named("onClick"));
        widget.add_listener("focus", EventHandler::callback(|_| panic!("wrong event")));

        assert_eq!(widget.dispatch(&WidgetEvent::new("click")), 1);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_find_all_document_order() {
        let mut inner = WidgetNode::new("t-pnl");
        inner.id = Some("inner".into());
        let mut middle = WidgetNode::new("t-pnl");
        middle.id = Some("middle".into());
        middle.append(inner.into());
        let mut root = WidgetNode::new("t-pnl");
        root.append(Node::Text("hello".into()));
        root.append(Node::Empty);
        root.append(middle.into());

        let ids: Vec<_> = root
            .find_all("t-pnl")
            .iter()
            .filter_map(|w| w.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["middle", "inner"]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.text_content(), "hello");
    }

    #[test]
    fn test_serialization() {
        let mut widget = WidgetNode::new("t-tog");
        widget.set_property("label", "Enable");
        widget.toggle_attribute("checked", true);
        widget.add_listener("change", EventHandler::named("onToggle"));

        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            value,
            json!({
                "tag": "t-tog",
                "properties": {"label": "Enable"},
                "attributes": {"checked": ""},
                "listeners": [{"event": "change", "handler": "onToggle"}]
            })
        );
    }
}
