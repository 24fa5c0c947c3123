use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use termkit_core::Props;

use crate::event::{EventHandler, WidgetEvent};
use crate::style::Style;
use crate::widget::{Node, WidgetNode};

/// Declarative description of one widget instance and its children
///
/// Besides `props`, a node carries declarative fields at its top level
/// (`title`, `label`, `variant`, ...) that the per-type constructors read.
/// The builder never mutates a config node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigNode {
    /// Component tag name
    #[serde(rename = "type", default)]
    pub ty: String,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,

    #[serde(default)]
    pub style: Option<Style>,

    /// Candidate values for the component's declared properties
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Props,

    #[serde(default, deserialize_with = "null_as_default")]
    pub events: IndexMap<String, EventHandler>,

    /// Header actions (panels only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<ConfigNode>,

    /// Body content (panels only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentItem>,

    /// Footer content (panels only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub footer: Vec<ContentItem>,

    /// Nested panels (panels only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub panels: Vec<ConfigNode>,

    /// Remaining top-level declarative fields
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

/// Read an explicit `null` as the field's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Entry of a `content` or `footer` sequence
#[derive(Debug, Clone)]
pub enum ContentItem {
    Text(String),
    Config(ConfigNode),
    /// Already constructed node, inserted as is
    Built(Node),
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Config(Box<ConfigNode>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => ContentItem::Text(text),
            Raw::Config(config) => ContentItem::Config(*config),
        })
    }
}

impl From<&str> for ContentItem {
    fn from(text: &str) -> Self {
        ContentItem::Text(text.to_string())
    }
}

impl From<String> for ContentItem {
    fn from(text: String) -> Self {
        ContentItem::Text(text)
    }
}

impl From<ConfigNode> for ContentItem {
    fn from(config: ConfigNode) -> Self {
        ContentItem::Config(config)
    }
}

impl From<Node> for ContentItem {
    fn from(node: Node) -> Self {
        ContentItem::Built(node)
    }
}

impl From<WidgetNode> for ContentItem {
    fn from(widget: WidgetNode) -> Self {
        ContentItem::Built(Node::Element(widget))
    }
}

impl ConfigNode {
    pub fn new(ty: impl Into<String>) -> Self {
        ConfigNode {
            ty: ty.into(),
            ..Default::default()
        }
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Set a top-level declarative field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn on(mut self, event: impl Into<String>, handler: EventHandler) -> Self {
        self.events.insert(event.into(), handler);
        self
    }

    pub fn on_event<F>(self, event: impl Into<String>, f: F) -> Self
    where
        F: Fn(&WidgetEvent) + 'static,
    {
        self.on(event, EventHandler::callback(f))
    }

    pub fn action(mut self, action: ConfigNode) -> Self {
        self.actions.push(action);
        self
    }

    pub fn content(mut self, item: impl Into<ContentItem>) -> Self {
        self.content.push(item.into());
        self
    }

    pub fn footer(mut self, item: impl Into<ContentItem>) -> Self {
        self.footer.push(item.into());
        self
    }

    pub fn panel(mut self, panel: ConfigNode) -> Self {
        self.panels.push(panel);
        self
    }
}

// Convenience constructors
pub fn component(ty: impl Into<String>) -> ConfigNode {
    ConfigNode::new(ty)
}

pub fn panel(title: impl Into<String>) -> ConfigNode {
    ConfigNode::new(crate::tags::PANEL).field("title", title.into())
}

pub fn button(label: impl Into<String>) -> ConfigNode {
    ConfigNode::new(crate::tags::BUTTON).field("label", label.into())
}

pub fn input() -> ConfigNode {
    ConfigNode::new(crate::tags::INPUT)
}

pub fn slider(label: impl Into<String>) -> ConfigNode {
    ConfigNode::new(crate::tags::SLIDER).field("label", label.into())
}

pub fn toggle(label: impl Into<String>) -> ConfigNode {
    ConfigNode::new(crate::tags::TOGGLE).field("label", label.into())
}

pub fn dropdown() -> ConfigNode {
    ConfigNode::new(crate::tags::DROPDOWN)
}

pub fn color_picker() -> ConfigNode {
    ConfigNode::new(crate::tags::COLOR_PICKER)
}

pub fn textarea() -> ConfigNode {
    ConfigNode::new(crate::tags::TEXTAREA)
}

pub fn loader() -> ConfigNode {
    ConfigNode::new(crate::tags::LOADER)
}
