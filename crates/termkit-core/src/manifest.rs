use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::property::{is_false, PropertyDescriptor};

/// Complete description of one component type
///
/// Only `properties` take part in validation. Methods, events, slots, parts
/// and CSS properties document the component API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Component tag name, the registry key
    #[serde(default)]
    pub tag_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Reactive properties, in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDescriptor>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub methods: IndexMap<String, MethodDescriptor>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub events: IndexMap<String, EventDescriptor>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub slots: IndexMap<String, SlotDescriptor>,

    /// CSS parts exposed for external styling
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parts: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub css_properties: IndexMap<String, CssPropertyDescriptor>,
}

/// Public method of a component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnDescriptor {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Custom event emitted by a component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Detail field name to type name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub detail: IndexMap<String, String>,

    #[serde(default)]
    pub bubbles: bool,

    #[serde(default)]
    pub composed: bool,
}

/// Named or default slot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Slot can hold more than one element
    #[serde(default, skip_serializing_if = "is_false")]
    pub multiple: bool,

    /// Suggested element types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepts: Vec<String>,
}

/// CSS custom property (variable)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CssPropertyDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Manifest {
    /// Create an empty manifest for the given tag name
    pub fn new(tag_name: impl Into<String>) -> Self {
        Manifest {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Names of properties declared `required`
    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, descriptor)| descriptor.required)
            .map(|(name, _)| name.as_str())
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        self.properties.insert(name.into(), descriptor);
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, method: MethodDescriptor) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn with_event(mut self, name: impl Into<String>, event: EventDescriptor) -> Self {
        self.events.insert(name.into(), event);
        self
    }

    pub fn with_slot(mut self, name: impl Into<String>, slot: SlotDescriptor) -> Self {
        self.slots.insert(name.into(), slot);
        self
    }
}

impl EventDescriptor {
    /// Event that bubbles and crosses shadow boundaries
    pub fn composed(description: impl Into<String>) -> Self {
        EventDescriptor {
            description: Some(description.into()),
            bubbles: true,
            composed: true,
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, field: impl Into<String>, ty: impl Into<String>) -> Self {
        self.detail.insert(field.into(), ty.into());
        self
    }
}

impl MethodDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        MethodDescriptor {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ReturnDescriptor {
            ty: ty.into(),
            description: None,
        });
        self
    }
}
