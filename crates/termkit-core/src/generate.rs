//! Manifest generation from declared component properties
//!
//! Components declare their reactive properties (name, type, reflection) in
//! code; human-written documentation is supplied separately as
//! [`ManifestOverrides`]. [`generate_manifest`] merges the two.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::manifest::{
    CssPropertyDescriptor, EventDescriptor, Manifest, MethodDescriptor, SlotDescriptor,
};
use crate::property::{PropertyDescriptor, PropertyType};

const DEFAULT_VERSION: &str = "1.0.0";

/// A reactive property as the component declares it
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredProperty {
    pub name: String,
    pub ty: PropertyType,
    pub reflect: bool,
    pub attribute: Option<String>,
    pub default: Option<Value>,
}

impl DeclaredProperty {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        DeclaredProperty {
            name: name.into(),
            ty,
            reflect: false,
            attribute: None,
            default: None,
        }
    }

    pub fn reflect(mut self) -> Self {
        self.reflect = true;
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Documentation for one declared property
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PropertyNote {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<String>>,
}

impl PropertyNote {
    pub fn described(description: impl Into<String>) -> Self {
        PropertyNote {
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Hand-written parts of a manifest
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestOverrides {
    pub tag_name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub category: Option<String>,
    pub properties: IndexMap<String, PropertyNote>,
    pub methods: IndexMap<String, MethodDescriptor>,
    pub events: IndexMap<String, EventDescriptor>,
    pub slots: IndexMap<String, SlotDescriptor>,
    pub parts: IndexMap<String, String>,
    pub css_properties: IndexMap<String, CssPropertyDescriptor>,
}

impl ManifestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, note: PropertyNote) -> Self {
        self.properties.insert(name.into(), note);
        self
    }

    pub fn method(mut self, name: impl Into<String>, method: MethodDescriptor) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn event(mut self, name: impl Into<String>, event: EventDescriptor) -> Self {
        self.events.insert(name.into(), event);
        self
    }

    pub fn slot(mut self, name: impl Into<String>, slot: SlotDescriptor) -> Self {
        self.slots.insert(name.into(), slot);
        self
    }

    pub fn part(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parts.insert(name.into(), description.into());
        self
    }
}

/// Build a manifest from declared properties plus hand-written overrides
///
/// Declared properties are never `required`. Notes for properties that are
/// not declared are ignored.
pub fn generate_manifest(
    tag_name: &str,
    declared: &[DeclaredProperty],
    overrides: ManifestOverrides,
) -> Manifest {
    let ManifestOverrides {
        tag_name: tag_override,
        display_name,
        description,
        version,
        category,
        properties: notes,
        methods,
        events,
        slots,
        parts,
        css_properties,
    } = overrides;

    let tag_name = tag_override.unwrap_or_else(|| tag_name.to_string());

    let properties = declared
        .iter()
        .map(|property| {
            let note = notes.get(&property.name);
            let descriptor = PropertyDescriptor {
                ty: property.ty,
                default: property.default.clone(),
                reflect: property.reflect,
                required: false,
                enum_values: note.and_then(|n| n.enum_values.clone()),
                description: Some(
                    note.and_then(|n| n.description.clone()).unwrap_or_default(),
                ),
                attribute: property.attribute.clone(),
            };
            (property.name.clone(), descriptor)
        })
        .collect();

    Manifest {
        display_name: display_name.unwrap_or_else(|| tag_name.clone()),
        description: description.unwrap_or_default(),
        version: Some(version.unwrap_or_else(|| DEFAULT_VERSION.to_string())),
        category,
        properties,
        methods,
        events,
        slots,
        parts,
        css_properties,
        tag_name,
    }
}
