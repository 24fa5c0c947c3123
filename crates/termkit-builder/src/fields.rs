//! Typed declarative fields of the built-in widgets
//!
//! Each record declares its defaults once. [`resolve_fields`] fills a record
//! from the top-level fields of a config node (and, for overlays, its
//! `props`), falling back to the default of any field whose value has the
//! wrong shape.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use termkit_core::Props;

/// Typed field record of one widget kind
pub trait FieldRecord: DeserializeOwned + Default {
    /// Record field that a `type` key stands for
    const TYPE_FIELD: Option<&'static str> = None;
}

/// Resolve a typed record from one or more field maps
///
/// Later maps override earlier ones. A `type` key is renamed to the record's
/// [`FieldRecord::TYPE_FIELD`] first, so it overrides that field like any
/// other key. Malformed fields are logged and replaced by their defaults;
/// unknown fields are ignored.
pub fn resolve_fields<T: FieldRecord>(component: &str, sources: &[&Props]) -> T {
    let mut merged = Map::new();
    for source in sources {
        for (name, value) in source.iter() {
            let key = match T::TYPE_FIELD {
                Some(field) if name == "type" => field.to_string(),
                _ => name.clone(),
            };
            merged.insert(key, value.clone());
        }
    }
    if merged.is_empty() {
        return T::default();
    }

    if let Ok(record) = serde_json::from_value(Value::Object(merged.clone())) {
        return record;
    }

    // Retry one field at a time so a single bad value only loses itself.
    let mut accepted = Map::new();
    for (name, value) in merged {
        let mut candidate = accepted.clone();
        candidate.insert(name.clone(), value);
        match serde_json::from_value::<T>(Value::Object(candidate.clone())) {
            Ok(_) => accepted = candidate,
            Err(err) => {
                tracing::warn!(component, field = %name, %err, "malformed field, using default");
            }
        }
    }
    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelFields {
    pub title: String,
    pub variant: String,
    pub collapsible: bool,
    pub collapsed: bool,
    pub compact: bool,
    pub large: bool,
    pub loading: bool,
    pub resizable: bool,
    pub draggable: bool,
    pub icon: String,
    pub footer_collapsed: bool,
}

impl Default for PanelFields {
    fn default() -> Self {
        PanelFields {
            title: String::new(),
            variant: "standard".to_string(),
            collapsible: false,
            collapsed: false,
            compact: false,
            large: false,
            loading: false,
            resizable: false,
            draggable: false,
            icon: String::new(),
            footer_collapsed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonFields {
    pub label: String,
    pub variant: String,
    pub button_type: String,
    pub size: String,
    pub disabled: bool,
    pub loading: bool,
    pub icon: String,
    pub toggle_state: bool,
    pub icon_on: String,
    pub icon_off: String,
}

impl Default for ButtonFields {
    fn default() -> Self {
        ButtonFields {
            label: String::new(),
            variant: "primary".to_string(),
            button_type: "text".to_string(),
            size: String::new(),
            disabled: false,
            loading: false,
            icon: String::new(),
            toggle_state: false,
            icon_on: String::new(),
            icon_off: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputFields {
    pub input_type: String,
    pub placeholder: String,
    pub value: String,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
}

impl Default for InputFields {
    fn default() -> Self {
        InputFields {
            input_type: "text".to_string(),
            placeholder: String::new(),
            value: String::new(),
            disabled: false,
            readonly: false,
            required: false,
            min: None,
            max: None,
            pattern: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderFields {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub step: f64,
    pub disabled: bool,
}

impl Default for SliderFields {
    fn default() -> Self {
        SliderFields {
            label: String::new(),
            min: 0.0,
            max: 100.0,
            value: 50.0,
            step: 1.0,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ToggleFields {
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DropdownFields {
    pub placeholder: String,
    pub value: String,
    pub options: Vec<Value>,
    pub searchable: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorPickerFields {
    pub value: String,
    pub disabled: bool,
}

impl Default for ColorPickerFields {
    fn default() -> Self {
        ColorPickerFields {
            value: "#00ff41".to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextareaFields {
    pub placeholder: String,
    pub value: String,
    pub rows: u32,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
}

impl Default for TextareaFields {
    fn default() -> Self {
        TextareaFields {
            placeholder: String::new(),
            value: String::new(),
            rows: 4,
            disabled: false,
            readonly: false,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderFields {
    pub loader_type: String,
    pub size: String,
    pub color: String,
}

impl Default for LoaderFields {
    fn default() -> Self {
        LoaderFields {
            loader_type: "spinner".to_string(),
            size: "medium".to_string(),
            color: String::new(),
        }
    }
}

impl FieldRecord for PanelFields {}

impl FieldRecord for ButtonFields {
    const TYPE_FIELD: Option<&'static str> = Some("buttonType");
}

impl FieldRecord for InputFields {
    const TYPE_FIELD: Option<&'static str> = Some("inputType");
}

impl FieldRecord for SliderFields {}
impl FieldRecord for ToggleFields {}
impl FieldRecord for DropdownFields {}
impl FieldRecord for ColorPickerFields {}
impl FieldRecord for TextareaFields {}

impl FieldRecord for LoaderFields {
    const TYPE_FIELD: Option<&'static str> = Some("loaderType");
}
