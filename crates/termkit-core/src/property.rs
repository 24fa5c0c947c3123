use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declared type of a component property
///
/// Serialized in lowercase (`"string"`, `"number"`, ...) as in manifest files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl PropertyType {
    /// Runtime type of a JSON value, `None` for `null`
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(PropertyType::Boolean),
            Value::Number(_) => Some(PropertyType::Number),
            Value::String(_) => Some(PropertyType::String),
            Value::Array(_) => Some(PropertyType::Array),
            Value::Object(_) => Some(PropertyType::Object),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::Array => "array",
            PropertyType::Object => "object",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Schema entry for one property of a component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    #[serde(rename = "type")]
    pub ty: PropertyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Property reflects to an attribute
    #[serde(default, skip_serializing_if = "is_false")]
    pub reflect: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    /// Allowed values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attribute name if different from the property name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(ty: PropertyType) -> Self {
        PropertyDescriptor {
            ty,
            ..Default::default()
        }
    }

    pub fn string() -> Self {
        Self::new(PropertyType::String)
    }

    pub fn number() -> Self {
        Self::new(PropertyType::Number)
    }

    pub fn boolean() -> Self {
        Self::new(PropertyType::Boolean)
    }

    pub fn array() -> Self {
        Self::new(PropertyType::Array)
    }

    pub fn object() -> Self {
        Self::new(PropertyType::Object)
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn reflect(mut self) -> Self {
        self.reflect = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Whether `value` is one of the declared enum members
    ///
    /// Always true when no enum is declared. Only string values can match.
    pub fn allows(&self, value: &Value) -> bool {
        match &self.enum_values {
            None => true,
            Some(allowed) => value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|a| a == s)),
        }
    }
}
