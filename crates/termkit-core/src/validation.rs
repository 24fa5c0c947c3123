use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::manifest::Manifest;
use crate::property::PropertyType;

/// Property values of one component instance, in input order
pub type Props = IndexMap<String, Value>;

/// Outcome of validating a props map against a manifest
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(default)]
    pub errors: Vec<ValidationError>,

    #[serde(default)]
    pub warnings: Vec<String>,
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Tag name of the component the violation belongs to
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl ValidationResult {
    /// A valid result with no errors or warnings
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            ..Default::default()
        }
    }

    /// Valid iff `messages` is empty
    pub fn from_errors(path: &str, messages: Vec<String>) -> Self {
        ValidationResult {
            valid: messages.is_empty(),
            errors: messages
                .into_iter()
                .map(|message| ValidationError {
                    path: path.to_string(),
                    message,
                })
                .collect(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Error messages without their paths
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }
}

/// Check every entry of `props` against `manifest`
///
/// Violations are collected exhaustively: per-prop checks (unknown, type,
/// enum, required-but-null) in props order, then required properties that
/// are absent, in schema order.
pub fn validate_props(manifest: &Manifest, props: &Props) -> ValidationResult {
    let mut errors = Vec::new();

    for (name, value) in props {
        let Some(descriptor) = manifest.property(name) else {
            errors.push(format!("Unknown property: {name}"));
            continue;
        };

        if let Some(actual) = PropertyType::of(value) {
            if actual != descriptor.ty {
                errors.push(format!(
                    "Property '{name}': expected {}, got {actual}",
                    descriptor.ty
                ));
            }
        }

        if let Some(allowed) = &descriptor.enum_values {
            if !descriptor.allows(value) {
                errors.push(format!(
                    "Property '{name}': value must be one of [{}]",
                    allowed.join(", ")
                ));
            }
        }

        if descriptor.required && value.is_null() {
            errors.push(format!("Property '{name}' is required"));
        }
    }

    for name in manifest.required_properties() {
        if !props.contains_key(name) {
            errors.push(format!("Missing required property: {name}"));
        }
    }

    ValidationResult::from_errors(&manifest.tag_name, errors)
}
