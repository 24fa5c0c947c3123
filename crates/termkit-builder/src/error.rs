use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Root config failed validation in strict mode
    #[error("Panel config validation failed:\n{}", .messages.join("\n"))]
    Validation { messages: Vec<String> },

    /// Nested component failed validation in strict mode
    #[error("Component validation failed: {}", .messages.join(", "))]
    ComponentValidation {
        component: String,
        messages: Vec<String>,
    },

    #[error("Widget tree nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

impl BuildError {
    /// Individual violation messages, empty for non-validation errors
    pub fn messages(&self) -> &[String] {
        match self {
            BuildError::Validation { messages } => messages,
            BuildError::ComponentValidation { messages, .. } => messages,
            BuildError::DepthExceeded { .. } => &[],
        }
    }
}
