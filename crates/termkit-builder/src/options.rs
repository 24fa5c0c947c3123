use serde::{Deserialize, Serialize};

/// Builder configuration
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuilderOptions {
    /// Run manifest validation at all
    pub validate: bool,
    /// Return validation failures as errors instead of logging them
    pub strict: bool,
    /// Trace every build step at debug level
    pub debug: bool,
    /// Deepest nesting level accepted below the root
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 64;

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            validate: true,
            strict: false,
            debug: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuilderOptions {
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
