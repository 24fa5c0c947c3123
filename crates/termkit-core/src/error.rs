use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Manifest must have a tagName")]
    MissingTagName,

    #[error("Invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
