//! # Termkit Core
//!
//! Component manifests and the registry that validates widget properties
//! against them.
//!
//! Every terminal kit widget publishes a [`Manifest`] describing its
//! properties, methods, events and slots. A [`ComponentRegistry`] holds the
//! manifests of an application and checks candidate property maps against
//! them, reporting every violation in a [`ValidationResult`].

pub mod error;
pub mod generate;
pub mod manifest;
pub mod property;
pub mod registry;
pub mod validation;

pub use error::RegistryError;
pub use generate::{generate_manifest, DeclaredProperty, ManifestOverrides, PropertyNote};
pub use manifest::{
    CssPropertyDescriptor, EventDescriptor, Manifest, MethodDescriptor, ParameterDescriptor,
    ReturnDescriptor, SlotDescriptor,
};
pub use property::{PropertyDescriptor, PropertyType};
pub use registry::ComponentRegistry;
pub use validation::{validate_props, Props, ValidationError, ValidationResult};
