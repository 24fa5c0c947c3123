//! End-to-end tests across the registry and the panel builder

mod builder;
mod registry;

use std::sync::Arc;

use termkit_builder::{builtin_manifests, BuilderOptions, ConfigNode, PanelBuilder};
use termkit_core::ComponentRegistry;

pub fn registry() -> Arc<ComponentRegistry> {
    Arc::new(ComponentRegistry::with_manifests(builtin_manifests()).expect("built-in manifests"))
}

pub fn builder(options: BuilderOptions) -> PanelBuilder {
    PanelBuilder::new(registry(), options)
}

pub fn config(value: serde_json::Value) -> ConfigNode {
    ConfigNode::from_json(&value.to_string()).expect("valid config json")
}
