use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RegistryError;
use crate::manifest::{EventDescriptor, Manifest, MethodDescriptor, SlotDescriptor};
use crate::property::PropertyDescriptor;
use crate::validation::{validate_props, Props, ValidationResult};

/// Table of component manifests keyed by tag name
///
/// The registry is meant to be shared (`Arc<ComponentRegistry>`) between
/// every builder of an application. Registering an existing tag name
/// replaces the manifest and logs a warning; the last writer wins.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    manifests: RwLock<IndexMap<String, Manifest>>,
}

/// A manifest file holds either one manifest or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestFile {
    Many(Vec<Manifest>),
    One(Box<Manifest>),
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with `manifests`
    pub fn with_manifests<I>(manifests: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Manifest>,
    {
        let registry = Self::new();
        registry.register_all(manifests)?;
        Ok(registry)
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Manifest>> {
        self.manifests.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Manifest>> {
        self.manifests.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a component manifest
    pub fn register(&self, manifest: Manifest) -> Result<(), RegistryError> {
        if manifest.tag_name.is_empty() {
            return Err(RegistryError::MissingTagName);
        }

        let tag_name = manifest.tag_name.clone();
        let previous = self.write().insert(tag_name.clone(), manifest);

        if previous.is_some() {
            tracing::warn!(tag = %tag_name, "overwriting component manifest");
        }
        tracing::info!(tag = %tag_name, "registered component manifest");
        Ok(())
    }

    pub fn register_all<I>(&self, manifests: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Manifest>,
    {
        for manifest in manifests {
            self.register(manifest)?;
        }
        Ok(())
    }

    /// Register every manifest in a JSON document
    ///
    /// Returns the number of manifests registered.
    pub fn load_json(&self, json: &str) -> Result<usize, RegistryError> {
        let manifests = match serde_json::from_str(json)? {
            ManifestFile::Many(list) => list,
            ManifestFile::One(manifest) => vec![*manifest],
        };
        let count = manifests.len();
        self.register_all(manifests)?;
        Ok(count)
    }

    pub fn get(&self, tag_name: &str) -> Option<Manifest> {
        self.read().get(tag_name).cloned()
    }

    pub fn has(&self, tag_name: &str) -> bool {
        self.read().contains_key(tag_name)
    }

    /// Registered tag names, in registration order
    pub fn tag_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn properties(&self, tag_name: &str) -> Option<IndexMap<String, PropertyDescriptor>> {
        self.read().get(tag_name).map(|m| m.properties.clone())
    }

    pub fn methods(&self, tag_name: &str) -> Option<IndexMap<String, MethodDescriptor>> {
        self.read().get(tag_name).map(|m| m.methods.clone())
    }

    pub fn events(&self, tag_name: &str) -> Option<IndexMap<String, EventDescriptor>> {
        self.read().get(tag_name).map(|m| m.events.clone())
    }

    pub fn slots(&self, tag_name: &str) -> Option<IndexMap<String, SlotDescriptor>> {
        self.read().get(tag_name).map(|m| m.slots.clone())
    }

    /// Validate `props` against the manifest for `tag_name`
    ///
    /// An unregistered tag name is reported as an invalid result.
    pub fn validate(&self, tag_name: &str, props: &Props) -> ValidationResult {
        self.validate_registered(tag_name, props).unwrap_or_else(|| {
            ValidationResult::from_errors(
                tag_name,
                vec![format!("No manifest found for component: {tag_name}")],
            )
        })
    }

    /// Like [`validate`](Self::validate), but `None` when no manifest exists
    pub fn validate_registered(&self, tag_name: &str, props: &Props) -> Option<ValidationResult> {
        self.read()
            .get(tag_name)
            .map(|manifest| validate_props(manifest, props))
    }
}
