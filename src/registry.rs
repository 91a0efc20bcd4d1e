//! Component registry - write-once collection of component descriptors
//!
//! A registry is assembled once from descriptors (built in code or loaded
//! from a JSON catalog) and is read-only afterward. The process-wide instance
//! lives in a `OnceLock`, so concurrent renders read it without locking.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument};

use crate::component_spec::{ComponentDefinition, ComponentMetadata, ComponentSpec};
use crate::error::{RenderKitError, Result};

/// Descriptors keyed by display name.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    specs: BTreeMap<String, Arc<ComponentSpec>>,
}

impl ComponentRegistry {
    /// Fails if two descriptors share a display name.
    pub fn new(specs: impl IntoIterator<Item = ComponentSpec>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for spec in specs {
            let name = spec.display_name().to_string();
            if map.contains_key(&name) {
                return Err(RenderKitError::DuplicateComponent(name));
            }
            debug!(component = %name, "Registered component");
            map.insert(name, Arc::new(spec));
        }
        Ok(Self { specs: map })
    }

    /// Parse a JSON array of component definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<ComponentDefinition> = serde_json::from_str(json)?;
        Self::new(definitions.into_iter().map(ComponentDefinition::into_spec))
    }

    #[instrument(name = "load_components", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RenderKitError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json(&json)?;
        info!(count = registry.len(), "Loaded component definitions");
        Ok(registry)
    }

    pub fn get(&self, display_name: &str) -> Option<&Arc<ComponentSpec>> {
        self.specs.get(display_name)
    }

    pub fn require(&self, display_name: &str) -> Result<&Arc<ComponentSpec>> {
        self.get(display_name)
            .ok_or_else(|| RenderKitError::UnknownComponent(display_name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentSpec>> {
        self.specs.values()
    }

    /// Display names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.specs.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn metadata(&self) -> Vec<ComponentMetadata> {
        self.iter().map(|spec| spec.metadata()).collect()
    }

    pub fn metadata_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.metadata())?)
    }
}

static GLOBAL_REGISTRY: OnceLock<ComponentRegistry> = OnceLock::new();

/// Install the process-wide registry. Only the first call succeeds.
pub fn install(registry: ComponentRegistry) -> Result<&'static ComponentRegistry> {
    let count = registry.len();
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| RenderKitError::RegistryInstalled)?;
    info!(count, "Installed global component registry");
    GLOBAL_REGISTRY.get().ok_or(RenderKitError::RegistryInstalled)
}

/// The process-wide registry, if one was installed.
pub fn global() -> Option<&'static ComponentRegistry> {
    GLOBAL_REGISTRY.get()
}
