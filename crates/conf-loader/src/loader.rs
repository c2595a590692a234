//! The recursive template-population algorithm.

use conf_core::{ConfigValue, Configuration, DepthTracker, LoadError, Result};

use crate::loaders::{self, MappingLoader, SequenceLoader, TemplateLoader};
use crate::registry::{LoaderRegistry, TypeLoader};
use crate::template::{ConfigTemplate, Requirement};

/// Orchestrates population of a template from a configuration tree.
///
/// For every declared field the loader looks up the raw value at that field's
/// key, dispatches to the matching [`TypeLoader`], applies required/optional
/// policy, and propagates failures with a precise descent path. Errors are
/// not batched across fields: the first failure, in manifest order, wins, and
/// no partial template escapes.
pub struct ConfigLoader {
    registry: LoaderRegistry,
}

impl ConfigLoader {
    /// A loader with the primitive catalog pre-registered: `bool`, `String`,
    /// every fixed-width integer, and `f32`/`f64`.
    pub fn new() -> Self {
        let mut registry = LoaderRegistry::new();
        loaders::register_primitives(&mut registry);
        Self { registry }
    }

    /// A loader with an empty registry. Every target type, primitives
    /// included, must be registered explicitly.
    pub fn empty() -> Self {
        Self {
            registry: LoaderRegistry::new(),
        }
    }

    /// Register a loader for target type `T`, replacing any previous one.
    pub fn register<T: 'static>(&mut self, loader: impl TypeLoader<T>) -> &mut Self {
        self.registry.register(loader);
        self
    }

    /// Register nested-template loading for `T`.
    pub fn register_template<T: ConfigTemplate>(&mut self) -> &mut Self {
        self.register(TemplateLoader::<T>::new())
    }

    /// Register `Vec<T>` loading from sequence nodes.
    pub fn register_sequence_of<T: 'static>(&mut self) -> &mut Self {
        self.register(SequenceLoader::<T>::new())
    }

    /// Register `HashMap<String, T>` loading from mapping nodes.
    pub fn register_mapping_of<T: 'static>(&mut self) -> &mut Self {
        self.register(MappingLoader::<T>::new())
    }

    pub fn registry(&self) -> &LoaderRegistry {
        &self.registry
    }

    /// Populate a `T` from the root of a configuration.
    ///
    /// On failure the error carries the full descent path plus the
    /// configuration's display name.
    pub fn load<T: ConfigTemplate>(&self, configuration: &Configuration) -> Result<T> {
        self.load_template(configuration.root(), &DepthTracker::root(configuration))
    }

    /// Populate a `T` from a sub-node, continuing an existing descent path.
    pub fn load_template<T: ConfigTemplate>(
        &self,
        node: &ConfigValue,
        depth: &DepthTracker,
    ) -> Result<T> {
        let Some(map) = node.as_mapping() else {
            return Err(LoadError::structural_mismatch("a mapping", node.kind(), depth));
        };

        let mut template = T::default();
        for spec in T::manifest() {
            match map.get(spec.key()) {
                Some(raw) => spec.bind(&mut template, self, raw, &depth.entry(spec.key()))?,
                None => match spec.requirement() {
                    Requirement::Required => {
                        return Err(LoadError::missing_key(spec.key(), &depth.entry(spec.key())));
                    }
                    // Keep the value installed by Default.
                    Requirement::Optional => {}
                },
            }
        }
        Ok(template)
    }

    /// Convert one raw node into a `T` via the registered loader.
    pub fn load_value<T: 'static>(&self, value: &ConfigValue, depth: &DepthTracker) -> Result<T> {
        self.registry.load(value, self, depth)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
