//! Nested-template converter.

use std::marker::PhantomData;

use conf_core::{ConfigValue, DepthTracker, Result};

use crate::loader::ConfigLoader;
use crate::registry::TypeLoader;
use crate::template::ConfigTemplate;

/// Loads a nested [`ConfigTemplate`] by running the full population
/// algorithm on a sub-node, continuing the current descent path.
pub struct TemplateLoader<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TemplateLoader<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TemplateLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ConfigTemplate> TypeLoader<T> for TemplateLoader<T> {
    fn load(&self, value: &ConfigValue, loader: &ConfigLoader, depth: &DepthTracker) -> Result<T> {
        loader.load_template(value, depth)
    }
}
