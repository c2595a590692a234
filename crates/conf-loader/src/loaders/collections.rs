//! Collection converters recursing through the ambient loader.

use std::collections::HashMap;
use std::marker::PhantomData;

use conf_core::{ConfigValue, DepthTracker, LoadError, Result};

use crate::loader::ConfigLoader;
use crate::registry::TypeLoader;

/// Loads `Vec<T>` from a sequence node, extending the depth tracker with the
/// element index for each position.
pub struct SequenceLoader<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SequenceLoader<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SequenceLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> TypeLoader<Vec<T>> for SequenceLoader<T> {
    fn load(
        &self,
        value: &ConfigValue,
        loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<Vec<T>> {
        let Some(items) = value.as_sequence() else {
            return Err(LoadError::structural_mismatch(
                "a sequence",
                value.kind(),
                depth,
            ));
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| loader.load_value(item, &depth.index(index)))
            .collect()
    }
}

/// Loads `HashMap<String, T>` from a mapping node, extending the depth
/// tracker with the entry key for each value.
pub struct MappingLoader<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> MappingLoader<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for MappingLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> TypeLoader<HashMap<String, T>> for MappingLoader<T> {
    fn load(
        &self,
        value: &ConfigValue,
        loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<HashMap<String, T>> {
        let Some(entries) = value.as_mapping() else {
            return Err(LoadError::structural_mismatch(
                "a mapping",
                value.kind(),
                depth,
            ));
        };
        entries
            .iter()
            .map(|(key, item)| {
                loader
                    .load_value(item, &depth.entry(key.clone()))
                    .map(|loaded| (key.clone(), loaded))
            })
            .collect()
    }
}
