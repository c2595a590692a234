//! Type-loader registry keyed by `TypeId`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

use conf_core::{ConfigValue, DepthTracker, LoadError, Result};

use crate::loader::ConfigLoader;

/// A pluggable conversion strategy from one raw configuration node to one
/// typed value.
///
/// Loaders receive the ambient [`ConfigLoader`] so collection and
/// nested-template conversions can recurse, and the current [`DepthTracker`]
/// so failures report exactly where the bad value was found.
pub trait TypeLoader<T>: Send + Sync + 'static {
    fn load(&self, value: &ConfigValue, loader: &ConfigLoader, depth: &DepthTracker) -> Result<T>;
}

/// Adapter turning a plain closure into a [`TypeLoader`].
///
/// ```
/// use conf_core::{ConfigValue, DepthTracker, LoadError};
/// use conf_loader::{ConfigLoader, FnLoader};
///
/// let mut loader = ConfigLoader::new();
/// loader.register(FnLoader(
///     |value: &ConfigValue, _: &ConfigLoader, depth: &DepthTracker| match value {
///         ConfigValue::Integer(n) if *n >= 0 => Ok(*n as usize),
///         other => Err(LoadError::type_conversion("usize", other.kind(), depth)),
///     },
/// ));
/// ```
pub struct FnLoader<F>(pub F);

impl<T, F> TypeLoader<T> for FnLoader<F>
where
    F: Fn(&ConfigValue, &ConfigLoader, &DepthTracker) -> Result<T> + Send + Sync + 'static,
{
    fn load(&self, value: &ConfigValue, loader: &ConfigLoader, depth: &DepthTracker) -> Result<T> {
        (self.0)(value, loader, depth)
    }
}

/// Object-safe shim so loaders for arbitrary target types can share one map.
trait ErasedTypeLoader: Send + Sync {
    fn load_erased(
        &self,
        value: &ConfigValue,
        loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<Box<dyn Any>>;
}

struct Erased<T, L> {
    inner: L,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static, L: TypeLoader<T>> ErasedTypeLoader for Erased<T, L> {
    fn load_erased(
        &self,
        value: &ConfigValue,
        loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<Box<dyn Any>> {
        self.inner
            .load(value, loader, depth)
            .map(|typed| Box::new(typed) as Box<dyn Any>)
    }
}

/// Registry mapping target types to their conversion strategies.
///
/// Lookup is by exact [`TypeId`]; requesting an unregistered type is the
/// distinct [`LoadError::UnregisteredType`] error, not a data-shape error.
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: HashMap<TypeId, Box<dyn ErasedTypeLoader>>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader for target type `T`, replacing any previous one.
    pub fn register<T: 'static>(&mut self, loader: impl TypeLoader<T>) {
        self.loaders.insert(
            TypeId::of::<T>(),
            Box::new(Erased {
                inner: loader,
                _marker: PhantomData,
            }),
        );
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.loaders.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Dispatch a raw node to the loader registered for `T`.
    pub(crate) fn load<T: 'static>(
        &self,
        value: &ConfigValue,
        loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<T> {
        let erased = self
            .loaders
            .get(&TypeId::of::<T>())
            .ok_or(LoadError::UnregisteredType {
                type_name: std::any::type_name::<T>(),
            })?;
        let any = erased.load_erased(value, loader, depth)?;
        // `register` pairs the key with a loader producing exactly T, so the
        // downcast can only fail on a registration that bypassed it.
        match any.downcast::<T>() {
            Ok(typed) => Ok(*typed),
            Err(_) => Err(LoadError::UnregisteredType {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_contains() {
        let mut registry = LoaderRegistry::new();
        assert!(registry.is_empty());

        registry.register(crate::loaders::BoolLoader);
        assert!(registry.contains::<bool>());
        assert!(!registry.contains::<String>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_type_is_distinct_error() {
        let registry = LoaderRegistry::new();
        let loader = ConfigLoader::empty();
        let config = conf_core::Configuration::new(ConfigValue::Bool(true));
        let depth = DepthTracker::root(&config);

        let result = registry.load::<bool>(&ConfigValue::Bool(true), &loader, &depth);
        assert!(matches!(
            result,
            Err(LoadError::UnregisteredType { .. })
        ));
    }

    #[test]
    fn test_closure_as_loader() {
        let mut registry = LoaderRegistry::new();
        registry.register(FnLoader(
            |value: &ConfigValue, _: &ConfigLoader, depth: &DepthTracker| match value {
                ConfigValue::String(s) => Ok(s.to_uppercase()),
                other => Err(LoadError::type_conversion("String", other.kind(), depth)),
            },
        ));

        let loader = ConfigLoader::empty();
        let config = conf_core::Configuration::new(ConfigValue::Null);
        let depth = DepthTracker::root(&config);
        let loaded: String = registry
            .load(&ConfigValue::from("hello"), &loader, &depth)
            .unwrap();
        assert_eq!(loaded, "HELLO");
    }
}
