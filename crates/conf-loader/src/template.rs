//! Declarative field manifests for loadable template types.

use conf_core::{ConfigValue, DepthTracker, Result};

use crate::loader::ConfigLoader;

/// Whether a field's key must be present in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absent key is a [`conf_core::LoadError::MissingKey`] failure.
    Required,
    /// Absent key keeps the value installed by the template's `Default`
    /// implementation.
    Optional,
}

/// Binding function assigning one converted field into a template.
///
/// A plain function pointer rather than a boxed closure: manifests are static
/// declarations, not runtime state.
pub type BindFn<T> = fn(&mut T, &ConfigLoader, &ConfigValue, &DepthTracker) -> Result<()>;

/// One entry in a template's field manifest: a lookup key, a requirement
/// flag, and the binding that loads and assigns the value.
pub struct FieldSpec<T> {
    key: &'static str,
    requirement: Requirement,
    bind: BindFn<T>,
}

impl<T> FieldSpec<T> {
    pub fn required(key: &'static str, bind: BindFn<T>) -> Self {
        Self {
            key,
            requirement: Requirement::Required,
            bind,
        }
    }

    pub fn optional(key: &'static str, bind: BindFn<T>) -> Self {
        Self {
            key,
            requirement: Requirement::Optional,
            bind,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub(crate) fn bind(
        &self,
        template: &mut T,
        loader: &ConfigLoader,
        raw: &ConfigValue,
        depth: &DepthTracker,
    ) -> Result<()> {
        (self.bind)(template, loader, raw, depth)
    }
}

/// A type whose fields can be populated from a configuration mapping.
///
/// `Default` supplies the initial value for every field; optional fields keep
/// that value when their key is absent. Lookup keys must be unique within one
/// manifest.
pub trait ConfigTemplate: Default + 'static {
    /// The ordered field manifest. Fields are populated in declared order and
    /// the first failure wins.
    fn manifest() -> Vec<FieldSpec<Self>>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        name: String,
    }

    impl ConfigTemplate for Sample {
        fn manifest() -> Vec<FieldSpec<Self>> {
            vec![FieldSpec::required("name", |t, loader, raw, depth| {
                t.name = loader.load_value(raw, depth)?;
                Ok(())
            })]
        }
    }

    #[test]
    fn test_manifest_declares_key_and_requirement() {
        let manifest = Sample::manifest();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest[0].key(), "name");
        assert_eq!(manifest[0].requirement(), Requirement::Required);
    }
}
