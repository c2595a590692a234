//! Error types for template population.

use crate::depth::DepthTracker;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while populating a template from a configuration tree.
///
/// Every data-shaped variant carries the rendered descent path and the
/// originating configuration's display name, so the offending entry can be
/// located without re-running with extra instrumentation. All variants are
/// fail-fast; the loader never recovers past the first failure.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A required field's key was absent from the mapping at the given path.
    #[error("Missing required key \"{key}\" at \"{path}\" in {configuration}")]
    MissingKey {
        key: String,
        path: String,
        configuration: String,
    },

    /// Expected one node kind, found another (e.g. a scalar where a mapping
    /// was required).
    #[error("Expected {expected} at \"{path}\" in {configuration}, found {found}")]
    StructuralMismatch {
        expected: &'static str,
        found: &'static str,
        path: String,
        configuration: String,
    },

    /// A value was present but could not convert to the target type. Includes
    /// range overflow on narrowing numeric conversions.
    #[error("Cannot convert value at \"{path}\" in {configuration} to {target}: {message}")]
    TypeConversion {
        target: &'static str,
        message: String,
        path: String,
        configuration: String,
    },

    /// No type loader registered for the requested target type. This is a
    /// registration (programmer) error, not a data error.
    #[error("No type loader registered for type {type_name}")]
    UnregisteredType { type_name: &'static str },
}

impl LoadError {
    pub fn missing_key(key: impl Into<String>, depth: &DepthTracker) -> Self {
        Self::MissingKey {
            key: key.into(),
            path: depth.path_descriptor(),
            configuration: depth.configuration_name(),
        }
    }

    pub fn structural_mismatch(
        expected: &'static str,
        found: &'static str,
        depth: &DepthTracker,
    ) -> Self {
        Self::StructuralMismatch {
            expected,
            found,
            path: depth.path_descriptor(),
            configuration: depth.configuration_name(),
        }
    }

    pub fn type_conversion(
        target: &'static str,
        message: impl Into<String>,
        depth: &DepthTracker,
    ) -> Self {
        Self::TypeConversion {
            target,
            message: message.into(),
            path: depth.path_descriptor(),
            configuration: depth.configuration_name(),
        }
    }
}
