//! Scalar converters.
//!
//! Narrowing numeric conversions validate range and fail with
//! [`LoadError::TypeConversion`] instead of wrapping; boundary values
//! (min/max inclusive) succeed.

use conf_core::{ConfigValue, DepthTracker, LoadError, Result};

use crate::loader::ConfigLoader;
use crate::registry::{LoaderRegistry, TypeLoader};

pub struct BoolLoader;

impl TypeLoader<bool> for BoolLoader {
    fn load(&self, value: &ConfigValue, _loader: &ConfigLoader, depth: &DepthTracker) -> Result<bool> {
        match value {
            ConfigValue::Bool(flag) => Ok(*flag),
            other => Err(LoadError::type_conversion(
                "bool",
                format!("expected a boolean, found {}", other.kind()),
                depth,
            )),
        }
    }
}

pub struct StringLoader;

impl TypeLoader<String> for StringLoader {
    fn load(
        &self,
        value: &ConfigValue,
        _loader: &ConfigLoader,
        depth: &DepthTracker,
    ) -> Result<String> {
        match value {
            ConfigValue::String(text) => Ok(text.clone()),
            other => Err(LoadError::type_conversion(
                "String",
                format!("expected a string, found {}", other.kind()),
                depth,
            )),
        }
    }
}

macro_rules! integer_loader {
    ($name:ident, $target:ty) => {
        pub struct $name;

        impl TypeLoader<$target> for $name {
            fn load(
                &self,
                value: &ConfigValue,
                _loader: &ConfigLoader,
                depth: &DepthTracker,
            ) -> Result<$target> {
                let ConfigValue::Integer(raw) = value else {
                    return Err(LoadError::type_conversion(
                        stringify!($target),
                        format!("expected an integer, found {}", value.kind()),
                        depth,
                    ));
                };
                <$target>::try_from(*raw).map_err(|_| {
                    LoadError::type_conversion(
                        stringify!($target),
                        format!("{raw} is out of range for {}", stringify!($target)),
                        depth,
                    )
                })
            }
        }
    };
}

integer_loader!(I8Loader, i8);
integer_loader!(I16Loader, i16);
integer_loader!(I32Loader, i32);
integer_loader!(I64Loader, i64);
integer_loader!(U8Loader, u8);
integer_loader!(U16Loader, u16);
integer_loader!(U32Loader, u32);
integer_loader!(U64Loader, u64);

pub struct F64Loader;

impl TypeLoader<f64> for F64Loader {
    fn load(&self, value: &ConfigValue, _loader: &ConfigLoader, depth: &DepthTracker) -> Result<f64> {
        match value {
            ConfigValue::Float(raw) => Ok(*raw),
            // Integer to float is a widening conversion.
            ConfigValue::Integer(raw) => Ok(*raw as f64),
            other => Err(LoadError::type_conversion(
                "f64",
                format!("expected a number, found {}", other.kind()),
                depth,
            )),
        }
    }
}

pub struct F32Loader;

impl TypeLoader<f32> for F32Loader {
    fn load(&self, value: &ConfigValue, _loader: &ConfigLoader, depth: &DepthTracker) -> Result<f32> {
        match value {
            ConfigValue::Float(raw) => {
                let narrowed = *raw as f32;
                if narrowed.is_infinite() && raw.is_finite() {
                    return Err(LoadError::type_conversion(
                        "f32",
                        format!("{raw} is out of range for f32"),
                        depth,
                    ));
                }
                Ok(narrowed)
            }
            ConfigValue::Integer(raw) => Ok(*raw as f32),
            other => Err(LoadError::type_conversion(
                "f32",
                format!("expected a number, found {}", other.kind()),
                depth,
            )),
        }
    }
}

/// Register the full primitive catalog.
pub fn register_primitives(registry: &mut LoaderRegistry) {
    registry.register(BoolLoader);
    registry.register(StringLoader);
    registry.register(I8Loader);
    registry.register(I16Loader);
    registry.register(I32Loader);
    registry.register(I64Loader);
    registry.register(U8Loader);
    registry.register(U16Loader);
    registry.register(U32Loader);
    registry.register(U64Loader);
    registry.register(F32Loader);
    registry.register(F64Loader);
}
