//! Built-in type loaders.

mod collections;
mod primitives;
mod template;

pub use collections::{MappingLoader, SequenceLoader};
pub use primitives::{
    BoolLoader, F32Loader, F64Loader, I8Loader, I16Loader, I32Loader, I64Loader, StringLoader,
    U8Loader, U16Loader, U32Loader, U64Loader, register_primitives,
};
pub use template::TemplateLoader;
