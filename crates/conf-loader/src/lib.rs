//! Type-directed template population.
//!
//! This crate materializes strongly-typed template values from an abstract
//! [`Configuration`](conf_core::Configuration) tree:
//!
//! - [`ConfigTemplate`]: a type whose fields are declared via a manifest of
//!   [`FieldSpec`]s (key, required/optional, and a binding function)
//! - [`TypeLoader`]: a pluggable conversion strategy from one raw node to one
//!   typed value, possibly recursing through the ambient [`ConfigLoader`]
//! - [`LoaderRegistry`]: type loaders keyed by [`std::any::TypeId`]
//! - [`ConfigLoader`]: the population algorithm itself
//!
//! # Example
//!
//! ```
//! use conf_core::{ConfigValue, Configuration};
//! use conf_loader::{ConfigLoader, ConfigTemplate, FieldSpec};
//!
//! #[derive(Default)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl ConfigTemplate for Server {
//!     fn manifest() -> Vec<FieldSpec<Self>> {
//!         vec![
//!             FieldSpec::required("host", |t, loader, raw, depth| {
//!                 t.host = loader.load_value(raw, depth)?;
//!                 Ok(())
//!             }),
//!             FieldSpec::optional("port", |t, loader, raw, depth| {
//!                 t.port = loader.load_value(raw, depth)?;
//!                 Ok(())
//!             }),
//!         ]
//!     }
//! }
//!
//! let mut root = std::collections::HashMap::new();
//! root.insert("host".to_string(), ConfigValue::from("localhost"));
//! let config = Configuration::named(ConfigValue::Mapping(root), "server");
//!
//! let server: Server = ConfigLoader::new().load(&config).unwrap();
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 0); // optional, kept from Default
//! ```

pub mod loader;
pub mod loaders;
pub mod registry;
pub mod template;

pub use loader::ConfigLoader;
pub use loaders::{MappingLoader, SequenceLoader, TemplateLoader};
pub use registry::{FnLoader, LoaderRegistry, TypeLoader};
pub use template::{ConfigTemplate, FieldSpec, Requirement};
