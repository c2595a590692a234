//! Core data model for the configuration materialization engine.
//!
//! This crate provides the building blocks shared by every other layer:
//!
//! - [`ConfigValue`] / [`Configuration`]: the abstract, key-addressable tree
//!   produced by a format front end (see `conf-formats`)
//! - [`DepthTracker`] / [`Level`]: an immutable descent-path accumulator used
//!   to report *where* in a configuration a load failure occurred
//! - [`LoadError`]: the error catalog for template population
//!
//! Nothing in this crate performs I/O or logging; diagnostics travel inside
//! error values.

pub mod depth;
pub mod error;
pub mod value;

pub use depth::{DepthTracker, Level};
pub use error::{LoadError, Result};
pub use value::{ConfigValue, Configuration};
