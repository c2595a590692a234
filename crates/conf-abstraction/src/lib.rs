//! Template inheritance across named configuration entries.
//!
//! Configuration entries may extend other entries by id ("abstract" /
//! "extends" semantics). This crate loads the minimal inheritance skeleton of
//! every entry (a [`Prototype`]: id, optional parent id, abstract flag) and
//! resolves each entry's parent chain, detecting circular inheritance, before
//! any full template is materialized.
//!
//! The [`AbstractPool`] owns every prototype; parent links are id references
//! into the pool, never owning back-references.

pub mod error;
pub mod pool;
pub mod prototype;

pub use error::{AbstractionError, Result};
pub use pool::AbstractPool;
pub use prototype::{BuildState, Prototype};
