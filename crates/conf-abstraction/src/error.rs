//! Error types for inheritance resolution.

use conf_core::LoadError;

pub type Result<T> = std::result::Result<T, AbstractionError>;

/// Errors raised while populating a pool or resolving inheritance chains.
#[derive(Debug, thiserror::Error)]
pub enum AbstractionError {
    /// A prototype's `extends` names an id absent from the pool.
    #[error("No such config \"{parent}\", specified as parent of \"{child}\"")]
    ParentNotFound { parent: String, child: String },

    /// A resolution pass revisited a prototype it had already walked.
    #[error(
        "Circular inheritance detected in config \"{id}\", extending \"{extend}\" (chain UID {chain_uid})"
    )]
    CircularInheritance {
        id: String,
        extend: String,
        chain_uid: u64,
    },

    /// Two prototypes in one pool share an id.
    #[error("Duplicate config id \"{id}\" in pool")]
    DuplicateId { id: String },

    /// A chain resolution was started from an id the pool does not contain.
    #[error("No config with id \"{id}\" in pool")]
    PrototypeNotFound { id: String },

    /// The prototype's own configuration failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
}
