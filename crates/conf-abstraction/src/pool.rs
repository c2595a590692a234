//! Owning pool of prototypes and chain resolution.

use std::collections::HashMap;

use conf_core::Configuration;

use crate::error::{AbstractionError, Result};
use crate::prototype::{BuildState, Prototype};

/// Owns the full set of prototypes for one configuration domain, keyed by id.
///
/// The pool is populated from a batch of raw configurations, then `build` (or
/// `build_all`) resolves parent chains before any consumer reads
/// `parent_id`/`is_root`. Each resolution pass mints a fresh chain UID and
/// threads it unchanged through every hop, so a cycle of length k is caught
/// on the (k+1)-th hop when the walk revisits a prototype already stamped
/// with the current pass's UID. A prototype that is already built
/// short-circuits before touching its UID set, which keeps the per-prototype
/// set bounded across repeated passes.
#[derive(Debug, Default)]
pub struct AbstractPool {
    prototypes: HashMap<String, Prototype>,
    next_chain_uid: u64,
}

impl AbstractPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a prototype from `configuration` and add it to the pool.
    ///
    /// Duplicate ids are rejected at the point of insertion.
    pub fn add(&mut self, configuration: Configuration) -> Result<&Prototype> {
        let prototype = Prototype::new(configuration)?;
        let id = prototype.id().to_string();
        if self.prototypes.contains_key(&id) {
            return Err(AbstractionError::DuplicateId { id });
        }
        tracing::debug!(id = %id, extends = ?prototype.extend(), "registered prototype");
        Ok(self.prototypes.entry(id).or_insert(prototype))
    }

    /// Build a pool from a batch of configurations and resolve every chain.
    pub fn populate<I>(configurations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Configuration>,
    {
        let mut pool = Self::new();
        for configuration in configurations {
            pool.add(configuration)?;
        }
        pool.build_all()?;
        Ok(pool)
    }

    pub fn get(&self, id: &str) -> Option<&Prototype> {
        self.prototypes.get(id)
    }

    /// The resolved parent of `id`, if `id` is built and non-root.
    pub fn parent_of(&self, id: &str) -> Option<&Prototype> {
        self.get(id)
            .and_then(Prototype::parent_id)
            .and_then(|parent| self.get(parent))
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// All ids in the pool, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.values()
    }

    /// Resolve the ancestor chain of one prototype.
    ///
    /// Mints a fresh chain UID for this pass and walks `extends` links until
    /// a root (or an already-built prototype) is reached. On success every
    /// prototype on the chain is in state `Built`; on failure the deepest
    /// error is surfaced unchanged.
    pub fn build(&mut self, id: &str) -> Result<()> {
        let chain_uid = self.next_chain_uid;
        self.next_chain_uid += 1;
        tracing::debug!(id = %id, chain_uid, "resolving inheritance chain");
        self.build_chain(id, chain_uid)
    }

    /// Resolve every chain in the pool, in sorted id order.
    pub fn build_all(&mut self) -> Result<()> {
        let ids: Vec<String> = {
            let mut ids: Vec<String> = self.prototypes.keys().cloned().collect();
            ids.sort_unstable();
            ids
        };
        for id in ids {
            self.build(&id)?;
        }
        Ok(())
    }

    fn build_chain(&mut self, id: &str, chain_uid: u64) -> Result<()> {
        let extend = {
            let prototype =
                self.prototypes
                    .get_mut(id)
                    .ok_or_else(|| AbstractionError::PrototypeNotFound {
                        id: id.to_string(),
                    })?;
            if prototype.is_built() {
                return Ok(());
            }
            if !prototype.record_chain_uid(chain_uid) {
                return Err(AbstractionError::CircularInheritance {
                    id: prototype.id().to_string(),
                    extend: prototype.extend().unwrap_or_default().to_string(),
                    chain_uid,
                });
            }
            prototype.set_state(BuildState::Building);
            prototype.extend().map(str::to_string)
        };

        match extend {
            None => {
                self.mark_built(id, true);
                Ok(())
            }
            Some(parent_id) => {
                if !self.prototypes.contains_key(&parent_id) {
                    return Err(AbstractionError::ParentNotFound {
                        parent: parent_id,
                        child: id.to_string(),
                    });
                }
                if let Some(prototype) = self.prototypes.get_mut(id) {
                    prototype.set_parent(parent_id.clone());
                }
                // Build the parent with the same UID, to recursively resolve
                // the entire chain.
                self.build_chain(&parent_id, chain_uid)?;
                self.mark_built(id, false);
                Ok(())
            }
        }
    }

    fn mark_built(&mut self, id: &str, root: bool) {
        if let Some(prototype) = self.prototypes.get_mut(id) {
            prototype.set_state(BuildState::Built { root });
        }
    }
}
