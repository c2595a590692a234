//! Minimally-loaded configuration entries participating in inheritance.

use std::collections::HashSet;

use conf_core::Configuration;
use conf_loader::{ConfigLoader, ConfigTemplate, FieldSpec};

use crate::error::Result;

/// Resolution state of a prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Not yet visited by any resolution pass.
    Unbuilt,
    /// Currently on the stack of a resolution pass.
    Building,
    /// Chain resolved; `root` is true iff the prototype has no parent.
    Built { root: bool },
}

/// The inheritance skeleton of one configuration entry: its id, abstract
/// flag, and extension target, loaded with a fresh [`ConfigLoader`] so no
/// custom type registrations leak in. Everything else in the entry stays
/// untouched until a downstream consumer re-loads the full configuration.
#[derive(Debug)]
pub struct Prototype {
    configuration: Configuration,
    id: String,
    extend: Option<String>,
    is_abstract: bool,
    state: BuildState,
    parent: Option<String>,
    seen_uids: HashSet<u64>,
}

#[derive(Default)]
struct PrototypeTemplate {
    id: String,
    extend: Option<String>,
    is_abstract: bool,
}

impl ConfigTemplate for PrototypeTemplate {
    fn manifest() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::required("id", |t, loader, raw, depth| {
                t.id = loader.load_value(raw, depth)?;
                Ok(())
            }),
            FieldSpec::optional("extends", |t, loader, raw, depth| {
                t.extend = Some(loader.load_value(raw, depth)?);
                Ok(())
            }),
            FieldSpec::optional("abstract", |t, loader, raw, depth| {
                t.is_abstract = loader.load_value(raw, depth)?;
                Ok(())
            }),
        ]
    }
}

impl Prototype {
    /// Load a prototype from a configuration. Only the `id`, `extends`, and
    /// `abstract` keys are read.
    pub fn new(configuration: Configuration) -> Result<Self> {
        let skeleton: PrototypeTemplate = ConfigLoader::new().load(&configuration)?;
        Ok(Self {
            configuration,
            id: skeleton.id,
            extend: skeleton.extend,
            is_abstract: skeleton.is_abstract,
            state: BuildState::Unbuilt,
            parent: None,
            seen_uids: HashSet::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The id named by this prototype's `extends` key, if any.
    pub fn extend(&self) -> Option<&str> {
        self.extend.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// The configuration this prototype was loaded from, for full re-loading
    /// once the chain is resolved.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, BuildState::Built { .. })
    }

    /// True iff a successful build determined this prototype has no parent.
    pub fn is_root(&self) -> bool {
        matches!(self.state, BuildState::Built { root: true })
    }

    /// The resolved parent id, set by a successful build.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub(crate) fn set_parent(&mut self, parent: String) {
        self.parent = Some(parent);
    }

    pub(crate) fn set_state(&mut self, state: BuildState) {
        self.state = state;
    }

    /// Record a chain UID; returns false if this prototype already saw it,
    /// meaning the current pass has revisited the node.
    pub(crate) fn record_chain_uid(&mut self, chain_uid: u64) -> bool {
        self.seen_uids.insert(chain_uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conf_core::ConfigValue;
    use std::collections::HashMap;

    fn configuration(entries: Vec<(&str, ConfigValue)>) -> Configuration {
        let map: HashMap<String, ConfigValue> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Configuration::new(ConfigValue::Mapping(map))
    }

    #[test]
    fn test_load_minimal_prototype() {
        let proto = Prototype::new(configuration(vec![("id", ConfigValue::from("base"))])).unwrap();
        assert_eq!(proto.id(), "base");
        assert_eq!(proto.extend(), None);
        assert!(!proto.is_abstract());
        assert_eq!(proto.state(), BuildState::Unbuilt);
    }

    #[test]
    fn test_load_extending_prototype() {
        let proto = Prototype::new(configuration(vec![
            ("id", ConfigValue::from("child")),
            ("extends", ConfigValue::from("base")),
            ("abstract", ConfigValue::Bool(true)),
        ]))
        .unwrap();
        assert_eq!(proto.extend(), Some("base"));
        assert!(proto.is_abstract());
    }

    #[test]
    fn test_missing_id_fails() {
        let result = Prototype::new(configuration(vec![(
            "extends",
            ConfigValue::from("base"),
        )]));
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let proto = Prototype::new(configuration(vec![
            ("id", ConfigValue::from("tree")),
            ("height", ConfigValue::Integer(12)),
            ("leaves", ConfigValue::Sequence(vec![])),
        ]))
        .unwrap();
        assert_eq!(proto.id(), "tree");
    }

    #[test]
    fn test_record_chain_uid_detects_revisit() {
        let mut proto =
            Prototype::new(configuration(vec![("id", ConfigValue::from("base"))])).unwrap();
        assert!(proto.record_chain_uid(7));
        assert!(!proto.record_chain_uid(7));
        assert!(proto.record_chain_uid(8));
    }
}
