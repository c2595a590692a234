//! End-to-end tests for the full flow: format front end -> template
//! population -> inheritance resolution.

use std::collections::HashMap;
use std::fs;

use conf_abstraction::{AbstractPool, AbstractionError};
use conf_core::LoadError;
use conf_formats::{Format, from_path, from_str};
use conf_loader::{ConfigLoader, ConfigTemplate, FieldSpec};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq)]
struct Listener {
    host: String,
    port: u16,
}

impl ConfigTemplate for Listener {
    fn manifest() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::required("host", |t, loader, raw, depth| {
                t.host = loader.load_value(raw, depth)?;
                Ok(())
            }),
            FieldSpec::required("port", |t, loader, raw, depth| {
                t.port = loader.load_value(raw, depth)?;
                Ok(())
            }),
        ]
    }
}

#[derive(Debug, Default, PartialEq)]
struct ServiceConfig {
    name: String,
    listeners: Vec<Listener>,
    tags: HashMap<String, String>,
    workers: u8,
}

impl ConfigTemplate for ServiceConfig {
    fn manifest() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::required("name", |t, loader, raw, depth| {
                t.name = loader.load_value(raw, depth)?;
                Ok(())
            }),
            FieldSpec::required("listeners", |t, loader, raw, depth| {
                t.listeners = loader.load_value(raw, depth)?;
                Ok(())
            }),
            FieldSpec::optional("tags", |t, loader, raw, depth| {
                t.tags = loader.load_value(raw, depth)?;
                Ok(())
            }),
            FieldSpec::optional("workers", |t, loader, raw, depth| {
                t.workers = loader.load_value(raw, depth)?;
                Ok(())
            }),
        ]
    }
}

fn service_loader() -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    loader
        .register_template::<Listener>()
        .register_sequence_of::<Listener>()
        .register_mapping_of::<String>();
    loader
}

#[test]
fn test_yaml_to_populated_template() {
    let config = from_str(
        r#"
name: gateway
listeners:
  - host: 0.0.0.0
    port: 8080
  - host: 127.0.0.1
    port: 9090
tags:
  env: staging
"#,
        Format::Yaml,
        Some("gateway"),
    )
    .unwrap();

    let service: ServiceConfig = service_loader().load(&config).unwrap();
    assert_eq!(service.name, "gateway");
    assert_eq!(service.listeners.len(), 2);
    assert_eq!(service.listeners[1].port, 9090);
    assert_eq!(service.tags.get("env"), Some(&"staging".to_string()));
    // Absent optional key keeps the Default value.
    assert_eq!(service.workers, 0);
}

#[test]
fn test_error_path_reaches_the_user_with_full_context() {
    let config = from_str(
        r#"
name: gateway
listeners:
  - host: 0.0.0.0
    port: 70000
"#,
        Format::Yaml,
        Some("gateway"),
    )
    .unwrap();

    let error = service_loader().load::<ServiceConfig>(&config).unwrap_err();
    match &error {
        LoadError::TypeConversion {
            path,
            configuration,
            ..
        } => {
            assert_eq!(path, "listeners[0].port");
            assert_eq!(configuration, "gateway");
        }
        other => panic!("expected TypeConversion, got {other:?}"),
    }
    let rendered = error.to_string();
    assert!(rendered.contains("listeners[0].port"), "got: {rendered}");
    assert!(rendered.contains("gateway"), "got: {rendered}");
}

#[test]
fn test_inheritance_pool_from_yaml_batch() {
    let sources = [
        "id: child\nextends: base\n",
        "id: base\nextends: grandparent\n",
        "id: grandparent\nabstract: true\n",
    ];
    let configs = sources
        .iter()
        .map(|source| from_str(source, Format::Yaml, None).unwrap());

    let pool = AbstractPool::populate(configs).unwrap();

    assert_eq!(pool.parent_of("child").unwrap().id(), "base");
    assert_eq!(pool.parent_of("base").unwrap().id(), "grandparent");
    assert!(pool.get("grandparent").unwrap().is_root());
    assert!(pool.get("grandparent").unwrap().is_abstract());
    assert!(!pool.get("child").unwrap().is_root());
}

#[test]
fn test_circular_inheritance_across_formats() {
    // The cycle spans entries loaded from different front ends.
    let configs = vec![
        from_str("id: a\nextends: b\n", Format::Yaml, Some("a")).unwrap(),
        from_str(r#"{"id": "b", "extends": "a"}"#, Format::Json, Some("b")).unwrap(),
    ];

    let error = AbstractPool::populate(configs).unwrap_err();
    assert!(matches!(
        error,
        AbstractionError::CircularInheritance { .. }
    ));
}

#[test]
fn test_prototype_keeps_configuration_for_full_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("service.yaml");
    fs::write(
        &path,
        "id: service\nname: gateway\nlisteners:\n  - host: localhost\n    port: 80\n",
    )
    .unwrap();

    let mut pool = AbstractPool::new();
    pool.add(from_path(&path).unwrap()).unwrap();
    pool.build("service").unwrap();

    // The leaf configuration is re-loadable with a full template once the
    // chain is resolved.
    let prototype = pool.get("service").unwrap();
    assert_eq!(prototype.configuration().name(), Some("service"));
    let service: ServiceConfig = service_loader()
        .load(prototype.configuration())
        .unwrap();
    assert_eq!(service.name, "gateway");
}

#[test]
fn test_duplicate_id_across_files() {
    let configs = vec![
        from_str("id: dup\n", Format::Yaml, Some("first")).unwrap(),
        from_str("id = \"dup\"\n", Format::Toml, Some("second")).unwrap(),
    ];

    let error = AbstractPool::populate(configs).unwrap_err();
    match error {
        AbstractionError::DuplicateId { id } => assert_eq!(id, "dup"),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}
