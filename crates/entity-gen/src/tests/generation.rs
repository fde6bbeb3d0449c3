use std::path::{Path, PathBuf};

use crate::{
  generator::{
    codegen::Visibility,
    metrics::GenerationWarning,
    orchestrator::{GeneratedOutput, Orchestrator},
  },
  metadata::{MetadataDocument, SchemaError},
  tests::common::{fixture_document, widget},
};

fn file<'a>(output: &'a GeneratedOutput, path: &str) -> &'a str {
  output
    .files
    .iter()
    .find(|file| file.path == Path::new(path))
    .map(|file| file.code.as_str())
    .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_file_layout() {
  let document = fixture_document();
  let output = Orchestrator::new(&document, Visibility::Public, None).generate().unwrap();

  let paths: Vec<PathBuf> = output.files.iter().map(|file| file.path.clone()).collect();
  let expected: Vec<PathBuf> = [
    "mod.rs",
    "service_context.rs",
    "entity/mod.rs",
    "entity/enums/mod.rs",
    "entity/account.rs",
    "entity/enums/account.rs",
    "entity/activitypointer.rs",
    "entity/enums/activitypointer.rs",
  ]
  .into_iter()
  .map(PathBuf::from)
  .collect();
  assert_eq!(paths, expected);

  assert!(file(&output, "entity/account.rs").contains("pub struct Account"));
  assert!(file(&output, "entity/activitypointer.rs").contains("pub struct Activity"));
  assert!(file(&output, "service_context.rs").contains("pub fn Activities(&self)"));
}

#[test]
fn test_statistics() {
  let document = fixture_document();
  let stats = Orchestrator::new(&document, Visibility::Public, None)
    .generate()
    .unwrap()
    .stats;

  assert_eq!(stats.entities_generated, 2);
  assert_eq!(stats.collections_generated, 2);
  assert_eq!(stats.suppressed_members, 3);
  assert_eq!(stats.enums_generated, 7);
  assert_eq!(stats.lookup_fetches, 4);
  assert!(stats.warnings.contains(&GenerationWarning::MissingTypeTag {
    entity: "account".to_string(),
    logical_name: "legacyfield".to_string(),
  }));
  assert_eq!(stats.warnings.iter().filter(|warning| warning.is_skipped_item()).count(), 2);
}

#[test]
fn test_header() {
  let document = fixture_document();
  let output = Orchestrator::new(&document, Visibility::Public, None)
    .generate_with_header("/path/to/metadata.json")
    .unwrap();

  for file in &output.files {
    assert!(
      file.code.starts_with("//! AUTO-GENERATED CODE - DO NOT EDIT!"),
      "{} lacks the header",
      file.path.display()
    );
    assert!(file.code.contains("//! Source: /path/to/metadata.json"));
    assert!(file.code.contains(concat!("//! Generated by `entity-gen` v", env!("CARGO_PKG_VERSION"))));
  }
}

#[test]
fn test_deterministic_output() {
  let document = fixture_document();
  let first = Orchestrator::new(&document, Visibility::Public, None)
    .generate_with_header("metadata.json")
    .unwrap();
  let second = Orchestrator::new(&document, Visibility::Public, None)
    .generate_with_header("metadata.json")
    .unwrap();
  assert_eq!(first.files, second.files);
}

#[test]
fn test_entity_selection() {
  let document = fixture_document();
  let selection = vec!["activitypointer".to_string(), "activitypointer".to_string()];
  let output = Orchestrator::new(&document, Visibility::Public, Some(selection.as_slice()))
    .generate()
    .unwrap();

  assert_eq!(output.stats.entities_generated, 1);
  assert_eq!(output.files.len(), 6);
  assert!(!file(&output, "entity/mod.rs").contains("account"));
  assert!(!file(&output, "service_context.rs").contains("Accounts"));
}

#[test]
fn test_unknown_entity_is_an_error() {
  let document = fixture_document();
  let selection = vec!["invoice".to_string()];
  let orchestrator = Orchestrator::new(&document, Visibility::Public, Some(selection.as_slice()));

  assert_eq!(
    orchestrator.selected_entities(),
    Err(SchemaError::EntityNotFound("invoice".to_string()))
  );
  assert!(orchestrator.generate().is_err());
}

#[test]
fn test_missing_primary_attribute_is_an_error() {
  let mut broken = widget(Some("Widget"), vec![]);
  broken.primary_name_attribute = "title".to_string();
  let document = MetadataDocument {
    entities: vec![broken],
    referenced_entities: vec![],
  };

  let err = Orchestrator::new(&document, Visibility::Public, None)
    .generate()
    .unwrap_err();
  assert_eq!(
    err.downcast_ref::<SchemaError>(),
    Some(&SchemaError::MissingPrimaryNameAttribute {
      entity: "widget".to_string(),
      attribute: "title".to_string(),
    })
  );
}

#[test]
fn test_empty_document() {
  let document = MetadataDocument::default();
  let output = Orchestrator::new(&document, Visibility::Public, None).generate().unwrap();

  assert_eq!(output.files.len(), 4);
  assert_eq!(output.stats.entities_generated, 0);
  assert!(file(&output, "service_context.rs").contains("pub struct ServiceContext"));
}

#[test]
fn test_irregular_logical_names_get_distinct_modules() {
  let entity = |logical_name: &str, display_name: &str| {
    let mut entity = widget(Some(display_name), vec![]);
    entity.logical_name = logical_name.to_string();
    entity
  };
  let document = MetadataDocument {
    entities: vec![
      entity("my-widget", "My Widget"),
      entity("mywidget", "Widget"),
      entity("enums", "Enum Holder"),
      entity("self", "Selfie"),
    ],
    referenced_entities: vec![],
  };
  let output = Orchestrator::new(&document, Visibility::Public, None).generate().unwrap();

  for path in [
    "entity/enums_2.rs",
    "entity/mywidget.rs",
    "entity/mywidget_2.rs",
    "entity/self_.rs",
    "entity/enums/enums_2.rs",
    "entity/enums/self_.rs",
  ] {
    file(&output, path);
  }
  let entity_mod: String = file(&output, "entity/mod.rs").split_whitespace().collect();
  assert_eq!(
    entity_mod,
    "pubmodenums;pubmodenums_2;pubmodmywidget;pubmodmywidget_2;pubmodself_;"
  );
  assert!(file(&output, "entity/mywidget.rs").contains("\"my-widget\""));
  assert!(file(&output, "service_context.rs").contains("Query<super::entity::mywidget::MyWidget>"));

  let renamed: Vec<String> = output
    .stats
    .warnings
    .iter()
    .filter_map(|warning| match warning {
      GenerationWarning::ModuleRenamed { entity, module, .. } => Some(format!("{entity}:{module}")),
      _ => None,
    })
    .collect();
  assert_eq!(renamed, ["enums:enums_2", "mywidget:mywidget_2"]);
}
