use serde_json::json;

use crate::{
  metadata::{AttributeSchema, AttributeTypeCode, LookupFormat, MetadataDocument, SchemaError, SchemaObject, TypeKind},
  tests::common::fixture_document,
};

fn parse_attribute(value: serde_json::Value) -> AttributeSchema {
  serde_json::from_value(value).expect("attribute should deserialize")
}

#[test]
fn test_attribute_type_codes_map_to_kinds() {
  let cases = [
    ("Integer", TypeKind::Integer),
    ("BigInt", TypeKind::BigInt),
    ("Decimal", TypeKind::Decimal),
    ("Double", TypeKind::Double),
    ("DateTime", TypeKind::DateTime),
    ("String", TypeKind::String),
    ("Memo", TypeKind::Memo),
    ("Uniqueidentifier", TypeKind::UniqueId),
    ("Money", TypeKind::Money),
    ("ManagedProperty", TypeKind::ManagedBoolean),
    ("Virtual", TypeKind::Virtual),
    ("PartyList", TypeKind::Unsupported("PartyList".to_string())),
    ("CalendarRules", TypeKind::Unsupported("CalendarRules".to_string())),
    ("EntityName", TypeKind::Unsupported("EntityName".to_string())),
    ("ImageType", TypeKind::Unsupported("ImageType".to_string())),
  ];

  for (code, expected) in cases {
    let attr = parse_attribute(json!({ "LogicalName": "field", "AttributeType": code }));
    assert_eq!(attr.kind, Some(expected), "failed for type code {code:?}");
  }
}

#[test]
fn test_missing_type_tag_is_none() {
  let attr = parse_attribute(json!({ "LogicalName": "legacy", "DisplayName": "Legacy" }));
  assert_eq!(attr.kind, None);
  assert_eq!(attr.is_custom, None);
  assert_eq!(attr.display_name.as_deref(), Some("Legacy"));
}

#[test]
fn test_lookup_carries_targets_and_format() {
  let attr = parse_attribute(json!({
    "LogicalName": "ownerid",
    "AttributeType": "Owner",
    "Targets": ["systemuser", "team"],
    "Format": "Regarding",
  }));

  let Some(TypeKind::Lookup(lookup)) = attr.kind else {
    panic!("expected lookup kind, got {:?}", attr.kind);
  };
  assert_eq!(lookup.code, AttributeTypeCode::Owner);
  assert_eq!(lookup.targets, ["systemuser", "team"]);
  assert_eq!(lookup.format, Some(LookupFormat::Regarding));
}

#[test]
fn test_boolean_without_option_set_gets_default_options() {
  let attr = parse_attribute(json!({ "LogicalName": "flag", "AttributeType": "Boolean" }));
  let Some(TypeKind::Boolean(options)) = attr.kind else {
    panic!("expected boolean kind");
  };
  assert_eq!(options.false_option.value, 0);
  assert_eq!(options.true_option.value, 1);
  assert!(options.false_option.label.is_none());
}

#[test]
fn test_choice_keeps_option_order() {
  let attr = parse_attribute(json!({
    "LogicalName": "statuscode",
    "AttributeType": "Status",
    "OptionSet": { "Options": [ { "Value": 2, "Label": "B" }, { "Value": 1 } ] },
  }));
  let Some(TypeKind::Choice(choice)) = attr.kind else {
    panic!("expected choice kind");
  };
  assert_eq!(choice.code, AttributeTypeCode::Status);
  let values: Vec<i32> = choice.options.iter().map(|o| o.value).collect();
  assert_eq!(values, [2, 1]);
  assert_eq!(choice.options[1].label, None);
}

#[test]
fn test_type_name_reports_platform_code() {
  let cases = [
    (TypeKind::UniqueId, "Uniqueidentifier"),
    (TypeKind::ManagedBoolean, "ManagedProperty"),
    (TypeKind::Unsupported("PartyList".to_string()), "PartyList"),
  ];
  for (kind, expected) in cases {
    assert_eq!(kind.type_name(), expected, "failed for {kind:?}");
  }
}

#[test]
fn test_fixture_document_loads() {
  let doc = fixture_document();
  let names: Vec<&str> = doc.entities.iter().map(|e| e.logical_name.as_str()).collect();
  assert_eq!(names, ["account", "activitypointer"]);
  assert_eq!(doc.referenced_entities.len(), 2);

  let account = doc.entity("account").expect("account present");
  assert_eq!(account.object_type_code, Some(1));
  assert!(account.validate().is_ok());
  assert_eq!(account.label_with_logical_name(), "Account (account)");
}

#[test]
fn test_validate_reports_missing_primary_attributes() {
  let no_id = SchemaObject::builder()
    .logical_name("widget")
    .primary_id_attribute("widgetid")
    .primary_name_attribute("name")
    .attributes(vec![
      AttributeSchema::builder()
        .logical_name("name")
        .kind(TypeKind::String)
        .build(),
    ])
    .build();
  assert_eq!(
    no_id.validate(),
    Err(SchemaError::MissingPrimaryIdAttribute {
      entity: "widget".to_string(),
      attribute: "widgetid".to_string(),
    })
  );

  let no_name = SchemaObject::builder()
    .logical_name("widget")
    .primary_id_attribute("widgetid")
    .primary_name_attribute("name")
    .attributes(vec![
      AttributeSchema::builder()
        .logical_name("widgetid")
        .kind(TypeKind::UniqueId)
        .build(),
    ])
    .build();
  let err = no_name.validate().unwrap_err();
  assert_eq!(err.to_string(), "entity 'widget' has no primary name attribute 'name'");
}

#[test]
fn test_label_with_logical_name_ignores_blank_labels() {
  let cases = [
    (Some("Account Name"), "Account Name (name)"),
    (Some("   "), "name"),
    (Some("Line\r\nBreak"), "LineBreak (name)"),
    (None, "name"),
  ];
  for (label, expected) in cases {
    let attr = AttributeSchema::builder()
      .logical_name("name")
      .maybe_display_name(label)
      .build();
    assert_eq!(attr.label_with_logical_name(), expected, "failed for label {label:?}");
  }
}

#[test]
fn test_empty_document_deserializes() {
  let doc: MetadataDocument = serde_json::from_str("{}").expect("empty document");
  assert!(doc.entities.is_empty());
  assert!(doc.referenced_entities.is_empty());
}
