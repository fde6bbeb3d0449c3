use proc_macro2::TokenStream;

use crate::{
  generator::{ast::EntityClassDef, codegen::format_tokens, converter::ClassBuilder},
  metadata::{
    AttributeSchema, AttributeTypeCode, BooleanOptions, ChoiceSpec, MetadataCache, MetadataDocument, OptionEntry,
    SchemaObject, TypeKind,
  },
};

pub(crate) const FIXTURE_JSON: &str = include_str!("../../fixtures/metadata.json");

pub(crate) fn fixture_document() -> MetadataDocument {
  serde_json::from_str(FIXTURE_JSON).expect("fixture metadata should deserialize")
}

pub(crate) fn fixture_entity(logical_name: &str) -> SchemaObject {
  fixture_document()
    .entity(logical_name)
    .cloned()
    .unwrap_or_else(|| panic!("fixture entity {logical_name} missing"))
}

/// Builds a fixture entity the way a generation run does, with lookups resolved against the fixture.
pub(crate) fn built_class(logical_name: &str) -> EntityClassDef {
  let document = fixture_document();
  let mut cache = MetadataCache::new(&document);
  let entity = fixture_entity(logical_name);
  ClassBuilder::new(&entity, &mut cache).build().class
}

pub(crate) fn pretty(tokens: TokenStream) -> String {
  format_tokens(tokens).expect("generated code should parse")
}

pub(crate) fn attr(logical_name: &str, display_name: Option<&str>, kind: Option<TypeKind>) -> AttributeSchema {
  AttributeSchema::builder()
    .logical_name(logical_name)
    .maybe_display_name(display_name)
    .maybe_kind(kind)
    .build()
}

pub(crate) fn string_attr(logical_name: &str, display_name: &str) -> AttributeSchema {
  attr(logical_name, Some(display_name), Some(TypeKind::String))
}

pub(crate) fn custom_attr(mut attribute: AttributeSchema, is_custom: bool) -> AttributeSchema {
  attribute.is_custom = Some(is_custom);
  attribute
}

pub(crate) fn choice_kind(options: &[(i32, Option<&str>)]) -> TypeKind {
  TypeKind::Choice(ChoiceSpec {
    code: AttributeTypeCode::Picklist,
    options: options
      .iter()
      .map(|(value, label)| OptionEntry::builder().value(*value).maybe_label(*label).build())
      .collect(),
  })
}

pub(crate) fn boolean_kind(false_label: Option<&str>, true_label: Option<&str>) -> TypeKind {
  TypeKind::Boolean(BooleanOptions {
    false_option: OptionEntry::builder().value(0).maybe_label(false_label).build(),
    true_option: OptionEntry::builder().value(1).maybe_label(true_label).build(),
  })
}

/// Minimal valid entity: primary id `widgetid`, primary name `name`, plus `extra` attributes.
pub(crate) fn widget(display_name: Option<&str>, extra: Vec<AttributeSchema>) -> SchemaObject {
  let mut attributes = vec![
    attr("widgetid", Some("Widget"), Some(TypeKind::UniqueId)),
    string_attr("name", "Name"),
  ];
  attributes.extend(extra);

  SchemaObject::builder()
    .logical_name("widget")
    .maybe_display_name(display_name)
    .primary_id_attribute("widgetid")
    .primary_name_attribute("name")
    .attributes(attributes)
    .build()
}
