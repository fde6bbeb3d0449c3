pub mod cache;
mod raw;

use bon::Builder;
use serde::Deserialize;
use strum::{Display, EnumString};

pub use cache::{MetadataCache, MetadataSource};

/// Platform attribute type code, as it appears in the metadata dump's `AttributeType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum AttributeTypeCode {
  BigInt,
  Boolean,
  CalendarRules,
  Customer,
  DateTime,
  Decimal,
  Double,
  EntityName,
  Integer,
  Lookup,
  ManagedProperty,
  Memo,
  Money,
  Owner,
  PartyList,
  Picklist,
  State,
  Status,
  String,
  Uniqueidentifier,
  Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum LookupFormat {
  None,
  Connection,
  Regarding,
  Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct OptionEntry {
  pub value: i32,
  #[serde(default)]
  #[builder(into)]
  pub label: Option<String>,
  #[serde(default)]
  #[builder(into)]
  pub description: Option<String>,
}

impl OptionEntry {
  #[cfg(test)]
  #[must_use]
  pub fn labeled(value: i32, label: impl Into<String>) -> Self {
    Self {
      value,
      label: Some(label.into()),
      description: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanOptions {
  pub false_option: OptionEntry,
  pub true_option: OptionEntry,
}

impl Default for BooleanOptions {
  fn default() -> Self {
    Self {
      false_option: OptionEntry::builder().value(0).build(),
      true_option: OptionEntry::builder().value(1).build(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSpec {
  pub code: AttributeTypeCode,
  pub targets: Vec<String>,
  pub format: Option<LookupFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSpec {
  pub code: AttributeTypeCode,
  pub options: Vec<OptionEntry>,
}

/// What kind of value an attribute holds, with the extra metadata each kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
  Integer,
  BigInt,
  Decimal,
  Double,
  Boolean(BooleanOptions),
  DateTime,
  String,
  Memo,
  UniqueId,
  Money,
  Lookup(LookupSpec),
  ManagedBoolean,
  Choice(ChoiceSpec),
  Virtual,
  /// Multi-party, calendar-rule, entity-name, or a type code this generator does not know.
  Unsupported(String),
}

impl TypeKind {
  /// Platform name of the type, used in diagnostics.
  #[must_use]
  pub fn type_name(&self) -> String {
    let code = match self {
      Self::Integer => AttributeTypeCode::Integer,
      Self::BigInt => AttributeTypeCode::BigInt,
      Self::Decimal => AttributeTypeCode::Decimal,
      Self::Double => AttributeTypeCode::Double,
      Self::Boolean(_) => AttributeTypeCode::Boolean,
      Self::DateTime => AttributeTypeCode::DateTime,
      Self::String => AttributeTypeCode::String,
      Self::Memo => AttributeTypeCode::Memo,
      Self::UniqueId => AttributeTypeCode::Uniqueidentifier,
      Self::Money => AttributeTypeCode::Money,
      Self::Lookup(lookup) => lookup.code,
      Self::ManagedBoolean => AttributeTypeCode::ManagedProperty,
      Self::Choice(choice) => choice.code,
      Self::Virtual => AttributeTypeCode::Virtual,
      Self::Unsupported(name) => return name.clone(),
    };
    code.to_string()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(from = "raw::RawAttribute")]
pub struct AttributeSchema {
  #[builder(into)]
  pub logical_name: String,
  #[builder(into)]
  pub display_name: Option<String>,
  #[builder(into)]
  pub description: Option<String>,
  /// `None` when the dump carries no type tag for the attribute.
  pub kind: Option<TypeKind>,
  pub is_custom: Option<bool>,
}

impl AttributeSchema {
  /// `Label (logical)` when a non-blank label exists, else the logical name.
  #[must_use]
  pub fn label_with_logical_name(&self) -> String {
    label_with_logical_name(self.display_name.as_deref(), &self.logical_name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaObject {
  #[builder(into)]
  pub logical_name: String,
  #[serde(default)]
  #[builder(into)]
  pub display_name: Option<String>,
  #[serde(default)]
  #[builder(into)]
  pub display_collection_name: Option<String>,
  #[serde(default)]
  #[builder(into)]
  pub description: Option<String>,
  #[builder(into)]
  pub primary_id_attribute: String,
  #[builder(into)]
  pub primary_name_attribute: String,
  #[serde(default)]
  pub object_type_code: Option<i32>,
  #[serde(default)]
  #[builder(default)]
  pub attributes: Vec<AttributeSchema>,
}

impl SchemaObject {
  #[must_use]
  pub fn attribute(&self, logical_name: &str) -> Option<&AttributeSchema> {
    self.attributes.iter().find(|attr| attr.logical_name == logical_name)
  }

  #[must_use]
  pub fn label_with_logical_name(&self) -> String {
    label_with_logical_name(self.display_name.as_deref(), &self.logical_name)
  }

  /// Checks the structural precondition of binding generation: both the primary id and the
  /// primary name attribute must be present.
  pub fn validate(&self) -> Result<(), SchemaError> {
    if self.attribute(&self.primary_id_attribute).is_none() {
      return Err(SchemaError::MissingPrimaryIdAttribute {
        entity: self.logical_name.clone(),
        attribute: self.primary_id_attribute.clone(),
      });
    }
    if self.attribute(&self.primary_name_attribute).is_none() {
      return Err(SchemaError::MissingPrimaryNameAttribute {
        entity: self.logical_name.clone(),
        attribute: self.primary_name_attribute.clone(),
      });
    }
    Ok(())
  }
}

fn label_with_logical_name(label: Option<&str>, logical_name: &str) -> String {
  match label.map(str::trim).filter(|label| !label.is_empty()) {
    Some(label) => format!("{} ({logical_name})", single_line(label)),
    None => logical_name.to_string(),
  }
}

/// Drops carriage returns and line feeds so a label fits on one doc line.
#[must_use]
pub fn single_line(text: &str) -> String {
  text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// A metadata dump: the entities to generate plus entities that are only referenced by lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataDocument {
  #[serde(default)]
  pub entities: Vec<SchemaObject>,
  #[serde(default)]
  pub referenced_entities: Vec<SchemaObject>,
}

impl MetadataDocument {
  #[must_use]
  pub fn entity(&self, logical_name: &str) -> Option<&SchemaObject> {
    self.entities.iter().find(|entity| entity.logical_name == logical_name)
  }
}

impl MetadataSource for MetadataDocument {
  fn fetch(&self, logical_name: &str) -> Option<SchemaObject> {
    self
      .entities
      .iter()
      .chain(&self.referenced_entities)
      .find(|entity| entity.logical_name == logical_name)
      .cloned()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
  #[error("entity '{entity}' has no primary id attribute '{attribute}'")]
  MissingPrimaryIdAttribute { entity: String, attribute: String },

  #[error("entity '{entity}' has no primary name attribute '{attribute}'")]
  MissingPrimaryNameAttribute { entity: String, attribute: String },

  #[error("entity '{0}' is not present in the metadata document")]
  EntityNotFound(String),
}

#[cfg(test)]
mod tests;
