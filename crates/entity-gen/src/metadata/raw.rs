use std::str::FromStr;

use serde::Deserialize;

use super::{
  AttributeSchema, AttributeTypeCode, BooleanOptions, ChoiceSpec, LookupFormat, LookupSpec, OptionEntry, TypeKind,
};

/// Wire shape of an attribute. Type-specific fields are flat siblings of `AttributeType`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawAttribute {
  logical_name: String,
  #[serde(default)]
  display_name: Option<String>,
  #[serde(default)]
  description: Option<String>,
  #[serde(default)]
  attribute_type: Option<String>,
  #[serde(default, rename = "IsCustomAttribute")]
  is_custom: Option<bool>,
  #[serde(default)]
  targets: Vec<String>,
  #[serde(default)]
  format: Option<LookupFormat>,
  #[serde(default)]
  option_set: Option<RawOptionSet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawOptionSet {
  #[serde(default)]
  options: Vec<OptionEntry>,
  #[serde(default)]
  false_option: Option<OptionEntry>,
  #[serde(default)]
  true_option: Option<OptionEntry>,
}

impl From<RawAttribute> for AttributeSchema {
  fn from(raw: RawAttribute) -> Self {
    let kind = raw
      .attribute_type
      .as_deref()
      .map(|name| resolve_kind(name, raw.targets, raw.format, raw.option_set.unwrap_or_default()));

    Self {
      logical_name: raw.logical_name,
      display_name: raw.display_name,
      description: raw.description,
      kind,
      is_custom: raw.is_custom,
    }
  }
}

fn resolve_kind(name: &str, targets: Vec<String>, format: Option<LookupFormat>, option_set: RawOptionSet) -> TypeKind {
  let Ok(code) = AttributeTypeCode::from_str(name) else {
    return TypeKind::Unsupported(name.to_string());
  };

  match code {
    AttributeTypeCode::Integer => TypeKind::Integer,
    AttributeTypeCode::BigInt => TypeKind::BigInt,
    AttributeTypeCode::Decimal => TypeKind::Decimal,
    AttributeTypeCode::Double => TypeKind::Double,
    AttributeTypeCode::DateTime => TypeKind::DateTime,
    AttributeTypeCode::String => TypeKind::String,
    AttributeTypeCode::Memo => TypeKind::Memo,
    AttributeTypeCode::Uniqueidentifier => TypeKind::UniqueId,
    AttributeTypeCode::Money => TypeKind::Money,
    AttributeTypeCode::ManagedProperty => TypeKind::ManagedBoolean,
    AttributeTypeCode::Virtual => TypeKind::Virtual,
    AttributeTypeCode::Boolean => {
      let defaults = BooleanOptions::default();
      TypeKind::Boolean(BooleanOptions {
        false_option: option_set.false_option.unwrap_or(defaults.false_option),
        true_option: option_set.true_option.unwrap_or(defaults.true_option),
      })
    }
    AttributeTypeCode::Lookup | AttributeTypeCode::Customer | AttributeTypeCode::Owner => {
      TypeKind::Lookup(LookupSpec { code, targets, format })
    }
    AttributeTypeCode::Picklist | AttributeTypeCode::State | AttributeTypeCode::Status => TypeKind::Choice(ChoiceSpec {
      code,
      options: option_set.options,
    }),
    AttributeTypeCode::PartyList | AttributeTypeCode::CalendarRules | AttributeTypeCode::EntityName => {
      TypeKind::Unsupported(code.to_string())
    }
  }
}
