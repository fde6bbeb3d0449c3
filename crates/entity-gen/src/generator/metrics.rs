use strum::Display;

use crate::generator::ast::{ClassBody, ContextDef, EntityClassDef, NamingMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub entities_generated: usize,
  pub canonical_members: usize,
  pub friendly_members: usize,
  pub suppressed_members: usize,
  pub placeholders: usize,
  pub enums_generated: usize,
  pub collections_generated: usize,
  /// Distinct lookup targets fetched from the metadata source.
  pub lookup_fetches: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_entity(&mut self, class: &EntityClassDef) {
    self.entities_generated += 1;
    self.record_body(&class.canonical);
    self.record_body(&class.friendly);
    self.enums_generated += class.enums.iter().filter(|def| !def.status.is_suppressed()).count();
  }

  fn record_body(&mut self, body: &ClassBody) {
    for member in body.member_defs() {
      if member.status.is_suppressed() {
        self.suppressed_members += 1;
        continue;
      }
      match body.mode {
        NamingMode::Canonical => self.canonical_members += 1,
        NamingMode::Friendly => self.friendly_members += 1,
      }
    }
    self.placeholders += body.placeholders().count();
  }

  pub fn record_context(&mut self, context: &ContextDef) {
    self.collections_generated += context
      .collections
      .iter()
      .filter(|collection| !collection.status.is_suppressed())
      .count();
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

/// Non-fatal conditions met while building bindings. Each one also leaves a visible trace in the
/// generated source: a placeholder or an inactive declaration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "[{entity}] no {mode} name for attribute '{logical_name}'")]
  NameUnavailable {
    entity: String,
    mode: NamingMode,
    logical_name: String,
  },
  #[strum(to_string = "[{entity}] {mode} member '{name}' for attribute '{logical_name}' is already taken; suppressed")]
  NameConflict {
    entity: String,
    mode: NamingMode,
    name: String,
    logical_name: String,
  },
  #[strum(to_string = "[{entity}] attribute '{logical_name}' has unsupported type '{type_name}'")]
  UnsupportedType {
    entity: String,
    logical_name: String,
    type_name: String,
  },
  #[strum(to_string = "[{entity}] attribute '{logical_name}' has no type")]
  MissingTypeTag { entity: String, logical_name: String },
  #[strum(to_string = "[{entity}] collection '{name}' is already taken; suppressed")]
  CollectionConflict { entity: String, name: String },
  #[strum(to_string = "[{entity}] module '{name}' is already taken; generated as '{module}'")]
  ModuleRenamed {
    entity: String,
    name: String,
    module: String,
  },
}

impl GenerationWarning {
  /// Attributes that produce no member at all.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::UnsupportedType { .. } | Self::MissingTypeTag { .. })
  }
}
