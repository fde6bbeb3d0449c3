mod documentation;
mod shapes;

use bon::Builder;
use strum::Display;

pub use documentation::Documentation;
pub use shapes::{AccessorKind, ExposedType, MemberShape, ScalarType};

/// Which label a class body is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NamingMode {
  /// Stable logical names.
  #[strum(to_string = "canonical")]
  Canonical,
  /// Display labels.
  #[strum(to_string = "friendly")]
  Friendly,
}

/// Outcome of asking the allocator for a member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
  Claimed,
  /// The name was already taken; the declaration is emitted but inactive.
  Suppressed,
}

impl ClaimStatus {
  #[must_use]
  pub const fn from_claim(claimed: bool) -> Self {
    if claimed { Self::Claimed } else { Self::Suppressed }
  }

  #[must_use]
  pub const fn is_suppressed(self) -> bool {
    matches!(self, Self::Suppressed)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
  Boolean,
  Choice,
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct VariantDef {
  #[builder(into)]
  pub name: String,
  pub value: i32,
  #[builder(default)]
  pub docs: Documentation,
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct EnumDef {
  #[builder(into)]
  pub name: String,
  pub kind: EnumKind,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub variants: Vec<VariantDef>,
  pub status: ClaimStatus,
}

/// One resolved attribute member: its name, source attribute, and suppression status.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct MemberDef {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub logical_name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub shape: MemberShape,
  pub status: ClaimStatus,
}

/// A visible marker standing in for an attribute that could not be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
  pub logical_name: String,
  pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberOutcome {
  Member(MemberDef),
  Placeholder(Placeholder),
}

impl MemberOutcome {
  #[cfg(test)]
  #[must_use]
  pub fn logical_name(&self) -> &str {
    match self {
      Self::Member(member) => &member.logical_name,
      Self::Placeholder(placeholder) => &placeholder.logical_name,
    }
  }

  #[must_use]
  pub const fn as_member(&self) -> Option<&MemberDef> {
    match self {
      Self::Member(member) => Some(member),
      Self::Placeholder(_) => None,
    }
  }
}

/// Ordered output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody {
  pub mode: NamingMode,
  pub members: Vec<MemberOutcome>,
}

impl ClassBody {
  #[must_use]
  pub const fn new(mode: NamingMode) -> Self {
    Self { mode, members: vec![] }
  }

  pub fn member_defs(&self) -> impl Iterator<Item = &MemberDef> {
    self.members.iter().filter_map(MemberOutcome::as_member)
  }

  pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
    self.members.iter().filter_map(|outcome| match outcome {
      MemberOutcome::Placeholder(placeholder) => Some(placeholder),
      MemberOutcome::Member(_) => None,
    })
  }

  #[cfg(test)]
  #[must_use]
  pub fn find(&self, logical_name: &str) -> Option<&MemberOutcome> {
    self.members.iter().find(|outcome| outcome.logical_name() == logical_name)
  }
}

/// Everything generated for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityClassDef {
  pub class_name: String,
  pub logical_name: String,
  /// Module and file stem of the entity, unique across one run.
  pub module_name: String,
  pub docs: Documentation,
  pub type_code: Option<i32>,
  pub primary_id_attribute: String,
  pub primary_name_attribute: String,
  pub canonical: ClassBody,
  pub friendly: ClassBody,
  /// Enums of both passes, canonical first, each in member order.
  pub enums: Vec<EnumDef>,
  pub collection: CollectionSource,
}

/// Per-entity input to the aggregate: the resolved collection name and its docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSource {
  pub name: String,
  pub docs: Documentation,
}

/// One query accessor on the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct CollectionDef {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub class_name: String,
  /// Module holding the entity class.
  #[builder(into)]
  pub module_name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub status: ClaimStatus,
}

/// The aggregate class exposing one collection per generated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDef {
  pub name: String,
  pub collections: Vec<CollectionDef>,
}
