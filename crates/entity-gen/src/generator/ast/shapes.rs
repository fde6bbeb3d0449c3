use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Concrete Rust types a member can expose or store. Tokens are absolute paths, so they resolve
/// whatever the generated class is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
  I32,
  I64,
  Decimal,
  F64,
  Bool,
  DateTime,
  String,
  Uuid,
  Money,
  Currency,
  EntityReference,
  Lookup,
  OptionSetValue,
  BooleanManagedProperty,
}

impl ToTokens for ScalarType {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ty = match self {
      Self::I32 => quote! { ::core::primitive::i32 },
      Self::I64 => quote! { ::core::primitive::i64 },
      Self::Decimal => quote! { ::entity_gen_support::Decimal },
      Self::F64 => quote! { ::core::primitive::f64 },
      Self::Bool => quote! { ::core::primitive::bool },
      Self::DateTime => quote! { ::entity_gen_support::DateTime<::entity_gen_support::Utc> },
      Self::String => quote! { ::std::string::String },
      Self::Uuid => quote! { ::entity_gen_support::Uuid },
      Self::Money => quote! { ::entity_gen_support::Money },
      Self::Currency => quote! { ::entity_gen_support::Currency },
      Self::EntityReference => quote! { ::entity_gen_support::EntityReference },
      Self::Lookup => quote! { ::entity_gen_support::Lookup },
      Self::OptionSetValue => quote! { ::entity_gen_support::OptionSetValue },
      Self::BooleanManagedProperty => quote! { ::entity_gen_support::BooleanManagedProperty },
    };
    ty.to_tokens(tokens);
  }
}

/// Type a member's getter returns (inside `Option`) and its setter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposedType {
  Scalar(ScalarType),
  /// The synthesized enum named after the member itself.
  Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
  /// Stored as exposed.
  Direct,
  /// Converted between the exposed wrapper and the storage type with `From`.
  Cast,
  /// Stored as `bool`, exposed as a two-option enum.
  BooleanEnum,
  /// Stored as an option code, exposed as a synthesized enum. Unknown codes read as `None`.
  ChoiceEnum,
  /// Stored as exposed; writes also update the record identity.
  IdentityMirror,
  /// Getter only.
  ReadOnly,
}

/// How one attribute turns into a getter/setter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberShape {
  pub exposed: ExposedType,
  pub storage: ScalarType,
  pub accessor: AccessorKind,
}

impl MemberShape {
  #[must_use]
  pub const fn direct(scalar: ScalarType) -> Self {
    Self {
      exposed: ExposedType::Scalar(scalar),
      storage: scalar,
      accessor: AccessorKind::Direct,
    }
  }

  #[must_use]
  pub const fn cast(exposed: ScalarType, storage: ScalarType) -> Self {
    Self {
      exposed: ExposedType::Scalar(exposed),
      storage,
      accessor: AccessorKind::Cast,
    }
  }

  #[must_use]
  pub const fn is_read_only(&self) -> bool {
    matches!(self.accessor, AccessorKind::ReadOnly)
  }

  #[must_use]
  pub const fn has_enum(&self) -> bool {
    matches!(self.exposed, ExposedType::Enum)
  }
}
