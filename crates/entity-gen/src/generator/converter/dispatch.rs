use crate::{
  generator::ast::{AccessorKind, ExposedType, MemberShape, ScalarType},
  metadata::TypeKind,
};

/// Maps an attribute kind to the getter/setter shape emitted for it.
///
/// Returns `None` for kinds that have no binding; the caller emits a placeholder instead.
pub(crate) fn member_shape(kind: &TypeKind, is_primary_id: bool) -> Option<MemberShape> {
  let shape = match kind {
    TypeKind::Integer => MemberShape::direct(ScalarType::I32),
    TypeKind::BigInt => MemberShape::direct(ScalarType::I64),
    TypeKind::Decimal => MemberShape::direct(ScalarType::Decimal),
    TypeKind::Double => MemberShape::direct(ScalarType::F64),
    TypeKind::DateTime => MemberShape::direct(ScalarType::DateTime),
    TypeKind::String | TypeKind::Memo => MemberShape::direct(ScalarType::String),
    TypeKind::UniqueId if is_primary_id => MemberShape {
      exposed: ExposedType::Scalar(ScalarType::Uuid),
      storage: ScalarType::Uuid,
      accessor: AccessorKind::IdentityMirror,
    },
    TypeKind::UniqueId => MemberShape::direct(ScalarType::Uuid),
    TypeKind::Money => MemberShape::cast(ScalarType::Currency, ScalarType::Money),
    TypeKind::Lookup(_) => MemberShape::cast(ScalarType::Lookup, ScalarType::EntityReference),
    TypeKind::ManagedBoolean => MemberShape::direct(ScalarType::BooleanManagedProperty),
    TypeKind::Boolean(_) => MemberShape {
      exposed: ExposedType::Enum,
      storage: ScalarType::Bool,
      accessor: AccessorKind::BooleanEnum,
    },
    TypeKind::Choice(_) => MemberShape {
      exposed: ExposedType::Enum,
      storage: ScalarType::OptionSetValue,
      accessor: AccessorKind::ChoiceEnum,
    },
    TypeKind::Virtual => MemberShape {
      exposed: ExposedType::Scalar(ScalarType::String),
      storage: ScalarType::String,
      accessor: AccessorKind::ReadOnly,
    },
    TypeKind::Unsupported(_) => return None,
  };
  Some(shape)
}
