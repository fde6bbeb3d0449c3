use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{BooleanManagedProperty, EntityReference, Money, OptionSetValue};

/// A dynamically typed attribute value as stored on an [`Entity`](crate::Entity).
///
/// `Null` is kept distinct from an absent attribute: it records that the attribute was explicitly
/// cleared, which the platform needs in order to blank the column on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
  Null,
  Integer(i32),
  BigInt(i64),
  Decimal(Decimal),
  Double(f64),
  Boolean(bool),
  DateTime(DateTime<Utc>),
  String(String),
  Uuid(Uuid),
  Money(Money),
  EntityReference(EntityReference),
  OptionSetValue(OptionSetValue),
  BooleanManagedProperty(BooleanManagedProperty),
}

impl Value {
  #[must_use]
  pub const fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }

  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::Integer(_) => "integer",
      Self::BigInt(_) => "bigint",
      Self::Decimal(_) => "decimal",
      Self::Double(_) => "double",
      Self::Boolean(_) => "boolean",
      Self::DateTime(_) => "datetime",
      Self::String(_) => "string",
      Self::Uuid(_) => "uuid",
      Self::Money(_) => "money",
      Self::EntityReference(_) => "entityreference",
      Self::OptionSetValue(_) => "optionsetvalue",
      Self::BooleanManagedProperty(_) => "booleanmanagedproperty",
    }
  }
}

/// Typed extraction from a [`Value`]. Returns `None` for `Null` and for a value of another type.
pub trait FromValue: Sized {
  fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! value_conversions {
  ($($ty:ty => $variant:ident),* $(,)?) => {
    $(
      impl From<$ty> for Value {
        fn from(value: $ty) -> Self {
          Self::$variant(value)
        }
      }

      impl FromValue for $ty {
        fn from_value(value: &Value) -> Option<Self> {
          match value {
            Value::$variant(inner) => Some(inner.clone()),
            _ => None,
          }
        }
      }
    )*
  };
}

value_conversions! {
  i32 => Integer,
  i64 => BigInt,
  Decimal => Decimal,
  f64 => Double,
  bool => Boolean,
  DateTime<Utc> => DateTime,
  String => String,
  Uuid => Uuid,
  Money => Money,
  EntityReference => EntityReference,
  OptionSetValue => OptionSetValue,
  BooleanManagedProperty => BooleanManagedProperty,
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Null, Into::into)
  }
}
