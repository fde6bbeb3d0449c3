use bon::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform reference to another record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
pub struct EntityReference {
  #[builder(into)]
  pub logical_name: String,
  pub id: Uuid,
  #[builder(into)]
  pub name: Option<String>,
}

impl EntityReference {
  #[must_use]
  pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
    Self {
      logical_name: logical_name.into(),
      id,
      name: None,
    }
  }
}

/// Reference wrapper exposed by generated lookup members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lookup {
  pub logical_name: String,
  pub id: Uuid,
  pub name: Option<String>,
}

impl Lookup {
  #[must_use]
  pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
    Self {
      logical_name: logical_name.into(),
      id,
      name: None,
    }
  }

  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }
}

impl From<EntityReference> for Lookup {
  fn from(reference: EntityReference) -> Self {
    Self {
      logical_name: reference.logical_name,
      id: reference.id,
      name: reference.name,
    }
  }
}

impl From<Lookup> for EntityReference {
  fn from(lookup: Lookup) -> Self {
    Self {
      logical_name: lookup.logical_name,
      id: lookup.id,
      name: lookup.name,
    }
  }
}

/// Platform money value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Money {
  pub value: Decimal,
}

impl Money {
  #[must_use]
  pub const fn new(value: Decimal) -> Self {
    Self { value }
  }
}

/// Decimal wrapper exposed by generated monetary members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Currency(pub Decimal);

impl Currency {
  #[must_use]
  pub const fn amount(self) -> Decimal {
    self.0
  }
}

impl From<Money> for Currency {
  fn from(money: Money) -> Self {
    Self(money.value)
  }
}

impl From<Currency> for Money {
  fn from(currency: Currency) -> Self {
    Self::new(currency.0)
  }
}

impl From<Decimal> for Currency {
  fn from(value: Decimal) -> Self {
    Self(value)
  }
}

/// Integer option code of a choice, state, or status attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSetValue(i32);

impl OptionSetValue {
  #[must_use]
  pub const fn new(value: i32) -> Self {
    Self(value)
  }

  #[must_use]
  pub const fn value(self) -> i32 {
    self.0
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BooleanManagedProperty {
  pub value: bool,
  pub can_be_changed: bool,
}

impl BooleanManagedProperty {
  #[must_use]
  pub const fn new(value: bool) -> Self {
    Self {
      value,
      can_be_changed: true,
    }
  }
}
