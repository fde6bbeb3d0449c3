use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  types::EntityReference,
  value::{FromValue, Value},
};

/// A dynamically typed platform record.
///
/// The identity is a plain [`Uuid`] where the nil UUID means "no identity yet", matching the
/// platform's own convention for unsaved records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
  logical_name: String,
  id: Uuid,
  attributes: IndexMap<String, Value>,
}

impl Entity {
  #[must_use]
  pub fn new(logical_name: impl Into<String>) -> Self {
    Self {
      logical_name: logical_name.into(),
      id: Uuid::nil(),
      attributes: IndexMap::new(),
    }
  }

  #[must_use]
  pub fn with_id(logical_name: impl Into<String>, id: Uuid) -> Self {
    Self {
      id,
      ..Self::new(logical_name)
    }
  }

  #[must_use]
  pub fn logical_name(&self) -> &str {
    &self.logical_name
  }

  #[must_use]
  pub const fn id(&self) -> Uuid {
    self.id
  }

  pub const fn set_id(&mut self, id: Uuid) {
    self.id = id;
  }

  #[must_use]
  pub fn has_id(&self) -> bool {
    !self.id.is_nil()
  }

  /// Returns the typed value of `name`, or `None` when the attribute is absent, explicitly null,
  /// or holds a value of a different type.
  #[must_use]
  pub fn get_attribute_value<T: FromValue>(&self, name: &str) -> Option<T> {
    self.attributes.get(name).and_then(T::from_value)
  }

  /// Stores `value` under `name`. `None` is recorded as an explicit null.
  pub fn set_attribute_value<V: Into<Value>>(&mut self, name: &str, value: Option<V>) {
    let value = value.map_or(Value::Null, Into::into);
    self.attributes.insert(name.to_string(), value);
  }

  pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
    self.attributes.shift_remove(name)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.attributes.contains_key(name)
  }

  #[must_use]
  pub fn attribute(&self, name: &str) -> Option<&Value> {
    self.attributes.get(name)
  }

  pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.attributes.iter().map(|(name, value)| (name.as_str(), value))
  }

  #[must_use]
  pub fn to_entity_reference(&self) -> EntityReference {
    EntityReference::new(self.logical_name.clone(), self.id)
  }
}
