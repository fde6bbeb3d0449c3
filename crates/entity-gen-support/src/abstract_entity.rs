use uuid::Uuid;

use crate::{
  entity::Entity,
  types::EntityReference,
  value::{FromValue, Value},
};

/// Base surface shared by every generated entity binding.
///
/// The generator reserves every item name declared here, so attribute-derived members never shadow
/// them. Keep the generator's reserved-name table in sync when adding items.
pub trait AbstractEntity: From<Entity> + Into<Entity> {
  const ENTITY_LOGICAL_NAME: &'static str;
  const ENTITY_TYPE_CODE: Option<i32>;
  const PRIMARY_ID_ATTRIBUTE: &'static str;
  const PRIMARY_NAME_ATTRIBUTE: &'static str;

  fn entity(&self) -> &Entity;

  fn entity_mut(&mut self) -> &mut Entity;

  fn id(&self) -> Uuid {
    self.entity().id()
  }

  /// Sets the record identity. The nil UUID clears the primary id attribute.
  fn set_id(&mut self, id: Uuid) {
    let entity = self.entity_mut();
    entity.set_id(id);
    entity.set_attribute_value(Self::PRIMARY_ID_ATTRIBUTE, (!id.is_nil()).then_some(id));
  }

  fn logical_name(&self) -> &str {
    self.entity().logical_name()
  }

  fn primary_field(&self) -> Option<String> {
    self.entity().get_attribute_value(Self::PRIMARY_NAME_ATTRIBUTE)
  }

  fn get_attribute_value<T: FromValue>(&self, name: &str) -> Option<T> {
    self.entity().get_attribute_value(name)
  }

  fn set_attribute_value<V: Into<Value>>(&mut self, name: &str, value: Option<V>) {
    self.entity_mut().set_attribute_value(name, value);
  }

  fn to_entity_reference(&self) -> EntityReference {
    self.entity().to_entity_reference()
  }

  fn from_entity(entity: Entity) -> Self {
    Self::from(entity)
  }

  fn into_entity(self) -> Entity {
    self.into()
  }
}
