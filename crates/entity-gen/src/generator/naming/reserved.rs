/// Items every generated entity struct already has, either inherently or through
/// `entity_gen_support::AbstractEntity` and the std traits the struct implements. Attribute-derived
/// members may never take these names.
pub(crate) const ENTITY_RESERVED_MEMBERS: &[&str] = &[
  // inherent
  "new",
  "with_id",
  "primary_name",
  "ENTITY_LOGICAL_NAME",
  "ENTITY_TYPE_CODE",
  // AbstractEntity
  "PRIMARY_ID_ATTRIBUTE",
  "PRIMARY_NAME_ATTRIBUTE",
  "entity",
  "entity_mut",
  "id",
  "set_id",
  "logical_name",
  "primary_field",
  "get_attribute_value",
  "set_attribute_value",
  "to_entity_reference",
  "from_entity",
  "into_entity",
  // Entity passthroughs commonly reached through `entity()`
  "contains",
  "attributes",
  // std traits derived or implemented on the struct
  "clone",
  "clone_from",
  "default",
  "eq",
  "ne",
  "fmt",
  "from",
  "into",
];

/// Items of the generated `ServiceContext` aggregate that collection accessors may not take.
pub(crate) const CONTEXT_RESERVED_MEMBERS: &[&str] = &["new", "inner", "service", "create_query", "deref", "clone", "fmt"];

/// Generated name of the aggregate type.
pub(crate) const SERVICE_CONTEXT_NAME: &str = "ServiceContext";
