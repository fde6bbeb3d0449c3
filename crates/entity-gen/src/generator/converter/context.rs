use itertools::Itertools;

use crate::generator::{
  ast::{ClaimStatus, CollectionDef, ContextDef, EntityClassDef},
  metrics::GenerationWarning,
  naming::{
    name_index::NameAllocator,
    reserved::{CONTEXT_RESERVED_MEMBERS, SERVICE_CONTEXT_NAME},
  },
};

/// Builds the aggregate exposing one query accessor per generated entity.
///
/// Accessors are ordered by collection name, then class name. A collection name that is reserved or
/// already used by an earlier accessor is suppressed.
pub(crate) fn build_context(classes: &[EntityClassDef]) -> (ContextDef, Vec<GenerationWarning>) {
  let mut allocator = NameAllocator::with_reserved(CONTEXT_RESERVED_MEMBERS.iter().copied());
  let mut warnings = vec![];

  let collections = classes
    .iter()
    .sorted_by(|a, b| {
      a.collection
        .name
        .cmp(&b.collection.name)
        .then_with(|| a.class_name.cmp(&b.class_name))
    })
    .map(|class| {
      let status = ClaimStatus::from_claim(allocator.try_claim(&class.collection.name));
      if status.is_suppressed() {
        warnings.push(GenerationWarning::CollectionConflict {
          entity: class.logical_name.clone(),
          name: class.collection.name.clone(),
        });
      }
      CollectionDef::builder()
        .name(class.collection.name.as_str())
        .class_name(class.class_name.as_str())
        .module_name(class.module_name.as_str())
        .docs(class.collection.docs.clone())
        .status(status)
        .build()
    })
    .collect();

  let context = ContextDef {
    name: SERVICE_CONTEXT_NAME.to_string(),
    collections,
  };
  (context, warnings)
}
