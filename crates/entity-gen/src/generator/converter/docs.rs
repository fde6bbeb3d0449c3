use itertools::Itertools;

use crate::{
  generator::ast::Documentation,
  metadata::{AttributeSchema, LookupSpec, MetadataCache, SchemaObject, TypeKind},
};

pub(crate) fn class_docs(entity: &SchemaObject) -> Documentation {
  let mut docs = Documentation::from_lines([entity.label_with_logical_name()]);
  if let Some(description) = &entity.description {
    docs.push_paragraph(description);
  }
  docs
}

pub(crate) fn collection_docs(entity: &SchemaObject) -> Documentation {
  Documentation::from_lines([format!("Query over {} records.", entity.label_with_logical_name())])
}

/// Summary shared by a member and its enum.
pub(crate) fn property_docs(
  entity: &SchemaObject,
  attribute: &AttributeSchema,
  cache: &mut MetadataCache<'_>,
) -> Documentation {
  let mut docs = Documentation::from_lines([attribute.label_with_logical_name()]);
  if attribute.logical_name == entity.primary_id_attribute {
    docs.push_paragraph("Record ID");
  }
  if attribute.logical_name == entity.primary_name_attribute {
    docs.push_paragraph("Primary Field");
  }
  if let Some(description) = &attribute.description {
    docs.push_paragraph(description);
  }
  if let Some(TypeKind::Lookup(lookup)) = &attribute.kind {
    push_lookup_docs(&mut docs, lookup, cache);
  }
  docs
}

fn push_lookup_docs(docs: &mut Documentation, lookup: &LookupSpec, cache: &mut MetadataCache<'_>) {
  // Unresolvable targets keep their bare logical name.
  let targets = lookup
    .targets
    .iter()
    .map(|target| {
      cache
        .resolve(target)
        .map_or_else(|| target.clone(), SchemaObject::label_with_logical_name)
    })
    .collect::<Vec<_>>();

  match targets.as_slice() {
    [] => {}
    [single] => docs.push_paragraph(&format!("Target entity: {single}")),
    many => docs.push_paragraph(&format!("Target entities: {}", many.iter().join(", "))),
  }

  if let Some(format) = lookup.format {
    docs.push_paragraph(&format!("Lookup format: {format}"));
  }
}
