use super::{dispatch::member_shape, docs, enums};
use crate::{
  generator::{
    ast::{
      ClaimStatus, ClassBody, CollectionSource, EntityClassDef, EnumDef, MemberDef, MemberOutcome, NamingMode,
      Placeholder,
    },
    metrics::GenerationWarning,
    naming::{
      identifiers::{normalize_or, normalize_usable, pluralize_class_name, setter_name},
      name_index::NameAllocator,
      ordering::AttributeSortKey,
      reserved::ENTITY_RESERVED_MEMBERS,
    },
  },
  metadata::{AttributeSchema, MetadataCache, SchemaObject},
};

const UNNAMED_CLASS: &str = "UnnamedEntity";
const UNNAMED_MODULE: &str = "unnamed_entity";

/// Output of building one entity: the class definition plus its non-fatal diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct EntityBuild {
  pub(crate) class: EntityClassDef,
  pub(crate) warnings: Vec<GenerationWarning>,
}

/// Resolves every attribute of one entity into the canonical and the friendly class body.
///
/// One allocator serves both passes, canonical first, so friendly members never reuse a canonical
/// name. Nothing here fails: unbindable attributes become placeholders and name conflicts become
/// suppressed members. The entity must have passed [`SchemaObject::validate`].
pub(crate) struct ClassBuilder<'a, 'c> {
  entity: &'a SchemaObject,
  cache: &'a mut MetadataCache<'c>,
  allocator: NameAllocator,
  enums: Vec<EnumDef>,
  warnings: Vec<GenerationWarning>,
}

impl<'a, 'c> ClassBuilder<'a, 'c> {
  pub(crate) fn new(entity: &'a SchemaObject, cache: &'a mut MetadataCache<'c>) -> Self {
    Self {
      entity,
      cache,
      allocator: NameAllocator::with_reserved(ENTITY_RESERVED_MEMBERS.iter().copied()),
      enums: vec![],
      warnings: vec![],
    }
  }

  pub(crate) fn build(mut self) -> EntityBuild {
    let class_name = class_name(self.entity);
    self.allocator.reserve(&class_name);

    let canonical = self.build_pass(NamingMode::Canonical);
    let friendly = self.build_pass(NamingMode::Friendly);

    let collection = CollectionSource {
      name: collection_name(self.entity, &class_name),
      docs: docs::collection_docs(self.entity),
    };

    let class = EntityClassDef {
      class_name,
      logical_name: self.entity.logical_name.clone(),
      module_name: module_name(self.entity),
      docs: docs::class_docs(self.entity),
      type_code: self.entity.object_type_code,
      primary_id_attribute: self.entity.primary_id_attribute.clone(),
      primary_name_attribute: self.entity.primary_name_attribute.clone(),
      canonical,
      friendly,
      enums: self.enums,
      collection,
    };

    EntityBuild {
      class,
      warnings: self.warnings,
    }
  }

  fn build_pass(&mut self, mode: NamingMode) -> ClassBody {
    let entity = self.entity;
    let mut ordered = entity
      .attributes
      .iter()
      .map(|attribute| (resolved_name(attribute, mode), attribute))
      .collect::<Vec<_>>();
    ordered.sort_by(|(name_a, a), (name_b, b)| sort_key(name_a.as_deref(), a).cmp(&sort_key(name_b.as_deref(), b)));

    let mut body = ClassBody::new(mode);
    for (name, attribute) in ordered {
      let outcome = self.resolve_member(mode, name, attribute);
      body.members.push(outcome);
    }
    body
  }

  fn resolve_member(&mut self, mode: NamingMode, name: Option<String>, attribute: &AttributeSchema) -> MemberOutcome {
    let entity = self.entity;
    let is_primary_id = attribute.logical_name == entity.primary_id_attribute;

    let Some(kind) = &attribute.kind else {
      self.warn_once(mode, || GenerationWarning::MissingTypeTag {
        entity: entity.logical_name.clone(),
        logical_name: attribute.logical_name.clone(),
      });
      return placeholder(
        attribute,
        format!(
          "Unable to generate property for: {}. AttributeType is not specified.",
          attribute.label_with_logical_name()
        ),
      );
    };

    let Some(shape) = member_shape(kind, is_primary_id) else {
      self.warn_once(mode, || GenerationWarning::UnsupportedType {
        entity: entity.logical_name.clone(),
        logical_name: attribute.logical_name.clone(),
        type_name: kind.type_name(),
      });
      return placeholder(
        attribute,
        format!(
          "Unable to generate property for: {}. AttributeType: \"{}\" is not supported.",
          attribute.label_with_logical_name(),
          kind.type_name()
        ),
      );
    };

    let Some(name) = name else {
      self.warnings.push(GenerationWarning::NameUnavailable {
        entity: entity.logical_name.clone(),
        mode,
        logical_name: attribute.logical_name.clone(),
      });
      return placeholder(attribute, name_unavailable_message(mode, &attribute.logical_name));
    };

    let claimed = if shape.is_read_only() {
      self.allocator.try_claim(&name)
    } else {
      self.allocator.try_claim_all(&[&name, &setter_name(&name)])
    };
    let status = ClaimStatus::from_claim(claimed);
    if status.is_suppressed() {
      self.warnings.push(GenerationWarning::NameConflict {
        entity: entity.logical_name.clone(),
        mode,
        name: name.clone(),
        logical_name: attribute.logical_name.clone(),
      });
    }

    let docs = docs::property_docs(entity, attribute, self.cache);
    if shape.has_enum()
      && let Some(enum_def) = enums::synthesize(&name, kind, docs.clone(), status)
    {
      self.enums.push(enum_def);
    }

    MemberOutcome::Member(
      MemberDef::builder()
        .name(name)
        .logical_name(attribute.logical_name.as_str())
        .docs(docs)
        .shape(shape)
        .status(status)
        .build(),
    )
  }

  /// Type problems belong to the attribute, not the pass; report them from the canonical pass only.
  fn warn_once(&mut self, mode: NamingMode, warning: impl FnOnce() -> GenerationWarning) {
    if mode == NamingMode::Canonical {
      self.warnings.push(warning());
    }
  }
}

fn resolved_name(attribute: &AttributeSchema, mode: NamingMode) -> Option<String> {
  match mode {
    NamingMode::Canonical => normalize_usable(Some(&attribute.logical_name)),
    NamingMode::Friendly => normalize_usable(attribute.display_name.as_deref()),
  }
}

fn sort_key<'a>(resolved_name: Option<&'a str>, attribute: &'a AttributeSchema) -> AttributeSortKey<'a> {
  AttributeSortKey {
    resolved_name,
    is_custom: attribute.is_custom,
    display_label: attribute.display_name.as_deref(),
    logical_name: &attribute.logical_name,
  }
}

fn placeholder(attribute: &AttributeSchema, message: String) -> MemberOutcome {
  MemberOutcome::Placeholder(Placeholder {
    logical_name: attribute.logical_name.clone(),
    message,
  })
}

fn name_unavailable_message(mode: NamingMode, logical_name: &str) -> String {
  match mode {
    NamingMode::Friendly => format!(
      "Unable to generate property using display name for: {logical_name}. Please refer to logical name for property access."
    ),
    NamingMode::Canonical => {
      format!("Unable to generate property for: {logical_name}. Logical name is not a usable identifier.")
    }
  }
}

/// Normalized display name, falling back to the logical name.
pub(crate) fn class_name(entity: &SchemaObject) -> String {
  normalize_usable(entity.display_name.as_deref())
    .unwrap_or_else(|| normalize_or(&entity.logical_name, UNNAMED_CLASS))
}

/// Lowercased, normalized logical name. Distinct entities may still share it; the orchestrator
/// settles that across the run.
pub(crate) fn module_name(entity: &SchemaObject) -> String {
  normalize_or(&entity.logical_name.to_lowercase(), UNNAMED_MODULE)
}

/// Normalized display collection name, falling back to the pluralized class name.
pub(crate) fn collection_name(entity: &SchemaObject, class_name: &str) -> String {
  normalize_usable(entity.display_collection_name.as_deref()).unwrap_or_else(|| pluralize_class_name(class_name))
}

