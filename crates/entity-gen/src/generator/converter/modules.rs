use crate::generator::{ast::EntityClassDef, metrics::GenerationWarning, naming::name_index::NameAllocator};

/// Module names already used by the generated tree next to the entity modules.
const RESERVED_MODULE_NAMES: &[&str] = &["enums", "mod"];

/// Makes every entity module name unique across one run.
///
/// Classes are visited in order; a name that is reserved or already taken gets the first free
/// `_2`, `_3`, ... suffix.
pub(crate) fn assign_module_names(classes: &mut [EntityClassDef]) -> Vec<GenerationWarning> {
  let mut allocator = NameAllocator::with_reserved(RESERVED_MODULE_NAMES.iter().copied());
  let mut warnings = vec![];

  for class in classes {
    if allocator.try_claim(&class.module_name) {
      continue;
    }
    let module = (2..)
      .map(|suffix| format!("{}_{suffix}", class.module_name))
      .find(|candidate| allocator.try_claim(candidate))
      .unwrap_or_default();
    warnings.push(GenerationWarning::ModuleRenamed {
      entity: class.logical_name.clone(),
      name: std::mem::replace(&mut class.module_name, module.clone()),
      module,
    });
  }

  warnings
}
