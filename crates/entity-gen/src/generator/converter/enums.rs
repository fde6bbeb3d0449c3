use std::collections::{HashMap, HashSet};

use crate::{
  generator::{
    ast::{ClaimStatus, Documentation, EnumDef, EnumKind, VariantDef},
    naming::{identifiers::normalize_usable, ordering::compare_options},
  },
  metadata::{BooleanOptions, OptionEntry, TypeKind, single_line},
};

const FALSE_VARIANT: &str = "False";
const TRUE_VARIANT: &str = "True";
const VALUE_VARIANT_PREFIX: &str = "_Value_";

/// Hands out distinct variant names within one enum.
///
/// A repeated base name gets `_2`, `_3`, ... from a counter keyed by that base. A suffixed candidate
/// that is itself already taken bumps the counter again.
#[derive(Debug, Default)]
pub(crate) struct VariantNamer {
  used: HashSet<String>,
  counters: HashMap<String, u32>,
}

impl VariantNamer {
  pub(crate) fn assign(&mut self, base: &str) -> String {
    if self.used.insert(base.to_string()) {
      return base.to_string();
    }
    let counter = self.counters.entry(base.to_string()).or_insert(1);
    loop {
      *counter += 1;
      let candidate = format!("{base}_{counter}");
      if self.used.insert(candidate.clone()) {
        return candidate;
      }
    }
  }
}

/// Builds the enum backing a boolean or choice member. Other kinds have no enum.
///
/// The enum is named after the member and shares its documentation and claim status.
pub(crate) fn synthesize(member_name: &str, kind: &TypeKind, docs: Documentation, status: ClaimStatus) -> Option<EnumDef> {
  let (kind, variants) = match kind {
    TypeKind::Boolean(options) => (EnumKind::Boolean, boolean_variants(options)),
    TypeKind::Choice(choice) => (EnumKind::Choice, choice_variants(&choice.options)),
    _ => return None,
  };
  Some(
    EnumDef::builder()
      .name(member_name)
      .kind(kind)
      .docs(docs)
      .variants(variants)
      .status(status)
      .build(),
  )
}

/// `false` is always named first, so a duplicate label lands on the `true` variant.
pub(crate) fn boolean_variants(options: &BooleanOptions) -> Vec<VariantDef> {
  let mut namer = VariantNamer::default();
  [
    (&options.false_option, FALSE_VARIANT, 0, "false"),
    (&options.true_option, TRUE_VARIANT, 1, "true"),
  ]
  .into_iter()
  .map(|(option, fallback, value, literal)| {
    let base = normalize_usable(option.label.as_deref()).unwrap_or_else(|| fallback.to_string());
    VariantDef::builder()
      .name(namer.assign(&base))
      .value(value)
      .docs(variant_docs(literal, option))
      .build()
  })
  .collect()
}

/// One variant per option, in label order, carrying the option value verbatim.
pub(crate) fn choice_variants(options: &[OptionEntry]) -> Vec<VariantDef> {
  let mut sorted: Vec<&OptionEntry> = options.iter().collect();
  sorted.sort_by(|a, b| compare_options(a, b));

  let mut namer = VariantNamer::default();
  sorted
    .into_iter()
    .map(|option| {
      let base = normalize_usable(option.label.as_deref()).unwrap_or_else(|| value_variant_name(option.value));
      VariantDef::builder()
        .name(namer.assign(&base))
        .value(option.value)
        .docs(variant_docs(&option.value.to_string(), option))
        .build()
    })
    .collect()
}

fn value_variant_name(value: i32) -> String {
  if value < 0 {
    format!("{VALUE_VARIANT_PREFIX}Negative{}", value.unsigned_abs())
  } else {
    format!("{VALUE_VARIANT_PREFIX}{value}")
  }
}

fn variant_docs(value: &str, option: &OptionEntry) -> Documentation {
  let summary = match option.label.as_deref() {
    Some(label) => format!("{value}: \"{}\"", single_line(label)),
    None => value.to_string(),
  };
  let mut docs = Documentation::from_lines([summary]);
  if let Some(description) = &option.description {
    docs.push_paragraph(description);
  }
  docs
}
