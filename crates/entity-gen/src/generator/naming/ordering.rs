use std::cmp::Ordering;

use super::identifiers::normalize;
use crate::metadata::OptionEntry;

/// Sort key of one attribute within one generation pass.
///
/// Orders by resolved name, then custom before standard, then raw display label, then logical name.
/// Absent names, flags, and labels sort after present ones. Two keys compare equal only when every
/// field is equal, and logical names are unique within an entity, so the order is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttributeSortKey<'a> {
  pub(crate) resolved_name: Option<&'a str>,
  pub(crate) is_custom: Option<bool>,
  pub(crate) display_label: Option<&'a str>,
  pub(crate) logical_name: &'a str,
}

impl Ord for AttributeSortKey<'_> {
  fn cmp(&self, other: &Self) -> Ordering {
    nulls_last(self.resolved_name, other.resolved_name)
      .then_with(|| custom_rank(self.is_custom).cmp(&custom_rank(other.is_custom)))
      .then_with(|| nulls_last(self.display_label, other.display_label))
      .then_with(|| self.logical_name.cmp(other.logical_name))
  }
}

impl PartialOrd for AttributeSortKey<'_> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Orders choice options by normalized label, raw label, then value; absent labels last.
pub(crate) fn compare_options(a: &OptionEntry, b: &OptionEntry) -> Ordering {
  let normalized_a = normalize(a.label.as_deref());
  let normalized_b = normalize(b.label.as_deref());

  nulls_last(normalized_a.as_deref(), normalized_b.as_deref())
    .then_with(|| nulls_last(a.label.as_deref(), b.label.as_deref()))
    .then_with(|| a.value.cmp(&b.value))
}

fn nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.cmp(&b),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

const fn custom_rank(is_custom: Option<bool>) -> u8 {
  match is_custom {
    Some(true) => 0,
    Some(false) => 1,
    None => 2,
  }
}
