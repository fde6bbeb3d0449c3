use std::cmp::Ordering;

use crate::{
  generator::naming::ordering::{AttributeSortKey, compare_options},
  metadata::OptionEntry,
};

fn key<'a>(
  resolved_name: Option<&'a str>,
  is_custom: Option<bool>,
  display_label: Option<&'a str>,
  logical_name: &'a str,
) -> AttributeSortKey<'a> {
  AttributeSortKey {
    resolved_name,
    is_custom,
    display_label,
    logical_name,
  }
}

#[test]
fn test_resolved_name_orders_first_and_unresolved_last() {
  let mut keys = vec![
    key(None, Some(true), Some("A"), "a"),
    key(Some("beta"), Some(false), None, "b"),
    key(Some("Zeta"), None, None, "z"),
    key(Some("alpha"), None, None, "c"),
  ];
  keys.sort();
  let logical: Vec<&str> = keys.iter().map(|k| k.logical_name).collect();
  assert_eq!(logical, ["z", "c", "b", "a"], "uppercase sorts before lowercase, unresolved last");
}

#[test]
fn test_custom_attributes_sort_before_standard() {
  let mut keys = vec![
    key(Some("Status"), None, Some("Status"), "a_unknown"),
    key(Some("Status"), Some(false), Some("Status"), "b_standard"),
    key(Some("Status"), Some(true), Some("Status"), "c_custom"),
  ];
  keys.sort();
  let logical: Vec<&str> = keys.iter().map(|k| k.logical_name).collect();
  assert_eq!(logical, ["c_custom", "b_standard", "a_unknown"]);
}

#[test]
fn test_label_then_logical_name_break_ties() {
  let mut keys = vec![
    key(Some("Name"), Some(false), None, "a"),
    key(Some("Name"), Some(false), Some("Name"), "z"),
    key(Some("Name"), Some(false), Some("Name"), "m"),
    key(Some("Name"), Some(false), Some("Na me"), "q"),
  ];
  keys.sort();
  let logical: Vec<&str> = keys.iter().map(|k| k.logical_name).collect();
  assert_eq!(logical, ["q", "m", "z", "a"]);
}

#[test]
fn test_order_is_strict_for_distinct_logical_names() {
  let keys = [
    key(Some("Status"), Some(true), Some("Status"), "x"),
    key(Some("Status"), Some(true), Some("Status"), "y"),
    key(None, None, None, "x"),
    key(None, None, None, "y"),
  ];
  for a in &keys {
    for b in &keys {
      let equal = a.cmp(b) == Ordering::Equal;
      assert_eq!(equal, a == b, "comparator equality must imply identical keys: {a:?} vs {b:?}");
      assert_eq!(a.cmp(b), b.cmp(a).reverse(), "comparator must be antisymmetric");
    }
  }
}

#[test]
fn test_option_ordering() {
  let mut options = vec![
    OptionEntry::builder().value(9).build(),
    OptionEntry::labeled(3, "Other"),
    OptionEntry::labeled(7, ""),
    OptionEntry::labeled(1, "Other"),
    OptionEntry::labeled(2, "Customer"),
    OptionEntry::labeled(4, "Cust omer"),
  ];
  options.sort_by(compare_options);
  let values: Vec<i32> = options.iter().map(|o| o.value).collect();
  // "" normalizes to an empty (present) name and sorts first; the missing label sorts last.
  assert_eq!(values, [7, 4, 2, 1, 3, 9]);
}
