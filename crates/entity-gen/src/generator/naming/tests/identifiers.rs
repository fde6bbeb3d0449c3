use crate::generator::naming::identifiers::{
  is_usable_identifier, normalize, normalize_or, normalize_usable, pluralize_class_name, setter_name, to_ident,
};

#[test]
fn test_normalize() {
  let cases = [
    // Whitespace and punctuation are dropped, case is kept
    ("Account Name", "AccountName"),
    ("Do not allow E-mails", "DonotallowEmails"),
    ("  padded\tlabel\n", "paddedlabel"),
    ("snake_case_kept", "snake_case_kept"),
    ("Status (Reason)", "StatusReason"),
    // Leading digits get an underscore
    ("1st Contact", "_1stContact"),
    ("2024", "_2024"),
    ("_9lives", "_9lives"),
    // Letters and digits of any script are kept as written
    ("Café Größe", "CaféGröße"),
    ("日本", "日本"),
    ("\u{301}accent", "_\u{301}accent"),
    ("٣ items", "_٣items"),
    ("① ②", ""),
    // Collapses to empty rather than None
    ("", ""),
    ("   ", ""),
    ("!!!", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(normalize(Some(input)).as_deref(), Some(expected), "failed for input {input:?}");
  }
}

#[test]
fn test_normalize_none_stays_none() {
  assert_eq!(normalize(None), None);
  assert_eq!(normalize_usable(None), None);
}

#[test]
fn test_normalize_usable_rejects_unspellable_identifiers() {
  let cases = [
    ("Status", Some("Status")),
    ("type", Some("type")),
    ("---", None),
    ("_", None),
    ("self", None),
    ("Self", None),
    ("super", None),
    ("crate", None),
  ];
  for (input, expected) in cases {
    assert_eq!(normalize_usable(Some(input)).as_deref(), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_normalize_keeps_accented_labels_distinct() {
  assert_ne!(normalize(Some("Café")), normalize(Some("Cafe")));
}

#[test]
fn test_normalize_or_always_yields_a_name() {
  let cases = [
    ("account", "account"),
    ("my-widget", "mywidget"),
    ("self", "self_"),
    ("_", "__"),
    ("---", "fallback"),
    ("", "fallback"),
  ];
  for (input, expected) in cases {
    assert_eq!(normalize_or(input, "fallback"), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_is_usable_identifier() {
  assert!(is_usable_identifier("_Value_7"));
  assert!(is_usable_identifier("r"));
  assert!(!is_usable_identifier(""));
  assert!(!is_usable_identifier("self"));
}

#[test]
fn test_to_ident_escapes_keywords() {
  let cases = [
    ("type", "r#type"),
    ("match", "r#match"),
    ("gen", "r#gen"),
    ("name", "name"),
    ("Status", "Status"),
    ("_Value_7", "_Value_7"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_ident(input).to_string(), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_setter_name() {
  assert_eq!(setter_name("name"), "set_name");
  assert_eq!(setter_name("type"), "set_type");
  assert_eq!(setter_name("AccountName"), "set_AccountName");
}

#[test]
fn test_pluralize_class_name() {
  let cases = [
    ("Activity", "Activities"),
    ("Opportunity", "Opportunities"),
    ("Account", "Accountes"),
    ("Contact", "Contactes"),
    ("Invoice", "Invoices"),
    ("Quota", "Quotas"),
    ("Queue", "Queues"),
    ("Survey", "Surveys"),
    ("CATEGORY", "CATEGORIES"),
    ("new_entity", "new_entities"),
    ("_y", "_yes"),
  ];
  for (input, expected) in cases {
    assert_eq!(pluralize_class_name(input), expected, "failed for input {input:?}");
  }
}
