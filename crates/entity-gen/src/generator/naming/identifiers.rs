use std::{collections::HashSet, sync::LazyLock};

use proc_macro2::{Ident, Span};
use regex::Regex;

/// Words that need the `r#` prefix to be used as identifiers.
static RUST_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

/// Words that cannot be identifiers at all, not even as raw identifiers.
static UNUSABLE_IDENTIFIERS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["_", "self", "Self", "super", "crate"].into_iter().collect());

static NON_IDENTIFIER_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\P{XID_Continue}").unwrap());
static IDENTIFIER_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{XID_Start}_]").unwrap());

/// Turns a free-text label into a bare identifier.
///
/// Drops whitespace and every character that cannot continue an identifier. Letters and digits of
/// any script are kept as they are, and case is preserved. A result that cannot start an
/// identifier (a leading digit, say) gets a `_` prefix.
///
/// `None` stays `None`; a label that collapses to nothing becomes `Some("")`.
pub(crate) fn normalize(label: Option<&str>) -> Option<String> {
  let label = label?;
  let mut ident = NON_IDENTIFIER_CHARS_RE.replace_all(label, "").into_owned();
  if !ident.is_empty() && !IDENTIFIER_START_RE.is_match(&ident) {
    ident.insert(0, '_');
  }
  Some(ident)
}

/// Normalizes `label` into a name that can always be emitted.
///
/// Unusable names such as `self` take a trailing `_`; a label without a single identifier character
/// becomes `fallback`.
pub(crate) fn normalize_or(label: &str, fallback: &str) -> String {
  let name = normalize(Some(label)).unwrap_or_default();
  if name.is_empty() {
    fallback.to_string()
  } else if is_usable_identifier(&name) {
    name
  } else {
    format!("{name}_")
  }
}

/// Normalizes `label` and keeps the result only if it can be emitted as an identifier.
pub(crate) fn normalize_usable(label: Option<&str>) -> Option<String> {
  normalize(label).filter(|name| is_usable_identifier(name))
}

pub(crate) fn is_usable_identifier(name: &str) -> bool {
  !name.is_empty() && !UNUSABLE_IDENTIFIERS.contains(name)
}

pub(crate) fn is_keyword(name: &str) -> bool {
  RUST_KEYWORDS.contains(name)
}

/// Builds the token for an already normalized, usable name, escaping keywords as raw identifiers.
pub(crate) fn to_ident(name: &str) -> Ident {
  if is_keyword(name) {
    Ident::new_raw(name, Span::call_site())
  } else {
    Ident::new(name, Span::call_site())
  }
}

/// Name of the setter paired with the getter `name`.
pub(crate) fn setter_name(name: &str) -> String {
  format!("set_{name}")
}

/// Collection name for a class without a collection label.
///
/// A trailing vowel, or a `y` after a vowel, takes `s`. A `y` after a consonant becomes `ies`.
/// Anything else takes `es`.
pub(crate) fn pluralize_class_name(class_name: &str) -> String {
  let mut chars = class_name.chars().rev();
  let last = chars.next();
  let before_last = chars.next();

  match (last, before_last) {
    (Some(c), _) if is_vowel(c) => format!("{class_name}s"),
    (Some('y' | 'Y'), Some(p)) if is_vowel(p) => format!("{class_name}s"),
    (Some(c @ ('y' | 'Y')), Some(p)) if p.is_ascii_alphabetic() => {
      let stem = &class_name[..class_name.len() - 1];
      let suffix = if c == 'Y' { "IES" } else { "ies" };
      format!("{stem}{suffix}")
    }
    _ => format!("{class_name}es"),
  }
}

fn is_vowel(c: char) -> bool {
  matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
