
/// Strips whitespace so assertions do not depend on line breaking.
fn compact(code: &str) -> String {
  code.chars().filter(|c| !c.is_whitespace()).collect()
}

fn assert_fragments(code: &str, assertions: &[(&str, &str)]) {
  let haystack = compact(code);
  for (fragment, message) in assertions {
    assert!(haystack.contains(&compact(fragment)), "{message}\n--- code ---\n{code}");
  }
}

fn refute_fragments(code: &str, refutations: &[(&str, &str)]) {
  let haystack = compact(code);
  for (fragment, message) in refutations {
    assert!(!haystack.contains(&compact(fragment)), "{message}\n--- code ---\n{code}");
  }
}
