use std::cell::Cell;

use crate::{
  metadata::{MetadataCache, MetadataSource, SchemaObject},
  tests::common::fixture_document,
};

struct CountingSource {
  calls: Cell<usize>,
}

impl MetadataSource for CountingSource {
  fn fetch(&self, logical_name: &str) -> Option<SchemaObject> {
    self.calls.set(self.calls.get() + 1);
    (logical_name == "contact").then(|| {
      SchemaObject::builder()
        .logical_name("contact")
        .display_name("Contact")
        .primary_id_attribute("contactid")
        .primary_name_attribute("fullname")
        .build()
    })
  }
}

#[test]
fn test_cache_reads_through_once_per_name() {
  let source = CountingSource { calls: Cell::new(0) };
  let mut cache = MetadataCache::new(&source);

  for _ in 0..3 {
    let resolved = cache.resolve("contact").map(|entity| entity.label_with_logical_name());
    assert_eq!(resolved.as_deref(), Some("Contact (contact)"));
  }
  assert_eq!(source.calls.get(), 1);
  assert_eq!(cache.fetches(), 1);
}

#[test]
fn test_cache_remembers_misses() {
  let source = CountingSource { calls: Cell::new(0) };
  let mut cache = MetadataCache::new(&source);

  assert!(cache.resolve("team").is_none());
  assert!(cache.resolve("team").is_none());
  assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_document_source_searches_referenced_entities() {
  let doc = fixture_document();
  let mut cache = MetadataCache::new(&doc);

  let cases = [
    ("account", Some("Account (account)")),
    ("contact", Some("Contact (contact)")),
    ("systemuser", Some("User (systemuser)")),
    ("team", None),
  ];
  for (name, expected) in cases {
    let label = cache.resolve(name).map(SchemaObject::label_with_logical_name);
    assert_eq!(label.as_deref(), expected, "failed for target {name:?}");
  }
  assert_eq!(cache.fetches(), 4);
}
