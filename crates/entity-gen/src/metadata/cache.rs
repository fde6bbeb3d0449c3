use std::collections::HashMap;

use super::SchemaObject;

/// Supplies entity metadata on demand, e.g. for documenting lookup targets.
pub trait MetadataSource {
  /// Returns `None` when the entity cannot be resolved.
  fn fetch(&self, logical_name: &str) -> Option<SchemaObject>;
}

/// Read-through cache over a [`MetadataSource`].
///
/// Entries, misses included, are populated on first request and kept for the cache's lifetime.
/// One cache serves a whole generation run and is lent to each entity's builder in turn.
pub struct MetadataCache<'a> {
  source: &'a dyn MetadataSource,
  entries: HashMap<String, Option<SchemaObject>>,
  fetches: usize,
}

impl<'a> MetadataCache<'a> {
  pub fn new(source: &'a dyn MetadataSource) -> Self {
    Self {
      source,
      entries: HashMap::new(),
      fetches: 0,
    }
  }

  pub fn resolve(&mut self, logical_name: &str) -> Option<&SchemaObject> {
    if !self.entries.contains_key(logical_name) {
      self.fetches += 1;
      let fetched = self.source.fetch(logical_name);
      self.entries.insert(logical_name.to_string(), fetched);
    }
    self.entries.get(logical_name).and_then(Option::as_ref)
  }

  /// Number of times the underlying source was consulted.
  pub const fn fetches(&self) -> usize {
    self.fetches
  }
}
