use std::collections::HashSet;

/// Identifiers already taken within one entity's generation.
///
/// Seeded with the reserved member surface and the class name, then shared by the canonical and
/// the friendly pass in that order, so a friendly member can never reuse a canonical name.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameAllocator {
  claimed: HashSet<String>,
}

impl NameAllocator {
  pub(crate) fn with_reserved<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
    let mut allocator = Self::default();
    for name in reserved {
      allocator.reserve(name);
    }
    allocator
  }

  /// Marks `name` as taken, whether or not it already was.
  pub(crate) fn reserve(&mut self, name: &str) {
    self.claimed.insert(name.to_string());
  }

  /// Takes `name` if it is free. On conflict the index is left unchanged.
  pub(crate) fn try_claim(&mut self, name: &str) -> bool {
    if self.claimed.contains(name) {
      return false;
    }
    self.claimed.insert(name.to_string());
    true
  }

  /// Takes every name in `names` or none of them.
  pub(crate) fn try_claim_all(&mut self, names: &[&str]) -> bool {
    let distinct: HashSet<&str> = names.iter().copied().collect();
    if distinct.len() != names.len() || names.iter().any(|name| self.claimed.contains(*name)) {
      return false;
    }
    self.claimed.extend(names.iter().map(|name| (*name).to_string()));
    true
  }

  #[cfg(test)]
  pub(crate) fn is_claimed(&self, name: &str) -> bool {
    self.claimed.contains(name)
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.claimed.len()
  }
}
