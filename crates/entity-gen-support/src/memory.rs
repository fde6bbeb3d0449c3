use std::sync::RwLock;

use indexmap::IndexMap;

use crate::{context::OrganizationService, entity::Entity, error::ServiceError};

/// An [`OrganizationService`] backed by records held in memory, keyed by entity logical name.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationService {
  records: RwLock<IndexMap<String, Vec<Entity>>>,
}

impl InMemoryOrganizationService {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&self, entity: Entity) -> Result<(), ServiceError> {
    let logical_name = entity.logical_name().to_string();
    let mut records = self.records.write().map_err(|err| ServiceError::Retrieve {
      logical_name: logical_name.clone(),
      message: err.to_string(),
    })?;
    records.entry(logical_name).or_default().push(entity);
    Ok(())
  }
}

impl OrganizationService for InMemoryOrganizationService {
  fn retrieve_multiple(&self, logical_name: &str) -> Result<Vec<Entity>, ServiceError> {
    let records = self.records.read().map_err(|err| ServiceError::Retrieve {
      logical_name: logical_name.to_string(),
      message: err.to_string(),
    })?;
    Ok(records.get(logical_name).cloned().unwrap_or_default())
  }
}
