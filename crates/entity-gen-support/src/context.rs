use std::{fmt, marker::PhantomData, sync::Arc};

use crate::{abstract_entity::AbstractEntity, entity::Entity, error::ServiceError};

/// Connection to the data platform.
pub trait OrganizationService: Send + Sync {
  /// Returns every record of the entity named `logical_name`.
  fn retrieve_multiple(&self, logical_name: &str) -> Result<Vec<Entity>, ServiceError>;
}

/// Base of the generated `ServiceContext` aggregate.
#[derive(Clone)]
pub struct ServiceContext {
  service: Arc<dyn OrganizationService>,
}

impl fmt::Debug for ServiceContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ServiceContext").finish_non_exhaustive()
  }
}

impl ServiceContext {
  #[must_use]
  pub fn new(service: Arc<dyn OrganizationService>) -> Self {
    Self { service }
  }

  #[must_use]
  pub fn service(&self) -> &Arc<dyn OrganizationService> {
    &self.service
  }

  #[must_use]
  pub fn create_query<T: AbstractEntity>(&self) -> Query<T> {
    Query::new(Arc::clone(&self.service))
  }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Lazily evaluated, read-only collection of typed records.
///
/// Nothing is fetched until [`Query::fetch`] or [`Query::first`] runs. Filters apply in the order they
/// were added, then `take` truncates.
pub struct Query<T> {
  service: Arc<dyn OrganizationService>,
  predicates: Vec<Predicate<T>>,
  limit: Option<usize>,
  _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Query<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Query")
      .field("predicates", &self.predicates.len())
      .field("limit", &self.limit)
      .finish_non_exhaustive()
  }
}

impl<T: AbstractEntity> Query<T> {
  fn new(service: Arc<dyn OrganizationService>) -> Self {
    Self {
      service,
      predicates: vec![],
      limit: None,
      _marker: PhantomData,
    }
  }

  #[must_use]
  pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
    self.predicates.push(Box::new(predicate));
    self
  }

  #[must_use]
  pub const fn take(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn fetch(&self) -> Result<Vec<T>, ServiceError> {
    let records = self.service.retrieve_multiple(T::ENTITY_LOGICAL_NAME)?;
    let mut matched = Vec::new();

    for record in records {
      if self.limit.is_some_and(|limit| matched.len() >= limit) {
        break;
      }
      if record.logical_name() != T::ENTITY_LOGICAL_NAME {
        return Err(ServiceError::LogicalNameMismatch {
          expected: T::ENTITY_LOGICAL_NAME.to_string(),
          actual: record.logical_name().to_string(),
        });
      }

      let typed = T::from(record);
      if self.predicates.iter().all(|predicate| predicate(&typed)) {
        matched.push(typed);
      }
    }

    Ok(matched)
  }

  pub fn first(&self) -> Result<Option<T>, ServiceError> {
    Ok(self.fetch()?.into_iter().next())
  }
}
