//! Runtime support for bindings produced by `entity-gen`.
//!
//! Generated entity structs wrap an [`Entity`] and implement [`AbstractEntity`]; the generated
//! `ServiceContext` aggregate wraps [`context::ServiceContext`] and hands out typed [`Query`]
//! collections.

mod abstract_entity;
pub mod context;
mod entity;
mod error;
mod memory;
mod types;
mod value;

pub use abstract_entity::AbstractEntity;
pub use chrono::{DateTime, Utc};
pub use context::{OrganizationService, Query};
pub use entity::Entity;
pub use error::ServiceError;
pub use memory::InMemoryOrganizationService;
pub use rust_decimal::Decimal;
pub use types::{BooleanManagedProperty, Currency, EntityReference, Lookup, Money, OptionSetValue};
pub use uuid::Uuid;
pub use value::{FromValue, Value};

/// Marks an attribute the generator could not bind. Expands to nothing; the message stays in the
/// generated source so readers can see why the member is missing.
#[macro_export]
macro_rules! unsupported_attribute {
  ($message:literal) => {};
}

pub mod prelude {
  pub use crate::{
    AbstractEntity, BooleanManagedProperty, Currency, DateTime, Decimal, Entity, EntityReference, Lookup, Money,
    OptionSetValue, OrganizationService, Query, Utc, Uuid,
  };
}
