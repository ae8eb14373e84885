//! `tavern-core` — domain foundation building blocks.
//!
//! Identifiers, the entity/aggregate traits, the entities shared
//! between aggregates, and the error model. No infrastructure concerns.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod item;
pub mod person;
pub mod transaction;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, RepositoryError, RepositoryResult};
pub use id::{CustomerId, ProductId};
pub use item::Item;
pub use person::Person;
pub use transaction::Transaction;
