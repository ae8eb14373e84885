//! Infrastructure layer: repository implementations.

pub mod document;
pub mod memory;

#[cfg(feature = "mongo")]
pub mod mongo;

pub use document::CustomerDocument;
pub use memory::{InMemoryAggregateStore, InMemoryCustomerRepository, InMemoryProductRepository};

#[cfg(feature = "mongo")]
pub use mongo::MongoCustomerRepository;
