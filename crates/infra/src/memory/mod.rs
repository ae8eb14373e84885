//! In-process repositories for tests/dev.

pub mod customer;
pub mod product;
pub mod store;

pub use customer::InMemoryCustomerRepository;
pub use product::InMemoryProductRepository;
pub use store::InMemoryAggregateStore;
