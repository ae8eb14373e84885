//! Products domain module.
//!
//! The `Product` aggregate and the contract every product store fulfils.
//! Pure domain logic (no IO, no storage).

pub mod product;
pub mod repository;

pub use product::Product;
pub use repository::ProductRepository;
