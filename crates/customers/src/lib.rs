//! Customers domain module.
//!
//! The `Customer` aggregate and the contract every customer store fulfils.
//! Pure domain logic (no IO, no storage).

pub mod customer;
pub mod repository;

pub use customer::Customer;
pub use repository::CustomerRepository;
