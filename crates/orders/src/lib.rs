//! Order workflow.
//!
//! `OrderService` composes a customer repository and a product repository and
//! prices orders against them. `Tavern` is the front of house that bills them.

pub mod config;
pub mod error;
pub mod service;
pub mod tavern;

pub use config::{CustomerStoreConfig, OrderServiceConfig};
pub use error::OrderError;
pub use service::{OrderOption, OrderService, OrderServiceBuilder};
pub use tavern::Tavern;
