//! Order service configuration.
//!
//! Chooses the customer store. Products always live in memory, seeded by the
//! caller.

use serde::{Deserialize, Serialize};

use tavern_products::Product;

use crate::error::OrderError;
use crate::service::OrderServiceBuilder;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";

/// Where customers are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CustomerStoreConfig {
    #[default]
    Memory,
    Mongo { connection_string: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderServiceConfig {
    #[serde(default)]
    pub customer_store: CustomerStoreConfig,
}

impl OrderServiceConfig {
    /// Read `TAVERN_CUSTOMER_STORE` (`memory` | `mongo`) and `TAVERN_MONGO_URL`.
    ///
    /// Any other store name is an [`OrderError::Configuration`].
    pub fn from_env() -> Result<Self, OrderError> {
        let store = std::env::var("TAVERN_CUSTOMER_STORE").ok();
        let mongo_url = std::env::var("TAVERN_MONGO_URL").ok();
        Self::from_values(store.as_deref(), mongo_url)
    }

    fn from_values(store: Option<&str>, mongo_url: Option<String>) -> Result<Self, OrderError> {
        let customer_store = match store.map(str::trim) {
            None | Some("") | Some("memory") => CustomerStoreConfig::Memory,
            Some("mongo") => CustomerStoreConfig::Mongo {
                connection_string: mongo_url.unwrap_or_else(|| DEFAULT_MONGO_URL.to_string()),
            },
            Some(other) => {
                return Err(OrderError::Configuration(format!(
                    "unknown TAVERN_CUSTOMER_STORE {other:?} (expected \"memory\" or \"mongo\")"
                )));
            }
        };

        Ok(Self { customer_store })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder with the configured customer store and an in-memory catalog of `products`.
    pub fn into_builder(self, products: Vec<Product>) -> OrderServiceBuilder {
        let builder = match self.customer_store {
            CustomerStoreConfig::Memory => OrderServiceBuilder::default().with_memory_customer_repository(),
            CustomerStoreConfig::Mongo { connection_string } => {
                OrderServiceBuilder::default().with_mongo_customer_repository(connection_string)
            }
        };
        builder.with_memory_product_repository(products)
    }
}
