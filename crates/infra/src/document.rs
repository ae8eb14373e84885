//! Storage document shapes.
//!
//! Documents are kept apart from the aggregates so a store's field layout can
//! change without touching the domain.

use serde::{Deserialize, Serialize};

use tavern_core::{CustomerId, DomainError};
use tavern_customers::Customer;

/// Stored shape of a customer: `{ id, name }`, id as a hyphenated UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDocument {
    pub id: String,
    pub name: String,
}

impl From<&Customer> for CustomerDocument {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
        }
    }
}

impl TryFrom<CustomerDocument> for Customer {
    type Error = DomainError;

    fn try_from(doc: CustomerDocument) -> Result<Self, Self::Error> {
        let id: CustomerId = doc.id.parse()?;
        Ok(Customer::rehydrate(id, doc.name))
    }
}
