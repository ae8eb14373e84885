//! Person: the root entity of a customer.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::CustomerId;

/// A person known to the tavern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: CustomerId,
    pub name: String,
}

impl Person {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Person {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
