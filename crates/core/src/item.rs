//! Item: the root entity of a product.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::ProductId;

/// Something the tavern can sell or a customer can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(id: ProductId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Item {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
