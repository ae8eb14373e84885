//! Transaction: a payment between two customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::CustomerId;

/// An immutable record of money moving from one customer to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub from: CustomerId,
    pub to: CustomerId,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: f64, from: CustomerId, to: CustomerId, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            from,
            to,
            created_at,
        }
    }
}
