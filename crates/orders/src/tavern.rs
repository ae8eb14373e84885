use tavern_core::{CustomerId, ProductId};

use crate::error::OrderError;
use crate::service::OrderService;

/// Front of house: takes orders and bills customers for them.
#[derive(Clone)]
pub struct Tavern {
    orders: OrderService,
}

impl Tavern {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// Place an order and return the bill.
    pub fn order(&self, customer: CustomerId, products: &[ProductId]) -> Result<f64, OrderError> {
        let bill = self.orders.create_order(customer, products)?;
        tracing::info!(customer_id = %customer, bill = %format!("{bill:.2}"), "bill the customer");
        Ok(bill)
    }
}
