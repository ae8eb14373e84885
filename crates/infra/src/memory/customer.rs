use tavern_core::{CustomerId, RepositoryResult};
use tavern_customers::{Customer, CustomerRepository};

use super::store::InMemoryAggregateStore;

/// In-memory customer repository.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: InMemoryAggregateStore<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn get(&self, id: CustomerId) -> RepositoryResult<Customer> {
        self.customers.get(&id)
    }

    fn add(&self, customer: Customer) -> RepositoryResult<()> {
        let id = customer.id();
        self.customers.insert(customer)?;
        tracing::debug!(customer_id = %id, "customer added");
        Ok(())
    }

    fn update(&self, customer: Customer) -> RepositoryResult<()> {
        let id = customer.id();
        self.customers.replace(customer)?;
        tracing::debug!(customer_id = %id, "customer updated");
        Ok(())
    }
}
