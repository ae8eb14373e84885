//! Customer repository contract.

use std::sync::Arc;

use tavern_core::{CustomerId, RepositoryResult};

use crate::customer::Customer;

/// The rules every customer store has to follow, independent of storage technology.
///
/// - `get` / `update` on an unknown id fail with `RepositoryError::NotFound`
/// - `add` on a known id fails with `RepositoryError::AlreadyExists`
pub trait CustomerRepository: Send + Sync {
    fn get(&self, id: CustomerId) -> RepositoryResult<Customer>;
    fn add(&self, customer: Customer) -> RepositoryResult<()>;
    fn update(&self, customer: Customer) -> RepositoryResult<()>;
}

impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    fn get(&self, id: CustomerId) -> RepositoryResult<Customer> {
        (**self).get(id)
    }

    fn add(&self, customer: Customer) -> RepositoryResult<()> {
        (**self).add(customer)
    }

    fn update(&self, customer: Customer) -> RepositoryResult<()> {
        (**self).update(customer)
    }
}
