//! Product repository contract.

use std::sync::Arc;

use tavern_core::{ProductId, RepositoryResult};

use crate::product::Product;

/// The rules every product store has to follow.
///
/// Same semantics as the customer contract, plus listing and deletion.
/// `get_all` makes no ordering guarantee.
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: ProductId) -> RepositoryResult<Product>;
    fn get_all(&self) -> RepositoryResult<Vec<Product>>;
    fn add(&self, product: Product) -> RepositoryResult<()>;
    fn update(&self, product: Product) -> RepositoryResult<()>;
    fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn get(&self, id: ProductId) -> RepositoryResult<Product> {
        (**self).get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        (**self).get_all()
    }

    fn add(&self, product: Product) -> RepositoryResult<()> {
        (**self).add(product)
    }

    fn update(&self, product: Product) -> RepositoryResult<()> {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        (**self).delete(id)
    }
}
