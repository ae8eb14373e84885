use tavern_core::{ProductId, RepositoryResult};
use tavern_products::{Product, ProductRepository};

use super::store::InMemoryAggregateStore;

/// In-memory product repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: InMemoryAggregateStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-filled with `products`.
    ///
    /// Fails on the first product whose id is already present.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> RepositoryResult<Self> {
        let repo = Self::new();
        for product in products {
            repo.add(product)?;
        }
        Ok(repo)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get(&self, id: ProductId) -> RepositoryResult<Product> {
        self.products.get(&id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        self.products.list()
    }

    fn add(&self, product: Product) -> RepositoryResult<()> {
        let id = product.id();
        self.products.insert(product)?;
        tracing::debug!(product_id = %id, "product added");
        Ok(())
    }

    fn update(&self, product: Product) -> RepositoryResult<()> {
        let id = product.id();
        self.products.replace(product)?;
        tracing::debug!(product_id = %id, "product updated");
        Ok(())
    }

    fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        self.products.remove(&id)?;
        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }
}
