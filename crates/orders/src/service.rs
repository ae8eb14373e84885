use std::sync::Arc;

use tavern_core::{CustomerId, ProductId};
use tavern_customers::{Customer, CustomerRepository};
use tavern_infra::{InMemoryCustomerRepository, InMemoryProductRepository};
use tavern_products::{Product, ProductRepository};

use crate::error::OrderError;

/// One step in assembling an [`OrderService`].
///
/// Options are applied strictly in the order given. A later option for the
/// same repository replaces an earlier one.
pub enum OrderOption {
    /// Fresh in-memory customer repository.
    MemoryCustomers,
    /// MongoDB customer repository at the given connection string.
    MongoCustomers(String),
    /// Caller-provided customer repository.
    Customers(Arc<dyn CustomerRepository>),
    /// In-memory product repository seeded with these products.
    MemoryProducts(Vec<Product>),
    /// Caller-provided product repository.
    Products(Arc<dyn ProductRepository>),
}

#[derive(Default)]
struct Wiring {
    customers: Option<Arc<dyn CustomerRepository>>,
    products: Option<Arc<dyn ProductRepository>>,
}

impl OrderOption {
    fn apply(self, wiring: &mut Wiring) -> Result<(), OrderError> {
        match self {
            OrderOption::MemoryCustomers => {
                wiring.customers = Some(Arc::new(InMemoryCustomerRepository::new()));
            }
            OrderOption::MongoCustomers(connection_string) => {
                wiring.customers = Some(connect_mongo(&connection_string)?);
            }
            OrderOption::Customers(repo) => {
                wiring.customers = Some(repo);
            }
            OrderOption::MemoryProducts(products) => {
                let repo = InMemoryProductRepository::with_products(products)?;
                wiring.products = Some(Arc::new(repo));
            }
            OrderOption::Products(repo) => {
                wiring.products = Some(repo);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "mongo")]
fn connect_mongo(connection_string: &str) -> Result<Arc<dyn CustomerRepository>, OrderError> {
    let repo = tavern_infra::MongoCustomerRepository::connect(connection_string)?;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "mongo"))]
fn connect_mongo(_connection_string: &str) -> Result<Arc<dyn CustomerRepository>, OrderError> {
    Err(OrderError::Configuration(
        "mongo customer repository requested but the `mongo` feature is not enabled".to_string(),
    ))
}

/// Prices orders against a customer repository and a product repository.
#[derive(Clone)]
pub struct OrderService {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderService {
    /// Apply `options` in order and validate the result.
    ///
    /// The first failing option aborts construction. Both repositories must be
    /// configured once every option has been applied.
    pub fn new(options: impl IntoIterator<Item = OrderOption>) -> Result<Self, OrderError> {
        let mut wiring = Wiring::default();
        for option in options {
            option.apply(&mut wiring)?;
        }

        let customers = wiring
            .customers
            .ok_or(OrderError::MissingRepository("customer"))?;
        let products = wiring
            .products
            .ok_or(OrderError::MissingRepository("product"))?;

        Ok(Self {
            customers,
            products,
        })
    }

    pub fn builder() -> OrderServiceBuilder {
        OrderServiceBuilder::default()
    }

    pub fn customers(&self) -> &Arc<dyn CustomerRepository> {
        &self.customers
    }

    pub fn products(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    /// Total price of `product_ids` ordered by `customer_id`.
    ///
    /// The customer is looked up first; an unknown customer fails before any
    /// product is read. Nothing is written to either repository.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<f64, OrderError> {
        let customer = self.customers.get(customer_id)?;

        let mut total = 0.0;
        for id in product_ids {
            let product = self.products.get(*id)?;
            total += product.price();
        }

        tracing::info!(
            customer_id = %customer.id(),
            products = product_ids.len(),
            total,
            "customer placed an order"
        );
        Ok(total)
    }

    /// Register a new customer called `name` and return its id.
    pub fn add_customer(&self, name: &str) -> Result<CustomerId, OrderError> {
        let customer = Customer::new(name)?;
        let id = customer.id();
        self.customers.add(customer)?;
        Ok(id)
    }
}

/// Collects [`OrderOption`]s for [`OrderService::new`].
#[derive(Default)]
pub struct OrderServiceBuilder {
    options: Vec<OrderOption>,
}

impl OrderServiceBuilder {
    pub fn option(mut self, option: OrderOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_memory_customer_repository(self) -> Self {
        self.option(OrderOption::MemoryCustomers)
    }

    pub fn with_mongo_customer_repository(self, connection_string: impl Into<String>) -> Self {
        self.option(OrderOption::MongoCustomers(connection_string.into()))
    }

    pub fn with_customer_repository(self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.option(OrderOption::Customers(repo))
    }

    pub fn with_memory_product_repository(self, products: Vec<Product>) -> Self {
        self.option(OrderOption::MemoryProducts(products))
    }

    pub fn with_product_repository(self, repo: Arc<dyn ProductRepository>) -> Self {
        self.option(OrderOption::Products(repo))
    }

    pub fn build(self) -> Result<OrderService, OrderError> {
        OrderService::new(self.options)
    }
}
