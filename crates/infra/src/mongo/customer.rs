use mongodb::bson::doc;
use mongodb::options::{ClientOptions, FindOneOptions, IndexOptions};
use mongodb::sync::{Client, Collection, Database};
use mongodb::IndexModel;

use tavern_core::{AggregateRoot, CustomerId, RepositoryError, RepositoryResult};
use tavern_customers::{Customer, CustomerRepository};

use super::{is_duplicate_key, CUSTOMER_COLLECTION, DATABASE_NAME, OPERATION_TIMEOUT};
use crate::document::CustomerDocument;

/// Customer repository backed by a MongoDB collection.
///
/// Each customer is stored as a [`CustomerDocument`]. A unique index on `id`
/// lets the server reject duplicate adds.
#[derive(Debug, Clone)]
pub struct MongoCustomerRepository {
    customers: Collection<CustomerDocument>,
}

impl MongoCustomerRepository {
    /// Connect to `connection_string` and use the `ddd.customers` collection.
    ///
    /// Server selection and connection setup are both bounded by
    /// [`OPERATION_TIMEOUT`], so an unreachable server fails every request
    /// within that window.
    pub fn connect(connection_string: &str) -> RepositoryResult<Self> {
        let options = client_options(connection_string)?;
        let client = Client::with_options(options).map_err(RepositoryError::backend)?;
        let repo = Self::new(&client.database(DATABASE_NAME))?;
        tracing::info!(
            database = DATABASE_NAME,
            collection = CUSTOMER_COLLECTION,
            "connected customer repository to mongodb"
        );
        Ok(repo)
    }

    /// Use the customers collection of an already connected database.
    pub fn new(db: &Database) -> RepositoryResult<Self> {
        let customers = db.collection::<CustomerDocument>(CUSTOMER_COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        customers
            .create_index(index, None)
            .map_err(RepositoryError::backend)?;

        Ok(Self { customers })
    }
}

fn client_options(connection_string: &str) -> RepositoryResult<ClientOptions> {
    let mut options = ClientOptions::parse(connection_string).map_err(RepositoryError::backend)?;
    options.server_selection_timeout = Some(OPERATION_TIMEOUT);
    options.connect_timeout = Some(OPERATION_TIMEOUT);
    Ok(options)
}

impl CustomerRepository for MongoCustomerRepository {
    fn get(&self, id: CustomerId) -> RepositoryResult<Customer> {
        let options = FindOneOptions::builder().max_time(OPERATION_TIMEOUT).build();
        let found = self
            .customers
            .find_one(doc! { "id": id.to_string() }, options)
            .map_err(RepositoryError::backend)?;

        match found {
            Some(document) => Customer::try_from(document).map_err(RepositoryError::backend),
            None => Err(RepositoryError::not_found(Customer::TYPE, id)),
        }
    }

    fn add(&self, customer: Customer) -> RepositoryResult<()> {
        let document = CustomerDocument::from(&customer);
        match self.customers.insert_one(&document, None) {
            Ok(_) => {
                tracing::debug!(customer_id = %customer.id(), "customer inserted");
                Ok(())
            }
            Err(e) if is_duplicate_key(&e) => {
                Err(RepositoryError::already_exists(Customer::TYPE, customer.id()))
            }
            Err(e) => Err(RepositoryError::backend(e)),
        }
    }

    fn update(&self, customer: Customer) -> RepositoryResult<()> {
        let document = CustomerDocument::from(&customer);
        let result = self
            .customers
            .replace_one(doc! { "id": document.id.as_str() }, &document, None)
            .map_err(RepositoryError::backend)?;

        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(Customer::TYPE, customer.id()));
        }
        tracing::debug!(customer_id = %customer.id(), "customer replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    const LOCAL_MONGO: &str = "mongodb://localhost:27017";

    // Nothing listens on port 1.
    const UNREACHABLE_MONGO: &str = "mongodb://127.0.0.1:1";

    #[test]
    fn client_options_bound_server_selection_and_connect() {
        let options = client_options(UNREACHABLE_MONGO).unwrap();
        assert_eq!(options.server_selection_timeout, Some(OPERATION_TIMEOUT));
        assert_eq!(options.connect_timeout, Some(OPERATION_TIMEOUT));
    }

    #[test]
    fn client_options_reject_malformed_uri() {
        assert!(client_options("not a connection string").is_err());
    }

    #[test]
    fn unreachable_server_fails_within_the_operation_timeout() {
        let started = Instant::now();
        let result = MongoCustomerRepository::connect(UNREACHABLE_MONGO);
        let elapsed = started.elapsed();

        assert!(result.is_err());
        assert!(
            elapsed < OPERATION_TIMEOUT + std::time::Duration::from_secs(5),
            "connect took {elapsed:?}"
        );
    }

    #[test]
    #[ignore = "requires a MongoDB server on localhost:27017"]
    fn round_trip_against_live_server() {
        let repo = MongoCustomerRepository::connect(LOCAL_MONGO).unwrap();
        let mut customer = Customer::new("Percy").unwrap();

        repo.add(customer.clone()).unwrap();
        assert!(repo.add(customer.clone()).unwrap_err().is_already_exists());
        assert_eq!(repo.get(customer.id()).unwrap().name(), "Percy");

        customer.set_name("George");
        repo.update(customer.clone()).unwrap();
        assert_eq!(repo.get(customer.id()).unwrap().name(), "George");

        let stranger = Customer::new("Stranger").unwrap();
        assert!(repo.get(stranger.id()).unwrap_err().is_not_found());
        assert!(repo.update(stranger).unwrap_err().is_not_found());
    }
}
