//! MongoDB adapters (sync driver API).

use std::time::Duration;

pub mod customer;

pub use customer::MongoCustomerRepository;

/// Logical database holding every tavern collection.
pub const DATABASE_NAME: &str = "ddd";

/// Collection holding [`crate::CustomerDocument`]s.
pub const CUSTOMER_COLLECTION: &str = "customers";

/// Upper bound on server selection, connection setup and server-side read time.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}
