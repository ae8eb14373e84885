use tavern_core::{AggregateRoot, CustomerId, DomainError, Item, Person, Transaction};

/// Aggregate root: Customer.
///
/// The root entity is a [`Person`]; its id is the customer's id. A customer can
/// hold many items and perform many transactions, though nothing in the order
/// workflow populates either yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    person: Person,
    products: Vec<Item>,
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Create a new customer with a freshly generated id.
    ///
    /// Fails with [`DomainError::InvalidName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName);
        }

        Ok(Self::rehydrate(CustomerId::new(), name))
    }

    /// Rebuild a customer from stored state (no validation).
    pub fn rehydrate(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            person: Person::new(id, name),
            products: Vec::new(),
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.person.id
    }

    pub fn set_id(&mut self, id: CustomerId) {
        self.person.id = id;
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn products(&self) -> &[Item] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    type Root = Person;

    const TYPE: &'static str = "customer";

    fn root(&self) -> &Person {
        &self.person
    }
}
