use tavern_core::{AggregateRoot, DomainError, Item, ProductId};

/// Aggregate root: Product.
///
/// The root entity is an [`Item`]; its id is the product's id. Price is not
/// validated and may be zero or negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    item: Item,
    price: f64,
    quantity: u32,
}

impl Product {
    /// Create a new product with a freshly generated id.
    ///
    /// Fails with [`DomainError::MissingValues`] when `name` or `description`
    /// is empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() || description.is_empty() {
            return Err(DomainError::MissingValues);
        }

        Ok(Self {
            item: Item::new(ProductId::new(), name, description),
            price,
            quantity: 0,
        })
    }

    pub fn id(&self) -> ProductId {
        self.item.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Quantity on hand. Nothing restocks products yet, so this stays 0.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    type Root = Item;

    const TYPE: &'static str = "product";

    fn root(&self) -> &Item {
        &self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_keeps_values() {
        let product = Product::new("Beer", "Healthy Beverage", 1.99).unwrap();
        assert_eq!(product.name(), "Beer");
        assert_eq!(product.description(), "Healthy Beverage");
        assert_eq!(product.price(), 1.99);
        assert_eq!(product.quantity(), 0);
        assert_eq!(product.item().id, product.id());
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new("", "Healthy Beverage", 1.0).unwrap_err();
        assert_eq!(err, DomainError::MissingValues);
    }

    #[test]
    fn new_product_rejects_empty_description() {
        let err = Product::new("Beer", "", 1.0).unwrap_err();
        assert_eq!(err, DomainError::MissingValues);
    }

    #[test]
    fn price_is_not_validated() {
        assert_eq!(Product::new("Tab", "On the house", 0.0).unwrap().price(), 0.0);
        assert_eq!(Product::new("Refund", "Credit", -2.5).unwrap().price(), -2.5);
    }

    #[test]
    fn set_price_keeps_identity() {
        let mut product = Product::new("Wine", "Healthy Snacks", 0.99).unwrap();
        let id = product.id();

        product.set_price(4.5);

        assert_eq!(product.id(), id);
        assert_eq!(product.price(), 4.5);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an empty name or description always fails, whatever the price.
            #[test]
            fn empty_fields_always_fail(
                name in "[A-Za-z]{0,8}",
                description in "[A-Za-z]{0,8}",
                price in proptest::num::f64::ANY,
            ) {
                let result = Product::new(name.clone(), description.clone(), price);
                if name.is_empty() || description.is_empty() {
                    prop_assert_eq!(result.unwrap_err(), DomainError::MissingValues);
                } else {
                    prop_assert!(result.is_ok());
                }
            }

            /// Property: valid products get distinct ids.
            #[test]
            fn ids_are_unique(name in "[A-Za-z]{1,16}", price in -100.0f64..100.0) {
                let a = Product::new(name.clone(), "desc", price).unwrap();
                let b = Product::new(name, "desc", price).unwrap();
                prop_assert_ne!(a.id(), b.id());
            }
        }
    }
}
