use anyhow::Context;

use tavern_orders::{OrderServiceConfig, Tavern};
use tavern_products::Product;

fn menu() -> anyhow::Result<Vec<Product>> {
    Ok(vec![
        Product::new("Beer", "Healthy Beverage", 1.99)?,
        Product::new("Peanuts", "Healthy Snacks", 0.99)?,
        Product::new("Wine", "Healthy Snacks", 0.99)?,
    ])
}

fn main() -> anyhow::Result<()> {
    tavern_observability::init();

    let config = OrderServiceConfig::from_env().context("invalid tavern configuration")?;
    tracing::info!(customer_store = ?config.customer_store, "starting tavern");

    let products = menu()?;
    let beer = products.first().context("menu is empty")?.id();

    let orders = config
        .into_builder(products)
        .build()
        .context("failed to assemble order service")?;
    let tavern = Tavern::new(orders);

    let name = std::env::args().nth(1).unwrap_or_else(|| "Percy".to_string());
    let customer = tavern
        .orders()
        .add_customer(&name)
        .with_context(|| format!("failed to add customer {name:?}"))?;

    let bill = tavern
        .order(customer, &[beer])
        .context("failed to place order")?;
    tracing::info!(customer = %name, bill, "order served");

    Ok(())
}
