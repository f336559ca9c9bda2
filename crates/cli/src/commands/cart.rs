//! Cart commands.

use rust_decimal::Decimal;

use navjyoti_core::Price;
use navjyoti_storefront::cart::QuantityChange;
use navjyoti_storefront::{AppError, KeyValueStore, StoreClient};

use super::CommandError;

/// Add units of a product.
///
/// # Errors
///
/// Returns an error for a negative price or a zero quantity.
pub fn add<S: KeyValueStore>(
    client: &mut StoreClient<S>,
    name: &str,
    price: Decimal,
    quantity: u32,
) -> Result<(), CommandError> {
    let unit_price = Price::new(price).map_err(AppError::from)?;
    let badge = client.add_item(name, unit_price, quantity)?;
    println!("Cart: {} item(s)", badge.count);
    Ok(())
}

/// Remove the line at `index`.
///
/// # Errors
///
/// Returns an error if there is no such line.
pub fn remove<S: KeyValueStore>(client: &mut StoreClient<S>, index: usize) -> Result<(), CommandError> {
    let removed = client.remove_item(index)?;
    println!("Removed {} x{}", removed.name, removed.quantity);
    Ok(())
}

/// Overwrite the quantity of the line at `index`.
///
/// # Errors
///
/// Returns an error if there is no such line.
pub fn set<S: KeyValueStore>(
    client: &mut StoreClient<S>,
    index: usize,
    quantity: i64,
) -> Result<(), CommandError> {
    match client.set_quantity(index, quantity)? {
        QuantityChange::Updated => show(client),
        QuantityChange::Removed(item) => println!("Removed {}", item.name),
    }
    Ok(())
}

/// Empty the cart.
pub fn clear<S: KeyValueStore>(client: &mut StoreClient<S>) {
    client.clear();
}

/// Print every line with its total, then the grand total.
pub fn show<S: KeyValueStore>(client: &StoreClient<S>) {
    let summary = client.summary();
    if summary.lines.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for line in &summary.lines {
        println!(
            "{:>3}  {:<32} {:>10} x {:<4} {:>10}",
            line.index,
            line.name,
            line.unit_price.to_string(),
            line.quantity,
            line.line_total.to_string()
        );
    }
    println!(
        "{} line(s), {} item(s), total {}",
        summary.item_count, summary.total_quantity, summary.grand_total
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use navjyoti_storefront::{MemoryStore, TimingConfig};

    use super::*;

    fn client() -> StoreClient<MemoryStore> {
        StoreClient::new(MemoryStore::new(), TimingConfig::default())
    }

    #[test]
    fn test_add_then_set() {
        let mut client = client();
        add(&mut client, "Cotton Kurta", Decimal::new(500, 0), 2).unwrap();
        set(&mut client, 0, 5).unwrap();
        assert_eq!(client.summary().grand_total, Price::from_units(2500));

        set(&mut client, 0, -1).unwrap();
        assert!(client.cart().is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut client = client();
        let err = add(&mut client, "Jute Bag", Decimal::new(-300, 0), 1).unwrap_err();
        assert!(matches!(err, CommandError::App(AppError::Price(_))));
        assert!(client.cart().is_empty());
    }

    #[test]
    fn test_remove_missing_line() {
        let mut client = client();
        assert!(remove(&mut client, 0).is_err());
    }
}
