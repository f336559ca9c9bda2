//! Cart persistence across client restarts.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use navjyoti_core::Price;
use navjyoti_integration_tests::TestContext;
use navjyoti_storefront::store::keys;
use navjyoti_storefront::{Cart, KeyValueStore};

#[test]
fn test_cart_survives_restart() {
    let ctx = TestContext::new();

    let mut client = ctx.client();
    client.add_item("Kurta A", Price::from_units(500), 1).unwrap();
    client.add_item("Kurta A", Price::from_units(500), 2).unwrap();
    client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
    drop(client);

    let client = ctx.client();
    let items = client.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Kurta A");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(client.summary().grand_total, Price::from_units(1800));
    assert_eq!(client.badge().count, 4);
}

#[test]
fn test_cart_file_is_line_item_list() {
    let ctx = TestContext::new();
    let mut client = ctx.client();
    client.add_item("Jute Bag", Price::from_units(300), 2).unwrap();

    let raw = std::fs::read_to_string(ctx.data_dir().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "Jute Bag", "price": 300, "quantity": 2}])
    );
}

#[test]
fn test_reads_cart_written_elsewhere() {
    let ctx = TestContext::new();
    let mut store = ctx.store();
    store
        .set(
            keys::CART,
            r#"[{"name": "Silk Suit", "price": 1200, "quantity": 1}, {"name": "Coir Doormat", "price": 450.5, "quantity": 2}]"#,
        )
        .unwrap();

    let client = ctx.client();
    assert_eq!(client.cart().len(), 2);
    assert_eq!(
        client.summary().grand_total,
        Price::new("2101".parse().unwrap()).unwrap()
    );
}

#[test]
fn test_malformed_cart_file_starts_empty() {
    let ctx = TestContext::new();
    std::fs::write(ctx.data_dir().join("cart.json"), "{not json").unwrap();

    let mut client = ctx.client();
    assert!(client.cart().is_empty());

    // The next mutation overwrites the bad file
    client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
    let raw = std::fs::read_to_string(ctx.data_dir().join("cart.json")).unwrap();
    assert_eq!(Cart::from_json(&raw).unwrap(), *client.cart());
}

#[test]
fn test_clear_persists_empty_cart() {
    let ctx = TestContext::new();
    let mut client = ctx.client();
    client.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
    client.clear();
    drop(client);

    assert!(ctx.client().cart().is_empty());
    assert_eq!(ctx.store().get(keys::CART).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_set_quantity_zero_matches_remove() {
    let ctx = TestContext::new();
    let mut removed = ctx.client();
    removed.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
    removed.add_item("Silk Suit", Price::from_units(1200), 1).unwrap();
    removed.remove_item(0).unwrap();
    let via_remove = removed.cart().clone();
    removed.clear();

    let mut zeroed = ctx.client();
    zeroed.add_item("Jute Bag", Price::from_units(300), 1).unwrap();
    zeroed.add_item("Silk Suit", Price::from_units(1200), 1).unwrap();
    zeroed.set_quantity(0, 0).unwrap();

    assert_eq!(*zeroed.cart(), via_remove);
}
