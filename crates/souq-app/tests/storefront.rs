//! End-to-end storefront flows.
//!
//! These tests drive the storefront the way the page does: load a
//! dataset, search, mutate the cart, switch datasets, and observe the
//! emitted state changes.

use std::cell::RefCell;
use std::rc::Rc;

use souq_app::{CartRetention, LoadOutcome, StateChange, Storefront};
use souq_core::{Price, Product, ProductId, StockStatus};
use souq_data::{Dataset, SourceError, StaticSource};

fn core_products() -> Vec<Product> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Mug", "description": "Stoneware mug", "price": 10,
             "image": "mug.webp", "stock": "in_stock"},
            {"id": 2, "name": "Cup", "description": "Porcelain cup", "price": 5,
             "image": "cup.webp", "stock": "low_stock"},
            {"id": 3, "name": "Blue Shirt", "description": "Breathable cotton",
             "price": 49.5, "image": "shirt.webp", "stock": "not_available"}
        ]"#,
    )
    .unwrap()
}

fn seasonal_products() -> Vec<Product> {
    serde_json::from_str(
        r#"[
            {"id": 2, "name": "Cup", "description": "Porcelain cup", "price": 5,
             "image": "cup.webp", "stock": "in_stock"},
            {"id": 9, "name": "Lantern", "description": "Ramadan lantern", "price": 30,
             "image": "lantern.webp", "stock": "in_stock"}
        ]"#,
    )
    .unwrap()
}

fn loaded_shop() -> Storefront {
    let mut shop = Storefront::new();
    let ticket = shop.begin_load(Dataset::Core);
    let outcome = shop.apply_load(ticket, Ok(core_products()));
    assert_eq!(outcome, LoadOutcome::Applied { products: 3 });
    shop
}

fn subscribe_events(shop: &mut Storefront) -> Rc<RefCell<Vec<StateChange>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    shop.subscribe(move |change| sink.borrow_mut().push(change.clone()));
    events
}

#[test]
fn test_repeated_adds_accumulate_into_one_entry() {
    let mut shop = loaded_shop();

    assert_eq!(shop.add_to_cart(ProductId::new(1), 3), 3);
    assert_eq!(shop.add_to_cart(ProductId::new(1), 2), 5);

    let summary = shop.cart_summary();
    assert_eq!(summary.item_count, 5);
    assert_eq!(summary.total, Price::from_decimal(50.0));
    assert_eq!(shop.cart().len(), 1);
    assert_eq!(shop.cart_total_label(), "AED 50.00");
}

#[test]
fn test_clear_cart_resets_summary() {
    let mut shop = loaded_shop();
    shop.add_to_cart(ProductId::new(1), 3);
    shop.add_to_cart(ProductId::new(2), 1);

    shop.clear_cart();

    let summary = shop.cart_summary();
    assert_eq!(summary.item_count, 0);
    assert_eq!(summary.total, Price::ZERO);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.cart_total_label(), "AED 0.00");
}

#[test]
fn test_set_quantity_clamps_to_ceiling() {
    let mut shop = loaded_shop();
    shop.add_to_cart(ProductId::new(1), 1);

    assert_eq!(shop.set_cart_quantity(ProductId::new(1), 150), 99);
    assert_eq!(shop.cart().quantity(ProductId::new(1)), 99);
}

#[test]
fn test_quantity_input_falls_back_to_one() {
    let mut shop = loaded_shop();
    shop.add_to_cart(ProductId::new(1), 5);

    assert_eq!(shop.set_cart_quantity_input(ProductId::new(1), "abc"), 1);
    assert_eq!(shop.set_cart_quantity_input(ProductId::new(1), ""), 1);
    assert_eq!(shop.set_cart_quantity_input(ProductId::new(1), " 42 "), 42);
}

#[test]
fn test_search_filters_name_and_description() {
    let mut shop = loaded_shop();

    shop.search("shirt");
    let names: Vec<&str> = shop.catalog().filtered().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Blue Shirt"]);

    shop.search("porcelain");
    let names: Vec<&str> = shop.catalog().filtered().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cup"]);

    shop.search("");
    assert_eq!(shop.catalog().filtered_len(), 3);
}

#[test]
fn test_search_does_not_touch_cart_resolution() {
    let mut shop = loaded_shop();
    shop.add_to_cart(ProductId::new(1), 2);

    // Hide the mug behind a non-matching query; the total still resolves.
    shop.search("shirt");
    let summary = shop.cart_summary();
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.total, Price::from_decimal(20.0));
}

#[test]
fn test_stranded_entries_are_skipped_then_revive() {
    let mut shop = loaded_shop();
    shop.add_to_cart(ProductId::new(1), 2);
    shop.add_to_cart(ProductId::new(2), 1);

    // The seasonal dataset has no product 1.
    let ticket = shop.begin_load(Dataset::Seasonal);
    shop.apply_load(ticket, Ok(seasonal_products()));

    let summary = shop.cart_summary();
    assert_eq!(summary.item_count, 1);
    assert_eq!(summary.total, Price::from_decimal(5.0));
    // The stranded entry is retained, just invisible to the summary.
    assert_eq!(shop.cart().quantity(ProductId::new(1)), 2);

    // Switching back revives it.
    let ticket = shop.begin_load(Dataset::Core);
    shop.apply_load(ticket, Ok(core_products()));
    let summary = shop.cart_summary();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total, Price::from_decimal(25.0));
}

#[test]
fn test_prune_retention_drops_stranded_entries() {
    let mut shop = Storefront::new().with_retention(CartRetention::Prune);
    let ticket = shop.begin_load(Dataset::Core);
    shop.apply_load(ticket, Ok(core_products()));

    shop.add_to_cart(ProductId::new(1), 2);
    shop.add_to_cart(ProductId::new(2), 1);

    let ticket = shop.begin_load(Dataset::Seasonal);
    shop.apply_load(ticket, Ok(seasonal_products()));

    assert!(!shop.cart().contains(ProductId::new(1)));
    assert!(shop.cart().contains(ProductId::new(2)));

    // Bringing the old dataset back does not resurrect pruned entries.
    let ticket = shop.begin_load(Dataset::Core);
    shop.apply_load(ticket, Ok(core_products()));
    assert_eq!(shop.cart().quantity(ProductId::new(1)), 0);
}

#[test]
fn test_failed_load_freezes_previous_catalog() {
    let mut shop = loaded_shop();
    shop.search("mug");
    let events = subscribe_events(&mut shop);

    let ticket = shop.begin_load(Dataset::Extended);
    let outcome = shop.apply_load(
        ticket,
        Err(SourceError::Http {
            status: 404,
            url: "https://souq.example/catalog-60.json".to_string(),
        }),
    );

    let LoadOutcome::Failed { reason } = outcome else {
        panic!("expected failure outcome");
    };
    assert!(reason.contains("HTTP 404"));

    // Catalog, filter, and query survive untouched.
    assert_eq!(shop.catalog().len(), 3);
    assert_eq!(shop.catalog().query(), "mug");
    assert_eq!(shop.catalog().filtered_len(), 1);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        StateChange::LoadFailed { dataset: Dataset::Extended, .. }
    ));
}

#[test]
fn test_slow_load_cannot_overwrite_newer_one() {
    let mut shop = Storefront::new();

    // The core load is requested first but resolves last.
    let slow = shop.begin_load(Dataset::Core);
    let fast = shop.begin_load(Dataset::Seasonal);

    assert_eq!(
        shop.apply_load(fast, Ok(seasonal_products())),
        LoadOutcome::Applied { products: 2 }
    );
    assert_eq!(shop.apply_load(slow, Ok(core_products())), LoadOutcome::Stale);

    // The seasonal catalog won.
    assert!(shop.catalog().contains(ProductId::new(9)));
    assert!(!shop.catalog().contains(ProductId::new(1)));
}

#[test]
fn test_query_survives_dataset_switch() {
    let mut shop = loaded_shop();
    shop.search("cup");

    let ticket = shop.begin_load(Dataset::Seasonal);
    shop.apply_load(ticket, Ok(seasonal_products()));

    assert_eq!(shop.catalog().query(), "cup");
    let names: Vec<&str> = shop.catalog().filtered().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cup"]);
}

#[tokio::test]
async fn test_switch_dataset_through_a_source() {
    let source = StaticSource::new()
        .with_dataset(Dataset::Core, core_products())
        .with_dataset(Dataset::Seasonal, seasonal_products());

    let mut shop = Storefront::new();
    let outcome = shop.switch_dataset(&source, Dataset::Core).await;
    assert_eq!(outcome, LoadOutcome::Applied { products: 3 });

    let outcome = shop.switch_dataset(&source, Dataset::Extended).await;
    let LoadOutcome::Failed { reason } = outcome else {
        panic!("expected failure outcome");
    };
    assert!(reason.contains("catalog-60.json"));

    // The failed switch left the core catalog in place.
    assert_eq!(shop.catalog().len(), 3);
}

#[test]
fn test_cart_changes_notify_subscribers() {
    let mut shop = loaded_shop();
    let events = subscribe_events(&mut shop);

    shop.add_to_cart(ProductId::new(2), 4);
    shop.clear_cart();

    let events = events.borrow();
    assert_eq!(events.len(), 2);

    let StateChange::CartChanged { summary } = &events[0] else {
        panic!("expected cart change");
    };
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.total, Price::from_decimal(20.0));
    assert_eq!(summary.items_label(), "4 items");

    let StateChange::CartChanged { summary } = &events[1] else {
        panic!("expected cart change");
    };
    assert!(summary.is_empty());
}

#[test]
fn test_query_changes_notify_subscribers_once() {
    let mut shop = loaded_shop();
    let events = subscribe_events(&mut shop);

    shop.search("mug");
    shop.search("mug");
    shop.search("MUG");

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], StateChange::QueryChanged { visible: 1 });
}

#[test]
fn test_availability_lookup() {
    let shop = loaded_shop();
    assert_eq!(shop.availability(ProductId::new(1)), Some(StockStatus::InStock));
    assert_eq!(shop.availability(ProductId::new(3)), Some(StockStatus::NotAvailable));
    assert_eq!(shop.availability(ProductId::new(42)), None);
}

#[test]
fn test_line_total_preview_clamps_quantity() {
    let shop = loaded_shop();
    assert_eq!(
        shop.line_total(ProductId::new(2), 3),
        Some(Price::from_decimal(15.0))
    );
    assert_eq!(
        shop.line_total(ProductId::new(2), 150),
        Some(Price::from_decimal(495.0))
    );
    assert_eq!(shop.line_total(ProductId::new(42), 1), None);
}

#[test]
fn test_structured_data_covers_full_catalog() {
    let mut shop = loaded_shop();
    shop.search("shirt");

    // The document ignores the active filter.
    let doc = shop.structured_data();
    assert_eq!(doc.item_list_element.len(), 3);
    assert_eq!(doc.item_list_element[0].position, 1);
    assert_eq!(doc.item_list_element[0].item.sku, "1");
    assert_eq!(doc.item_list_element[2].item.offers.price, 49.5);

    let json = doc.to_json().unwrap();
    assert!(json.contains(r#""priceCurrency":"AED""#));
}
