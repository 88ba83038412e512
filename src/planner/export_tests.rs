#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Cart, CatalogItem};

fn make_item(id: i64, name: &str, price: Option<Decimal>) -> CatalogItem {
    CatalogItem {
        id,
        name: name.into(),
        category: String::new(),
        thumb_file: None,
        price_per_day: price,
        attributes: Vec::new(),
    }
}

fn csv_text(cart: &Cart, days: u32) -> String {
    String::from_utf8(render_csv(cart, days).unwrap()).unwrap()
}

#[test]
fn test_header_and_row_shape() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Folding Chair", Some(dec!(3.5))));
    cart.set_quantity(1, "4");

    let text = csv_text(&cart, 2);
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "\"Item\",\"Qty\",\"Price Per Day\",\"Days\",\"Line Total\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "\"Folding Chair\",\"4\",\"3.50\",\"2\",\"28.00\""
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_rows_follow_insertion_order() {
    let mut cart = Cart::new();
    cart.add(make_item(9, "Zebra Rug", Some(dec!(10))));
    cart.add(make_item(1, "Arm Chair", Some(dec!(5))));

    let text = csv_text(&cart, 1);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with("\"Zebra Rug\""));
    assert!(lines[2].starts_with("\"Arm Chair\""));
}

#[test]
fn test_quotes_in_names_are_doubled() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent \"Deluxe\"", Some(dec!(1))));

    let text = csv_text(&cart, 1);
    assert!(text.contains("\"Tent \"\"Deluxe\"\"\""));
}

#[test]
fn test_unknown_price_exports_as_zero() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Mystery Box", None));

    let text = csv_text(&cart, 3);
    assert!(text.contains("\"Mystery Box\",\"1\",\"0.00\",\"3\",\"0.00\""));
}

#[test]
fn test_export_is_deterministic() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", Some(dec!(20))));
    cart.add(make_item(2, "Stove", Some(dec!(7.25))));
    cart.set_quantity(2, "3");

    assert_eq!(render_csv(&cart, 5).unwrap(), render_csv(&cart, 5).unwrap());
}

#[test]
fn test_empty_cart_is_refused() {
    let cart = Cart::new();
    let err = render_csv(&cart, 1).unwrap_err();
    assert!(err.to_string().contains("at least one item"));
}

#[test]
fn test_zero_days_is_floored_to_one() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", Some(dec!(20))));

    let text = csv_text(&cart, 0);
    assert!(text.contains("\"20.00\",\"1\",\"20.00\""));
}

#[test]
fn test_export_to_path_writes_file() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", Some(dec!(20))));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    export_to_path(&cart, 2, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, render_csv(&cart, 2).unwrap());
}

#[test]
fn test_export_to_path_refuses_empty_cart_without_file() {
    let cart = Cart::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);

    assert!(export_to_path(&cart, 1, &path).is_err());
    assert!(!path.exists());
}
