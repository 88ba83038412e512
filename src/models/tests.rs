#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_item(id: i64, name: &str, price: Option<Decimal>) -> CatalogItem {
    CatalogItem {
        id,
        name: name.into(),
        category: "Furniture".into(),
        thumb_file: None,
        price_per_day: price,
        attributes: Vec::new(),
    }
}

fn wire_from_json(json: &str) -> WireItem {
    serde_json::from_str(json).unwrap()
}

// ── CatalogItem ingestion ─────────────────────────────────────

#[test]
fn test_from_wire_parses_price_once() {
    let wire = wire_from_json(
        r#"{"id": 7, "name": "Velvet Sofa", "category": "Seating",
            "thumb_file": "sofa.jpg",
            "extra": {"Price": "45.50", "Color": "Blue"}}"#,
    );
    let item = CatalogItem::from_wire(wire);
    assert_eq!(item.price_per_day, Some(dec!(45.50)));
    assert_eq!(item.price_per_day(), dec!(45.50));
    assert_eq!(item.thumb_file.as_deref(), Some("sofa.jpg"));
    assert_eq!(item.attributes, vec![("Color".to_string(), "Blue".to_string())]);
}

#[test]
fn test_from_wire_price_with_currency_noise() {
    let wire = wire_from_json(r#"{"id": 1, "name": "X", "extra": {"Price": "$1,200.00"}}"#);
    assert_eq!(CatalogItem::from_wire(wire).price_per_day, Some(dec!(1200.00)));
}

#[test]
fn test_from_wire_numeric_price() {
    let wire = wire_from_json(r#"{"id": 1, "name": "X", "extra": {"Price": 12.5}}"#);
    assert_eq!(CatalogItem::from_wire(wire).price_per_day, Some(dec!(12.5)));
}

#[test]
fn test_from_wire_missing_or_malformed_price() {
    let no_extra = wire_from_json(r#"{"id": 1, "name": "X"}"#);
    assert_eq!(CatalogItem::from_wire(no_extra).price_per_day, None);

    let garbage = wire_from_json(r#"{"id": 2, "name": "Y", "extra": {"Price": "call us"}}"#);
    let item = CatalogItem::from_wire(garbage);
    assert_eq!(item.price_per_day, None);
    assert_eq!(item.price_per_day(), Decimal::ZERO);

    let wrong_type = wire_from_json(r#"{"id": 3, "name": "Z", "extra": {"Price": [1]}}"#);
    assert_eq!(CatalogItem::from_wire(wrong_type).price_per_day, None);
}

#[test]
fn test_from_wire_empty_thumb_is_none() {
    let wire = wire_from_json(r#"{"id": 1, "name": "X", "thumb_file": ""}"#);
    assert_eq!(CatalogItem::from_wire(wire).thumb_file, None);
}

// ── Cart ──────────────────────────────────────────────────────

#[test]
fn test_add_twice_increments_quantity() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", Some(dec!(20))));
    cart.add(make_item(1, "Tent", Some(dec!(20))));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(1).unwrap().quantity, 2);
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut cart = Cart::new();
    cart.add(make_item(3, "C", None));
    cart.add(make_item(1, "A", None));
    cart.add(make_item(2, "B", None));
    cart.add(make_item(1, "A", None));
    let ids: Vec<i64> = cart.iter().map(|e| e.item.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_set_quantity_floors_at_one() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", None));

    cart.set_quantity(1, "-5");
    assert_eq!(cart.get(1).unwrap().quantity, 1);

    cart.set_quantity(1, "abc");
    assert_eq!(cart.get(1).unwrap().quantity, 1);

    cart.set_quantity(1, "0");
    assert_eq!(cart.get(1).unwrap().quantity, 1);

    cart.set_quantity(1, " 4 ");
    assert_eq!(cart.get(1).unwrap().quantity, 4);
}

#[test]
fn test_set_quantity_unknown_id_is_noop() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Tent", None));
    cart.set_quantity(99, "5");
    assert_eq!(cart.get(1).unwrap().quantity, 1);
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_remove_keeps_order_of_rest() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "A", None));
    cart.add(make_item(2, "B", None));
    cart.add(make_item(3, "C", None));
    cart.remove(2);
    let ids: Vec<i64> = cart.iter().map(|e| e.item.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // Unknown id: no-op, no error
    cart.remove(42);
    assert_eq!(cart.len(), 2);
}

#[test]
fn test_subtotal_counts_quantities_and_unknown_prices() {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Chair", Some(dec!(10.25))));
    cart.add(make_item(1, "Chair", Some(dec!(10.25))));
    cart.add(make_item(2, "Mystery", None));
    assert_eq!(cart.subtotal_per_day(), dec!(20.50));
}

// ── evaluate ──────────────────────────────────────────────────

fn eval_with(subtotal: Decimal, days: u32, target: Decimal) -> DerivedTotals {
    let mut cart = Cart::new();
    cart.add(make_item(1, "Item", Some(subtotal)));
    let inputs = PlanInputs {
        days,
        budget_target: target,
    };
    evaluate(&cart, &inputs, &BudgetPolicy::default())
}

#[test]
fn test_grand_total_is_subtotal_times_days() {
    let totals = eval_with(dec!(33.33), 3, Decimal::ZERO);
    assert_eq!(totals.subtotal_per_day, dec!(33.33));
    assert_eq!(totals.grand_total, dec!(99.99));
}

#[test]
fn test_status_on_budget() {
    let totals = eval_with(dec!(85), 1, dec!(100));
    assert_eq!(
        totals.status,
        BudgetStatus::OnBudget {
            remaining: dec!(15)
        }
    );
}

#[test]
fn test_status_near_budget() {
    let totals = eval_with(dec!(95), 1, dec!(100));
    assert_eq!(
        totals.status,
        BudgetStatus::NearBudget {
            remaining: dec!(5)
        }
    );
}

#[test]
fn test_status_over_budget() {
    let totals = eval_with(dec!(110), 1, dec!(100));
    assert_eq!(
        totals.status,
        BudgetStatus::OverBudget {
            overage: dec!(10)
        }
    );
}

#[test]
fn test_status_unset_when_no_target() {
    assert_eq!(eval_with(dec!(110), 1, Decimal::ZERO).status, BudgetStatus::Unset);
    assert_eq!(eval_with(dec!(110), 1, dec!(-50)).status, BudgetStatus::Unset);
}

#[test]
fn test_status_boundaries() {
    // Exactly 90% of target is still on budget; "near" needs strictly more.
    let at_ninety = eval_with(dec!(90), 1, dec!(100));
    assert_eq!(
        at_ninety.status,
        BudgetStatus::OnBudget {
            remaining: dec!(10)
        }
    );

    // Spending the target exactly is near, not over.
    let at_target = eval_with(dec!(100), 1, dec!(100));
    assert_eq!(
        at_target.status,
        BudgetStatus::NearBudget {
            remaining: dec!(0)
        }
    );
}

#[test]
fn test_no_per_row_rounding_drift() {
    let mut cart = Cart::new();
    for id in 0..10 {
        cart.add(make_item(id, "Fraction", Some(dec!(0.333))));
    }
    let inputs = PlanInputs {
        days: 7,
        budget_target: Decimal::ZERO,
    };
    let totals = evaluate(&cart, &inputs, &BudgetPolicy::default());
    assert_eq!(totals.subtotal_per_day, dec!(3.330));
    assert_eq!(totals.grand_total, dec!(23.310));
    assert_eq!(
        totals.grand_total,
        totals.subtotal_per_day * Decimal::from(7u32)
    );
}

// ── PlanInputs ────────────────────────────────────────────────

#[test]
fn test_days_raw_normalization() {
    let mut inputs = PlanInputs::default();
    assert_eq!(inputs.days, 1);

    inputs.set_days_raw("14");
    assert_eq!(inputs.days, 14);

    inputs.set_days_raw("2.9");
    assert_eq!(inputs.days, 2);

    inputs.set_days_raw("0");
    assert_eq!(inputs.days, 1);

    inputs.set_days_raw("nope");
    assert_eq!(inputs.days, 1);
}

#[test]
fn test_budget_raw_normalization() {
    let mut inputs = PlanInputs::default();
    inputs.set_budget_raw("$2,500");
    assert_eq!(inputs.budget_target, dec!(2500));

    inputs.set_budget_raw("whatever");
    assert_eq!(inputs.budget_target, Decimal::ZERO);
}
