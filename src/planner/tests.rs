#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{BudgetPolicy, BudgetStatus};

fn make_item(id: i64, name: &str, price: Decimal) -> CatalogItem {
    CatalogItem {
        id,
        name: name.into(),
        category: String::new(),
        thumb_file: None,
        price_per_day: Some(price),
        attributes: Vec::new(),
    }
}

// ── Reducer ───────────────────────────────────────────────────

#[test]
fn test_every_apply_refreshes_totals() {
    let mut planner = Planner::new();
    planner.set_days_raw("2");

    planner.apply(CartCommand::Add(make_item(1, "Tent", dec!(30))));
    assert_eq!(planner.totals().subtotal_per_day, dec!(30));
    assert_eq!(planner.totals().grand_total, dec!(60));

    planner.apply(CartCommand::SetQuantity(1, "3".into()));
    assert_eq!(planner.totals().grand_total, dec!(180));

    planner.apply(CartCommand::Remove(1));
    assert_eq!(planner.totals().grand_total, Decimal::ZERO);
}

#[test]
fn test_input_changes_refresh_totals() {
    let mut planner = Planner::new();
    planner.apply(CartCommand::Add(make_item(1, "Tent", dec!(50))));

    planner.set_budget_raw("120");
    assert_eq!(
        planner.totals().status,
        BudgetStatus::OnBudget {
            remaining: dec!(70)
        }
    );

    planner.set_days_raw("3");
    assert_eq!(
        planner.totals().status,
        BudgetStatus::OverBudget {
            overage: dec!(30)
        }
    );
}

#[test]
fn test_custom_near_budget_ratio() {
    // With a 50% ratio, 60 of 100 already counts as near.
    let mut planner = Planner::with_policy(BudgetPolicy {
        near_budget_ratio: dec!(0.5),
    });
    planner.apply(CartCommand::Add(make_item(1, "Tent", dec!(60))));
    planner.set_budget_raw("100");
    assert_eq!(
        planner.totals().status,
        BudgetStatus::NearBudget {
            remaining: dec!(40)
        }
    );
}

#[test]
fn test_add_by_id_resolves_through_index() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.apply(CartCommand::AddById(5));
    assert_eq!(planner.cart().len(), 1);
    assert_eq!(planner.cart().get(5).unwrap().item.name, "Rug");
}

#[test]
fn test_add_by_unknown_id_is_silent() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.apply(CartCommand::AddById(99));
    assert!(planner.cart().is_empty());
    assert_eq!(planner.totals().grand_total, Decimal::ZERO);
}

#[test]
fn test_cart_snapshot_survives_result_refresh() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);
    planner.apply(CartCommand::AddById(5));

    // New results replace the index but not the cart snapshot.
    planner.set_results(&[make_item(7, "Lamp", dec!(4))]);
    assert_eq!(planner.cart().get(5).unwrap().item.name, "Rug");
    assert!(planner.index().resolve(5).is_none());
}

// ── Drag state machine ────────────────────────────────────────

#[test]
fn test_drag_over_then_drop() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.drag_enter();
    assert_eq!(planner.drag(), DragState::Over);

    assert!(planner.drop_payload(DragPayload::ItemId(5)));
    assert_eq!(planner.drag(), DragState::Idle);
    assert_eq!(planner.cart().len(), 1);
}

#[test]
fn test_drag_leave_resets_without_adding() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.drag_enter();
    planner.drag_leave();
    assert_eq!(planner.drag(), DragState::Idle);
    assert!(planner.cart().is_empty());
}

#[test]
fn test_drop_of_stale_id_leaves_cart_unchanged() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.drag_enter();
    assert!(!planner.drop_payload(DragPayload::ItemId(404)));
    assert!(planner.cart().is_empty());
}

#[test]
fn test_drop_of_foreign_payload_is_ignored() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    planner.drag_enter();
    assert!(!planner.drop_payload(DragPayload::Text("file://other".into())));
    assert!(planner.cart().is_empty());
}

#[test]
fn test_drop_without_hover_is_ignored() {
    let mut planner = Planner::new();
    planner.set_results(&[make_item(5, "Rug", dec!(12))]);

    assert!(!planner.drop_payload(DragPayload::ItemId(5)));
    assert!(planner.cart().is_empty());
}
