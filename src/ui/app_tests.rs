#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, Screen};
use super::commands::handle_command;
use crate::catalog::SearchClient;
use crate::models::CatalogItem;
use crate::planner::{DragPayload, DragState};

fn make_item(id: i64, name: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.into(),
        category: String::new(),
        thumb_file: None,
        price_per_day: Some(dec!(10)),
        attributes: Vec::new(),
    }
}

fn offline_client() -> SearchClient {
    // Never contacted by these tests.
    SearchClient::new("http://127.0.0.1:1").unwrap()
}

#[test]
fn test_planner_command_arms_drop_zone_for_grabbed_item() {
    let client = offline_client();
    let mut app = App::new();
    app.planner.set_results(&[make_item(5, "Tent")]);
    app.grabbed = Some(5);

    handle_command("planner", &mut app, &client).unwrap();

    assert_eq!(app.screen, Screen::Planner);
    assert_eq!(app.planner.drag(), DragState::Over);

    let id = app.grabbed.take().unwrap();
    assert!(app.planner.drop_payload(DragPayload::ItemId(id)));
    assert_eq!(app.planner.cart().len(), 1);
}

#[test]
fn test_results_command_disarms_drop_zone() {
    let client = offline_client();
    let mut app = App::new();
    app.planner.set_results(&[make_item(5, "Tent")]);
    app.grabbed = Some(5);

    handle_command("planner", &mut app, &client).unwrap();
    handle_command("results", &mut app, &client).unwrap();

    assert_eq!(app.screen, Screen::Results);
    assert_eq!(app.planner.drag(), DragState::Idle);
}

#[test]
fn test_navigation_without_grab_leaves_drag_idle() {
    let client = offline_client();
    let mut app = App::new();

    handle_command("planner", &mut app, &client).unwrap();

    assert_eq!(app.screen, Screen::Planner);
    assert_eq!(app.planner.drag(), DragState::Idle);
}

#[test]
fn test_budget_command_confirms_target() {
    let client = offline_client();
    let mut app = App::new();

    handle_command("budget 1500", &mut app, &client).unwrap();
    assert_eq!(app.status_message, "Budget target: $1,500.00");

    handle_command("budget nonsense", &mut app, &client).unwrap();
    assert_eq!(app.status_message, "Budget target unset");
}
