#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::CatalogItem;

fn make_item(id: i64, name: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.into(),
        category: String::new(),
        thumb_file: None,
        price_per_day: None,
        attributes: Vec::new(),
    }
}

#[test]
fn test_resolve_known_id() {
    let mut index = CatalogIndex::new();
    index.replace(&[make_item(1, "Lamp"), make_item(2, "Rug")]);
    assert_eq!(index.resolve(2).unwrap().name, "Rug");
}

#[test]
fn test_resolve_unknown_id() {
    let mut index = CatalogIndex::new();
    index.replace(&[make_item(1, "Lamp")]);
    assert!(index.resolve(99).is_none());
}

#[test]
fn test_replace_drops_previous_snapshot() {
    let mut index = CatalogIndex::new();
    index.replace(&[make_item(1, "Lamp")]);
    index.replace(&[make_item(2, "Rug")]);
    assert!(index.resolve(1).is_none());
    assert_eq!(index.resolve(2).unwrap().name, "Rug");
}

#[test]
fn test_empty_index() {
    let index = CatalogIndex::new();
    assert!(index.is_empty());
    assert!(index.resolve(1).is_none());
}
