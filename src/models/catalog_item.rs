use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// An item as returned by the catalog search service. `extra` is a free-form
/// JSON bag; the price lives in `extra["Price"]` as a decimal-formatted string.
#[derive(Debug, Clone, Deserialize)]
pub struct WireItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumb_file: String,
    #[serde(default)]
    pub extra: serde_json::Map<String, Value>,
}

/// A catalog item after ingestion: the price has been parsed once, up front,
/// so totals never re-parse strings.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub thumb_file: Option<String>,
    /// Per unit, per day. `None` means the catalog record carried no usable
    /// price; arithmetic treats it as zero.
    pub price_per_day: Option<Decimal>,
    /// Remaining display attributes, sorted by key.
    pub attributes: Vec<(String, String)>,
}

impl CatalogItem {
    pub fn from_wire(wire: WireItem) -> Self {
        let price_per_day = wire.extra.get("Price").and_then(parse_price);

        let attributes: Vec<(String, String)> = wire
            .extra
            .iter()
            .filter(|(k, _)| k.as_str() != "Price")
            .map(|(k, v)| (k.clone(), value_to_text(v)))
            .collect();

        Self {
            id: wire.id,
            name: wire.name,
            category: wire.category,
            thumb_file: if wire.thumb_file.is_empty() {
                None
            } else {
                Some(wire.thumb_file)
            },
            price_per_day,
            attributes,
        }
    }

    /// Price per unit per day, defaulting to zero when unknown.
    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day.unwrap_or(Decimal::ZERO)
    }
}

/// Catalog price fields are free text and frequently malformed; a value that
/// fails to parse is the same as no price at all.
fn parse_price(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => {
            let cleaned = s.replace(['$', ','], "");
            Decimal::from_str(cleaned.trim()).ok()
        }
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
