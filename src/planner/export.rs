use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::models::Cart;
use crate::money::format_money_plain;

pub const EXPORT_FILE_NAME: &str = "budget-build.csv";

const HEADER: [&str; 5] = ["Item", "Qty", "Price Per Day", "Days", "Line Total"];

/// Serialize the cart as CSV bytes: fixed header, one row per entry in
/// insertion order, every field quoted with inner quotes doubled. The same
/// cart and day count always produce identical bytes.
///
/// Refuses an empty cart; that is the caller's cue to tell the user.
pub fn render_csv(cart: &Cart, days: u32) -> Result<Vec<u8>> {
    if cart.is_empty() {
        anyhow::bail!("Add at least one item before exporting");
    }

    let days = days.max(1);
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    wtr.write_record(HEADER)
        .context("Failed to write CSV header")?;

    for entry in cart.iter() {
        let unit = entry.item.price_per_day();
        let line_total = unit * Decimal::from(entry.quantity) * Decimal::from(days);
        wtr.write_record([
            entry.item.name.as_str(),
            &entry.quantity.to_string(),
            &format_money_plain(unit),
            &days.to_string(),
            &format_money_plain(line_total),
        ])
        .context("Failed to write CSV row")?;
    }

    wtr.into_inner().context("Failed to flush CSV buffer")
}

/// Write the export to a file.
pub fn export_to_path(cart: &Cart, days: u32, path: &Path) -> Result<()> {
    let bytes = render_csv(cart, days)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Default landing spot for the artifact: the user's home directory, or the
/// working directory when home cannot be determined.
pub fn default_export_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_FILE_NAME)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
