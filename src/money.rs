use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse free-text money input, tolerating `$`, thousands commas and
/// parenthesized negatives. Anything unparsable (including empty input)
/// becomes zero so text fields never block on validation.
pub(crate) fn parse_money(raw: &str) -> Decimal {
    let cleaned = raw
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(cleaned).unwrap_or(Decimal::ZERO)
}

/// Parse free-text integer input. Decimal text is floored.
/// Returns `None` when nothing numeric can be extracted.
pub(crate) fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.floor() as i64)
}

/// Format a money amount with a `$` prefix, thousands separators and exactly
/// two decimal places, rounding half-up. The single display path for money.
/// e.g. `1234567.895` → `"$1,234,567.90"`
pub(crate) fn format_money(val: Decimal) -> String {
    let rounded = round_display(val);
    let abs = rounded.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Bare two-decimal rendering for CSV cells: no prefix, no grouping.
pub(crate) fn format_money_plain(val: Decimal) -> String {
    format!("{:.2}", round_display(val))
}

fn round_display(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
