//! Shared row conversion helpers.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT decimal column, falling back through f64 for scientific
/// notation. Unparseable stored values log and resolve to zero rather than
/// failing the whole list query.
pub(crate) fn parse_decimal_column(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(_) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(d) => d,
            None => {
                log::error!("Failed to parse {field_name} '{value_str}' as Decimal; using ZERO");
                Decimal::ZERO
            }
        },
    }
}

/// Parses a TEXT JSON integer array column (`buy_ids`).
pub(crate) fn parse_id_list_column(value_str: &str, field_name: &str) -> Vec<i32> {
    match serde_json::from_str(value_str) {
        Ok(ids) => ids,
        Err(e) => {
            log::error!("Failed to parse {field_name} '{value_str}': {e}; using empty list");
            Vec::new()
        }
    }
}
