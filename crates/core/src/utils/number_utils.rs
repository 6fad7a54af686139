//! Money formatting and lenient parsing of sheet cells.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::constants::EMPTY_CELL;
use crate::errors::{Result, ValidationError};

/// Formats an amount as Rupiah without decimals, e.g. `Rp 12.000.000`.
pub fn format_rupiah(value: Decimal) -> String {
    format!("Rp {}", group_thousands(value))
}

fn group_thousands(value: Decimal) -> String {
    // Banker's rounding, same as the sheet's display rounding
    let rounded = value.round();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Parses a numeric sheet cell.
///
/// Everything except digits, `.` and `-` is dropped first, so `Rp 1500000`
/// and `1,500,000` both parse. Empty cells and the `-` placeholder read as zero.
pub fn parse_sheet_number(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() || cleaned == EMPTY_CELL {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).map_err(|_| {
        ValidationError::InvalidInput(format!("'{}' is not a number", raw.trim())).into()
    })
}
