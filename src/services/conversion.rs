//! Frequency conversion
//!
//! Pure arithmetic mapping an amount at one recurrence cadence to an
//! equivalent amount at another, via the fixed annual occurrence table.

use crate::models::Cadence;

/// Convert an amount from one cadence to an equivalent amount at another
///
/// When `from == to` the amount is returned unchanged, with no float
/// round-trip error. No rounding is applied; callers format for display.
pub fn convert(amount: f64, from: Cadence, to: Cadence) -> f64 {
    if from == to {
        return amount;
    }
    amount * (f64::from(from.per_year()) / f64::from(to.per_year()))
}

/// Format an f64 dollar amount for display: `$1,234.56`, `-$0.75`
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, fraction)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}
