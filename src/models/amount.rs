//! Cell amounts
//!
//! Amounts are non-negative decimals. User input is coerced rather than
//! rejected: anything that does not parse to a finite number becomes 0, and
//! negative values clamp to 0.

use super::Currency;

/// Coerce raw cell input into an amount
///
/// Surrounding whitespace is ignored and the remaining text must parse as a
/// whole, so `"12abc"` is 0 rather than 12. Fractions, exponents (`"1e3"`)
/// and a leading `+` are accepted.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(clamp_amount).unwrap_or(0.0)
}

/// Clamp to the valid range: non-finite and negative values (including -0)
/// become 0
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Plain decimal text: no symbol, no grouping, integers without a fraction
pub fn format_plain(value: f64) -> String {
    format!("{}", value)
}

/// Format with the currency symbol, thousands separators and two decimals
pub fn format_money(value: f64, currency: Currency) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol(), group_thousands(value.abs()))
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{}", grouped, fraction)
}
