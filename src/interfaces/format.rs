use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// "$1,234" — whole-dollar amounts for stat cards.
pub fn currency(value: Decimal) -> String {
    let rounded = value.round();
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// "$1,234.56" — two decimal places for prices.
pub fn currency_precise(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{frac_part:0<2}")),
        None => (text, "00".to_string()),
    };
    let grouped = group_thousands(&int_part);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// "+$1,234" / "-$1,234" — explicit sign for PnL readouts.
pub fn signed_currency(value: Decimal) -> String {
    let sign = if value.round() < Decimal::ZERO { "-" } else { "+" };
    format!("{}{}", sign, currency(value.abs()))
}

/// "12.3%" from a 0..1 fraction.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// "1.2M" / "45.6k" — compact magnitudes for size columns.
pub fn compact(value: Decimal) -> String {
    let v = value.to_f64().unwrap_or(0.0);
    let abs = v.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", v / 1_000.0)
    } else {
        format!("{v:.0}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
