use rust_decimal::{Decimal, RoundingStrategy};

/// Non-breaking space used between an amount and the currency symbol.
const NBSP: char = '\u{a0}';

/// Formats a number the way the es-ES locale does, with exactly two fraction digits.
///
/// The decimal separator is `,`. Thousands are grouped with `.` only once the integer
/// part has five or more digits (`1234,50` but `12.345,50`). Ties round away from zero.
pub fn format_number(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push(',');
    out.push_str(fraction);
    out
}

/// Formats an amount in euros, e.g. `32,80 €`.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{NBSP}€", format_number(value))
}

/// Formats a percentage. An undefined percentage is shown as zero.
pub fn format_percent(value: Option<Decimal>) -> String {
    format!("{}%", format_number(value.unwrap_or(Decimal::ZERO)))
}

fn group_thousands(integer: &str) -> String {
    if integer.len() < 5 {
        return integer.to_string();
    }
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
