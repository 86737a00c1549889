use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A raw value as found in a configuration document or typed by a user.
///
/// Documents may hold either numbers or strings, so the value is kept as-is and
/// only coerced when the engine reads it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ParameterValue {
    Number(Decimal),
    Text(String),
}

impl ParameterValue {
    /// Numeric coercion. Returns `None` for anything that is not a number.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            ParameterValue::Number(d) => Some(*d),
            ParameterValue::Text(s) => parse_decimal(s),
        }
    }

    /// Reads the value the way a display field does: anything unusable reads as zero.
    pub fn or_zero(value: Option<&ParameterValue>) -> Decimal {
        value.and_then(ParameterValue::as_decimal).unwrap_or(Decimal::ZERO)
    }

    /// Parses text typed into an edit field.
    ///
    /// The longest numeric prefix is used (`12abc` reads as 12); text without one becomes zero.
    pub fn from_edit(raw: &str) -> Self {
        ParameterValue::Number(parse_decimal_prefix(raw).unwrap_or(Decimal::ZERO))
    }
}

/// Parses plain (`12.5`) or scientific (`1.25e1`) decimal notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses the longest leading decimal number in `raw`, ignoring leading whitespace.
pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let number = &text[..end];
    if int_digits == 0 {
        // `.5` is written as `0.5` for the decimal parser.
        let dot = number.find('.')?;
        return parse_decimal(&format!("{}0{}", &number[..dot], &number[dot..]));
    }
    parse_decimal(number)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl From<Decimal> for ParameterValue {
    fn from(value: Decimal) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => {
                let text = n.to_string();
                match parse_decimal(&text) {
                    Some(d) => ParameterValue::Number(d),
                    None => ParameterValue::Text(text),
                }
            }
            Value::String(s) => ParameterValue::Text(s),
            Value::Null => ParameterValue::Text(String::new()),
            other => ParameterValue::Text(other.to_string()),
        }
    }
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::Number(d) if d.fract().is_zero() => match d.to_i64() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(d.to_f64().unwrap_or(f64::NAN)),
            },
            ParameterValue::Number(d) => serializer.serialize_f64(d.to_f64().unwrap_or(f64::NAN)),
            ParameterValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(d) => write!(f, "{}", d.normalize()),
            ParameterValue::Text(s) => f.write_str(s),
        }
    }
}
