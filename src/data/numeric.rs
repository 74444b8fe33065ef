// Numeric type inference for metric literals
// Author: Gabriel Demetrios Lafis

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Value;

/// `digits.digits`, `digitsEdigits` or `digits.digitsEdigits`
static FLOAT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?\d+(?:\.\d+(?:[eE][-+]?\d+)?|[eE][-+]?\d+)$")
        .expect("float literal pattern is valid")
});

/// Check whether a literal is written in decimal-point or exponential form
pub fn is_float_literal(literal: &str) -> bool {
    FLOAT_LITERAL.is_match(literal.trim())
}

/// Infer the numeric type of a metric literal
///
/// Decimal-point and exponential literals become floats, everything else
/// an integer. The decision is made per value, so the same metric may come
/// back as an integer in one row and a float in another.
pub fn infer_numeric(literal: &str) -> Value {
    let literal = literal.trim();

    if is_float_literal(literal) {
        if let Ok(f) = literal.parse::<f64>() {
            return Value::Float(f);
        }
    }

    Value::Integer(integer_literal(literal))
}

/// Parse an integer literal, falling back to its leading digits with a warning
pub fn integer_literal(literal: &str) -> i64 {
    let literal = literal.trim();

    match literal.parse::<i64>() {
        Ok(i) => i,
        Err(_) => {
            warn!("Literal '{}' is not an integer, using its leading digits", literal);
            parse_integer(literal)
        }
    }
}

/// Parse the leading integer of a literal, 0 when there is none
///
/// Trailing garbage is ignored and out-of-range values saturate.
pub fn parse_integer(literal: &str) -> i64 {
    let literal = literal.trim();
    let (negative, rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..digits_len];
    if digits.is_empty() {
        return 0;
    }

    match digits.parse::<i64>() {
        Ok(i) if negative => -i,
        Ok(i) => i,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
