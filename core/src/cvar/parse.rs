//! String coercion for cvar values
//!
//! Converts untyped console input into a [`CVarValue`] of a known [`ValueType`].
//! Rendering goes the other way through `CVarValue`'s `Display` impl.

use super::types::{CVarValue, ValueType};

/// Input string could not be coerced into the requested type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse '{input}' as {expected}")]
pub struct ParseValueError {
    pub expected: ValueType,
    pub input: String,
}

/// Coerce `input` into a value of `value_type`.
///
/// | Type | Accepted |
/// |------|----------|
/// | Boolean | `true`/`false` in any case, or the integers `0`/`1` |
/// | Integer32/64 | signed base-10 literal within range |
/// | Float32/64 | decimal or scientific literal |
/// | String | anything, verbatim |
pub fn parse_value(value_type: ValueType, input: &str) -> Result<CVarValue, ParseValueError> {
    let parsed = match value_type {
        ValueType::Boolean => parse_bool(input).map(CVarValue::Boolean),
        ValueType::String => Some(CVarValue::String(input.to_string())),
        ValueType::Integer32 => input.parse::<i32>().ok().map(CVarValue::Integer32),
        ValueType::Integer64 => input.parse::<i64>().ok().map(CVarValue::Integer64),
        ValueType::Float32 => input.parse::<f32>().ok().map(CVarValue::Float32),
        ValueType::Float64 => input.parse::<f64>().ok().map(CVarValue::Float64),
    };

    parsed.ok_or_else(|| ParseValueError {
        expected: value_type,
        input: input.to_string(),
    })
}

/// Permissive boolean parsing: words first, then `0`/`1` as integers.
fn parse_bool(input: &str) -> Option<bool> {
    if input.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if input.eq_ignore_ascii_case("false") {
        return Some(false);
    }

    match input.parse::<i32>() {
        Ok(0) => Some(false),
        Ok(1) => Some(true),
        _ => None,
    }
}
