//! Literal-to-typed-value inference for write operations.

use crate::value::Value;

/// Convert a raw literal into a typed [`Value`]. Total: anything that is not
/// recognizably an integer, float, boolean, or bracketed list is a string.
///
/// List literals are split on `,` with no nesting or quoting support, so a
/// comma inside an intended element always splits it.
///
/// # Example
///
/// ```
/// use tomlctl_core::{infer, Value};
///
/// assert_eq!(infer("42"), Value::Integer(42));
/// assert_eq!(infer("true"), Value::Boolean(true));
/// assert_eq!(infer("hello"), Value::String("hello".to_string()));
/// ```
pub fn infer(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Float(f);
    }
    if raw == "true" {
        return Value::Boolean(true);
    }
    if raw == "false" {
        return Value::Boolean(false);
    }
    if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        let inner = &raw[1..raw.len() - 1];
        if inner.is_empty() {
            return Value::Array(Vec::new());
        }
        return Value::Array(inner.split(',').map(|piece| infer(piece.trim())).collect());
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(infer("42"), Value::Integer(42));
        assert_eq!(infer("0"), Value::Integer(0));
        assert_eq!(infer("-7"), Value::Integer(-7));
        assert_eq!(infer("+7"), Value::Integer(7));
    }

    #[test]
    fn floats() {
        assert_eq!(infer("3.14"), Value::Float(3.14));
        assert_eq!(infer("-0.5"), Value::Float(-0.5));
        assert_eq!(infer("1e3"), Value::Float(1000.0));
        // A decimal point forces the float path.
        assert_eq!(infer("42.0"), Value::Float(42.0));
    }

    #[test]
    fn booleans_are_case_sensitive() {
        assert_eq!(infer("true"), Value::Boolean(true));
        assert_eq!(infer("false"), Value::Boolean(false));
        assert_eq!(infer("TRUE"), Value::String("TRUE".to_string()));
        assert_eq!(infer("False"), Value::String("False".to_string()));
    }

    #[test]
    fn whitespace_is_not_tolerated() {
        assert_eq!(infer(" 42"), Value::String(" 42".to_string()));
        assert_eq!(infer("42 "), Value::String("42 ".to_string()));
    }

    #[test]
    fn lists() {
        assert_eq!(
            infer("[1, 2, abc]"),
            Value::Array(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::String("abc".to_string()),
            ]),
        );
        assert_eq!(infer("[]"), Value::Array(Vec::new()));
        assert_eq!(
            infer("[ true ,3.5]"),
            Value::Array(vec![Value::Boolean(true), Value::Float(3.5)]),
        );
    }

    #[test]
    fn lists_split_on_every_comma() {
        // No nesting support: the inner brackets survive as string pieces.
        assert_eq!(
            infer("[1, [2, 3]]"),
            Value::Array(vec![
                Value::Integer(1),
                Value::String("[2".to_string()),
                Value::String("3]".to_string()),
            ]),
        );
    }

    #[test]
    fn string_fallback() {
        assert_eq!(infer("hello"), Value::String("hello".to_string()));
        assert_eq!(infer(""), Value::String(String::new()));
        assert_eq!(infer("["), Value::String("[".to_string()));
    }
}
