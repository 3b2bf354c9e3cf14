//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what a [`Field`](crate::Field) reads out of a
//! [`BoardGame`](crate::BoardGame): either a borrowed name or a number.

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
}

impl<'a> Value<'a> {
    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(_) => None,
        }
    }
}

/// Numeric attribute value.
///
/// Integer attributes keep their exact value; mixed comparisons go
/// through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Whole-number attribute (players, minutes, rank, year, id).
    I64(i64),
    /// Real attribute (difficulty, rating).
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total ordering used for sorting; NaN sorts after every number.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extractors() {
        assert_eq!(Value::String("Catan").as_str(), Some("Catan"));
        assert_eq!(Value::String("Catan").as_number(), None);
        assert_eq!(
            Value::Number(Number::I64(4)).as_number(),
            Some(Number::I64(4))
        );
        assert_eq!(Value::Number(Number::I64(4)).as_str(), None);
    }

    #[test]
    fn mixed_number_compare() {
        assert_eq!(
            Number::I64(3).compare(Number::F64(3.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::I64(3).compare(Number::F64(2.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(Number::F64(f64::NAN).compare(Number::I64(1)), None);
    }

    #[test]
    fn total_cmp_places_nan_last() {
        assert_eq!(
            Number::F64(f64::NAN).total_cmp(Number::F64(10.0)),
            Ordering::Greater
        );
        assert_eq!(Number::I64(1).total_cmp(Number::I64(2)), Ordering::Less);
    }

    #[test]
    fn display() {
        assert_eq!(Number::I64(42).to_string(), "42");
        assert_eq!(Number::F64(4.5).to_string(), "4.5");
    }
}
