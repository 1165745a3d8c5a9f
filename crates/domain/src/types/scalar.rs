//! Text-or-number property values
//!
//! Device identifiers and severities are strings for most providers, but the
//! API also accepts them as JSON numbers. The value keeps whichever the
//! caller supplied and emits it unchanged.

use serde_json::Value;

/// A property value that is either text or an integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Number(i64),
}

impl Scalar {
    /// Numbers are always set; text is blank when it is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// JSON value for the wire form, or `None` for blank text.
    pub fn to_wire(&self) -> Option<Value> {
        match self {
            Self::Text(text) if text.trim().is_empty() => None,
            Self::Text(text) => Some(Value::from(text.as_str())),
            Self::Number(number) => Some(Value::from(*number)),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stay_numbers_on_the_wire() {
        assert_eq!(Scalar::from(7).to_wire(), Some(Value::from(7)));
        assert_eq!(Scalar::from(3_u32).to_wire(), Some(Value::from(3)));
        assert_eq!(Scalar::from("7").to_wire(), Some(Value::from("7")));
    }

    #[test]
    fn blank_text_is_not_emitted() {
        assert!(Scalar::from("  ").is_blank());
        assert_eq!(Scalar::from("  ").to_wire(), None);
        assert!(!Scalar::from(0).is_blank());
    }
}
