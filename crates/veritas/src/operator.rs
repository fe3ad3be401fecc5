//! Operator types for version specifications

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operators accepted in front of a version specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Any version compatible with at least the given value (^)
    Caret,
    /// Minimum version with restricted compatibility range (~)
    Tilde,
    /// Exactly the given version (=)
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Caret => "^",
            Operator::Tilde => "~",
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["^", "~", "=", ">", ">=", "<", "<="]
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "^" => Ok(Operator::Caret),
            "~" => Ok(Operator::Tilde),
            "=" => Ok(Operator::Equal),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trip() {
        for op in Operator::supported_operators() {
            let parsed: Operator = op.parse().unwrap();
            assert_eq!(parsed.as_str(), *op);
        }
    }

    #[test]
    fn test_invalid_operator() {
        assert!("==".parse::<Operator>().is_err());
        assert!("!=".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }
}
