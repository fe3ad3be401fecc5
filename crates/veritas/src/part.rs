//! Parts of a version specification

use std::fmt;

/// Wildcard marker for version specification parts
pub const WILDCARD: &str = "*";

/// One part of a version specification: not given, a wildcard, or a concrete value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SpecPart<T> {
    #[default]
    Unspecified,
    Wildcard,
    Value(T),
}

/// A numeric part (major, minor or patch)
pub type VersionSpecPart = SpecPart<u64>;

impl<T> SpecPart<T> {
    /// The concrete value, if there is one
    pub fn value(&self) -> Option<&T> {
        match self {
            SpecPart::Value(value) => Some(value),
            _ => None,
        }
    }

    /// True when the part places no constraint (unspecified or wildcard)
    pub fn is_gap(&self) -> bool {
        !matches!(self, SpecPart::Value(_))
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, SpecPart::Unspecified)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, SpecPart::Wildcard)
    }
}

impl SpecPart<u64> {
    /// The numeric value, with gaps counted as zero
    pub fn value_or_zero(&self) -> u64 {
        self.value().copied().unwrap_or(0)
    }
}

impl SpecPart<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T: fmt::Display> fmt::Display for SpecPart<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecPart::Unspecified => Ok(()),
            SpecPart::Wildcard => f.write_str(WILDCARD),
            SpecPart::Value(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps() {
        assert!(VersionSpecPart::Unspecified.is_gap());
        assert!(VersionSpecPart::Wildcard.is_gap());
        assert!(!VersionSpecPart::Value(0).is_gap());
    }

    #[test]
    fn test_unspecified_and_wildcard_are_distinct() {
        assert_ne!(VersionSpecPart::Unspecified, VersionSpecPart::Wildcard);
        assert!(!VersionSpecPart::Unspecified.is_specified());
        assert!(VersionSpecPart::Wildcard.is_specified());
        assert_eq!(VersionSpecPart::Unspecified.value_or_zero(), 0);
        assert_eq!(VersionSpecPart::Wildcard.value_or_zero(), 0);
        assert_eq!(VersionSpecPart::Value(7).value_or_zero(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionSpecPart::Unspecified.to_string(), "");
        assert_eq!(VersionSpecPart::Wildcard.to_string(), "*");
        assert_eq!(SpecPart::Value("rc.1".to_string()).to_string(), "rc.1");
    }
}
