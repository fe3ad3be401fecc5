//! Error type for specification and requirement parsing

use semver::Version;
use thiserror::Error;

/// Error raised when a specification, requirement or version cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version specification \"{0}\"")]
    InvalidSpecification(String),
    #[error("Empty version requirement")]
    EmptyRequirement,
    #[error("Invalid version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
    #[error("Version specification \"{0}\" has a boundary outside the representable version range")]
    UnrepresentableBound(String),
    #[error(
        "Minimum version (inclusive) is greater than maximum version (exclusive) \
         for requirement \"{requirement}\" (min: >={min}, max: <{max})"
    )]
    ConflictingBounds {
        requirement: String,
        min: Version,
        max: Version,
    },
}

impl ParseError {
    /// The raw text that failed to parse
    pub fn text(&self) -> &str {
        match self {
            ParseError::InvalidSpecification(text) | ParseError::UnrepresentableBound(text) => text,
            ParseError::EmptyRequirement => "",
            ParseError::InvalidVersion { version, .. } => version,
            ParseError::ConflictingBounds { requirement, .. } => requirement,
        }
    }

    pub(crate) fn invalid_version(version: &str, err: &semver::Error) -> Self {
        ParseError::InvalidVersion {
            version: version.to_string(),
            reason: err.to_string(),
        }
    }
}
