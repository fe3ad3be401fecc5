//! Facade over string inputs

use semver::Version;

use crate::error::ParseError;
use crate::requirement::VersionRequirement;

/// High-level operations taking versions and requirements as text
pub struct Veritas;

impl Veritas {
    /// Parse a requirement, validating it
    pub fn parse_requirement(requirement: &str) -> Result<VersionRequirement, ParseError> {
        VersionRequirement::parse(requirement)
    }

    /// Parse a concrete version
    pub fn parse_version(version: &str) -> Result<Version, ParseError> {
        Version::parse(version).map_err(|err| ParseError::invalid_version(version, &err))
    }

    /// Check if a version satisfies a requirement
    pub fn satisfies(version: &str, requirement: &str) -> Result<bool, ParseError> {
        let requirement = VersionRequirement::parse(requirement)?;
        let version = Self::parse_version(version)?;
        Ok(requirement.check(&version))
    }

    /// Return all versions that satisfy the requirement, sorted ascending
    pub fn satisfied_by(versions: &[&str], requirement: &str) -> Result<Vec<Version>, ParseError> {
        let requirement = VersionRequirement::parse(requirement)?;
        let parsed = Self::parse_versions(versions)?;

        let mut matching: Vec<Version> = requirement.satisfied_by(&parsed).into_iter().cloned().collect();
        matching.sort();
        Ok(matching)
    }

    /// Return the highest version that satisfies the requirement
    pub fn max_satisfying(versions: &[&str], requirement: &str) -> Result<Option<Version>, ParseError> {
        let requirement = VersionRequirement::parse(requirement)?;
        let parsed = Self::parse_versions(versions)?;
        Ok(requirement.max_satisfying(&parsed).cloned())
    }

    fn parse_versions(versions: &[&str]) -> Result<Vec<Version>, ParseError> {
        versions.iter().map(|v| Self::parse_version(v)).collect()
    }
}
