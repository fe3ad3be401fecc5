//! Requirements: comma-separated specifications that must all hold

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::bound::Bounds;
use crate::error::ParseError;
use crate::spec::VersionSpec;

/// A set of version specifications that must all be satisfied
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRequirement {
    specs: Vec<VersionSpec>,
    constraints: Bounds,
}

impl VersionRequirement {
    /// Parse a requirement such as `>=1.2, <1.5`.
    ///
    /// Each comma-separated token is trimmed and parsed as a [`VersionSpec`].
    /// Fails if a token is invalid or if no version can satisfy every token.
    /// An empty token reports the whole requirement.
    pub fn parse(requirement: &str) -> Result<Self, ParseError> {
        if requirement.trim().is_empty() {
            return Err(ParseError::EmptyRequirement);
        }

        let specs = requirement
            .split(',')
            .map(str::trim)
            .map(|spec| match spec {
                "" => Err(ParseError::InvalidSpecification(requirement.to_string())),
                spec => VersionSpec::parse(spec),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_specs(specs)
    }

    /// Combine already parsed specifications.
    ///
    /// An empty list is rejected since it names no requirement.
    pub fn from_specs(specs: Vec<VersionSpec>) -> Result<Self, ParseError> {
        let constraints = Self::combine(&specs)?;
        let requirement = VersionRequirement { specs, constraints };
        requirement.validate()?;
        Ok(requirement)
    }

    fn combine(specs: &[VersionSpec]) -> Result<Bounds, ParseError> {
        Bounds::intersect(specs.iter().map(VersionSpec::bounds)).ok_or(ParseError::EmptyRequirement)
    }

    /// The specifications in the order they were written
    pub fn specs(&self) -> &[VersionSpec] {
        &self.specs
    }

    /// Minimum (inclusive) and maximum (exclusive) versions imposed by the requirement
    pub fn constraints(&self) -> &Bounds {
        &self.constraints
    }

    pub fn min(&self) -> &Version {
        self.constraints.min()
    }

    pub fn max(&self) -> Option<&Version> {
        self.constraints.max()
    }

    /// Check that the specifications do not conflict.
    ///
    /// Recomputes the combined range from the specifications and fails when
    /// the minimum is not strictly below a finite maximum.
    pub fn validate(&self) -> Result<(), ParseError> {
        let constraints = Self::combine(&self.specs)?;

        if let Some(max) = constraints.max() {
            if constraints.min() >= max {
                log::debug!("Rejecting requirement {}: {}", self, constraints);
                return Err(ParseError::ConflictingBounds {
                    requirement: self.to_string(),
                    min: constraints.min().clone(),
                    max: max.clone(),
                });
            }
        }

        Ok(())
    }

    /// `Less` if the version is below the requirement, `Greater` if above, `Equal` if it satisfies it
    pub fn compare(&self, version: &Version) -> Ordering {
        self.constraints.compare(version)
    }

    /// Check if the version satisfies the requirement
    pub fn check(&self, version: &Version) -> bool {
        self.compare(version) == Ordering::Equal
    }

    /// All versions that satisfy the requirement, in input order
    pub fn satisfied_by<'a, I>(&self, versions: I) -> Vec<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().filter(|v| self.check(v)).collect()
    }

    /// The highest version that satisfies the requirement
    pub fn max_satisfying<'a, I>(&self, versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().filter(|v| self.check(v)).max()
    }
}

impl FromStr for VersionRequirement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRequirement::parse(s)
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}
