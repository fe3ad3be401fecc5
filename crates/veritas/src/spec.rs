//! Single version specifications (`^1.2`, `>=1.0.0-rc.1`, `1.*`) and their boundaries

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use semver::Version;

use crate::bound::{BoundVersion, Bounds};
use crate::error::ParseError;
use crate::operator::Operator;
use crate::part::{SpecPart, VersionSpecPart};

lazy_static! {
    static ref NUMERIC_REGEX: &'static str = r"0|[1-9][0-9]*";

    static ref PRERELEASE_IDENTIFIER_REGEX: &'static str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";

    static ref BUILD_REGEX: &'static str = r"[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*";

    // Lower parts nest inside higher ones, so a part can only appear after its parent
    static ref SPECIFICATION_RE: Regex = Regex::new(&format!(
        concat!(
            r"^(?:(?P<op>>=|<=|[=~^><])?",
            r"(?P<major>{num})",
            r"(?:\.(?P<minor>{num})",
            r"(?:\.(?P<patch>{num})",
            r"(?:-(?P<prerelease>{ident}(?:\.{ident})*)|-(?P<wild_prerelease>\*))?",
            r"(?:\+(?P<build>{build})|\+(?P<wild_build>\*))?",
            r"|\.(?P<wild_patch>\*))?",
            r"|\.(?P<wild_minor>\*))?",
            r"|(?P<wild_major>\*))$",
        ),
        num = *NUMERIC_REGEX,
        ident = *PRERELEASE_IDENTIFIER_REGEX,
        build = *BUILD_REGEX,
    )).unwrap();
}

/// The parts of a specification as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Pattern {
    op: Option<Operator>,
    major: VersionSpecPart,
    minor: VersionSpecPart,
    patch: VersionSpecPart,
    prerelease: SpecPart<String>,
    build: SpecPart<String>,
}

impl Pattern {
    fn from_captures(captures: &Captures<'_>, specification: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidSpecification(specification.to_string());

        let op = captures
            .name("op")
            .map(|m| m.as_str().parse::<Operator>())
            .transpose()
            .map_err(|_| invalid())?;

        Ok(Pattern {
            op,
            major: numeric_part(captures, "major", "wild_major").ok_or_else(invalid)?,
            minor: numeric_part(captures, "minor", "wild_minor").ok_or_else(invalid)?,
            patch: numeric_part(captures, "patch", "wild_patch").ok_or_else(invalid)?,
            prerelease: label_part(captures, "prerelease", "wild_prerelease"),
            build: label_part(captures, "build", "wild_build"),
        })
    }

    /// The version the specification names, with gaps read as zero/absent
    fn base<V: BoundVersion>(&self) -> Option<V> {
        V::from_parts(
            self.major.value_or_zero(),
            self.minor.value_or_zero(),
            self.patch.value_or_zero(),
            self.prerelease.as_deref(),
            self.build.as_deref(),
        )
    }

    /// Smallest version above every version that shares the concrete prefix.
    ///
    /// The bump happens at the level just above the first gap among minor,
    /// patch, prerelease and build. Without any gap the build is bumped.
    fn next_after_prefix<V: BoundVersion>(&self, base: &V) -> Option<V> {
        if self.minor.is_gap() {
            return base.bump_major();
        }
        if self.patch.is_gap() {
            return base.bump_minor();
        }

        let Some(prerelease) = self.prerelease.as_deref() else {
            return base.bump_patch();
        };

        match self.build.as_deref() {
            Some(build) => base.bump_build(build),
            None => base.bump_prerelease(prerelease),
        }
    }

    /// Smallest version above the exact version named
    fn next_after_exact<V: BoundVersion>(&self, base: &V) -> Option<V> {
        if let Some(build) = self.build.as_deref() {
            return base.bump_build(build);
        }
        if let Some(prerelease) = self.prerelease.as_deref() {
            return base.bump_prerelease(prerelease);
        }
        base.bump_patch()
    }

    /// Resolve the inclusive minimum and exclusive maximum.
    /// Returns `None` when a boundary is not representable by `V`.
    fn resolve<V: BoundVersion>(&self) -> Option<Bounds<V>> {
        let base = self.base::<V>()?;

        let min = match self.op {
            Some(Operator::LessThan | Operator::LessThanOrEqual) => V::lowest(),
            Some(Operator::GreaterThan) => self.next_after_prefix(&base)?,
            _ => base.clone(),
        };

        let max = match self.op {
            Some(Operator::GreaterThan | Operator::GreaterThanOrEqual) => None,
            _ if self.major.is_gap() => None,
            Some(Operator::LessThan) => Some(base),
            Some(Operator::Equal) => Some(self.next_after_exact(&base)?),
            None | Some(Operator::Caret | Operator::Tilde | Operator::LessThanOrEqual) => {
                Some(self.next_after_prefix(&base)?)
            }
        };

        Some(Bounds::new(min, max))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.op {
            write!(f, "{}", op)?;
        }

        write!(f, "{}", self.major)?;
        if self.minor.is_specified() {
            write!(f, ".{}", self.minor)?;
        }
        if self.patch.is_specified() {
            write!(f, ".{}", self.patch)?;
        }
        if self.prerelease.is_specified() {
            write!(f, "-{}", self.prerelease)?;
        }
        if self.build.is_specified() {
            write!(f, "+{}", self.build)?;
        }

        Ok(())
    }
}

/// `None` when the digits do not fit in a u64
fn numeric_part(captures: &Captures<'_>, group: &str, wild_group: &str) -> Option<VersionSpecPart> {
    if let Some(m) = captures.name(group) {
        return m.as_str().parse().ok().map(SpecPart::Value);
    }
    if captures.name(wild_group).is_some() {
        return Some(SpecPart::Wildcard);
    }
    Some(SpecPart::Unspecified)
}

fn label_part(captures: &Captures<'_>, group: &str, wild_group: &str) -> SpecPart<String> {
    if let Some(m) = captures.name(group) {
        SpecPart::Value(m.as_str().to_string())
    } else if captures.name(wild_group).is_some() {
        SpecPart::Wildcard
    } else {
        SpecPart::Unspecified
    }
}

/// A single semantic version specification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    pattern: Pattern,
    bounds: Bounds,
}

impl VersionSpec {
    /// Parse a version specification such as `^1.2`, `>=1.0.0-rc.1` or `*`.
    ///
    /// The text is used as is; surrounding whitespace is an error.
    pub fn parse(specification: &str) -> Result<Self, ParseError> {
        let captures = SPECIFICATION_RE
            .captures(specification)
            .ok_or_else(|| ParseError::InvalidSpecification(specification.to_string()))?;

        let pattern = Pattern::from_captures(&captures, specification)?;
        let bounds = pattern
            .resolve::<Version>()
            .ok_or_else(|| ParseError::UnrepresentableBound(specification.to_string()))?;

        log::trace!("Parsed version specification {} ({})", specification, bounds);

        Ok(VersionSpec { pattern, bounds })
    }

    pub fn op(&self) -> Option<Operator> {
        self.pattern.op
    }

    pub fn major(&self) -> &VersionSpecPart {
        &self.pattern.major
    }

    pub fn minor(&self) -> &VersionSpecPart {
        &self.pattern.minor
    }

    pub fn patch(&self) -> &VersionSpecPart {
        &self.pattern.patch
    }

    pub fn prerelease(&self) -> &SpecPart<String> {
        &self.pattern.prerelease
    }

    pub fn build(&self) -> &SpecPart<String> {
        &self.pattern.build
    }

    /// Minimum version (inclusive) that satisfies the specification
    pub fn min(&self) -> &Version {
        self.bounds.min()
    }

    /// Maximum version (exclusive) that satisfies the specification, `None` if unbounded
    pub fn max(&self) -> Option<&Version> {
        self.bounds.max()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// `Less` if the version is below the specification, `Greater` if above, `Equal` if it satisfies it
    pub fn compare(&self, version: &Version) -> Ordering {
        self.bounds.compare(version)
    }

    /// Check if the version satisfies the specification
    pub fn check(&self, version: &Version) -> bool {
        self.compare(version) == Ordering::Equal
    }
}

impl FromStr for VersionSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionSpec::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pattern, f)
    }
}
