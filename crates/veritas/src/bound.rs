//! Version boundaries and the arithmetic used to compute them

use std::cmp::Ordering;
use std::fmt;

use semver::{BuildMetadata, Prerelease, Version};

/// Version arithmetic needed to resolve specification boundaries.
///
/// Every bump returns the smallest version that is greater than all versions
/// sharing the receiver's prefix at that level. `None` means the successor is
/// not representable.
pub trait BoundVersion: Ord + Clone + Sized {
    /// The lowest version (0.0.0)
    fn lowest() -> Self;

    /// Build a version from numeric parts and optional prerelease/build identifiers
    fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Option<Self>;

    fn bump_major(&self) -> Option<Self>;

    fn bump_minor(&self) -> Option<Self>;

    fn bump_patch(&self) -> Option<Self>;

    /// Same major.minor.patch, prerelease `{identifier}.1`, no build metadata
    fn bump_prerelease(&self, identifier: &str) -> Option<Self>;

    /// Same version and prerelease, build metadata `{identifier}.1`
    fn bump_build(&self, identifier: &str) -> Option<Self>;
}

fn next_identifier(identifier: &str) -> String {
    format!("{}.1", identifier)
}

impl BoundVersion for Version {
    fn lowest() -> Self {
        Version::new(0, 0, 0)
    }

    fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Option<Self> {
        let mut version = Version::new(major, minor, patch);
        if let Some(pre) = prerelease {
            version.pre = Prerelease::new(pre).ok()?;
        }
        if let Some(build) = build {
            version.build = BuildMetadata::new(build).ok()?;
        }
        Some(version)
    }

    fn bump_major(&self) -> Option<Self> {
        Some(Version::new(self.major.checked_add(1)?, 0, 0))
    }

    fn bump_minor(&self) -> Option<Self> {
        Some(Version::new(self.major, self.minor.checked_add(1)?, 0))
    }

    fn bump_patch(&self) -> Option<Self> {
        Some(Version::new(self.major, self.minor, self.patch.checked_add(1)?))
    }

    fn bump_prerelease(&self, identifier: &str) -> Option<Self> {
        let mut version = Version::new(self.major, self.minor, self.patch);
        version.pre = Prerelease::new(&next_identifier(identifier)).ok()?;
        Some(version)
    }

    fn bump_build(&self, identifier: &str) -> Option<Self> {
        let mut version = Version::new(self.major, self.minor, self.patch);
        version.pre = self.pre.clone();
        version.build = BuildMetadata::new(&next_identifier(identifier)).ok()?;
        Some(version)
    }
}

/// An inclusive minimum and an exclusive, possibly unbounded, maximum
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bounds<V = Version> {
    min: V,
    max: Option<V>,
}

impl<V: Ord> Bounds<V> {
    pub fn new(min: V, max: Option<V>) -> Self {
        Bounds { min, max }
    }

    /// The lowest version in the range (inclusive)
    pub fn min(&self) -> &V {
        &self.min
    }

    /// The first version above the range (exclusive), `None` if unbounded
    pub fn max(&self) -> Option<&V> {
        self.max.as_ref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Check that at least one version lies between the bounds
    pub fn is_satisfiable(&self) -> bool {
        match &self.max {
            Some(max) => self.min < *max,
            None => true,
        }
    }

    /// Locate a version relative to the range: `Less` below the minimum,
    /// `Greater` at or above the maximum, `Equal` inside.
    pub fn compare(&self, version: &V) -> Ordering {
        if *version < self.min {
            return Ordering::Less;
        }

        // The maximum is exclusive, so reaching it is already outside
        if let Some(max) = &self.max {
            if version >= max {
                return Ordering::Greater;
            }
        }

        Ordering::Equal
    }

    pub fn contains(&self, version: &V) -> bool {
        self.compare(version) == Ordering::Equal
    }
}

impl<V: Ord + Clone> Bounds<V> {
    /// Intersect ranges: the highest minimum and the lowest finite maximum.
    /// Returns `None` for an empty iterator.
    pub fn intersect<'a, I>(bounds: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Bounds<V>>,
        V: 'a,
    {
        let mut bounds = bounds.into_iter();
        let first = bounds.next()?.clone();

        Some(bounds.fold(first, |mut combined, bound| {
            if bound.min > combined.min {
                combined.min = bound.min.clone();
            }

            if let Some(max) = &bound.max {
                match &combined.max {
                    Some(current) if current <= max => {}
                    _ => combined.max = Some(max.clone()),
                }
            }

            combined
        }))
    }
}

impl<V: fmt::Display> fmt::Display for Bounds<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.max {
            Some(max) => write!(f, ">={}, <{}", self.min, max),
            None => write!(f, ">={}", self.min),
        }
    }
}
