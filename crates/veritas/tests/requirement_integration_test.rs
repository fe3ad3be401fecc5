/// Integration tests for the public parsing and matching API
///
/// These tests exercise specifications and requirements only through the
/// crate's exported types.

use std::cmp::Ordering;

use veritas::{Bounds, Operator, ParseError, SpecPart, Version, VersionRequirement, VersionSpec, Veritas};

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

fn bounds_of(specification: &str) -> (Version, Option<Version>) {
    let spec = VersionSpec::parse(specification).unwrap();
    (spec.min().clone(), spec.max().cloned())
}

#[test]
fn test_boundary_table() {
    assert_eq!(bounds_of("*"), (v("0.0.0"), None));
    for specification in ["1", "^1", "~1", "1.*"] {
        assert_eq!(bounds_of(specification), (v("1.0.0"), Some(v("2.0.0"))), "{}", specification);
    }
    assert_eq!(bounds_of("=1"), (v("1.0.0"), Some(v("1.0.1"))));
    assert_eq!(bounds_of("1.2"), (v("1.2.0"), Some(v("1.3.0"))));
    assert_eq!(bounds_of(">1.2"), (v("1.3.0"), None));
    assert_eq!(bounds_of(">=1.2.3"), (v("1.2.3"), None));
    assert_eq!(bounds_of("<1.2.3"), (v("0.0.0"), Some(v("1.2.3"))));
    assert_eq!(bounds_of("<=1.2"), (v("0.0.0"), Some(v("1.3.0"))));
}

#[test]
fn test_rejections() {
    for specification in ["", "^*", ">=*", "1.", "1.2.3.4"] {
        assert!(matches!(
            VersionSpec::parse(specification),
            Err(ParseError::InvalidSpecification(_))
        ));
    }
}

#[test]
fn test_requirement_combination() {
    let req = VersionRequirement::parse("1, <2").unwrap();
    assert_eq!(req.constraints(), &Bounds::new(v("1.0.0"), Some(v("2.0.0"))));
    assert!(req.check(&v("1.0.0")));
    assert!(!req.check(&v("0.9.0")));
    assert!(!req.check(&v("2.0.0")));

    assert!(matches!(
        VersionRequirement::parse("1, >1"),
        Err(ParseError::ConflictingBounds { .. })
    ));
}

#[test]
fn test_ordering_matches_check() {
    let req = VersionRequirement::parse(">=1.2, <1.5").unwrap();
    let versions = ["0.0.0", "1.1.9", "1.2.0", "1.4.99", "1.5.0-rc.1", "1.5.0", "3.0.0"];

    for version in versions.iter().map(|s| v(s)) {
        let ordering = req.compare(&version);
        assert_eq!(req.check(&version), ordering == Ordering::Equal, "{}", version);
        if version < v("1.2.0") {
            assert_eq!(ordering, Ordering::Less, "{}", version);
        } else if version >= v("1.5.0") {
            assert_eq!(ordering, Ordering::Greater, "{}", version);
        } else {
            assert_eq!(ordering, Ordering::Equal, "{}", version);
        }
    }
}

#[test]
fn test_idempotence() {
    for requirement in ["^1.2.3-alpha+build", ">=0.1, <0.2.*", "~1.*, 1.2.3-*+*", "*"] {
        let first = VersionRequirement::parse(requirement).unwrap();
        let second = VersionRequirement::parse(&first.to_string()).unwrap();
        assert_eq!(first, second);
        for (a, b) in first.specs().iter().zip(second.specs()) {
            assert_eq!(VersionSpec::parse(&a.to_string()).unwrap(), *b);
        }
    }
}

#[test]
fn test_spec_accessors() {
    let spec: VersionSpec = "<=2.*".parse().unwrap();
    assert_eq!(spec.op(), Some(Operator::LessThanOrEqual));
    assert_eq!(spec.major(), &SpecPart::Value(2));
    assert!(spec.minor().is_wildcard());
    assert!(!spec.patch().is_specified());
    assert_eq!(spec.bounds().to_string(), ">=0.0.0, <3.0.0");
}

#[test]
fn test_facade() {
    assert!(Veritas::satisfies("1.4.0", ">=1.2, <1.5").unwrap());
    assert!(!Veritas::satisfies("1.5.0", ">=1.2, <1.5").unwrap());
    let requirement = Veritas::parse_requirement("^2").unwrap();
    assert_eq!(requirement.max(), Some(&v("3.0.0")));
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VersionSpec>();
    assert_send_sync::<VersionRequirement>();
    assert_send_sync::<ParseError>();
}
