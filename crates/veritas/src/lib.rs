//! Semantic version specifications and requirements
//!
//! Parses constraints such as `^1.2.3`, `~1.2`, `1.*` or `>=1.0.0, <2.0.0`,
//! resolves each into an inclusive minimum and exclusive maximum version, and
//! checks concrete versions against them.
//!
//! Caret, tilde and the bare form share one rule: the range ends just past
//! the most specific part given, so `^0.1` allows `0.1.x` and `^1` allows `1.x.y`.

mod bound;
mod error;
mod operator;
mod part;
mod requirement;
mod spec;
mod veritas;

pub use bound::{BoundVersion, Bounds};
pub use error::ParseError;
pub use operator::{InvalidOperatorError, Operator};
pub use part::{SpecPart, VersionSpecPart, WILDCARD};
pub use requirement::VersionRequirement;
pub use semver::Version;
pub use spec::VersionSpec;
pub use veritas::Veritas;
