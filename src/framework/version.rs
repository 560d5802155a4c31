//! # Version Gate
//!
//! Appliance releases occasionally move a whole method namespace
//! (`zfs.snapshot.*` became `pool.snapshot.*` in 25.10). The gate picks the
//! wire name for a logical operation from the negotiated [`Version`].
//!
//! A namespace's prefix is chosen by a plain function `fn(Version) -> &str`,
//! so a resource can grow more than one threshold later without touching
//! the callers. [`VersionGate`] is the single-threshold case every gated
//! namespace uses today.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Appliance release as a `(major, minor)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// True iff `self.major > major`, or majors match and `self.minor >= minor`.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Parses the release out of the strings `system.version` returns.
    ///
    /// Accepts bare releases (`"25.10.1"`) and product-prefixed ones
    /// (`"TrueNAS-SCALE-24.10.2"`, `"TrueNAS-25.04.0"`,
    /// `"25.10-MASTER-20250101"`). Only major and minor are kept.
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        raw.split('-')
            .find_map(|token| {
                let mut parts = token.split('.');
                let major = parts.next()?.parse().ok()?;
                let minor = parts.next()?.parse().ok()?;
                Some(Self { major, minor })
            })
            .ok_or_else(|| VersionParseError(raw.to_string()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The version string carried no `major.minor` component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised appliance version: {0:?}")]
pub struct VersionParseError(pub String);

/// Two-prefix gate keyed by one threshold.
///
/// Below `threshold` the namespace lives under `legacy`; at or above it,
/// under `current`. The threshold applies to every operation in the
/// namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGate {
    pub threshold: Version,
    pub legacy: &'static str,
    pub current: &'static str,
}

impl VersionGate {
    pub const fn new(threshold: Version, legacy: &'static str, current: &'static str) -> Self {
        Self {
            threshold,
            legacy,
            current,
        }
    }

    pub fn prefix(&self, version: Version) -> &'static str {
        if version.at_least(self.threshold.major, self.threshold.minor) {
            self.current
        } else {
            self.legacy
        }
    }

    /// Full wire method name, e.g. `pool.snapshot.create`.
    pub fn resolve(&self, version: Version, operation: &str) -> String {
        format!("{}.{}", self.prefix(version), operation)
    }
}

/// Where a resource's methods live.
#[derive(Debug, Clone, Copy)]
pub enum Namespace {
    /// Same prefix on every release.
    Fixed(&'static str),
    /// Prefix chosen per release by a pure strategy function.
    Versioned(fn(Version) -> &'static str),
}

impl Namespace {
    pub fn prefix(&self, version: Version) -> &'static str {
        match self {
            Namespace::Fixed(prefix) => prefix,
            Namespace::Versioned(strategy) => strategy(version),
        }
    }

    pub fn resolve(&self, version: Version, operation: &str) -> String {
        format!("{}.{}", self.prefix(version), operation)
    }
}
