//! User-facing version value type binding parser, comparator and modifier together.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::modifier::{ModificationError, Modifier};
use crate::parser::{ParseError, Parser};
use crate::version_data::{PrereleaseId, VersionData};

/// A semver 2.0.0 version.
///
/// Thin composition over [`Parser`], [`Comparator`] and [`Modifier`]: the
/// facade owns a [`VersionData`] and no logic of its own. Every
/// modifying-looking method returns a new `Version` and leaves the
/// receiver untouched.
///
/// Equality and ordering follow precedence, so two versions differing only
/// in build metadata compare equal. For the same reason there is no
/// `Hash` implementation.
#[derive(Debug, Clone)]
pub struct Version {
    data: VersionData,
}

impl Version {
    /// Parse a version string.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        Ok(Version {
            data: Parser::parse(text)?,
        })
    }

    /// Borrow the underlying parsed data.
    pub fn data(&self) -> &VersionData {
        &self.data
    }

    /// Get major version.
    pub fn major(&self) -> u64 {
        self.data.major()
    }

    /// Get minor version.
    pub fn minor(&self) -> u64 {
        self.data.minor()
    }

    /// Get patch version.
    pub fn patch(&self) -> u64 {
        self.data.patch()
    }

    /// Prerelease section as a dot-joined string, empty when absent.
    pub fn prerelease(&self) -> String {
        self.data
            .prerelease_ids()
            .iter()
            .map(|id| id.text())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Build section as a dot-joined string, empty when absent.
    pub fn build(&self) -> String {
        self.data.build_ids().join(".")
    }

    /// Copy of this version with the major component set to `major`.
    pub fn set_major(&self, major: i64) -> Result<Version, ModificationError> {
        Modifier::set_major(&self.data, major).map(Version::from)
    }

    /// Copy of this version with the minor component set to `minor`.
    pub fn set_minor(&self, minor: i64) -> Result<Version, ModificationError> {
        Modifier::set_minor(&self.data, minor).map(Version::from)
    }

    /// Copy of this version with the patch component set to `patch`.
    pub fn set_patch(&self, patch: i64) -> Result<Version, ModificationError> {
        Modifier::set_patch(&self.data, patch).map(Version::from)
    }

    /// Copy of this version with the prerelease section set to `fragment`.
    pub fn set_prerelease(&self, fragment: &str) -> Result<Version, ParseError> {
        let ids = parse_prerelease_fragment(fragment)?;
        Ok(Modifier::set_prerelease(&self.data, ids).into())
    }

    /// Copy of this version with the build section set to `fragment`.
    pub fn set_build(&self, fragment: &str) -> Result<Version, ParseError> {
        let ids = parse_build_fragment(fragment)?;
        Ok(Modifier::set_build(&self.data, ids).into())
    }

    /// Copy with the major component set and lower-priority components reset.
    pub fn reset_major(&self, major: i64) -> Result<Version, ModificationError> {
        Modifier::reset_major(&self.data, major).map(Version::from)
    }

    /// Copy with the minor component set and lower-priority components reset.
    pub fn reset_minor(&self, minor: i64) -> Result<Version, ModificationError> {
        Modifier::reset_minor(&self.data, minor).map(Version::from)
    }

    /// Copy with the patch component set and lower-priority components reset.
    pub fn reset_patch(&self, patch: i64) -> Result<Version, ModificationError> {
        Modifier::reset_patch(&self.data, patch).map(Version::from)
    }

    /// Copy with the prerelease section set and build metadata cleared.
    pub fn reset_prerelease(&self, fragment: &str) -> Result<Version, ParseError> {
        let ids = parse_prerelease_fragment(fragment)?;
        Ok(Modifier::reset_prerelease(&self.data, ids).into())
    }

    /// Copy with the build section set. Nothing has lower priority than
    /// build, so this matches [`Version::set_build`].
    pub fn reset_build(&self, fragment: &str) -> Result<Version, ParseError> {
        let ids = parse_build_fragment(fragment)?;
        Ok(Modifier::reset_build(&self.data, ids).into())
    }

    /// Increment major by `by` (1 is the conventional step), resetting
    /// lower-priority components. A result below zero is rejected by the
    /// underlying reset.
    pub fn inc_major(&self, by: i64) -> Result<Version, ModificationError> {
        self.reset_major(bumped(self.major(), by, "major")?)
    }

    /// Increment minor by `by`, resetting lower-priority components.
    pub fn inc_minor(&self, by: i64) -> Result<Version, ModificationError> {
        self.reset_minor(bumped(self.minor(), by, "minor")?)
    }

    /// Increment patch by `by`, resetting lower-priority components.
    pub fn inc_patch(&self, by: i64) -> Result<Version, ModificationError> {
        self.reset_patch(bumped(self.patch(), by, "patch")?)
    }
}

/// Identifier-list conversion is delegated to the parser by way of a
/// synthetic version string; there is exactly one identifier grammar.
fn parse_prerelease_fragment(fragment: &str) -> Result<Vec<PrereleaseId>, ParseError> {
    let data = Parser::parse(&format!("0.0.0-{fragment}"))?;
    // A '+' inside the fragment would smuggle in a build section.
    if !data.build_ids().is_empty() {
        return Err(ParseError::InvalidCharacter('+'));
    }
    Ok(data.prerelease_ids().to_vec())
}

fn parse_build_fragment(fragment: &str) -> Result<Vec<String>, ParseError> {
    let data = Parser::parse(&format!("0.0.0+{fragment}"))?;
    Ok(data.build_ids().to_vec())
}

/// New component value for an increment, as fed to the matching reset.
fn bumped(current: u64, by: i64, component: &'static str) -> Result<i64, ModificationError> {
    i64::try_from(current)
        .ok()
        .and_then(|value| value.checked_add(by))
        .ok_or(ModificationError::IncrementOutOfRange(component))
}

impl From<VersionData> for Version {
    fn from(data: VersionData) -> Self {
        Version { data }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::new(s)
    }
}

impl Default for Version {
    /// The zero version, "0.0.0".
    fn default() -> Self {
        Version::from(VersionData::new(0, 0, 0, Vec::new(), Vec::new()))
    }
}

impl fmt::Display for Version {
    /// Canonical semver format: `X.Y.Z[-PRERELEASE][+BUILD]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())?;
        let prerelease = self.prerelease();
        if !prerelease.is_empty() {
            write!(f, "-{prerelease}")?;
        }
        let build = self.build();
        if !build.is_empty() {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(&self.data, &other.data) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(&self.data, &other.data)
    }
}
