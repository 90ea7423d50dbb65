//! Non-destructive modification of parsed versions.

use thiserror::Error;

use crate::version_data::{PrereleaseId, VersionData};

/// Error raised when a requested numeric component value is unusable.
///
/// The source version is guaranteed untouched whenever one of these comes
/// back; a failed modification produces no version at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModificationError {
    /// A requested major/minor/patch value was negative.
    #[error("{0} version cannot be less than 0")]
    NegativeComponent(&'static str),
    /// An increment landed outside the representable component range.
    #[error("{0} version increment out of range")]
    IncrementOutOfRange(&'static str),
}

/// Produces modified copies of [`VersionData`] values.
///
/// Every operation returns a new value and leaves its input intact. The
/// `set_*` family replaces exactly one component; the `reset_*` family
/// additionally clears every lower-priority component to its zero/empty
/// value.
pub struct Modifier;

impl Modifier {
    /// Set major version, leaving all other components unchanged.
    pub fn set_major(source: &VersionData, major: i64) -> Result<VersionData, ModificationError> {
        let major = checked_component("major", major)?;
        Ok(VersionData::new(
            major,
            source.minor(),
            source.patch(),
            source.prerelease_ids().to_vec(),
            source.build_ids().to_vec(),
        ))
    }

    /// Set minor version, leaving all other components unchanged.
    pub fn set_minor(source: &VersionData, minor: i64) -> Result<VersionData, ModificationError> {
        let minor = checked_component("minor", minor)?;
        Ok(VersionData::new(
            source.major(),
            minor,
            source.patch(),
            source.prerelease_ids().to_vec(),
            source.build_ids().to_vec(),
        ))
    }

    /// Set patch version, leaving all other components unchanged.
    pub fn set_patch(source: &VersionData, patch: i64) -> Result<VersionData, ModificationError> {
        let patch = checked_component("patch", patch)?;
        Ok(VersionData::new(
            source.major(),
            source.minor(),
            patch,
            source.prerelease_ids().to_vec(),
            source.build_ids().to_vec(),
        ))
    }

    /// Set prerelease identifiers, leaving all other components unchanged.
    pub fn set_prerelease(source: &VersionData, prerelease: Vec<PrereleaseId>) -> VersionData {
        VersionData::new(
            source.major(),
            source.minor(),
            source.patch(),
            prerelease,
            source.build_ids().to_vec(),
        )
    }

    /// Set build identifiers, leaving all other components unchanged.
    pub fn set_build(source: &VersionData, build: Vec<String>) -> VersionData {
        VersionData::new(
            source.major(),
            source.minor(),
            source.patch(),
            source.prerelease_ids().to_vec(),
            build,
        )
    }

    /// Set major version, resetting all lower-priority components.
    pub fn reset_major(_source: &VersionData, major: i64) -> Result<VersionData, ModificationError> {
        let major = checked_component("major", major)?;
        Ok(VersionData::new(major, 0, 0, Vec::new(), Vec::new()))
    }

    /// Set minor version, resetting all lower-priority components.
    pub fn reset_minor(source: &VersionData, minor: i64) -> Result<VersionData, ModificationError> {
        let minor = checked_component("minor", minor)?;
        Ok(VersionData::new(
            source.major(),
            minor,
            0,
            Vec::new(),
            Vec::new(),
        ))
    }

    /// Set patch version, resetting all lower-priority components.
    pub fn reset_patch(source: &VersionData, patch: i64) -> Result<VersionData, ModificationError> {
        let patch = checked_component("patch", patch)?;
        Ok(VersionData::new(
            source.major(),
            source.minor(),
            patch,
            Vec::new(),
            Vec::new(),
        ))
    }

    /// Set prerelease identifiers, clearing build metadata.
    pub fn reset_prerelease(source: &VersionData, prerelease: Vec<PrereleaseId>) -> VersionData {
        VersionData::new(
            source.major(),
            source.minor(),
            source.patch(),
            prerelease,
            Vec::new(),
        )
    }

    /// Set build identifiers. Nothing has lower priority than build, so
    /// this matches [`Modifier::set_build`].
    pub fn reset_build(source: &VersionData, build: Vec<String>) -> VersionData {
        Self::set_build(source, build)
    }
}

fn checked_component(component: &'static str, value: i64) -> Result<u64, ModificationError> {
    u64::try_from(value).map_err(|_| ModificationError::NegativeComponent(component))
}
