//! Semantic versioning 2.0.0 library
//!
//! This crate parses version strings into an immutable data structure,
//! orders them by semver precedence, and derives modified versions
//! non-destructively. [`Version`] is the everyday entry point; the
//! underlying [`Parser`], [`Comparator`] and [`Modifier`] are exposed for
//! callers that want to work on [`VersionData`] directly.

mod comparator;
mod modifier;
mod parser;
mod version;
mod version_data;

pub use comparator::Comparator;
pub use modifier::{ModificationError, Modifier};
pub use parser::{ParseError, Parser};
pub use version::Version;
pub use version_data::{IdKind, PrereleaseId, VersionData};
