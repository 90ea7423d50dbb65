//! Version broken into parts, as per the semantic versioning specification.

/// Kind of a prerelease identifier.
///
/// The kind decides how two identifiers at the same position compare:
/// numeric identifiers compare as integers, alphanumeric ones as ASCII
/// strings, and a numeric identifier always orders below an alphanumeric
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Every character is an ASCII digit.
    Numeric,
    /// At least one character is a letter or hyphen.
    Alphanumeric,
}

/// One dot-separated token of the prerelease section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseId {
    text: String,
    kind: IdKind,
}

impl PrereleaseId {
    /// Classify a raw identifier: numeric iff every character is an ASCII digit.
    pub fn classify(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            IdKind::Numeric
        } else {
            IdKind::Alphanumeric
        };
        PrereleaseId { text, kind }
    }

    /// Get the identifier text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the identifier kind.
    pub fn kind(&self) -> IdKind {
        self.kind
    }
}

/// A version string broken into its five components.
///
/// Instances are immutable: the parser and the modifier always hand out a
/// brand-new value and never touch an existing one. Equality is structural
/// over all five fields; precedence equality (which ignores build
/// metadata) is the comparator's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionData {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease_ids: Vec<PrereleaseId>,
    build_ids: Vec<String>,
}

impl VersionData {
    /// Assemble a version from already-validated components.
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease_ids: Vec<PrereleaseId>,
        build_ids: Vec<String>,
    ) -> Self {
        VersionData {
            major,
            minor,
            patch,
            prerelease_ids,
            build_ids,
        }
    }

    /// Major version, changes only on incompatible API modifications.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor version, changes on backwards-compatible API modifications.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch version, changes only on bugfixes.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers in left-to-right comparison order.
    pub fn prerelease_ids(&self) -> &[PrereleaseId] {
        &self.prerelease_ids
    }

    /// Build identifiers. These carry no precedence meaning.
    pub fn build_ids(&self) -> &[String] {
        &self.build_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(PrereleaseId::classify("0").kind(), IdKind::Numeric);
        assert_eq!(PrereleaseId::classify("123").kind(), IdKind::Numeric);
        assert_eq!(PrereleaseId::classify("alpha").kind(), IdKind::Alphanumeric);
        assert_eq!(PrereleaseId::classify("1a").kind(), IdKind::Alphanumeric);
        assert_eq!(PrereleaseId::classify("-").kind(), IdKind::Alphanumeric);
        assert_eq!(PrereleaseId::classify("").kind(), IdKind::Alphanumeric);
    }

    #[test]
    fn test_structural_equality() {
        let a = VersionData::new(1, 2, 3, vec![PrereleaseId::classify("rc")], vec!["b1".into()]);
        let b = VersionData::new(1, 2, 3, vec![PrereleaseId::classify("rc")], vec!["b1".into()]);
        let c = VersionData::new(1, 2, 3, vec![PrereleaseId::classify("rc")], vec!["b2".into()]);
        assert_eq!(a, b);
        // Structural equality sees build identifiers even though precedence does not.
        assert_ne!(a, c);
    }
}
