//! Precedence ordering between parsed versions.

use std::cmp::Ordering;

use crate::version_data::{IdKind, PrereleaseId, VersionData};

/// Computes semver 2.0.0 precedence between two parsed versions.
///
/// Precedence is a strict total order: major, minor and patch compare
/// numerically, a release outranks any of its prereleases, and prerelease
/// identifiers compare position by position. Build metadata never
/// participates, so two versions differing only in build compare equal.
pub struct Comparator;

impl Comparator {
    /// Three-way precedence between two versions.
    pub fn compare(a: &VersionData, b: &VersionData) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| Self::compare_prerelease(a.prerelease_ids(), b.prerelease_ids()))
    }

    fn compare_prerelease(a: &[PrereleaseId], b: &[PrereleaseId]) -> Ordering {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            // A plain release has higher precedence than any prerelease of it.
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        for (x, y) in a.iter().zip(b) {
            let ordering = Self::compare_identifier(x, y);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        // All shared positions equal: the strict prefix is the lower version.
        a.len().cmp(&b.len())
    }

    fn compare_identifier(x: &PrereleaseId, y: &PrereleaseId) -> Ordering {
        match (x.kind(), y.kind()) {
            // Numeric identifiers carry no leading zeros, so more digits
            // means a bigger number and equal lengths compare digit-wise.
            (IdKind::Numeric, IdKind::Numeric) => x
                .text()
                .len()
                .cmp(&y.text().len())
                .then_with(|| x.text().cmp(y.text())),
            (IdKind::Alphanumeric, IdKind::Alphanumeric) => x.text().cmp(y.text()),
            (IdKind::Numeric, IdKind::Alphanumeric) => Ordering::Less,
            (IdKind::Alphanumeric, IdKind::Numeric) => Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn cmp(a: &str, b: &str) -> Ordering {
        Comparator::compare(&Parser::parse(a).unwrap(), &Parser::parse(b).unwrap())
    }

    #[test]
    fn test_core_precedence() {
        assert_eq!(cmp("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(cmp("2.0.0", "2.1.0"), Ordering::Less);
        assert_eq!(cmp("2.1.0", "2.1.1"), Ordering::Less);
        assert_eq!(cmp("2.1.1", "2.1.1"), Ordering::Equal);
        assert_eq!(cmp("10.0.0", "9.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_release_outranks_prerelease() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0"), Ordering::Less);
        assert_eq!(cmp("1.0.0", "1.0.0-alpha"), Ordering::Greater);
        // Only at equal core; a higher core beats a release below it.
        assert_eq!(cmp("1.0.1-alpha", "1.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_semver_ordering_chain() {
        // The ordering example from the semver 2.0.0 specification, §11.
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert_eq!(cmp(pair[0], pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
            assert_eq!(cmp(pair[1], pair[0]), Ordering::Greater);
        }
    }

    #[test]
    fn test_numeric_compared_as_integers() {
        assert_eq!(cmp("1.0.0-beta.2", "1.0.0-beta.11"), Ordering::Less);
        assert_eq!(cmp("1.0.0-9", "1.0.0-10"), Ordering::Less);
        // Huge numeric identifiers still order by magnitude.
        assert_eq!(
            cmp(
                "1.0.0-99999999999999999999998",
                "1.0.0-99999999999999999999999"
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_numeric_below_alphanumeric() {
        assert_eq!(cmp("1.0.0-9", "1.0.0-alpha"), Ordering::Less);
        assert_eq!(cmp("1.0.0-999999", "1.0.0-1a"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-1"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_is_lower() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-alpha.1"), Ordering::Less);
        assert_eq!(cmp("1.0.0-beta", "1.0.0-beta.11"), Ordering::Less);
        assert_eq!(cmp("1.0.0-a.b.c", "1.0.0-a.b"), Ordering::Greater);
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(cmp("1.2.3+build.1", "1.2.3+build.2"), Ordering::Equal);
        assert_eq!(cmp("1.2.3+anything", "1.2.3"), Ordering::Equal);
        assert_eq!(cmp("1.2.3-rc.1+b1", "1.2.3-rc.1+b2"), Ordering::Equal);
    }

    #[test]
    fn test_antisymmetry() {
        let samples = [
            "1.0.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-1",
            "2.0.0+b",
            "0.9.9",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(cmp(a, b), cmp(b, a).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_transitivity_sample() {
        let sorted = [
            "0.1.0",
            "1.0.0-1",
            "1.0.0-2",
            "1.0.0-alpha",
            "1.0.0-alpha.0a",
            "1.0.0",
        ];
        for i in 0..sorted.len() {
            for j in i + 1..sorted.len() {
                assert_eq!(cmp(sorted[i], sorted[j]), Ordering::Less);
            }
        }
    }
}
