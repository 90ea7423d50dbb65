//! Sort command - order version strings by precedence.

use anyhow::{Context, Result};
use clap::Args;
use velo_semver::Version;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Version strings to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

/// Sort the inputs by precedence, keeping the original spellings.
fn sorted(versions: &[String], reverse: bool) -> Result<Vec<String>> {
    let mut parsed: Vec<(Version, &String)> = versions
        .iter()
        .map(|text| {
            let version = text
                .parse()
                .with_context(|| format!("failed to parse \"{text}\""))?;
            Ok((version, text))
        })
        .collect::<Result<_>>()?;

    // Precedence ties (build-only differences) keep their input order.
    parsed.sort_by(|(a, _), (b, _)| {
        let ordering = a.cmp(b);
        if reverse { ordering.reverse() } else { ordering }
    });

    Ok(parsed.into_iter().map(|(_, text)| text.clone()).collect())
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sorted(&args.versions, args.reverse)? {
        println!("{version}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let result = sorted(
            &input(&["1.0.0", "0.1.0", "1.0.0-rc.1", "1.0.0-beta.11", "1.0.0-beta.2"]),
            false,
        )
        .unwrap();
        assert_eq!(
            result,
            ["0.1.0", "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0"]
        );
    }

    #[test]
    fn test_sort_descending() {
        let result = sorted(&input(&["0.1.0", "2.0.0", "1.0.0"]), true).unwrap();
        assert_eq!(result, ["2.0.0", "1.0.0", "0.1.0"]);
    }

    #[test]
    fn test_sort_rejects_invalid_input() {
        assert!(sorted(&input(&["1.0.0", "nope"]), false).is_err());
    }

    #[test]
    fn test_sort_is_stable_across_build_ties() {
        let result = sorted(&input(&["1.0.0+b2", "1.0.0+b1"]), false).unwrap();
        assert_eq!(result, ["1.0.0+b2", "1.0.0+b1"]);
    }
}
