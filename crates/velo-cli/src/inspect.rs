//! Inspect command - print the components of a version string.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use velo_semver::Version;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Version string to inspect (e.g., 1.2.3-alpha.1+build.no.123)
    #[arg(value_name = "VERSION")]
    pub version: String,
}

pub fn execute(args: InspectArgs) -> Result<i32> {
    let version: Version = args
        .version
        .parse()
        .with_context(|| format!("failed to parse \"{}\"", args.version))?;

    println!("{} {}", style("Version:").cyan(), version);
    println!("{} {}", style("Major:").cyan(), version.major());
    println!("{} {}", style("Minor:").cyan(), version.minor());
    println!("{} {}", style("Patch:").cyan(), version.patch());
    println!("{} {}", style("Pre-release:").cyan(), version.prerelease());
    println!("{} {}", style("Build:").cyan(), version.build());

    Ok(0)
}
