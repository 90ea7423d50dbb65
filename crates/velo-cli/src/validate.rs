//! Validate command - check a string against the version grammar.

use anyhow::Result;
use clap::Args;
use console::style;
use velo_semver::Parser;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version string to check
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    match Parser::parse(&args.version) {
        Ok(_) => {
            if !args.quiet {
                println!("{} {}", style("valid").green(), args.version);
            }
            Ok(0)
        }
        Err(err) => {
            if !args.quiet {
                println!("{} {}: {err}", style("invalid").red(), args.version);
            }
            Ok(1)
        }
    }
}
