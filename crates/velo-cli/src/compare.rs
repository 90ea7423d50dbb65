//! Compare command - three-way precedence between two version strings.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;
use velo_semver::Version;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub a: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub b: String,
}

fn parse(text: &str) -> Result<Version> {
    text.parse()
        .with_context(|| format!("failed to parse \"{text}\""))
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let a = parse(&args.a)?;
    let b = parse(&args.b)?;
    println!("{} {} {}", args.a, symbol(a.cmp(&b)), args.b);
    Ok(0)
}
