//! velo - semantic versioning toolbox.

use clap::{Parser, Subcommand};
use console::style;

mod bump;
mod compare;
mod inspect;
mod sort;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "velo", version, about = "Semantic versioning toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the components of a version string
    Inspect(inspect::InspectArgs),
    /// Compare the precedence of two version strings
    Compare(compare::CompareArgs),
    /// Sort version strings by precedence
    Sort(sort::SortArgs),
    /// Increment one component of a version, resetting the ones below it
    Bump(bump::BumpArgs),
    /// Check whether a string is a well-formed version
    Validate(validate::ValidateArgs),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Inspect(args) => inspect::execute(args),
        Command::Compare(args) => compare::execute(args),
        Command::Sort(args) => sort::execute(args),
        Command::Bump(args) => bump::execute(args),
        Command::Validate(args) => validate::execute(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            std::process::exit(1);
        }
    }
}
