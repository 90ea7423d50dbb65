//! Bump command - increment one component, resetting the ones below it.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::debug;
use velo_semver::Version;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Component to bump
    #[arg(value_enum, value_name = "COMPONENT")]
    pub component: Component,

    /// Version to bump
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Step to bump by (may be negative)
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub by: i64,
}

fn bumped(version: &Version, component: Component, by: i64) -> Result<Version> {
    let result = match component {
        Component::Major => version.inc_major(by),
        Component::Minor => version.inc_minor(by),
        Component::Patch => version.inc_patch(by),
    };
    result.with_context(|| format!("cannot bump {component:?} of \"{version}\" by {by}"))
}

pub fn execute(args: BumpArgs) -> Result<i32> {
    let version: Version = args
        .version
        .parse()
        .with_context(|| format!("failed to parse \"{}\"", args.version))?;

    debug!("bumping {:?} of {} by {}", args.component, version, args.by);
    println!("{}", bumped(&version, args.component, args.by)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(text: &str) -> Version {
        text.parse().unwrap()
    }

    #[test]
    fn test_bump_clears_lower_components() {
        let v = version("1.2.3-alpha.1+b7");
        assert_eq!(bumped(&v, Component::Major, 1).unwrap().to_string(), "2.0.0");
        assert_eq!(bumped(&v, Component::Minor, 1).unwrap().to_string(), "1.3.0");
        assert_eq!(bumped(&v, Component::Patch, 1).unwrap().to_string(), "1.2.4");
    }

    #[test]
    fn test_bump_by_negative_step() {
        let v = version("3.2.1");
        assert_eq!(bumped(&v, Component::Major, -2).unwrap().to_string(), "1.0.0");
        assert!(bumped(&v, Component::Patch, -2).is_err());
    }
}
