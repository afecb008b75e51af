//! # Configuration
//!
//! Which showcases the binary runs is decided by [`ShowcaseConfig`], parsed by
//! `clap` from the command line with environment fallbacks.
//!
//! | Argument | Environment | Meaning |
//! |---|---|---|
//! | `[PRINCIPLES]...` | `SOLID_PRINCIPLES` | Principle names or acronyms, comma-separated. None = all. |
//! | `--violations` | `SOLID_VIOLATIONS` | Also run the violation scripts (`1/0`, `true/false`, `yes/no`, `on/off`). |
//!
//! Command-line values win over the environment. Log verbosity is not part of
//! this config; it comes from `RUST_LOG` (see [`setup_tracing`](super::setup_tracing)).

use crate::model::Principle;
use clap::builder::BoolishValueParser;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use tracing::debug;

/// Environment variable holding the principle selection.
pub const PRINCIPLES_ENV: &str = "SOLID_PRINCIPLES";

/// Environment variable enabling the violation scripts.
pub const VIOLATIONS_ENV: &str = "SOLID_VIOLATIONS";

/// Runs the SOLID principle showcases and prints their output.
#[derive(Parser, Debug)]
#[command(name = "solid-recipe")]
#[command(version)]
#[command(about = "The five SOLID principles, each shown broken and then fixed", long_about = None)]
#[command(after_help = "\
EXAMPLES:\n\
  solid-recipe                        Every refactored showcase\n\
  solid-recipe lsp dip --violations   Liskov and Dependency Inversion, violations first\n\
  solid-recipe ocp,isp                Same as `solid-recipe ocp isp`")]
pub struct ShowcaseArgs {
    /// Principles to run, in order. Defaults to all five.
    #[arg(
        value_enum,
        ignore_case = true,
        env = PRINCIPLES_ENV,
        value_delimiter = ','
    )]
    pub principles: Vec<Principle>,

    /// Run each principle's violation script before the refactored one.
    #[arg(long = "violations", env = VIOLATIONS_ENV, value_parser = BoolishValueParser::new())]
    pub include_violations: bool,
}

/// Selection of showcases to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Principles to run, in order.
    pub principles: Vec<Principle>,
    /// Whether to run the violation script before each refactored one.
    pub include_violations: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            principles: Principle::ALL.to_vec(),
            include_violations: false,
        }
    }
}

impl From<ShowcaseArgs> for ShowcaseConfig {
    fn from(args: ShowcaseArgs) -> Self {
        let mut principles = Vec::new();
        for principle in args.principles {
            if !principles.contains(&principle) {
                principles.push(principle);
            }
        }
        if principles.is_empty() {
            principles = Principle::ALL.to_vec();
        }

        let config = Self {
            principles,
            include_violations: args.include_violations,
        };
        debug!(?config, "Parsed configuration");
        config
    }
}

impl ShowcaseConfig {
    /// Parses the configuration from `args`, whose first item is the program name.
    ///
    /// Unset arguments fall back to [`PRINCIPLES_ENV`] and [`VIOLATIONS_ENV`].
    /// `--help` and `--version` come back as errors of the matching
    /// [`clap::error::ErrorKind`]; [`clap::Error::exit`] prints them.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ShowcaseArgs::try_parse_from(args).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<ShowcaseConfig, clap::Error> {
        ShowcaseConfig::try_from_args(std::iter::once("solid-recipe").chain(args.iter().copied()))
    }

    #[test]
    fn arguments_are_well_formed() {
        use clap::CommandFactory;
        ShowcaseArgs::command().debug_assert();
    }

    #[test]
    fn no_arguments_selects_every_principle() {
        let config = ShowcaseConfig::from(ShowcaseArgs {
            principles: Vec::new(),
            include_violations: false,
        });
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn reads_names_acronyms_and_lists() {
        let config = parse(&["DIP", "single-responsibility,dip", "--violations"]).unwrap();
        assert_eq!(
            config.principles,
            vec![Principle::DependencyInversion, Principle::SingleResponsibility]
        );
        assert!(config.include_violations);
    }

    #[test]
    fn rejects_unknown_principles() {
        let err = parse(&["kiss"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_unknown_options() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_answered() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }
}
