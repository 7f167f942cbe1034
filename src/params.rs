//! Command line arguments and the optional config file
//!
//! Every option may be given on the command line or in a TOML config file.
//! The command line wins; missing values fall back to the defaults in
//! [`common::constants`].

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use common::constants::MAX_BAR_LEN;
use common::histogram::Style;

/// Prints a histogram of the frequencies of the characters a-z read from stdin
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Length of the longest bar
    #[arg(long)]
    pub max_syms: Option<usize>,
    /// Symbol to draw bars with
    #[arg(long)]
    pub symbol: Option<char>,
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// TOML file with values for the options above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One line with a bar per letter
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Contents of the config file
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub max_syms: Option<usize>,
    pub symbol: Option<char>,
    pub format: Option<Format>,
}

impl Config {
    pub fn read_from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read(path)
            .with_context(|| format!("could not open {}", path.display()))?;
        let contents = String::from_utf8_lossy(&contents);
        toml::from_str(&contents)
            .with_context(|| format!("could not deserialize {}", path.display()))
    }
}

/// Fully resolved parameters of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Params {
    pub style: Style,
    pub format: Format,
}

impl Params {
    /// Merges `args` with the config file it points to, if any
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::read_from_toml_file(path)?,
            None => Config::default(),
        };
        Self::merge(args, &config)
    }

    pub fn merge(args: &Args, config: &Config) -> Result<Self> {
        let defaults = Style::default();
        let style = Style {
            max_syms: args
                .max_syms
                .or(config.max_syms)
                .unwrap_or(defaults.max_syms),
            symbol: args.symbol.or(config.symbol).unwrap_or(defaults.symbol),
        };
        ensure!(
            (1..=MAX_BAR_LEN).contains(&style.max_syms),
            "max_syms must be between 1 and {MAX_BAR_LEN}"
        );
        let format = args.format.or(config.format).unwrap_or_default();
        Ok(Self { style, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = Params::from_args(&Args::default()).unwrap();
        assert_eq!(params.style.max_syms, 50);
        assert_eq!(params.style.symbol, '*');
        assert_eq!(params.format, Format::Text);
    }

    #[test]
    fn cli_wins_over_config() {
        let args = Args::parse_from(["letter-histogram", "--max-syms", "10"]);
        let config: Config =
            toml::from_str("max_syms = 20\nsymbol = '#'\nformat = 'json'").unwrap();
        let params = Params::merge(&args, &config).unwrap();
        assert_eq!(params.style.max_syms, 10);
        assert_eq!(params.style.symbol, '#');
        assert_eq!(params.format, Format::Json);
    }

    #[test]
    fn zero_max_syms_is_rejected() {
        let args = Args::parse_from(["letter-histogram", "--max-syms", "0"]);
        let err = Params::from_args(&args).unwrap_err();
        assert_eq!(err.to_string(), "max_syms must be between 1 and 10000");
    }

    #[test]
    fn huge_max_syms_is_rejected() {
        let args = Args::parse_from(["letter-histogram", "--max-syms", "18446744073709551615"]);
        assert!(Params::from_args(&args).is_err());

        let config: Config = toml::from_str("max_syms = 10001").unwrap();
        assert!(Params::merge(&Args::default(), &config).is_err());

        let config: Config = toml::from_str("max_syms = 10000").unwrap();
        let params = Params::merge(&Args::default(), &config).unwrap();
        assert_eq!(params.style.max_syms, 10_000);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(toml::from_str::<Config>("alphabet = 'A-Z'").is_err());
    }

    #[test]
    fn missing_config_file() {
        let args = Args {
            config: Some("does/not/exist.toml".into()),
            ..Args::default()
        };
        let err = Params::from_args(&args).unwrap_err();
        assert!(err.to_string().starts_with("could not open"));
    }
}
