use thiserror::Error;
use tracing::Level;

pub const USAGE: &str = "\
usage: drawable-app [options]

  --radius <n>    radius of the big circle   (default 230)
  --side <n>      side of the big square     (default 230)
  --small <n>     size of collection shapes  (default 2)
  -v, --verbose   log copies and draws to stderr
  -h, --help      print this message";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArg(String),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`: expected a finite number")]
    InvalidNumber { flag: &'static str, value: String },
}

/// Demo parameters. Defaults reproduce the classic shape demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub radius:  f64,
    pub side:    f64,
    pub small:   f64,
    pub verbose: bool,
    pub help:    bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { radius: 230.0, side: 230.0, small: 2.0, verbose: false, help: false }
    }
}

impl DemoConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--radius"       => config.radius = number("--radius", args.next())?,
                "--side"         => config.side   = number("--side", args.next())?,
                "--small"        => config.small  = number("--small", args.next())?,
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help"    => config.help = true,
                _ => return Err(ConfigError::UnknownArg(arg)),
            }
        }

        Ok(config)
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::INFO }
    }
}

fn number(flag: &'static str, value: Option<String>) -> Result<f64, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ConfigError::InvalidNumber { flag, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DemoConfig, ConfigError> {
        DemoConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(parse(&[]), Ok(DemoConfig::default()));
    }

    #[test]
    fn sizes_are_overridden() {
        let config = parse(&["--radius", "10", "--side", "2.5", "--small", "1"]).expect("valid args");
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.side, 2.5);
        assert_eq!(config.small, 1.0);
    }

    #[test]
    fn verbose_raises_log_level() {
        assert_eq!(parse(&[]).expect("valid").log_level(), Level::INFO);
        assert_eq!(parse(&["-v"]).expect("valid").log_level(), Level::DEBUG);
        assert_eq!(parse(&["--verbose"]).expect("valid").log_level(), Level::DEBUG);
    }

    #[test]
    fn help_flag() {
        assert!(parse(&["-h"]).expect("valid").help);
    }

    #[test]
    fn unknown_arg_is_rejected() {
        assert_eq!(parse(&["--color"]), Err(ConfigError::UnknownArg("--color".into())));
    }

    #[test]
    fn missing_value_is_rejected() {
        assert_eq!(parse(&["--radius"]), Err(ConfigError::MissingValue("--radius")));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(matches!(parse(&["--side", "big"]), Err(ConfigError::InvalidNumber { flag: "--side", .. })));
        assert!(matches!(parse(&["--small", "inf"]), Err(ConfigError::InvalidNumber { .. })));
        assert!(matches!(parse(&["--radius", "NaN"]), Err(ConfigError::InvalidNumber { .. })));
    }
}
