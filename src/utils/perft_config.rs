//! Perft runner configuration.
//!
//! Read from command-line flags, falling back to `PLUM_PERFT_DEPTH` and then
//! to the defaults.

use thiserror::Error;

pub const DEPTH_ENV_VAR: &str = "PLUM_PERFT_DEPTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerftConfig {
    pub depth: u8,
    pub divide: bool,
    pub threaded: bool,
}

impl Default for PerftConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            divide: false,
            threaded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid depth '{0}', expected an integer in 0..=10")]
    InvalidDepth(String),
    #[error("flag {0} expects a value")]
    MissingValue(&'static str),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

impl PerftConfig {
    /// Parse `args` (without the program name). `env_depth` is the value of
    /// [`DEPTH_ENV_VAR`], if set; an explicit `--depth` wins over it.
    pub fn from_args<I, S>(args: I, env_depth: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        if let Some(raw) = env_depth {
            config.depth = parse_depth(raw)?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--depth" => {
                    let raw = args.next().ok_or(ConfigError::MissingValue("--depth"))?;
                    config.depth = parse_depth(raw.as_ref())?;
                }
                "--divide" => config.divide = true,
                "--threads" => config.threaded = true,
                other => return Err(ConfigError::UnknownArgument(other.to_owned())),
            }
        }

        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let env_depth = std::env::var(DEPTH_ENV_VAR).ok();
        Self::from_args(std::env::args().skip(1), env_depth.as_deref())
    }
}

fn parse_depth(raw: &str) -> Result<u8, ConfigError> {
    match raw.trim().parse::<u8>() {
        Ok(depth) if depth <= 10 => Ok(depth),
        _ => Err(ConfigError::InvalidDepth(raw.to_owned())),
    }
}
