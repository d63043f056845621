// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Settings of the calculator binary.
//!
//! Settings come from an optional TOML file and from command line flags; flags win.
//! ```toml
//! [logging]
//! level = "debug"      # off, none, error, warn, info, debug or trace
//! file = "calc.log"    # also write the log to this file
//!
//! [run]
//! example = 1          # run a built-in demonstration instead of reading stdin
//! ```
//! flags: `--config <file.toml>`, `--loglevel <level>`, `--log-file <path>`, `--example <n>`
use std::fmt;
use std::fs;
use std::path::Path;

/// level names accepted for `loglevel`
pub const LOG_LEVELS: [&str; 7] = ["off", "none", "error", "warn", "info", "debug", "trace"];

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    /// key and the offending value
    InvalidValue(String, String),
    /// flag given without its value
    MissingArgument(String),
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Toml(e) => write!(f, "malformed config file: {}", e),
            ConfigError::InvalidValue(key, value) => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
            ConfigError::MissingArgument(flag) => write!(f, "flag {} needs a value", flag),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown flag {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcConfig {
    /// one of [`LOG_LEVELS`]; logging is off when unset
    pub loglevel: Option<String>,
    pub log_file: Option<String>,
    pub example: Option<usize>,
}

fn check_level(level: &str) -> Result<String, ConfigError> {
    let lower = level.to_lowercase();
    if LOG_LEVELS.contains(&lower.as_str()) {
        Ok(lower)
    } else {
        Err(ConfigError::InvalidValue("loglevel".to_string(), level.to_string()))
    }
}

fn check_example(value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidValue("example".to_string(), value.to_string()))
}

fn flag_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingArgument(flag.to_string()))
}

impl CalcConfig {
    pub fn new() -> Self {
        CalcConfig::default()
    }

    /// Reads the `[logging]` and `[run]` tables; unknown keys are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str::<toml::Table>(content)?;
        let mut config = CalcConfig::new();
        if let Some(logging) = table.get("logging").and_then(|v| v.as_table()) {
            if let Some(level) = logging.get("level") {
                let level = level.as_str().ok_or_else(|| {
                    ConfigError::InvalidValue("logging.level".to_string(), level.to_string())
                })?;
                config.loglevel = Some(check_level(level)?);
            }
            if let Some(file) = logging.get("file") {
                let file = file.as_str().ok_or_else(|| {
                    ConfigError::InvalidValue("logging.file".to_string(), file.to_string())
                })?;
                config.log_file = Some(file.to_string());
            }
        }
        if let Some(example) = table
            .get("run")
            .and_then(|v| v.as_table())
            .and_then(|run| run.get("example"))
        {
            let n = example
                .as_integer()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    ConfigError::InvalidValue("run.example".to_string(), example.to_string())
                })?;
            config.example = Some(n);
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        CalcConfig::from_toml_str(&content)
    }

    /// Builds the configuration from command line arguments (without the program name).
    /// A `--config` file is read first, the other flags override its values.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_file: Option<String> = None;
        let mut overrides = CalcConfig::new();
        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--config" => config_file = Some(flag_value(&mut args, &flag)?),
                "--loglevel" => {
                    overrides.loglevel = Some(check_level(&flag_value(&mut args, &flag)?)?)
                }
                "--log-file" => overrides.log_file = Some(flag_value(&mut args, &flag)?),
                "--example" => {
                    overrides.example = Some(check_example(&flag_value(&mut args, &flag)?)?)
                }
                _ => return Err(ConfigError::UnknownFlag(flag.clone())),
            }
        }
        let mut config = match config_file {
            Some(path) => CalcConfig::from_file(path)?,
            None => CalcConfig::new(),
        };
        config.merge(overrides);
        Ok(config)
    }

    /// takes every value that is set in `other`
    pub fn merge(&mut self, other: CalcConfig) {
        if other.loglevel.is_some() {
            self.loglevel = other.loglevel;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
        if other.example.is_some() {
            self.example = other.example;
        }
    }
}
