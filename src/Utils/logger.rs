// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::Utils::config::{CalcConfig, ConfigError};
use chrono::Local;
use log::info;
use simplelog::*;
use std::fs::File;

/// Maps a level name to a filter. Unknown names and `off`/`none` turn logging off.
pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Sets up the global logger: terminal output on stderr, so that stdout carries only the
/// calculator results, plus a copy in the log file when one is configured.
/// Returns `Ok(false)` when logging stays off or a logger was already installed.
pub fn init_logger(config: &CalcConfig) -> Result<bool, ConfigError> {
    let level = config
        .loglevel
        .as_deref()
        .map(level_filter)
        .unwrap_or(LevelFilter::Off);
    if level == LevelFilter::Off {
        return Ok(false);
    }

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(ref filename) = config.log_file {
        let file = File::create(filename)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    match CombinedLogger::init(loggers) {
        Ok(()) => {
            let date_and_time = Local::now().format("%Y-%m-%d %H:%M:%S");
            info!("polynomial calculator session started at {}", date_and_time);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("none"), LevelFilter::Off);
        assert_eq!(level_filter("error"), LevelFilter::Error);
        assert_eq!(level_filter("WARN"), LevelFilter::Warn);
        assert_eq!(level_filter("info"), LevelFilter::Info);
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("trace"), LevelFilter::Trace);
        assert_eq!(level_filter("loud"), LevelFilter::Off);
    }

    #[test]
    fn test_logging_off_by_default() {
        assert!(!init_logger(&CalcConfig::default()).unwrap());
        let quiet = CalcConfig {
            loglevel: Some("none".to_string()),
            ..CalcConfig::default()
        };
        assert!(!init_logger(&quiet).unwrap());
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = CalcConfig {
            loglevel: Some("info".to_string()),
            log_file: Some("/definitely/not/here/calc.log".to_string()),
            example: None,
        };
        assert!(matches!(init_logger(&config), Err(ConfigError::Io(_))));
    }
}
