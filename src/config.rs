//! Runtime configuration and logging bootstrap.
//!
//! Settings come from the environment (optionally loaded from `.env`). Logging
//! is configured from a log4rs YAML file when one exists, otherwise a stderr
//! appender is installed at the configured level.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

/// Default log4rs config file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Overrides [`DEFAULT_LOG_CONFIG`].
pub const ENV_LOG_CONFIG: &str = "CIDER_LOG_CONFIG";
/// Level for the fallback stderr logger.
pub const ENV_LOG_LEVEL: &str = "CIDER_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: PathBuf,
    /// Level used when the YAML file is missing.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read settings from the environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown levels fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!("Ignoring unknown {ENV_LOG_LEVEL}={level}"),
            }
        }
        config
    }
}

/// Install the global logger described by `config`.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::debug!("Logging configured from {}", config.log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_LOG_CONFIG, "/etc/cider/log.yml"),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert_eq!(config.log_config, PathBuf::from("/etc/cider/log.yml"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_config_bad_level() {
        let config = Config::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")]));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
