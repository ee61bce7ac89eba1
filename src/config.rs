//! Runtime configuration from environment variables.
//!
//! `main` loads an optional `.env` file with `dotenv` before calling
//! [`Config::from_env`].

use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_CONFIG_VAR: &str = "IPSC_LOG_CONFIG";
pub const COLOR_VAR: &str = "IPSC_COLOR";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// When to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and `NO_COLOR`/`CLICOLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("Unknown color mode: {other}")),
        }
    }
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    pub color: ColorMode,
    /// Problems found while reading the environment, logged once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            color: ColorMode::Auto,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.is_empty()) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(color) = lookup(COLOR_VAR) {
            match color.parse() {
                Ok(mode) => config.color = mode,
                Err(e) => config.warnings.push(format!("{COLOR_VAR}: {e}, using auto")),
            }
        }
        config
    }

    /// Log the warnings collected by [`Config::from_lookup`].
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!(" never ".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("rainbow".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_CONFIG_VAR, "/etc/ipsc/log.yml"),
            (COLOR_VAR, "never"),
        ]));
        assert_eq!(config.log_config, PathBuf::from("/etc/ipsc/log.yml"));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_config_bad_color_falls_back() {
        let config =
            Config::from_lookup(lookup_from(&[(COLOR_VAR, "purple"), (LOG_CONFIG_VAR, "")]));
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.log_config, PathBuf::from(DEFAULT_LOG_CONFIG));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains(COLOR_VAR));
        assert!(config.warnings[0].contains("purple"));
    }

    #[test]
    fn test_config_valid_color_no_warnings() {
        let config = Config::from_lookup(lookup_from(&[(COLOR_VAR, "always")]));
        assert_eq!(config.color, ColorMode::Always);
        assert!(config.warnings.is_empty());
    }
}
