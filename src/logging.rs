//! log4rs setup.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Start logging from the configured YAML file, or warnings to stderr when it is missing.
///
/// Fails if a logger is already installed.
pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::info!("Logging from {}", config.log_config.display());
    } else {
        log4rs::init_config(stderr_config()?)?;
        log::debug!(
            "No log config at {}, logging warnings to stderr",
            config.log_config.display()
        );
    }
    Ok(())
}

// stdout carries the prompts
fn stderr_config() -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_stderr_config_builds() {
        let config = stderr_config().expect("Error building fallback log config");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }

    #[test]
    fn test_init_twice_fails() {
        let config = Config {
            log_config: PathBuf::from("no/such/dir/log4rs.yml"),
            ..Default::default()
        };
        // the first call may only fail if a logger is already set
        let _ = init(&config);
        assert!(init(&config).is_err(), "Second init should fail");
    }
}
