//! CLI configuration via environment variables
//!
//! wavetest uses environment variables for optional configuration. This
//! keeps the CLI simple while allowing customization.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (WAVETEST_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Test runner binary override (WAVETEST_RUNNER=/path/to/phpunit)
    pub runner: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("WAVETEST_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
            runner: env::var("WAVETEST_RUNNER").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_config_defaults() {
        env::remove_var("WAVETEST_NO_COLOR");
        env::remove_var("NO_COLOR");
        env::remove_var("WAVETEST_RUNNER");

        let config = Config::from_env();
        assert!(!config.no_color);
        assert!(config.runner.is_none());
    }

    #[test]
    #[serial]
    fn test_config_runner_override() {
        env::set_var("WAVETEST_RUNNER", "/usr/local/bin/phpunit");
        let config = Config::from_env();
        assert_eq!(config.runner.as_deref(), Some("/usr/local/bin/phpunit"));
        env::remove_var("WAVETEST_RUNNER");
    }

    #[test]
    #[serial]
    fn test_config_no_color() {
        env::set_var("WAVETEST_NO_COLOR", "1");
        let config = Config::from_env();
        assert!(config.no_color);
        env::remove_var("WAVETEST_NO_COLOR");
    }
}
