use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use twilio_sms::TwilioConfig;

const DEFAULT_CONFIG_FILE: &str = "twilio-sms.toml";
const ENV_PREFIX: &str = "TWILIO_SMS";
const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub twilio: TwilioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.twilio.validate()?;
        validate_log_level(&self.logging.level)
    }

    pub fn masked(&self) -> Self {
        Self {
            twilio: self.twilio.masked(),
            logging: self.logging.clone(),
        }
    }
}

/// Accepts the level names understood by the tracing filter, any case.
pub fn validate_log_level(level: &str) -> Result<()> {
    let lvl = level.to_ascii_lowercase();
    if !VALID_LOG_LEVELS.contains(&lvl.as_str()) {
        bail!("log level must be one of {VALID_LOG_LEVELS:?}, got '{level}'");
    }
    Ok(())
}

/// Load config from an optional TOML file, then apply environment overrides,
/// e.g. `TWILIO_SMS__TWILIO__AUTH_TOKEN=...`.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();
    match path {
        Some(p) => {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            builder = builder.add_source(File::from(p.to_path_buf()));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                builder = builder.add_source(File::from(default_path));
            }
        }
    }
    // No try_parsing: "+1555..." must stay a string.
    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let cfg = builder.build().context("config build error")?;
    let merged: AppConfig = cfg
        .try_deserialize()
        .context("config deserialize error")?;
    merged.validate()?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn app_config(level: &str) -> AppConfig {
        AppConfig {
            twilio: TwilioConfig::new("AC1", "secret", "+15551234567"),
            logging: LoggingConfig {
                level: level.to_string(),
            },
        }
    }

    #[test]
    fn config_file_env_overrides_and_validation() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("twilio-sms.toml");

        let toml_content = r#"
[twilio]
account_sid = "AC_file_sid"
auth_token = "file_token"
from_number = "+15551234567"

[logging]
level = "debug"
"#;
        fs::write(&path, toml_content).expect("write toml");

        // 1) Valid config parses, base URL defaulted
        let cfg = load_config(Some(&path)).expect("should parse config");
        assert_eq!(cfg.twilio.account_sid, "AC_file_sid");
        assert_eq!(cfg.twilio.from_number, "+15551234567");
        assert_eq!(cfg.twilio.api_base_url, twilio_sms::TWILIO_API_BASE_URL);
        assert_eq!(cfg.logging.level, "debug");

        // 2) Env override should win over file
        unsafe {
            std::env::set_var("TWILIO_SMS__TWILIO__AUTH_TOKEN", "env_token");
        }
        let cfg_env = load_config(Some(&path)).expect("should parse config with env overrides");
        assert_eq!(cfg_env.twilio.auth_token, "env_token");
        unsafe {
            std::env::remove_var("TWILIO_SMS__TWILIO__AUTH_TOKEN");
        }

        // 3) Missing file is an error when given explicitly
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing)).is_err());

        // 4) Invalid values are rejected
        fs::write(
            &path,
            r#"
[twilio]
account_sid = ""
auth_token = "t"
from_number = "+15551234567"
"#,
        )
        .expect("write toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn log_level_validation() {
        assert!(app_config("INFO").validate().is_ok());
        assert!(app_config("verbose").validate().is_err());
        assert!(validate_log_level("Warn").is_ok());
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("").is_err());
    }

    #[test]
    fn masked_hides_token() {
        let masked = app_config("info").masked();
        assert_eq!(masked.twilio.auth_token, "***");
        assert_eq!(masked.logging.level, "info");
    }
}
