use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::output::{print_success, render_value};

pub fn show(config: &AppConfig, format: OutputFormat) -> Result<()> {
    println!("{}", render(config, format)?.trim_end());
    Ok(())
}

/// Effective config with the auth token masked
pub fn render(config: &AppConfig, format: OutputFormat) -> Result<String> {
    render_value(&config.masked(), format)
}

pub fn check(config: &AppConfig) -> Result<()> {
    config.validate()?;
    println!("{}: {}", "Account".cyan(), config.twilio.account_sid);
    println!("{}: {}", "From".cyan(), config.twilio.from_number);
    println!("{}: {}", "Endpoint".cyan(), config.twilio.messages_url());
    print_success("Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use twilio_sms::TwilioConfig;

    use super::*;
    use crate::config::LoggingConfig;

    fn app_config(level: &str) -> AppConfig {
        AppConfig {
            twilio: TwilioConfig::new("AC_show_sid", "very_secret_token", "+15551234567"),
            logging: LoggingConfig {
                level: level.to_string(),
            },
        }
    }

    #[test]
    fn show_never_prints_token() {
        let cfg = app_config("info");
        for format in [OutputFormat::Json, OutputFormat::Toml] {
            let rendered = render(&cfg, format).unwrap();
            assert!(!rendered.contains("very_secret_token"));
            assert!(rendered.contains("***"));
            assert!(rendered.contains("AC_show_sid"));
        }
        assert!(show(&cfg, OutputFormat::Json).is_ok());
    }

    #[test]
    fn check_reports_invalid_config() {
        assert!(check(&app_config("debug")).is_ok());
        assert!(check(&app_config("verbose")).is_err());

        let mut cfg = app_config("info");
        cfg.twilio.from_number = String::new();
        assert!(check(&cfg).is_err());
    }
}
