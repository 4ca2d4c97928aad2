use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

/// Base URL of the Twilio 2010-04-01 REST API
pub const TWILIO_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

const MASK: &str = "***";

fn default_api_base_url() -> String {
    TWILIO_API_BASE_URL.to_string()
}

/// Twilio account credentials and sender number.
///
/// `Debug` never prints the auth token.
#[derive(Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,

    /// Sender phone number in E.164 format
    pub from_number: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl TwilioConfig {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            api_base_url: default_api_base_url(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Messages endpoint for this account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.api_base_url.trim_end_matches('/'),
            self.account_sid
        )
    }

    pub fn validate(&self) -> Result<(), NotificationError> {
        if self.account_sid.trim().is_empty() {
            return Err(NotificationError::InvalidConfig(
                "twilio.account_sid must not be empty".into(),
            ));
        }
        if self.auth_token.trim().is_empty() {
            return Err(NotificationError::InvalidConfig(
                "twilio.auth_token must not be empty".into(),
            ));
        }
        if self.from_number.trim().is_empty() {
            return Err(NotificationError::InvalidConfig(
                "twilio.from_number must not be empty".into(),
            ));
        }
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://"))
        {
            return Err(NotificationError::InvalidConfig(format!(
                "twilio.api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }

    /// Copy with the auth token replaced, safe to print
    pub fn masked(&self) -> Self {
        Self {
            auth_token: MASK.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &MASK)
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TwilioConfig {
        TwilioConfig::new("AC_test_sid", "test_auth_token", "+15551234567")
    }

    #[test]
    fn test_messages_url() {
        assert_eq!(
            config().messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC_test_sid/Messages.json"
        );
        let local = config().with_api_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            local.messages_url(),
            "http://127.0.0.1:8080/Accounts/AC_test_sid/Messages.json"
        );
    }

    #[test]
    fn test_debug_masks_token() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("test_auth_token"));
        assert!(rendered.contains("AC_test_sid"));
    }

    #[test]
    fn test_masked() {
        let masked = config().masked();
        assert_eq!(masked.auth_token, "***");
        assert_eq!(masked.account_sid, "AC_test_sid");
    }

    #[test]
    fn test_validate() {
        assert!(config().validate().is_ok());

        let mut missing_token = config();
        missing_token.auth_token = " ".into();
        assert!(matches!(
            missing_token.validate(),
            Err(NotificationError::InvalidConfig(_))
        ));

        let bad_url = config().with_api_base_url("ftp://example.com");
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults_base_url() {
        let cfg: TwilioConfig = serde_json::from_value(serde_json::json!({
            "account_sid": "AC1",
            "auth_token": "tok",
            "from_number": "+15550000000"
        }))
        .unwrap();
        assert_eq!(cfg.api_base_url, TWILIO_API_BASE_URL);
    }
}
