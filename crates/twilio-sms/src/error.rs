use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template render failed: {0}")]
    Render(String),

    #[error("Recipient not found")]
    RecipientNotFound,

    /// The HTTP call itself failed; displayed exactly as reqwest reports it.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("{provider} SMS send failed ({status}): {body}")]
    ProviderRejected {
        provider: &'static str,
        status: u16,
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_rejected_message() {
        let err = NotificationError::ProviderRejected {
            provider: "Twilio",
            status: 400,
            body: "Bad Request: Invalid phone number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Twilio SMS send failed (400): Bad Request: Invalid phone number"
        );
    }

    #[test]
    fn test_provider_rejected_empty_body() {
        let err = NotificationError::ProviderRejected {
            provider: "Twilio",
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Twilio SMS send failed (503): ");
    }
}
