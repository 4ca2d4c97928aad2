//! Twilio SMS channel for notification dispatch.
//!
//! [`TwilioSmsAdapter`] renders a notification through an injected
//! [`TemplateRenderer`] and posts the body to Twilio's Messages endpoint
//! with basic auth and a form-encoded payload. The dispatcher that calls it
//! owns queueing, retries and status tracking.

pub mod adapters;
pub mod config;
pub mod error;
pub mod templates;
pub mod types;

pub use adapters::{
    NotificationAdapter, NotificationAdapterFactory, TWILIO_SMS_KEY, TwilioSmsAdapter,
    TwilioSmsAdapterFactory,
};
pub use config::{TWILIO_API_BASE_URL, TwilioConfig};
pub use error::NotificationError;
pub use templates::{InMemoryTemplateRenderer, RenderedTemplate, TemplateRenderer};
pub use types::*;
