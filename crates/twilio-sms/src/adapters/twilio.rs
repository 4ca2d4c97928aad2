use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::{NotificationAdapter, NotificationAdapterFactory};
use crate::config::TwilioConfig;
use crate::error::NotificationError;
use crate::templates::TemplateRenderer;
use crate::types::{JsonObject, Notification, NotificationType};

pub const TWILIO_SMS_KEY: &str = "twilio-sms";

const PROVIDER_NAME: &str = "Twilio";

/// SMS adapter calling the Twilio Messages endpoint directly.
///
/// Each `send` makes exactly one POST. Retries and status bookkeeping are
/// left to the dispatcher.
pub struct TwilioSmsAdapter<R> {
    template_renderer: Arc<R>,
    enqueue_notifications: bool,
    config: TwilioConfig,
    http_client: Client,
}

impl<R: TemplateRenderer> TwilioSmsAdapter<R> {
    pub fn new(template_renderer: Arc<R>, enqueue_notifications: bool, config: TwilioConfig) -> Self {
        Self::with_client(template_renderer, enqueue_notifications, config, Client::new())
    }

    /// Build with a caller-supplied HTTP client (proxies, custom TLS roots).
    pub fn with_client(
        template_renderer: Arc<R>,
        enqueue_notifications: bool,
        config: TwilioConfig,
        http_client: Client,
    ) -> Self {
        Self {
            template_renderer,
            enqueue_notifications,
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }
}

#[async_trait]
impl<R: TemplateRenderer> NotificationAdapter for TwilioSmsAdapter<R> {
    fn key(&self) -> &str {
        TWILIO_SMS_KEY
    }

    fn notification_type(&self) -> NotificationType {
        NotificationType::Sms
    }

    fn enqueue_notifications(&self) -> bool {
        self.enqueue_notifications
    }

    async fn send(
        &self,
        notification: &Notification,
        context: &JsonObject,
    ) -> Result<(), NotificationError> {
        let template = self.template_renderer.render(notification, context).await?;

        // Phone numbers arrive pre-resolved by the caller and are sent as is.
        let recipient_phone = notification
            .email_or_phone
            .as_deref()
            .ok_or(NotificationError::RecipientNotFound)?;

        debug!(
            notification_id = %notification.id,
            adapter = TWILIO_SMS_KEY,
            "Sending SMS via Twilio"
        );

        let response = self
            .http_client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", recipient_phone),
                ("From", self.config.from_number.as_str()),
                ("Body", template.body.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(
                notification_id = %notification.id,
                adapter = TWILIO_SMS_KEY,
                status = status.as_u16(),
                "Twilio rejected SMS"
            );
            return Err(NotificationError::ProviderRejected {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                body,
            });
        }

        info!(
            notification_id = %notification.id,
            adapter = TWILIO_SMS_KEY,
            status = status.as_u16(),
            "SMS accepted by Twilio"
        );
        Ok(())
    }
}

/// Creates [`TwilioSmsAdapter`]s through the shared factory interface
#[derive(Debug, Clone, Copy, Default)]
pub struct TwilioSmsAdapterFactory;

impl TwilioSmsAdapterFactory {
    pub fn new() -> Self {
        Self
    }
}

impl<R: TemplateRenderer> NotificationAdapterFactory<R> for TwilioSmsAdapterFactory {
    type Config = TwilioConfig;
    type Adapter = TwilioSmsAdapter<R>;

    fn create(
        &self,
        template_renderer: Arc<R>,
        enqueue_notifications: bool,
        config: TwilioConfig,
    ) -> TwilioSmsAdapter<R> {
        TwilioSmsAdapter::new(template_renderer, enqueue_notifications, config)
    }
}
