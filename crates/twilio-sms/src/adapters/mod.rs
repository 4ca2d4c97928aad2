pub mod twilio;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NotificationError;
use crate::templates::TemplateRenderer;
use crate::types::{JsonObject, Notification, NotificationType};

/// Channel adapter for sending notifications
#[async_trait]
pub trait NotificationAdapter: Send + Sync {
    /// Stable key identifying this adapter
    fn key(&self) -> &str;

    /// Notification type this adapter delivers
    fn notification_type(&self) -> NotificationType;

    fn supports_attachments(&self) -> bool {
        false
    }

    /// Whether the framework should enqueue notifications instead of sending inline
    fn enqueue_notifications(&self) -> bool;

    /// Check if adapter can handle this notification
    fn handles(&self, notification: &Notification) -> bool {
        notification.notification_type == self.notification_type()
    }

    /// Send a notification
    async fn send(
        &self,
        notification: &Notification,
        context: &JsonObject,
    ) -> Result<(), NotificationError>;
}

/// Uniform construction entry point shared by every channel
pub trait NotificationAdapterFactory<R: TemplateRenderer> {
    type Config;
    type Adapter: NotificationAdapter;

    fn create(
        &self,
        template_renderer: Arc<R>,
        enqueue_notifications: bool,
        config: Self::Config,
    ) -> Self::Adapter;
}

pub use twilio::{TWILIO_SMS_KEY, TwilioSmsAdapter, TwilioSmsAdapterFactory};
