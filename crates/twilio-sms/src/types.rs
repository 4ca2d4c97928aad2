use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Free-form JSON object used for render contexts and extra parameters
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Notification type, used to route a notification to a channel adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "PUSH")]
    Push,
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "IN_APP")]
    InApp,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Push => "PUSH",
            Self::Sms => "SMS",
            Self::InApp => "IN_APP",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification status, owned by the dispatch framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    PendingSend,
    Sent,
    Failed,
    Read,
    Cancelled,
}

/// A notification record as handed over by the dispatch framework.
///
/// Adapters only ever borrow it; status and timestamps are updated by the
/// framework after `send` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    /// Owning user, absent for one-off notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Recipient address; a phone number for SMS notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_or_phone: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    pub notification_type: NotificationType,

    pub title: Option<String>,

    /// Template references
    pub body_template: String,
    #[serde(default)]
    pub subject_template: Option<String>,

    /// Name of the context generator and its parameters
    pub context_name: String,
    #[serde(default)]
    pub context_parameters: JsonObject,

    /// When to send (None = immediately)
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub send_after: Option<OffsetDateTime>,

    pub status: NotificationStatus,

    #[serde(default)]
    pub context_used: Option<JsonObject>,

    #[serde(default)]
    pub extra_params: JsonObject,

    #[serde(default)]
    pub adapter_used: Option<String>,

    #[serde(with = "time::serde::rfc3339::option", default)]
    pub sent_at: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option", default)]
    pub read_at: Option<OffsetDateTime>,
}

impl Notification {
    /// A pending SMS notification addressed directly to a phone number.
    pub fn one_off(
        id: impl Into<String>,
        phone: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            email_or_phone: Some(phone.into()),
            first_name: None,
            last_name: None,
            notification_type: NotificationType::Sms,
            title: None,
            body_template: body_template.into(),
            subject_template: None,
            context_name: String::new(),
            context_parameters: JsonObject::new(),
            send_after: None,
            status: NotificationStatus::PendingSend,
            context_used: None,
            extra_params: JsonObject::new(),
            adapter_used: None,
            sent_at: None,
            read_at: None,
        }
    }
}
