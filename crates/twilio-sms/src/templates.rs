use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::NotificationError;
use crate::types::{JsonObject, Notification};

/// Rendered notification content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body: String,
}

/// Turns a notification and its context into subject/body text
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render(
        &self,
        notification: &Notification,
        context: &JsonObject,
    ) -> Result<RenderedTemplate, NotificationError>;
}

/// Simple template renderer using {{variable}} syntax, keyed by template path
#[derive(Debug, Default)]
pub struct InMemoryTemplateRenderer {
    templates: HashMap<String, String>,
}

impl InMemoryTemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(path.into(), source.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.templates.get(path).map(String::as_str)
    }

    fn lookup(&self, path: &str) -> Result<&str, NotificationError> {
        self.get(path)
            .ok_or_else(|| NotificationError::TemplateNotFound(path.to_string()))
    }

    /// Single left-to-right pass; substituted values are never re-scanned.
    fn render_string(&self, template: &str, data: &JsonObject) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                result.push_str(&rest[open..]);
                return result;
            };

            let key = &after_open[..close];
            match data.get(key) {
                Some(value) => result.push_str(&placeholder_value(value)),
                None => {
                    result.push_str("{{");
                    result.push_str(key);
                    result.push_str("}}");
                }
            }
            rest = &after_open[close + 2..];
        }

        result.push_str(rest);
        result
    }
}

fn placeholder_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        _ => value.to_string(),
    }
}

#[async_trait]
impl TemplateRenderer for InMemoryTemplateRenderer {
    async fn render(
        &self,
        notification: &Notification,
        context: &JsonObject,
    ) -> Result<RenderedTemplate, NotificationError> {
        let body = self.render_string(self.lookup(&notification.body_template)?, context);
        let subject = match &notification.subject_template {
            Some(path) => self.render_string(self.lookup(path)?, context),
            None => String::new(),
        };

        Ok(RenderedTemplate { subject, body })
    }
}
