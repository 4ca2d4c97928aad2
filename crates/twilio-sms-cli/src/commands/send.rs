use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use twilio_sms::{
    InMemoryTemplateRenderer, JsonObject, Notification, NotificationAdapter,
    NotificationAdapterFactory, TwilioSmsAdapterFactory,
};

use crate::cli::SendArgs;
use crate::config::AppConfig;
use crate::output::print_success;

const INLINE_BODY_TEMPLATE: &str = "cli/body.txt";
const INLINE_SUBJECT_TEMPLATE: &str = "cli/subject.txt";

pub async fn send(config: &AppConfig, args: &SendArgs) -> Result<()> {
    let context = build_context(args.context_json.as_deref(), &args.vars)?;

    let mut renderer = InMemoryTemplateRenderer::new();
    let body_template = match (&args.body, &args.template_file) {
        (Some(body), _) => {
            renderer.register(INLINE_BODY_TEMPLATE, body.clone());
            INLINE_BODY_TEMPLATE.to_string()
        }
        (None, Some(path)) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            let key = path.display().to_string();
            renderer.register(key.clone(), source);
            key
        }
        (None, None) => bail!("Either --body or --template-file is required"),
    };

    let mut notification =
        Notification::one_off(uuid::Uuid::new_v4().to_string(), &args.to, body_template);
    if let Some(subject) = &args.subject {
        renderer.register(INLINE_SUBJECT_TEMPLATE, subject.clone());
        notification.subject_template = Some(INLINE_SUBJECT_TEMPLATE.to_string());
    }

    let adapter = TwilioSmsAdapterFactory::new().create(
        Arc::new(renderer),
        false,
        config.twilio.clone(),
    );

    adapter.send(&notification, &context).await?;
    print_success(&format!("SMS to {} accepted ({})", args.to, notification.id));
    Ok(())
}

/// Merge `--context-json` with `--var key=value` pairs; vars win.
pub fn build_context(context_json: Option<&str>, vars: &[String]) -> Result<JsonObject> {
    let mut context = match context_json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("Invalid --context-json")? {
            Value::Object(map) => map,
            _ => bail!("--context-json must be a JSON object"),
        },
        None => JsonObject::new(),
    };

    for var in vars {
        let Some((key, value)) = var.split_once('=') else {
            bail!("Invalid --var '{var}', expected KEY=VALUE");
        };
        if key.is_empty() {
            bail!("Invalid --var '{var}', key is empty");
        }
        context.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(context)
}
