use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "twilio-sms")]
#[command(about = "Send one-off SMS notifications through Twilio")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./twilio-sms.toml when present)
    #[arg(short, long, global = true, env = "TWILIO_SMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG wins over both)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template and send it as an SMS
    Send(SendArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct SendArgs {
    /// Recipient phone number (E.164)
    #[arg(long)]
    pub to: String,
    /// Inline body template
    #[arg(long, conflicts_with = "template_file", required_unless_present = "template_file")]
    pub body: Option<String>,
    /// Body template read from a file
    #[arg(long)]
    pub template_file: Option<PathBuf>,
    /// Inline subject template (not delivered over SMS, rendered for completeness)
    #[arg(long)]
    pub subject: Option<String>,
    /// Context variable as key=value (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
    /// Context as a JSON object; --var entries are applied on top
    #[arg(long)]
    pub context_json: Option<String>,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets masked
    Show {
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },
    /// Load and validate the configuration
    Check,
}
