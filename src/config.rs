use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Fallback config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub widget: WidgetConfig,
    pub sessions: SessionConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

/// Static text shown by the widget.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub title: String,
    pub subtitle: String,
    pub assistant_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Idle time after which a conversation is torn down.
    pub timeout_secs: u64,
    /// Entries shown in the history panel.
    pub history_limit: usize,
    pub max_message_chars: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub request_timeout_secs: u64,
    pub requests_per_second: f32,
    pub burst_size: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "E-Commerce Customer Support".to_string(),
            subtitle: "Your AI-powered shopping assistant".to_string(),
            assistant_name: "Support Assistant".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let widget = WidgetConfig::default();
        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("widget.title", widget.title)?
            .set_default("widget.subtitle", widget.subtitle)?
            .set_default("widget.assistant_name", widget.assistant_name)?
            .set_default("sessions.timeout_secs", 30 * 60)?
            .set_default("sessions.history_limit", 10)?
            .set_default("sessions.max_message_chars", 2000)?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.request_timeout_secs", 30)?
            .set_default("resilience.requests_per_second", 5.0)?
            .set_default("resilience.burst_size", 10.0)?;

        // 2. Config file: explicit path, else ./config.yaml when present
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        // 3. Environment, e.g. SUPPORT_CHAT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("SUPPORT_CHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (clap also folds in their plain env vars)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_defaults() {
        let config = AppConfig::load_from_args([
            "support-chat",
            "--port",
            "4100",
            "--rate-limit-enabled",
            "false",
        ])
        .unwrap();

        assert_eq!(config.server.port, 4100);
        assert!(!config.resilience.rate_limit_enabled);
        assert_eq!(config.sessions.history_limit, 10);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(AppConfig::load_from_args(["support-chat", "--bogus"]).is_err());
    }
}
