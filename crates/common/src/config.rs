//! Application configuration.

use openchat_markup::MentionMatching;
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Config {
    /// Message markup configuration.
    #[serde(default)]
    #[validate(nested)]
    pub markup: MarkupConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Message markup configuration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkupConfig {
    /// Default number of emoji search results.
    #[serde(default = "default_emoji_search_limit")]
    #[validate(range(min = 1, max = 100))]
    pub emoji_search_limit: usize,
    /// Default number of mention suggestions.
    #[serde(default = "default_suggestion_limit")]
    #[validate(range(min = 1, max = 50))]
    pub suggestion_limit: usize,
    /// Mention matching rule.
    #[serde(default)]
    pub mention_matching: MentionMatching,
    /// Whether rendered links open in a new tab.
    #[serde(default = "default_true")]
    pub link_target_blank: bool,
    /// Maximum message length in characters.
    #[serde(default = "default_max_message_length")]
    #[validate(range(min = 1, max = 100_000))]
    pub max_message_length: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            emoji_search_limit: default_emoji_search_limit(),
            suggestion_limit: default_suggestion_limit(),
            mention_matching: MentionMatching::default(),
            link_target_blank: true,
            max_message_length: default_max_message_length(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

const fn default_emoji_search_limit() -> usize {
    8
}

const fn default_suggestion_limit() -> usize {
    5
}

const fn default_max_message_length() -> usize {
    2000
}

const fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "openchat=info".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `OPENCHAT_ENV`)
    /// 4. Environment variables with `OPENCHAT__` prefix
    pub fn load() -> crate::AppResult<Self> {
        dotenvy::dotenv().ok();
        let env = std::env::var("OPENCHAT_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("OPENCHAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("OPENCHAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
