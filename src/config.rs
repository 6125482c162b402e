use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use teloxide::types::ChatId;

use crate::redactor;

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { path: PathBuf, source: serde_json::Error },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            Self::ParseJson { path, source } => {
                write!(f, "failed to parse config file '{}': {}", path.display(), source)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    telegram_bot_token: String,
    /// Token substituted for each detected URL.
    #[serde(default = "default_replacement")]
    replacement: String,
    /// Chats the bot answers in. Empty means answer everywhere.
    #[serde(default)]
    allowed_chats: Vec<i64>,
    /// Whether to echo the full message object (URL-redacted) as a second reply.
    #[serde(default = "default_echo_raw")]
    echo_raw: bool,
    /// Directory for state files (logs). Defaults to current directory.
    data_dir: Option<String>,
}

fn default_replacement() -> String {
    redactor::DEFAULT_REPLACEMENT.to_string()
}

fn default_echo_raw() -> bool {
    true
}

pub struct Config {
    pub telegram_bot_token: String,
    /// Token substituted for each detected URL.
    pub replacement: String,
    pub allowed_chats: HashSet<ChatId>,
    /// Whether to echo the full message object (URL-redacted) as a second reply.
    pub echo_raw: bool,
    /// Directory for state files (logs).
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadFile { path: config_path.clone(), source: e })?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseJson { path: config_path.clone(), source: e })?;

        // Validate required fields
        if file.telegram_bot_token.is_empty() {
            return Err(ConfigError::Validation("telegram_bot_token is required".into()));
        }
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = file.telegram_bot_token.split(':').collect();
        if token_parts.len() != 2 || token_parts[0].parse::<u64>().is_err() || token_parts[1].is_empty() {
            return Err(ConfigError::Validation(
                "telegram_bot_token appears invalid (expected format: 123456789:ABCdefGHI...)".into()
            ));
        }
        if file.replacement.is_empty() {
            return Err(ConfigError::Validation("replacement must not be empty".into()));
        }
        // A URL-shaped replacement would itself get redacted on the next pass
        if redactor::contains_url(&file.replacement) {
            return Err(ConfigError::Validation(format!(
                "replacement '{}' looks like a URL and would not survive redaction",
                file.replacement
            )));
        }

        let allowed_chats = file.allowed_chats.into_iter().map(ChatId).collect();
        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            telegram_bot_token: file.telegram_bot_token,
            replacement: file.replacement,
            allowed_chats,
            echo_raw: file.echo_raw,
            data_dir,
        })
    }

    pub fn is_allowed_chat(&self, chat_id: ChatId) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }
}
