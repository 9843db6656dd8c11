use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::profile::Language;

const MAX_DELAY_MS: u64 = 10_000;
const MIN_TICK_MS: u64 = 16;
const MAX_TICK_MS: u64 = 1_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Preselected on the welcome screen. Stored as a language code.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_chat_reply_delay_ms")]
    pub chat_reply_delay_ms: u64,
    #[serde(default = "default_quiz_advance_delay_ms")]
    pub quiz_advance_delay_ms: u64,
    #[serde(default = "default_fact_check_delay_ms")]
    pub fact_check_delay_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_theme() -> String {
    "saffron".to_string()
}
fn default_language() -> String {
    Language::default().code().to_string()
}
fn default_chat_reply_delay_ms() -> u64 {
    1500
}
fn default_quiz_advance_delay_ms() -> u64 {
    500
}
fn default_fact_check_delay_ms() -> u64 {
    1500
}
fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            chat_reply_delay_ms: default_chat_reply_delay_ms(),
            quiz_advance_delay_ms: default_quiz_advance_delay_ms(),
            fact_check_delay_ms: default_fact_check_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mysaathi")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Clamp out-of-range values and reset unknown keys.
    /// Call after deserialization; hand-edited files are not trusted.
    pub fn validate(&mut self) {
        if Language::from_code(&self.language).is_none() {
            warn!(language = %self.language, "unknown language in config, using default");
            self.language = default_language();
        }
        self.chat_reply_delay_ms = self.chat_reply_delay_ms.min(MAX_DELAY_MS);
        self.quiz_advance_delay_ms = self.quiz_advance_delay_ms.min(MAX_DELAY_MS);
        self.fact_check_delay_ms = self.fact_check_delay_ms.min(MAX_DELAY_MS);
        self.tick_rate_ms = self.tick_rate_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn quiz_advance_delay(&self) -> Duration {
        Duration::from_millis(self.quiz_advance_delay_ms)
    }

    pub fn fact_check_delay(&self) -> Duration {
        Duration::from_millis(self.fact_check_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
