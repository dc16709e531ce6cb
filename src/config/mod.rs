//! # Configuration
//!
//! TOML configuration for the bot, loaded with serde.
//!
//! ## Sections
//!
//! - [`BotConfig`] - display name, command prefix, default game mode
//! - [`GamesConfig`] - starter words and an optional RNG seed
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use letterchain::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Prefix: {}", config.bot.command_prefix);
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [bot]
//! name = "Letterchain"
//! command_prefix = "c!"
//! default_mode = "collaborative"
//!
//! [games]
//! starter_words = ["I", "A", "The"]
//! # seed = 42
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tokio::fs;

use crate::game::word_chain::{is_playable, DEFAULT_STARTER_WORDS};
use crate::game::{GameMode, GameRegistry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub games: GamesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub name: String,
    /// Prefix every command must start with, e.g. `c!` in `c!start`.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Mode used by `start` without an explicit mode.
    #[serde(default = "default_mode")]
    pub default_mode: GameMode,
}

fn default_command_prefix() -> String {
    "c!".to_string()
}

fn default_mode() -> GameMode {
    GameMode::Collaborative
}

impl BotConfig {
    /// Configured prefix, or `c!` when it is blank or contains whitespace.
    pub fn effective_prefix(&self) -> String {
        let prefix = self.command_prefix.trim();
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            warn!(
                "Invalid command prefix {:?}, defaulting to c!",
                self.command_prefix
            );
            return default_command_prefix();
        }
        prefix.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Candidate first words for word chain games.
    #[serde(default = "default_starter_words")]
    pub starter_words: Vec<String>,
    /// Fixed seed for reproducible starting letters and words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_starter_words() -> Vec<String> {
    DEFAULT_STARTER_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            starter_words: default_starter_words(),
            seed: None,
        }
    }
}

impl GamesConfig {
    /// Starter words with unplayable entries dropped. Falls back to the
    /// built-in list if nothing usable is left.
    pub fn valid_starter_words(&self) -> Vec<String> {
        let words: Vec<String> = self
            .starter_words
            .iter()
            .map(|w| w.trim())
            .filter(|w| {
                let ok = is_playable(w);
                if !ok {
                    warn!("Ignoring unplayable starter word {:?}", w);
                }
                ok
            })
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return default_starter_words();
        }
        words
    }

    /// Build a registry wired with this section's words and seed.
    pub fn build_registry(&self) -> GameRegistry {
        let registry = GameRegistry::new().with_starter_words(self.valid_starter_words());
        match self.seed {
            Some(seed) => registry.with_picker(StdRng::seed_from_u64(seed)),
            None => registry,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields `Ok(None)`.
    /// Any other read or parse failure is still an error.
    pub async fn load_if_present(path: &str) -> Result<Option<Self>> {
        match fs::metadata(path).await {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            _ => Config::load(path).await.map(Some),
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bot: BotConfig {
                name: "Letterchain".to_string(),
                command_prefix: default_command_prefix(),
                default_mode: default_mode(),
            },
            games: GamesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
