//! # Chat bot
//!
//! Thin layer between chat text and the [game engine](crate::game).
//!
//! ## Components
//!
//! - [`public`] - prefix-based command parser
//! - [`render`] - chat text for every outcome
//! - [`console`] - line-oriented driver used by the binary
//!
//! ```text
//! ┌─────────────────┐
//! │  console        │ ← reads "#channel text" lines, prints replies
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  ChatBot        │ ← parse → game::actions → render
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  GameRegistry   │ ← one game per channel
//! └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use letterchain::bot::ChatBot;
//! use letterchain::config::Config;
//!
//! let bot = ChatBot::from_config(&Config::default());
//! let replies = bot.handle_message("#general", "c!start word");
//! assert_eq!(replies[0].channel, "#general");
//! assert!(replies[0].text.contains("Word Chain Game Started"));
//! ```

pub mod console;
pub mod public;
pub mod render;

use log::debug;

use crate::config::Config;
use crate::game::{actions, GameError, GameMode, GameRegistry};
use crate::logutil::escape_log;
use public::{BotCommand, BotCommandParser};

/// One message the bot wants posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub channel: String,
    pub text: String,
}

impl Reply {
    fn new(channel: &str, text: impl Into<String>) -> Self {
        Self {
            channel: channel.to_string(),
            text: text.into(),
        }
    }
}

pub struct ChatBot {
    registry: GameRegistry,
    parser: BotCommandParser,
    default_mode: GameMode,
}

impl ChatBot {
    pub fn new(registry: GameRegistry, prefix: &str, default_mode: GameMode) -> Self {
        Self {
            registry,
            parser: BotCommandParser::with_prefix(prefix),
            default_mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.games.build_registry(),
            &config.bot.effective_prefix(),
            config.bot.default_mode,
        )
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    /// Handle one chat message posted in `channel`.
    ///
    /// Returns the replies to post, possibly in other channels (`start` and
    /// `stop` accept a target channel). Text that is not a command yields no
    /// replies.
    pub fn handle_message(&self, channel: &str, text: &str) -> Vec<Reply> {
        let prefix = self.prefix();
        let command = self.parser.parse(text);
        if command != BotCommand::Unknown {
            debug!("{}: {:?}", escape_log(channel), command);
        }
        match command {
            BotCommand::Start {
                mode,
                channel: target,
            } => {
                let target = target.as_deref().unwrap_or(channel);
                let mode = mode.unwrap_or_else(|| self.default_mode.slug().to_string());
                match actions::start_game(&self.registry, target, &mode) {
                    Ok(status) => {
                        let mut replies = vec![Reply::new(target, render::started(&status, prefix))];
                        if target != channel {
                            replies.push(Reply::new(channel, render::started_elsewhere(target)));
                        }
                        replies
                    }
                    Err(e) => vec![self.refusal(&e, channel, target)],
                }
            }
            BotCommand::Stop { channel: target } => {
                let target = target.as_deref().unwrap_or(channel);
                match actions::stop_game(&self.registry, target) {
                    Ok(summary) => vec![
                        Reply::new(channel, render::stopped(&summary)),
                        Reply::new(channel, render::stopped_notice(target)),
                    ],
                    Err(e) => vec![self.refusal(&e, channel, target)],
                }
            }
            BotCommand::Submit(text) => {
                let reply = match actions::submit(&self.registry, channel, &text) {
                    Ok(outcome) => render::submission(&outcome, prefix),
                    Err(e) => render::error(&e, channel, prefix),
                };
                vec![Reply::new(channel, reply)]
            }
            BotCommand::Space => {
                let reply = match actions::complete_word_and_list(&self.registry, channel) {
                    Ok((word, words)) => render::completed(&word, &words),
                    Err(e) => render::error(&e, channel, prefix),
                };
                vec![Reply::new(channel, reply)]
            }
            BotCommand::Status => {
                let reply = match actions::status(&self.registry, channel) {
                    Ok(status) => render::status(&status, prefix),
                    Err(GameError::NoActiveGame) => "No active game in this channel.".to_string(),
                    Err(e) => render::error(&e, channel, prefix),
                };
                vec![Reply::new(channel, reply)]
            }
            BotCommand::Help => vec![Reply::new(channel, render::help(prefix))],
            BotCommand::Invalid(reason) => vec![Reply::new(channel, reason)],
            BotCommand::Unknown => Vec::new(),
        }
    }

    fn refusal(&self, err: &GameError, origin: &str, target: &str) -> Reply {
        Reply::new(origin, render::error(err, target, self.prefix()))
    }
}
