//! # Game engine
//!
//! Per-channel word games and the registry that owns them.
//!
//! ## Components
//!
//! - [`registry`] - channel → game map, one game per channel
//! - [`collaborative`] - letter-by-letter word building
//! - [`word_chain`] - whole words, each starting with the previous word's last letter
//! - [`actions`] - the operations a command dispatcher calls (start, submit, space, status, stop)
//! - [`picker`] - injectable randomness for starting letters and starter words
//!
//! Both modes implement [`WordGame`]. A mode answers the other mode's commands
//! with [`GameError::WrongMode`] so the dispatcher never branches on the mode
//! itself.
//!
//! ## Lifecycle
//!
//! ```text
//!  idle ──start──▶ running ──stop──▶ finished
//!                  │     ▲
//!                  └─────┘ submit / space
//! ```
//!
//! Everything returned from here is plain data; turning it into chat text is
//! the job of [`crate::bot::render`].

pub mod actions;
pub mod collaborative;
pub mod errors;
pub mod picker;
pub mod registry;
pub mod word_chain;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub use collaborative::{ChainUnit, CollaborativeGame};
pub use errors::{GameError, GameResult};
pub use picker::{ScriptedPicker, SeedPicker};
pub use registry::{GameHandle, GameRegistry};
pub use word_chain::WordChainGame;

/// Serialized as its [slug](GameMode::slug); parsed with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameMode {
    Collaborative,
    WordChain,
}

impl GameMode {
    /// Name used on the command line (`c!start word`).
    pub fn slug(self) -> &'static str {
        match self {
            GameMode::Collaborative => "collaborative",
            GameMode::WordChain => "word",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameMode::Collaborative => "Collaborative Word Building",
            GameMode::WordChain => "Word Chain",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collaborative" => Ok(GameMode::Collaborative),
            "word" | "wordchain" => Ok(GameMode::WordChain),
            _ => Err(GameError::InvalidMode(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for GameMode {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.slug().to_string()
    }
}

/// Set of words that also remembers the order words were first added.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl WordSet {
    /// Returns `false` if `word` was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.seen.insert(word.to_string()) {
            self.order.push(word.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Read-only snapshot of a running game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub mode: GameMode,
    pub chain_text: String,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Progress {
    Collaborative {
        fragment: String,
        completed_words: Vec<String>,
    },
    WordChain {
        next_letter: char,
        words_used: usize,
    },
}

/// Final report produced when a game is stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub mode: GameMode,
    pub chain_text: String,
    /// Completed words (collaborative, including an unfinished fragment) or
    /// used words (word chain, including the starter).
    pub words: Vec<String>,
    /// Successful `space` (collaborative) or word (word chain) submissions.
    pub accepted: usize,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    LetterAdded {
        fragment: String,
    },
    WordAccepted {
        word: String,
        chain_text: String,
        next_letter: char,
    },
}

/// Behavior shared by both game modes.
///
/// Mode-specific operations default to [`GameError::WrongMode`]; each mode
/// overrides only its own.
pub trait WordGame: Send + fmt::Debug {
    fn mode(&self) -> GameMode;

    /// Collaborative: letters and spaces run together. Word chain: words
    /// joined with [`word_chain::CHAIN_SEPARATOR`].
    fn chain_text(&self) -> String;

    /// Completed (collaborative) or used (word chain) words in the order they
    /// were first recorded.
    fn completed_words(&self) -> Vec<String>;

    fn status(&self) -> GameStatus;

    /// Report for the end of the game. Does not modify the game.
    fn final_summary(&self) -> GameSummary;

    /// Apply raw submission text the way this mode interprets it.
    fn submit(&mut self, text: &str) -> GameResult<Submission>;

    fn add_letter(&mut self, _letter: &str) -> GameResult<String> {
        Err(GameError::WrongMode(self.mode()))
    }

    fn complete_word(&mut self) -> GameResult<String> {
        Err(GameError::WrongMode(self.mode()))
    }

    fn add_word(&mut self, _word: &str) -> GameResult<char> {
        Err(GameError::WrongMode(self.mode()))
    }
}

/// Build a fresh game for `mode`.
pub fn new_game(
    mode: GameMode,
    picker: &mut dyn SeedPicker,
    starter_words: &[String],
) -> Box<dyn WordGame> {
    match mode {
        GameMode::Collaborative => Box::new(CollaborativeGame::new(picker)),
        GameMode::WordChain => Box::new(WordChainGame::new(picker, starter_words)),
    }
}
