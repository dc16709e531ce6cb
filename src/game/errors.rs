use thiserror::Error;

use super::GameMode;

/// Every way a game operation can be refused.
///
/// None of these are fatal: the dispatcher renders them back to the channel
/// and the game (if any) is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `start` on a channel that already has a game.
    #[error("a game is already running in this channel")]
    AlreadyRunning,

    /// `stop` on a channel without a game.
    #[error("no game is running in this channel")]
    NotRunning,

    /// Any in-game command on a channel without a game.
    #[error("no active game in this channel")]
    NoActiveGame,

    /// Mode string not recognized by [`GameMode::from_str`](std::str::FromStr).
    #[error("invalid mode: {0:?}")]
    InvalidMode(String),

    /// Collaborative submission that is not a single `a..=z` letter.
    #[error("invalid letter: {0:?}")]
    InvalidLetter(String),

    /// Word chain submission that is empty or not purely alphabetic.
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// Word chain submission whose lowercase form was already played.
    #[error("word already used: {0}")]
    WordAlreadyUsed(String),

    /// Word chain submission that does not continue the chain.
    #[error("{word:?} does not start with '{expected}'")]
    WrongStartingLetter { expected: char, word: String },

    /// `space` with nothing built yet.
    #[error("no letters to complete")]
    NoFragment,

    /// Command that only exists in the other mode.
    #[error("not available in {0} mode")]
    WrongMode(GameMode),
}

pub type GameResult<T> = Result<T, GameError>;
