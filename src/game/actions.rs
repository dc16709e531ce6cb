//! Operations a command dispatcher calls on behalf of a channel.
//!
//! Each takes the registry explicitly and returns structured data or a
//! [`GameError`]; nothing here formats text for users.

use log::{debug, info};

use super::errors::{GameError, GameResult};
use super::registry::GameRegistry;
use super::{GameMode, GameStatus, GameSummary, Submission};
use crate::logutil::escape_log;
use crate::metrics;

/// Start a game of `mode` in `channel`.
///
/// The mode string is validated before the registry is touched.
pub fn start_game(registry: &GameRegistry, channel: &str, mode: &str) -> GameResult<GameStatus> {
    let mode: GameMode = mode.parse()?;
    let (_, status) = registry.create(channel, mode)?;
    let counter = metrics::record_game_started(mode.slug());
    info!(
        "game started: channel={} mode={} chain={} active_{}={}",
        escape_log(channel),
        mode,
        escape_log(&status.chain_text),
        mode.slug(),
        counter.currently_active
    );
    Ok(status)
}

/// Stop the game in `channel` and report how it ended.
pub fn stop_game(registry: &GameRegistry, channel: &str) -> GameResult<GameSummary> {
    let game = registry.remove(channel)?;
    let summary = game.final_summary();
    metrics::record_game_stopped(summary.mode.slug());
    info!(
        "game stopped: channel={} mode={} words={} accepted={}",
        escape_log(channel),
        summary.mode,
        summary.words.len(),
        summary.accepted
    );
    Ok(summary)
}

/// Submit a letter (collaborative) or word (word chain).
pub fn submit(registry: &GameRegistry, channel: &str, text: &str) -> GameResult<Submission> {
    let handle = registry.get(channel).ok_or(GameError::NoActiveGame)?;
    let outcome = handle.with_game(|game| game.submit(text));
    match &outcome {
        Ok(_) => metrics::inc_submission_accepted(),
        Err(e) => {
            metrics::inc_submission_rejected();
            debug!(
                "submission rejected: channel={} text={} reason={}",
                escape_log(channel),
                escape_log(text),
                e
            );
        }
    }
    outcome
}

/// Close the current collaborative fragment as a word.
pub fn complete_word(registry: &GameRegistry, channel: &str) -> GameResult<String> {
    complete_word_and_list(registry, channel).map(|(word, _)| word)
}

/// Like [`complete_word`], also returning every word completed so far.
///
/// Both come from the same game under one lock.
pub fn complete_word_and_list(
    registry: &GameRegistry,
    channel: &str,
) -> GameResult<(String, Vec<String>)> {
    let handle = registry.get(channel).ok_or(GameError::NoActiveGame)?;
    let (word, words) = handle.with_game(|game| {
        let word = game.complete_word()?;
        Ok((word, game.completed_words()))
    })?;
    metrics::inc_word_completed();
    debug!(
        "word completed: channel={} word={}",
        escape_log(channel),
        escape_log(&word)
    );
    Ok((word, words))
}

pub fn status(registry: &GameRegistry, channel: &str) -> GameResult<GameStatus> {
    registry
        .get(channel)
        .ok_or(GameError::NoActiveGame)?
        .with_game(|game| Ok(game.status()))
}
