//! Registry of running games, keyed by channel.
//!
//! The registry is an ordinary value: the dispatcher owns it (or shares it in
//! an `Arc`) and passes it to every operation in [`super::actions`]. It keeps
//! at most one game per channel and is the only place games are created or
//! destroyed.
//!
//! Locking is two-level. The channel map sits behind one mutex and each game
//! behind its own, so commands for different channels only contend for the
//! short map lookup. Stopping a game takes it out of its slot; a command that
//! looked the game up just before the stop then finds the slot empty and gets
//! [`GameError::NoActiveGame`], so nothing lands after the final report.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::errors::{GameError, GameResult};
use super::picker::SeedPicker;
use super::word_chain::DEFAULT_STARTER_WORDS;
use super::{new_game, GameMode, GameStatus, WordGame};

type Slot = Arc<Mutex<Option<Box<dyn WordGame>>>>;

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Game operations never panic half-way through a mutation, so a poisoned
    // lock still guards consistent state.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared access to one channel's game.
#[derive(Clone)]
pub struct GameHandle {
    channel: String,
    slot: Slot,
}

impl GameHandle {
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Run `f` against the game while holding its lock.
    ///
    /// Fails with [`GameError::NoActiveGame`] if the game was stopped after
    /// this handle was obtained.
    pub fn with_game<R>(
        &self,
        f: impl FnOnce(&mut dyn WordGame) -> GameResult<R>,
    ) -> GameResult<R> {
        let mut guard = lock(&self.slot);
        match guard.as_deref_mut() {
            Some(game) => f(game),
            None => Err(GameError::NoActiveGame),
        }
    }

    pub fn mode(&self) -> Option<GameMode> {
        lock(&self.slot).as_deref().map(|game| game.mode())
    }

    pub fn is_running(&self) -> bool {
        lock(&self.slot).is_some()
    }
}

impl std::fmt::Debug for GameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameHandle")
            .field("channel", &self.channel)
            .field("mode", &self.mode())
            .finish()
    }
}

pub struct GameRegistry {
    games: Mutex<HashMap<String, Slot>>,
    picker: Mutex<Box<dyn SeedPicker>>,
    starter_words: Vec<String>,
}

impl GameRegistry {
    /// Create an empty registry seeded from OS entropy with the default
    /// starter words.
    pub fn new() -> Self {
        GameRegistry {
            games: Mutex::new(HashMap::new()),
            picker: Mutex::new(Box::new(StdRng::from_entropy())),
            starter_words: DEFAULT_STARTER_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Replace the source of randomness used for new games.
    pub fn with_picker(mut self, picker: impl SeedPicker + 'static) -> Self {
        self.picker = Mutex::new(Box::new(picker));
        self
    }

    /// Replace the candidate starter words for word chain games.
    pub fn with_starter_words(mut self, words: Vec<String>) -> Self {
        self.starter_words = words;
        self
    }

    pub fn starter_words(&self) -> &[String] {
        &self.starter_words
    }

    /// Start a game in `channel`.
    ///
    /// The status is snapshotted under the map lock, before other callers
    /// can see the game.
    pub fn create(&self, channel: &str, mode: GameMode) -> GameResult<(GameHandle, GameStatus)> {
        let mut games = lock(&self.games);
        if games.contains_key(channel) {
            return Err(GameError::AlreadyRunning);
        }
        let game = {
            let mut picker = lock(&self.picker);
            new_game(mode, &mut **picker, &self.starter_words)
        };
        let status = game.status();
        debug!("registry: created {} game in {}", mode, channel);
        let slot: Slot = Arc::new(Mutex::new(Some(game)));
        games.insert(channel.to_string(), Arc::clone(&slot));
        let handle = GameHandle {
            channel: channel.to_string(),
            slot,
        };
        Ok((handle, status))
    }

    /// Look up the game in `channel`. Never creates one.
    pub fn get(&self, channel: &str) -> Option<GameHandle> {
        lock(&self.games).get(channel).map(|slot| GameHandle {
            channel: channel.to_string(),
            slot: Arc::clone(slot),
        })
    }

    /// Detach the game in `channel` and hand it back for final reporting.
    pub fn remove(&self, channel: &str) -> GameResult<Box<dyn WordGame>> {
        let slot = lock(&self.games)
            .remove(channel)
            .ok_or(GameError::NotRunning)?;
        let game = lock(&slot).take().ok_or(GameError::NotRunning)?;
        debug!("registry: removed {} game from {}", game.mode(), channel);
        Ok(game)
    }

    pub fn contains(&self, channel: &str) -> bool {
        lock(&self.games).contains_key(channel)
    }

    /// Channels with a running game, sorted.
    pub fn active_channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = lock(&self.games).keys().cloned().collect();
        channels.sort();
        channels
    }

    pub fn len(&self) -> usize {
        lock(&self.games).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.games).is_empty()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::picker::ScriptedPicker;

    fn registry() -> GameRegistry {
        GameRegistry::new().with_picker(ScriptedPicker::always(0))
    }

    #[test]
    fn create_get_remove() {
        let reg = registry();
        assert!(reg.get("#a").is_none());
        let (handle, status) = reg.create("#a", GameMode::Collaborative).unwrap();
        assert_eq!(status.chain_text, "a");
        assert_eq!(handle.channel(), "#a");
        assert_eq!(handle.mode(), Some(GameMode::Collaborative));
        assert!(reg.get("#a").is_some());
        assert_eq!(reg.active_channels(), vec!["#a".to_string()]);

        let game = reg.remove("#a").unwrap();
        assert_eq!(game.chain_text(), "a");
        assert!(reg.is_empty());
        assert!(!handle.is_running());
    }

    #[test]
    fn one_game_per_channel() {
        let reg = registry();
        reg.create("#a", GameMode::WordChain).unwrap();
        assert_eq!(
            reg.create("#a", GameMode::Collaborative).unwrap_err(),
            GameError::AlreadyRunning
        );
        assert_eq!(reg.get("#a").unwrap().mode(), Some(GameMode::WordChain));
        reg.create("#b", GameMode::Collaborative).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn remove_missing_is_not_running() {
        let reg = registry();
        assert_eq!(reg.remove("#nowhere").unwrap_err(), GameError::NotRunning);
    }

    #[test]
    fn stale_handle_sees_no_active_game() {
        let reg = registry();
        let (handle, _) = reg.create("#a", GameMode::WordChain).unwrap();
        reg.remove("#a").unwrap();
        let err = handle.with_game(|game| game.submit("it")).unwrap_err();
        assert_eq!(err, GameError::NoActiveGame);
    }

    #[test]
    fn configured_starter_words_are_used() {
        let reg = registry().with_starter_words(vec!["Hello".into()]);
        let (handle, status) = reg.create("#a", GameMode::WordChain).unwrap();
        assert_eq!(status.chain_text, "Hello");
        let text = handle.with_game(|game| Ok(game.chain_text())).unwrap();
        assert_eq!(text, "Hello");
    }
}
