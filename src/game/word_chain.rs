//! Word chain mode: every word must start with the last letter of the one
//! before it, and no word may be played twice.

use super::errors::{GameError, GameResult};
use super::picker::SeedPicker;
use super::{GameMode, GameStatus, GameSummary, Progress, Submission, WordGame, WordSet};

/// Separator between words in the rendered chain.
pub const CHAIN_SEPARATOR: &str = " → ";

/// Starter words used when no list is configured.
pub const DEFAULT_STARTER_WORDS: [&str; 11] = [
    "I", "A", "An", "My", "The", "This", "That", "Those", "These", "He", "She",
];

/// A word is playable when it is non-empty and purely alphabetic.
pub fn is_playable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn first_letter(word: &str) -> Option<char> {
    word.chars().next().map(lower)
}

fn last_letter(word: &str) -> Option<char> {
    word.chars().next_back().map(lower)
}

#[derive(Debug, Clone)]
pub struct WordChainGame {
    /// Never empty: seeded with the starter word.
    chain: Vec<String>,
    used: WordSet,
    next_letter: char,
    accepted: usize,
}

impl WordChainGame {
    /// Start a game on a word drawn from `starters`.
    ///
    /// Unplayable candidates are skipped; with no playable candidate left the
    /// built-in [`DEFAULT_STARTER_WORDS`] are used instead.
    pub fn new(picker: &mut dyn SeedPicker, starters: &[String]) -> Self {
        let mut candidates: Vec<&str> = starters
            .iter()
            .map(String::as_str)
            .filter(|w| is_playable(w))
            .collect();
        if candidates.is_empty() {
            candidates = DEFAULT_STARTER_WORDS.to_vec();
        }
        let starter = candidates[picker.pick(candidates.len())];
        Self::seeded(starter)
    }

    /// Start a game on a known starter word.
    pub fn starting_with(word: &str) -> GameResult<Self> {
        if !is_playable(word) {
            return Err(GameError::InvalidWord(word.to_string()));
        }
        Ok(Self::seeded(word))
    }

    fn seeded(word: &str) -> Self {
        let mut used = WordSet::default();
        used.insert(&word.to_lowercase());
        Self {
            chain: vec![word.to_string()],
            used,
            next_letter: last_letter(word).unwrap_or('a'),
            accepted: 0,
        }
    }

    /// Play `word`.
    ///
    /// Checks run in order (format, duplicate, continuity) and the first
    /// failure is returned with the game untouched. On success the word is
    /// kept in its original casing and the next expected letter is returned.
    pub fn add_word(&mut self, word: &str) -> GameResult<char> {
        if !is_playable(word) {
            return Err(GameError::InvalidWord(word.to_string()));
        }
        let normalized = word.to_lowercase();
        if self.used.contains(&normalized) {
            return Err(GameError::WordAlreadyUsed(normalized));
        }
        if first_letter(word) != Some(self.next_letter) {
            return Err(GameError::WrongStartingLetter {
                expected: self.next_letter,
                word: word.to_string(),
            });
        }

        let next = last_letter(word).unwrap_or(self.next_letter);
        self.chain.push(word.to_string());
        self.used.insert(&normalized);
        self.next_letter = next;
        self.accepted += 1;
        Ok(next)
    }

    /// Letter the next word has to start with.
    pub fn expected_letter(&self) -> char {
        self.next_letter
    }

    pub fn words(&self) -> &[String] {
        &self.chain
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn is_used(&self, word: &str) -> bool {
        self.used.contains(&word.to_lowercase())
    }
}

impl WordGame for WordChainGame {
    fn mode(&self) -> GameMode {
        GameMode::WordChain
    }

    fn chain_text(&self) -> String {
        self.chain.join(CHAIN_SEPARATOR)
    }

    fn completed_words(&self) -> Vec<String> {
        self.used.to_vec()
    }

    fn status(&self) -> GameStatus {
        GameStatus {
            mode: GameMode::WordChain,
            chain_text: self.chain_text(),
            progress: Progress::WordChain {
                next_letter: self.next_letter,
                words_used: self.used.len(),
            },
        }
    }

    fn final_summary(&self) -> GameSummary {
        GameSummary {
            mode: GameMode::WordChain,
            chain_text: self.chain_text(),
            words: self.completed_words(),
            accepted: self.accepted,
        }
    }

    fn add_word(&mut self, word: &str) -> GameResult<char> {
        WordChainGame::add_word(self, word)
    }

    fn submit(&mut self, text: &str) -> GameResult<Submission> {
        let word = text.trim();
        let next_letter = self.add_word(word)?;
        Ok(Submission::WordAccepted {
            word: word.to_string(),
            chain_text: self.chain_text(),
            next_letter,
        })
    }
}
