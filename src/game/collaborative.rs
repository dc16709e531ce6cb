//! Collaborative mode: the channel spells words together one letter at a time.

use serde::Serialize;

use super::errors::{GameError, GameResult};
use super::picker::{SeedPicker, ALPHABET};
use super::{GameMode, GameStatus, GameSummary, Progress, Submission, WordGame, WordSet};

/// One entry of the collaborative chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainUnit {
    Letter(char),
    /// Marks the end of a completed word.
    Space,
}

impl ChainUnit {
    pub fn as_char(self) -> char {
        match self {
            ChainUnit::Letter(c) => c,
            ChainUnit::Space => ' ',
        }
    }
}

#[derive(Debug, Clone)]
pub struct CollaborativeGame {
    chain: Vec<ChainUnit>,
    fragment: String,
    words: WordSet,
    completions: usize,
}

impl CollaborativeGame {
    /// Start a game on a letter drawn from `picker`.
    pub fn new(picker: &mut dyn SeedPicker) -> Self {
        let letter = ALPHABET[picker.pick(ALPHABET.len())];
        Self {
            chain: vec![ChainUnit::Letter(letter)],
            fragment: letter.to_string(),
            words: WordSet::default(),
            completions: 0,
        }
    }

    /// Append one letter to the fragment.
    ///
    /// The caller is expected to have trimmed and lowercased `input`; anything
    /// other than a single `a..=z` character is rejected untouched.
    pub fn add_letter(&mut self, input: &str) -> GameResult<&str> {
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => c,
            _ => return Err(GameError::InvalidLetter(input.to_string())),
        };
        self.fragment.push(letter);
        self.chain.push(ChainUnit::Letter(letter));
        Ok(&self.fragment)
    }

    /// Close the current fragment as a word.
    ///
    /// Returns `None` when there is nothing to close; the game is not touched
    /// in that case.
    pub fn complete_word(&mut self) -> Option<String> {
        if self.fragment.is_empty() {
            return None;
        }
        let word = std::mem::take(&mut self.fragment);
        self.words.insert(&word);
        self.chain.push(ChainUnit::Space);
        self.completions += 1;
        Some(word)
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn chain(&self) -> &[ChainUnit] {
        &self.chain
    }
}

impl WordGame for CollaborativeGame {
    fn mode(&self) -> GameMode {
        GameMode::Collaborative
    }

    fn chain_text(&self) -> String {
        self.chain.iter().map(|unit| unit.as_char()).collect()
    }

    fn completed_words(&self) -> Vec<String> {
        self.words.to_vec()
    }

    fn status(&self) -> GameStatus {
        GameStatus {
            mode: GameMode::Collaborative,
            chain_text: self.chain_text(),
            progress: Progress::Collaborative {
                fragment: self.fragment.clone(),
                completed_words: self.completed_words(),
            },
        }
    }

    fn final_summary(&self) -> GameSummary {
        // An unfinished fragment still counts as a word once the game ends.
        let mut words = self.words.clone();
        if !self.fragment.is_empty() {
            words.insert(&self.fragment);
        }
        GameSummary {
            mode: GameMode::Collaborative,
            chain_text: self.chain_text(),
            words: words.to_vec(),
            accepted: self.completions,
        }
    }

    fn add_letter(&mut self, letter: &str) -> GameResult<String> {
        CollaborativeGame::add_letter(self, letter).map(str::to_string)
    }

    fn submit(&mut self, text: &str) -> GameResult<Submission> {
        let folded = text.trim().to_lowercase();
        let fragment = self.add_letter(&folded)?.to_string();
        Ok(Submission::LetterAdded { fragment })
    }

    fn complete_word(&mut self) -> GameResult<String> {
        CollaborativeGame::complete_word(self).ok_or(GameError::NoFragment)
    }
}
