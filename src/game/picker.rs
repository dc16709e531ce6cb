//! Source of randomness for seeding new games.
//!
//! A game needs exactly one random choice at creation: the starting letter
//! (collaborative) or the starter word (word chain). That choice goes through
//! [`SeedPicker`] so the registry can be handed a seeded `StdRng` in
//! production and a [`ScriptedPicker`] in tests.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Lowercase Latin alphabet used for collaborative starting letters.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Chooses an index uniformly from `0..len`.
pub trait SeedPicker: Send {
    /// `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RngCore + Send> SeedPicker for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic picker that replays a fixed list of indices.
///
/// Once the script runs out every further pick returns the fallback index.
/// Indices are reduced modulo `len`, so a script never picks out of range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    picks: VecDeque<usize>,
    fallback: usize,
}

impl ScriptedPicker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Always pick `index`.
    pub fn always(index: usize) -> Self {
        Self {
            picks: VecDeque::new(),
            fallback: index,
        }
    }

    /// Always pick `letter` when choosing from [`ALPHABET`].
    pub fn letter(letter: char) -> Self {
        let index = ALPHABET
            .iter()
            .position(|&c| c == letter.to_ascii_lowercase())
            .unwrap_or(0);
        Self::always(index)
    }
}

impl SeedPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(self.fallback) % len
    }
}
