//! Test utilities & fixtures.
//! Registries with scripted randomness so every game starts the same way.

use letterchain::game::picker::ALPHABET;
use letterchain::game::word_chain::DEFAULT_STARTER_WORDS;
use letterchain::game::{GameRegistry, ScriptedPicker};

/// Registry whose collaborative games always start on `letter`.
#[allow(dead_code)]
pub fn registry_starting_on_letter(letter: char) -> GameRegistry {
    assert!(ALPHABET.contains(&letter), "not a starting letter: {letter}");
    GameRegistry::new().with_picker(ScriptedPicker::letter(letter))
}

/// Registry whose word chain games always start on `word`.
#[allow(dead_code)]
pub fn registry_starting_on_word(word: &str) -> GameRegistry {
    GameRegistry::new()
        .with_starter_words(vec![word.to_string()])
        .with_picker(ScriptedPicker::always(0))
}

/// Index of `word` in the default starter list.
#[allow(dead_code)]
pub fn default_starter_index(word: &str) -> usize {
    DEFAULT_STARTER_WORDS
        .iter()
        .position(|w| *w == word)
        .expect("word is a default starter")
}
