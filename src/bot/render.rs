//! Chat text for game outcomes.
//!
//! The engine hands back plain data; this module is the only place that
//! decides bold markers, emoji and wording.

use crate::game::{GameError, GameMode, GameStatus, GameSummary, Progress, Submission};

fn upper(c: char) -> String {
    c.to_uppercase().collect()
}

fn word_list(words: &[String], empty: &str) -> String {
    if words.is_empty() {
        empty.to_string()
    } else {
        words.join(", ")
    }
}

pub fn started(status: &GameStatus, prefix: &str) -> String {
    match &status.progress {
        Progress::Collaborative { fragment, .. } => format!(
            "**Collaborative Word Building Game Started!**\n\
             Starting with letter: **{}**\n\
             Current word fragment: **{}**\n\n\
             Commands: Use `{p}s <letter>` to add a letter to build a word together.\n\
             Use `{p}sp` or `{p}space` to complete the current word and start a new one.",
            fragment.to_uppercase(),
            fragment,
            p = prefix
        ),
        Progress::WordChain { next_letter, .. } => format!(
            "**Word Chain Game Started!**\n\
             Starting word: **{}**\n\
             Next word must start with: **{}**\n\n\
             Command: Use `{}s <word>` to submit a word.",
            status.chain_text,
            upper(*next_letter),
            prefix
        ),
    }
}

pub fn started_elsewhere(channel: &str) -> String {
    format!("Game started in {}.", channel)
}

pub fn stopped(summary: &GameSummary) -> String {
    match summary.mode {
        GameMode::Collaborative => format!(
            "🏁 **Game Finished!**\nFinal text: **{}**\nWords created: {}",
            summary.chain_text,
            word_list(&summary.words, "No words completed")
        ),
        GameMode::WordChain => format!(
            "🏁 **Game Finished!**\nFinal word chain: **{}**\nTotal words: {}",
            summary.chain_text,
            summary.words.len()
        ),
    }
}

pub fn stopped_notice(channel: &str) -> String {
    format!("Game stopped in {}.", channel)
}

pub fn submission(outcome: &Submission, prefix: &str) -> String {
    match outcome {
        Submission::LetterAdded { fragment } => format!(
            "✅ Letter added! Current word: **{}**\n\
             Continue building or use `{}sp` to complete this word.",
            fragment, prefix
        ),
        Submission::WordAccepted {
            chain_text,
            next_letter,
            ..
        } => format!(
            "✅ Word accepted! Chain is now: **{}**\nNext word must start with: **{}**",
            chain_text,
            upper(*next_letter)
        ),
    }
}

pub fn completed(word: &str, words_so_far: &[String]) -> String {
    format!(
        "🎉 **Word completed: {}!**\nStart building a new word.\nWords found so far: {}",
        word,
        words_so_far.join(", ")
    )
}

pub fn status(status: &GameStatus, prefix: &str) -> String {
    match &status.progress {
        Progress::Collaborative {
            fragment,
            completed_words,
        } => format!(
            "**Collaborative Word Building Game**\n\
             Current word: **{}**\n\
             Full chain so far: **{}**\n\
             Words completed: {}\n\
             Use `{}s <letter>` to add the next letter.",
            fragment,
            status.chain_text,
            word_list(completed_words, "None yet"),
            prefix
        ),
        Progress::WordChain {
            next_letter,
            words_used,
        } => format!(
            "**Word Chain Game**\n\
             Current chain: **{}**\n\
             Next word must start with: **{}**\n\
             Words used: {}",
            status.chain_text,
            upper(*next_letter),
            words_used
        ),
    }
}

/// User-facing hint for a refused command in `channel`.
pub fn error(err: &GameError, channel: &str, prefix: &str) -> String {
    match err {
        GameError::AlreadyRunning => format!("A game is already running in {}!", channel),
        GameError::NotRunning => format!("No active game found in {}.", channel),
        GameError::NoActiveGame => format!(
            "No active game in this channel. Start one with `{}start`.",
            prefix
        ),
        GameError::InvalidMode(_) => {
            "Invalid mode! Please choose either **collaborative** or **word**.".to_string()
        }
        GameError::InvalidLetter(_) => "Please submit a single alphabetical letter.".to_string(),
        GameError::InvalidWord(_) => "Please submit a valid word (alphabetical).".to_string(),
        GameError::WordAlreadyUsed(_) => "❌ This word has already been used!".to_string(),
        GameError::WrongStartingLetter { expected, .. } => {
            format!("❌ Your word should start with **{}**.", upper(*expected))
        }
        GameError::NoFragment => {
            "You need to add some letters first before completing a word.".to_string()
        }
        GameError::WrongMode(_) => {
            "This command is only available in collaborative word building mode.".to_string()
        }
    }
}

pub fn help(prefix: &str) -> String {
    format!(
        "**Word Chain Game Commands**\n\n\
         `{p}start [mode] [channel]` – Start a new game (modes: collaborative, word)\n\
         `{p}stop [channel]` – Stop the game in the specified channel (or current channel)\n\
         `{p}s` or `{p}submit <letter/word>` – Submit a letter or word depending on game mode\n\
         `{p}sp` or `{p}space` – Complete the current word and start a new one\n\
         `{p}status` – Check the current game status\n\
         `{p}help` – Display this help message\n\n\
         **Game Modes:**\n\
         • **Collaborative** – Players add one letter at a time to build words together\n\
         • **Word** – Players submit full words where each word must start with the last letter of the previous word",
        p = prefix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_letter_hint_is_uppercase() {
        let err = GameError::WrongStartingLetter {
            expected: 't',
            word: "dog".into(),
        };
        assert_eq!(
            error(&err, "#general", "c!"),
            "❌ Your word should start with **T**."
        );
    }

    #[test]
    fn collaborative_stop_lists_words() {
        let summary = GameSummary {
            mode: GameMode::Collaborative,
            chain_text: "ca t".into(),
            words: vec!["ca".into(), "t".into()],
            accepted: 1,
        };
        let text = stopped(&summary);
        assert!(text.contains("Final text: **ca t**"));
        assert!(text.contains("Words created: ca, t"));
    }

    #[test]
    fn empty_word_lists_have_placeholders() {
        let summary = GameSummary {
            mode: GameMode::Collaborative,
            chain_text: String::new(),
            words: vec![],
            accepted: 0,
        };
        assert!(stopped(&summary).contains("No words completed"));

        let status_text = status(
            &GameStatus {
                mode: GameMode::Collaborative,
                chain_text: "q".into(),
                progress: Progress::Collaborative {
                    fragment: "q".into(),
                    completed_words: vec![],
                },
            },
            "c!",
        );
        assert!(status_text.contains("Words completed: None yet"));
    }

    #[test]
    fn word_chain_start_names_next_letter() {
        let text = started(
            &GameStatus {
                mode: GameMode::WordChain,
                chain_text: "The".into(),
                progress: Progress::WordChain {
                    next_letter: 'e',
                    words_used: 1,
                },
            },
            "c!",
        );
        assert!(text.contains("Starting word: **The**"));
        assert!(text.contains("Next word must start with: **E**"));
    }

    #[test]
    fn help_uses_configured_prefix() {
        let text = help("w!");
        assert!(text.contains("`w!start [mode] [channel]`"));
        assert!(!text.contains("c!"));
    }
}
