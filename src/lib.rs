//! # Letterchain - word-building games for chat channels
//!
//! Letterchain runs one word game per chat channel:
//!
//! - **Collaborative**: the channel adds one letter at a time and closes words
//!   with a space.
//! - **Word chain**: players submit whole words, each starting with the last
//!   letter of the previous word, never repeating a word.
//!
//! ## Quick Start
//!
//! ```rust
//! use letterchain::game::{actions, GameRegistry, ScriptedPicker, Submission};
//!
//! // Always pick the first starter word ("I").
//! let registry = GameRegistry::new().with_picker(ScriptedPicker::always(0));
//! actions::start_game(&registry, "#general", "word").unwrap();
//!
//! let outcome = actions::submit(&registry, "#general", "it").unwrap();
//! assert!(matches!(outcome, Submission::WordAccepted { next_letter: 't', .. }));
//!
//! let summary = actions::stop_game(&registry, "#general").unwrap();
//! assert_eq!(summary.chain_text, "I → it");
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - game state, validation rules and the per-channel registry
//! - [`bot`] - command parsing, chat text rendering and the console driver
//! - [`config`] - TOML configuration
//! - [`metrics`] - in-process counters
//! - [`logutil`] - log-safe escaping of chat text
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   bot           │ ← chat text in, chat text out
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   game::actions │ ← start / submit / space / status / stop
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   GameRegistry  │ ← one game per channel
//! └─────────────────┘
//! ```

pub mod bot;
pub mod config;
pub mod game;
pub mod logutil;
pub mod metrics;
