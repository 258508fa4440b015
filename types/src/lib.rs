//! Core domain types for Pageturn - no IO, no async.
//!
//! Everything in this crate is plain data: the page deck the book is
//! built from, the trivia prompt guarding it, and the UI option flags
//! shared between the engine and the renderer.

pub mod deck;
pub mod trivia;
pub mod ui;

pub use deck::{Deck, DeckError, Page};
pub use trivia::{AnswerOption, Outcome, TriviaError, TriviaPrompt};
pub use ui::UiOptions;
