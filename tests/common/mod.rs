//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use pageturn_engine::{App, GATE_CORRECT_HOLD, GATE_FADE, GATE_REVEAL_DELAY};
use pageturn_types::{AnswerOption, Deck, Outcome, Page, TriviaPrompt, UiOptions};

/// The correct option index in [`test_prompt`].
pub const CORRECT: usize = 1;

pub fn test_prompt() -> TriviaPrompt {
    TriviaPrompt::new(
        "Which one opens the book?",
        vec![
            AnswerOption::new("the red key"),
            AnswerOption::new("the gold key"),
            AnswerOption::new("the rusty key"),
        ],
        CORRECT,
    )
    .expect("valid prompt")
}

pub fn test_deck(pages: usize) -> Deck {
    let pages = (0..pages)
        .map(|i| Page::new(format!("Page {}", i + 1), format!("body of page {}", i + 1)))
        .collect();
    Deck::new(pages).expect("valid deck")
}

pub fn test_app(pages: usize) -> App {
    App::from_parts(
        test_prompt(),
        test_deck(pages),
        UiOptions::default(),
        Duration::from_millis(3000),
    )
}

/// Answer correctly and run the reveal sequence to completion.
pub fn pass_gate(app: &mut App) {
    assert_eq!(app.submit_answer(CORRECT), Some(Outcome::Correct));
    app.advance(GATE_CORRECT_HOLD);
    app.advance(GATE_FADE);
    app.advance(GATE_REVEAL_DELAY);
}

/// Advance well past any transition still in flight.
pub fn settle(app: &mut App) {
    app.advance(Duration::from_secs(60));
    assert!(!app.book().is_animating());
}
