//! The trivia gate: the question screen guarding the book.
//!
//! Stateless between attempts apart from the enabled/disabled status of
//! the option set. Grading is total over the option set; the only state
//! machine here sequences the visual feedback and the reveal transition.

use std::time::Duration;

use pageturn_types::{AnswerOption, Outcome, TriviaPrompt};
use tracing::debug;

use crate::animation::EffectTimer;

/// How long an incorrect mark is shown before the options re-enable.
pub const GATE_RETRY_DELAY: Duration = Duration::from_millis(1000);
/// How long the correct mark is held before the gate starts fading.
pub const GATE_CORRECT_HOLD: Duration = Duration::from_millis(800);
/// Duration of the gate fade-out.
pub const GATE_FADE: Duration = Duration::from_millis(500);
/// Pause between the book appearing and it becoming interactive.
pub const GATE_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Externally observable gate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Accepting input.
    Prompt,
    /// An answer was just graded; options are disabled.
    Feedback,
    /// Correct answer: the gate is fading out.
    FadeOut,
    /// The book is visible but not yet interactive.
    Reveal,
    /// Control has transferred to the paginator.
    Passed,
}

#[derive(Debug)]
enum Stage {
    Prompt,
    Feedback { outcome: Outcome, timer: EffectTimer },
    FadeOut { timer: EffectTimer },
    Reveal { timer: EffectTimer },
    Passed,
}

/// The gating trivia question.
#[derive(Debug)]
pub struct TriviaGate {
    prompt: TriviaPrompt,
    selected: usize,
    marked: Option<(usize, Outcome)>,
    stage: Stage,
}

impl TriviaGate {
    #[must_use]
    pub fn new(prompt: TriviaPrompt) -> Self {
        Self {
            prompt,
            selected: 0,
            marked: None,
            stage: Stage::Prompt,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        self.prompt.question()
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        self.prompt.options()
    }

    /// Keyboard cursor over the options.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_previous(&mut self) {
        if self.input_enabled() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.input_enabled() && self.selected + 1 < self.prompt.options().len() {
            self.selected += 1;
        }
    }

    /// Submit an answer by option index.
    ///
    /// Returns `None` while the option set is disabled (feedback or reveal
    /// in flight) or for an out-of-range index; both are no-ops.
    pub fn submit_answer(&mut self, choice: usize) -> Option<Outcome> {
        if !self.input_enabled() || choice >= self.prompt.options().len() {
            return None;
        }

        let outcome = self.prompt.grade(choice);
        let hold = match outcome {
            Outcome::Correct => GATE_CORRECT_HOLD,
            Outcome::Incorrect => GATE_RETRY_DELAY,
        };

        debug!(choice, ?outcome, "answer submitted");
        self.selected = choice;
        self.marked = Some((choice, outcome));
        self.stage = Stage::Feedback {
            outcome,
            timer: EffectTimer::new(hold),
        };
        Some(outcome)
    }

    /// Advance the feedback/reveal timers by the frame delta.
    pub fn advance(&mut self, delta: Duration) {
        match &mut self.stage {
            Stage::Feedback { outcome, timer } => {
                timer.advance(delta);
                if timer.is_finished() {
                    match outcome {
                        Outcome::Incorrect => {
                            // Full reset: unlimited retries, no penalty.
                            self.marked = None;
                            self.stage = Stage::Prompt;
                        }
                        Outcome::Correct => {
                            self.stage = Stage::FadeOut {
                                timer: EffectTimer::new(GATE_FADE),
                            };
                        }
                    }
                }
            }
            Stage::FadeOut { timer } => {
                timer.advance(delta);
                if timer.is_finished() {
                    self.stage = Stage::Reveal {
                        timer: EffectTimer::new(GATE_REVEAL_DELAY),
                    };
                }
            }
            Stage::Reveal { timer } => {
                timer.advance(delta);
                if timer.is_finished() {
                    debug!("gate passed, book interactive");
                    self.stage = Stage::Passed;
                }
            }
            Stage::Prompt | Stage::Passed => {}
        }
    }

    #[must_use]
    pub fn phase(&self) -> GatePhase {
        match self.stage {
            Stage::Prompt => GatePhase::Prompt,
            Stage::Feedback { .. } => GatePhase::Feedback,
            Stage::FadeOut { .. } => GatePhase::FadeOut,
            Stage::Reveal { .. } => GatePhase::Reveal,
            Stage::Passed => GatePhase::Passed,
        }
    }

    /// Whether the option set currently accepts submissions.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        matches!(self.stage, Stage::Prompt)
    }

    /// The visually marked option, if any, with its grading.
    #[must_use]
    pub fn marked(&self) -> Option<(usize, Outcome)> {
        self.marked
    }

    /// Fade-out progress in `[0, 1]` while the gate is fading.
    #[must_use]
    pub fn fade_progress(&self) -> Option<f32> {
        match &self.stage {
            Stage::FadeOut { timer } => Some(timer.progress()),
            _ => None,
        }
    }

    /// Whether the book view should be drawn instead of the gate.
    #[must_use]
    pub fn book_visible(&self) -> bool {
        matches!(self.stage, Stage::Reveal { .. } | Stage::Passed)
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self.stage, Stage::Passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageturn_types::AnswerOption;

    fn gate() -> TriviaGate {
        let prompt = TriviaPrompt::new(
            "Which one?",
            vec![
                AnswerOption::new("north"),
                AnswerOption::new("south"),
                AnswerOption::new("east"),
            ],
            1,
        )
        .expect("valid prompt");
        TriviaGate::new(prompt)
    }

    #[test]
    fn incorrect_answer_re_enables_after_delay() {
        let mut gate = gate();
        assert_eq!(gate.submit_answer(0), Some(Outcome::Incorrect));
        assert!(!gate.input_enabled());
        assert_eq!(gate.marked(), Some((0, Outcome::Incorrect)));

        // Submissions while disabled are no-ops.
        assert_eq!(gate.submit_answer(1), None);

        gate.advance(GATE_RETRY_DELAY);
        assert!(gate.input_enabled());
        assert_eq!(gate.marked(), None);
        assert_eq!(gate.phase(), GatePhase::Prompt);
    }

    #[test]
    fn correct_answer_runs_full_reveal_sequence() {
        let mut gate = gate();
        assert_eq!(gate.submit_answer(1), Some(Outcome::Correct));
        assert_eq!(gate.phase(), GatePhase::Feedback);

        gate.advance(GATE_CORRECT_HOLD);
        assert_eq!(gate.phase(), GatePhase::FadeOut);
        assert!(gate.fade_progress().is_some());
        assert!(!gate.book_visible());

        gate.advance(GATE_FADE);
        assert_eq!(gate.phase(), GatePhase::Reveal);
        assert!(gate.book_visible());
        assert!(!gate.is_passed());

        gate.advance(GATE_REVEAL_DELAY);
        assert!(gate.is_passed());
    }

    #[test]
    fn out_of_range_choice_is_a_no_op() {
        let mut gate = gate();
        assert_eq!(gate.submit_answer(7), None);
        assert!(gate.input_enabled());
    }

    #[test]
    fn selection_cursor_clamps_at_bounds() {
        let mut gate = gate();
        gate.select_previous();
        assert_eq!(gate.selected(), 0);
        gate.select_next();
        gate.select_next();
        gate.select_next();
        assert_eq!(gate.selected(), 2);
    }
}
