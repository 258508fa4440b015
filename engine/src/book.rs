//! The paginator: current-page state and flip navigation.
//!
//! The only component with real state. Navigation is guarded twice: by
//! bounds and by the animation lock. Rejected calls are silent no-ops,
//! never errors, and nothing is queued behind an in-flight flip.

use std::time::Duration;

use pageturn_types::{Deck, Page};
use tracing::{debug, trace};

use crate::animation::EffectTimer;
use crate::schedule::Schedule;
use crate::sound::{CueQueue, SoundCue};

/// Duration of a single page flip.
pub const FLIP_DURATION: Duration = Duration::from_millis(800);
/// Per-page offset when flipping multiple pages in one jump.
pub const STAGGER_DELAY: Duration = Duration::from_millis(100);
/// Default auto-flip interval.
pub const DEFAULT_AUTO_FLIP_INTERVAL: Duration = Duration::from_millis(5000);

/// Which way an in-flight transition is turning pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Backward,
}

/// An in-flight transition. Its timer spans the whole staggered sequence;
/// while it exists, all navigation is rejected.
#[derive(Debug)]
struct FlipAnimation {
    direction: FlipDirection,
    /// Page turned by step 0. Forward steps walk up from here, backward
    /// steps walk down.
    first_page: usize,
    steps: usize,
    timer: EffectTimer,
}

impl FlipAnimation {
    fn page_for_step(&self, step: usize) -> usize {
        match self.direction {
            FlipDirection::Forward => self.first_page + step,
            FlipDirection::Backward => self.first_page - step,
        }
    }

    fn step_for_page(&self, page: usize) -> Option<usize> {
        let step = match self.direction {
            FlipDirection::Forward => page.checked_sub(self.first_page)?,
            FlipDirection::Backward => self.first_page.checked_sub(page)?,
        };
        (step < self.steps).then_some(step)
    }
}

/// A deferred "mark page turned/unturned" action.
#[derive(Debug)]
struct FlipOp {
    page: usize,
    turned: bool,
}

#[derive(Debug)]
struct AutoFlip {
    interval: Duration,
    elapsed: Duration,
}

/// The page-navigation controller.
#[derive(Debug)]
pub struct Paginator {
    deck: Deck,
    current: usize,
    /// `flipped[i]` is true once page `i` has been turned. Derived state
    /// for rendering; `current` is authoritative.
    flipped: Vec<bool>,
    flip: Option<FlipAnimation>,
    /// Staggered flip marks for multi-page jumps. Owned here, so dropping
    /// the paginator cancels anything still pending.
    pending_flips: Schedule<FlipOp>,
    auto_flip: Option<AutoFlip>,
    cues: CueQueue,
}

impl Paginator {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let flipped = vec![false; deck.len()];
        Self {
            deck,
            current: 0,
            flipped,
            flip: None,
            pending_flips: Schedule::new(),
            auto_flip: None,
            cues: CueQueue::new(),
        }
    }

    /// Set initial page positions. Idempotent; called when the book view
    /// is first revealed.
    pub fn init(&mut self) {
        for (i, turned) in self.flipped.iter_mut().enumerate() {
            *turned = i < self.current;
        }
        self.pending_flips.cancel_all();
        self.flip = None;
        debug!(
            total_pages = self.deck.len(),
            current = self.current,
            "book initialized"
        );
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.deck.get(index)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flip.is_some()
    }

    /// Whether page `index` is visually turned.
    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Textual page indicator, e.g. "6 / 7".
    #[must_use]
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current + 1, self.deck.len())
    }

    #[must_use]
    pub fn prev_enabled(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.current + 1 < self.deck.len()
    }

    /// Continuous book-tilt parameter: linear over
    /// `current / (total - 1)`.
    #[must_use]
    pub fn tilt_progress(&self) -> f32 {
        let span = (self.deck.len() - 1) as f32;
        self.current as f32 / span
    }

    /// Advance to the next page. No-op while animating or at the last page.
    pub fn next_page(&mut self) {
        if self.is_animating() || !self.next_enabled() {
            trace!(current = self.current, "next_page rejected");
            return;
        }

        let page = self.current;
        self.current += 1;
        self.begin_flip(FlipDirection::Forward, page, 1);
    }

    /// Return to the previous page. No-op while animating or at page 0.
    pub fn previous_page(&mut self) {
        if self.is_animating() || !self.prev_enabled() {
            trace!(current = self.current, "previous_page rejected");
            return;
        }

        self.current -= 1;
        let page = self.current;
        self.begin_flip(FlipDirection::Backward, page, 1);
    }

    /// Jump to an arbitrary page, flipping every page strictly between the
    /// old and new index in a staggered sequence. No-op while animating,
    /// out of bounds, or when already on `target`.
    ///
    /// The settle duration is computed from the pre-move distance.
    pub fn go_to_page(&mut self, target: usize) {
        if self.is_animating() || target >= self.deck.len() || target == self.current {
            trace!(current = self.current, target, "go_to_page rejected");
            return;
        }

        let (direction, first_page, steps) = if target > self.current {
            (FlipDirection::Forward, self.current, target - self.current)
        } else {
            (
                FlipDirection::Backward,
                self.current - 1,
                self.current - target,
            )
        };

        self.current = target;
        self.begin_flip(direction, first_page, steps);
    }

    fn begin_flip(&mut self, direction: FlipDirection, first_page: usize, steps: usize) {
        let settle = STAGGER_DELAY * (steps as u32 - 1) + FLIP_DURATION;
        let animation = FlipAnimation {
            direction,
            first_page,
            steps,
            timer: EffectTimer::new(settle),
        };

        for step in 0..steps {
            let page = animation.page_for_step(step);
            self.pending_flips.after(
                STAGGER_DELAY * step as u32,
                FlipOp {
                    page,
                    turned: direction == FlipDirection::Forward,
                },
            );
        }

        debug!(?direction, first_page, steps, current = self.current, "flip started");
        self.flip = Some(animation);
        self.cues.push(SoundCue::PageFlip);
    }

    /// Advance all in-flight timers by the frame delta.
    pub fn advance(&mut self, delta: Duration) {
        for op in self.pending_flips.advance(delta) {
            if let Some(turned) = self.flipped.get_mut(op.page) {
                *turned = op.turned;
            }
        }

        if let Some(flip) = &mut self.flip {
            flip.timer.advance(delta);
            if flip.timer.is_finished() {
                self.flip = None;
            }
        }

        let mut fires = 0;
        if let Some(auto) = &mut self.auto_flip {
            auto.elapsed += delta;
            while auto.elapsed >= auto.interval {
                auto.elapsed -= auto.interval;
                fires += 1;
            }
        }
        for _ in 0..fires {
            // A fire that lands mid-animation is rejected like any other
            // navigation call.
            if self.next_enabled() {
                self.next_page();
            } else {
                self.go_to_page(0);
            }
        }
    }

    /// Per-page flip progress in `[0, 1]` for rendering the staggered
    /// sweep. `None` when the page is not part of the current transition.
    #[must_use]
    pub fn flip_progress(&self, page: usize) -> Option<f32> {
        let flip = self.flip.as_ref()?;
        let step = flip.step_for_page(page)?;
        let start = STAGGER_DELAY * step as u32;
        let into = flip.timer.elapsed().saturating_sub(start);
        Some((into.as_secs_f32() / FLIP_DURATION.as_secs_f32()).clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn flip_direction(&self) -> Option<FlipDirection> {
        self.flip.as_ref().map(|f| f.direction)
    }

    /// Start auto-advance. Replaces any running interval.
    pub fn start_auto_flip(&mut self, interval: Duration) {
        debug!(?interval, "auto-flip started");
        self.auto_flip = Some(AutoFlip {
            interval,
            elapsed: Duration::ZERO,
        });
    }

    /// Stop auto-advance. Safe to call when already stopped.
    pub fn stop_auto_flip(&mut self) {
        if self.auto_flip.take().is_some() {
            debug!("auto-flip stopped");
        }
    }

    #[must_use]
    pub fn auto_flip_active(&self) -> bool {
        self.auto_flip.is_some()
    }

    /// Drain sound cues recorded since the last call.
    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        self.cues.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageturn_types::Page;

    fn deck(pages: usize) -> Deck {
        let pages = (0..pages)
            .map(|i| Page::new(format!("Page {}", i + 1), "body"))
            .collect();
        Deck::new(pages).expect("valid test deck")
    }

    fn settled(book: &mut Paginator) {
        // Longest possible transition in these tests is well under a minute.
        book.advance(Duration::from_secs(60));
        assert!(!book.is_animating());
    }

    #[test]
    fn next_page_advances_and_locks() {
        let mut book = Paginator::new(deck(3));
        book.next_page();
        assert_eq!(book.current_page(), 1);
        assert!(book.is_animating());

        // Locked: further navigation is rejected.
        book.next_page();
        book.previous_page();
        book.go_to_page(2);
        assert_eq!(book.current_page(), 1);

        book.advance(FLIP_DURATION);
        assert!(!book.is_animating());
    }

    #[test]
    fn bounds_are_no_ops() {
        let mut book = Paginator::new(deck(3));
        book.previous_page();
        assert_eq!(book.current_page(), 0);

        book.go_to_page(2);
        settled(&mut book);
        book.next_page();
        assert_eq!(book.current_page(), 2);
        assert!(!book.is_animating());
    }

    #[test]
    fn go_to_page_reaches_every_target() {
        for target in 0..7 {
            let mut book = Paginator::new(deck(7));
            book.go_to_page(target);
            settled(&mut book);
            assert_eq!(book.current_page(), target);
        }
    }

    #[test]
    fn go_to_same_page_is_a_no_op() {
        let mut book = Paginator::new(deck(5));
        book.go_to_page(0);
        assert!(!book.is_animating());
    }

    #[test]
    fn previous_after_next_restores_index() {
        let mut book = Paginator::new(deck(5));
        book.next_page();
        settled(&mut book);
        book.previous_page();
        settled(&mut book);
        assert_eq!(book.current_page(), 0);
        assert!(!book.is_flipped(0));
    }

    #[test]
    fn jump_settle_time_scales_with_pre_move_distance() {
        let mut book = Paginator::new(deck(7));
        book.go_to_page(5);

        // Five staggered steps: settle = 4 * stagger + flip duration.
        let settle = STAGGER_DELAY * 4 + FLIP_DURATION;
        book.advance(settle - Duration::from_millis(1));
        assert!(book.is_animating());
        book.advance(Duration::from_millis(1));
        assert!(!book.is_animating());
    }

    #[test]
    fn staggered_flip_marks_land_in_sequence() {
        let mut book = Paginator::new(deck(7));
        book.go_to_page(3);

        book.advance(Duration::ZERO);
        assert!(book.is_flipped(0));
        assert!(!book.is_flipped(1));

        book.advance(STAGGER_DELAY);
        assert!(book.is_flipped(1));
        assert!(!book.is_flipped(2));

        book.advance(STAGGER_DELAY);
        assert!(book.is_flipped(2));
    }

    #[test]
    fn backward_jump_unturns_intermediate_pages() {
        let mut book = Paginator::new(deck(7));
        book.go_to_page(5);
        settled(&mut book);

        book.go_to_page(1);
        settled(&mut book);
        assert_eq!(book.current_page(), 1);
        assert!(book.is_flipped(0));
        for page in 1..5 {
            assert!(!book.is_flipped(page), "page {page} should be unturned");
        }
    }

    #[test]
    fn scenario_seven_pages_jump_to_five() {
        let mut book = Paginator::new(deck(7));
        book.go_to_page(5);
        settled(&mut book);

        assert_eq!(book.current_page(), 5);
        assert!(book.prev_enabled());
        assert!(book.next_enabled());
        assert_eq!(book.indicator(), "6 / 7");
    }

    #[test]
    fn derived_facets_track_boundaries() {
        let mut book = Paginator::new(deck(3));
        assert!(!book.prev_enabled());
        assert!(book.next_enabled());
        assert!(book.tilt_progress().abs() < f32::EPSILON);

        book.go_to_page(2);
        settled(&mut book);
        assert!(book.prev_enabled());
        assert!(!book.next_enabled());
        assert!((book.tilt_progress() - 1.0).abs() < f32::EPSILON);
        assert_eq!(book.indicator(), "3 / 3");
    }

    #[test]
    fn auto_flip_advances_and_wraps() {
        let mut book = Paginator::new(deck(3));
        let interval = Duration::from_millis(2000);
        book.start_auto_flip(interval);

        book.advance(interval);
        assert_eq!(book.current_page(), 1);

        // Let the flip settle without reaching the next interval.
        book.advance(FLIP_DURATION);
        assert!(!book.is_animating());
        book.advance(interval - FLIP_DURATION);
        assert_eq!(book.current_page(), 2);

        // At the last page the next fire wraps to the start.
        book.advance(FLIP_DURATION);
        book.advance(interval - FLIP_DURATION);
        assert_eq!(book.current_page(), 0);
    }

    #[test]
    fn auto_flip_fire_during_animation_is_skipped() {
        let mut book = Paginator::new(deck(5));
        book.start_auto_flip(Duration::from_millis(100));

        book.next_page(); // manual flip holds the lock
        book.advance(Duration::from_millis(100));
        // The fire landed while animating and was rejected.
        assert_eq!(book.current_page(), 1);
    }

    #[test]
    fn stop_auto_flip_is_idempotent() {
        let mut book = Paginator::new(deck(3));
        book.stop_auto_flip();
        book.start_auto_flip(Duration::from_millis(500));
        book.stop_auto_flip();
        book.stop_auto_flip();

        book.advance(Duration::from_secs(10));
        assert_eq!(book.current_page(), 0);
    }

    #[test]
    fn flip_progress_reports_staggered_steps() {
        let mut book = Paginator::new(deck(7));
        book.go_to_page(2);

        assert_eq!(book.flip_direction(), Some(FlipDirection::Forward));
        let p0 = book.flip_progress(0).expect("page 0 in transition");
        assert!(p0.abs() < f32::EPSILON);
        assert!(book.flip_progress(5).is_none());

        book.advance(STAGGER_DELAY);
        let p0 = book.flip_progress(0).expect("page 0 in transition");
        let p1 = book.flip_progress(1).expect("page 1 in transition");
        assert!(p0 > p1);
    }

    #[test]
    fn sound_cue_recorded_per_transition() {
        let mut book = Paginator::new(deck(5));
        book.next_page();
        settled(&mut book);
        book.go_to_page(4);
        assert_eq!(book.take_sound_cues().len(), 2);
        assert!(book.take_sound_cues().is_empty());
    }
}
