//! Application state: which view owns the screen, and the wiring between
//! the gate and the paginator.
//!
//! The app is advanced by frame deltas from the binary's render loop. All
//! input reaches it through explicit methods; the TUI registers hit zones
//! during its draw pass so mouse events can be resolved here without the
//! engine depending on any rendering types.

use std::time::{Duration, Instant};

use pageturn_types::{AnswerOption, Deck, Outcome, Page, TriviaPrompt, UiOptions};
use thiserror::Error;
use tracing::debug;

use crate::book::Paginator;
use crate::config::{AppConfig, BookConfig, PageturnConfig, TriviaConfig};
use crate::gate::TriviaGate;
use crate::sound::{CueQueue, SoundCue};


/// Interval used when auto-flip is toggled from the UI.
const UI_AUTO_FLIP_INTERVAL: Duration = Duration::from_millis(3000);

/// Which view currently owns interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gate,
    Book,
}

/// A rectangular screen region in cell coordinates.
///
/// Engine-side mirror of the renderer's layout rectangles; kept here so
/// hit testing needs no TUI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Zone {
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// What a mouse press at some position should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    GateOption(usize),
    PrevPage,
    NextPage,
    /// Left half of the page surface.
    PageBack,
    /// Right half of the page surface.
    PageForward,
    AutoFlipToggle,
    Shortcut(usize),
}

/// Error resolving configuration into runtime state.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("trivia answer {0:?} does not match any option")]
    UnknownAnswer(String),
    #[error(transparent)]
    Trivia(#[from] pageturn_types::TriviaError),
    #[error(transparent)]
    Deck(#[from] pageturn_types::DeckError),
}

pub struct App {
    gate: TriviaGate,
    book: Paginator,
    screen: Screen,
    book_ready: bool,
    ui_options: UiOptions,
    auto_flip_interval: Duration,
    cues: CueQueue,
    hit_zones: Vec<(Zone, HitTarget)>,
    tick_count: usize,
    last_frame: Instant,
    elapsed: Duration,
    should_quit: bool,
}

impl App {
    /// Build the app from a loaded config file, falling back to the
    /// built-in greeting for anything absent.
    pub fn new(config: Option<&PageturnConfig>) -> Result<Self, ResolveError> {
        let prompt = resolve_prompt(config.and_then(|c| c.trivia.as_ref()))?;
        let deck = resolve_deck(config.and_then(|c| c.book.as_ref()))?;
        let ui_options = resolve_ui_options(config.and_then(|c| c.app.as_ref()));
        let auto_flip_interval = config
            .and_then(|c| c.book.as_ref())
            .and_then(|b| b.auto_flip_interval_ms)
            .map_or(UI_AUTO_FLIP_INTERVAL, Duration::from_millis);

        Ok(Self::from_parts(prompt, deck, ui_options, auto_flip_interval))
    }

    /// Build the app from already-resolved parts.
    #[must_use]
    pub fn from_parts(
        prompt: TriviaPrompt,
        deck: Deck,
        ui_options: UiOptions,
        auto_flip_interval: Duration,
    ) -> Self {
        Self {
            gate: TriviaGate::new(prompt),
            book: Paginator::new(deck),
            screen: Screen::Gate,
            book_ready: false,
            ui_options,
            auto_flip_interval,
            cues: CueQueue::new(),
            hit_zones: Vec::new(),
            tick_count: 0,
            last_frame: Instant::now(),
            elapsed: Duration::ZERO,
            should_quit: false,
        }
    }

    /// Per-frame update driven by the render loop.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    /// Advance all state by an explicit delta. Exposed so tests can drive
    /// time without touching the clock.
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);

        match self.screen {
            Screen::Gate => {
                self.gate.advance(delta);
                if self.gate.book_visible() && !self.book_ready {
                    self.book.init();
                    self.book_ready = true;
                }
                if self.gate.is_passed() {
                    debug!("control transferred to paginator");
                    self.screen = Screen::Book;
                }
            }
            Screen::Book => self.book.advance(delta),
        }

        // Cosmetic: cues are dropped entirely when sound is off, and an
        // emission failure downstream never feeds back into state.
        let cues = self.book.take_sound_cues();
        if self.ui_options.sound {
            for cue in cues {
                self.cues.push(cue);
            }
        }
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    // === View queries ===

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the book view should be drawn (includes the pre-interactive
    /// reveal window).
    #[must_use]
    pub fn book_visible(&self) -> bool {
        self.screen == Screen::Book || self.gate.book_visible()
    }

    #[must_use]
    pub fn gate(&self) -> &TriviaGate {
        &self.gate
    }

    #[must_use]
    pub fn book(&self) -> &Paginator {
        &self.book
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Slow oscillation in `[0, 1]` driving the book's breathing border.
    /// Constant under reduced motion.
    #[must_use]
    pub fn breathing_level(&self) -> f32 {
        if self.ui_options.reduced_motion {
            return 0.5;
        }
        (self.elapsed.as_secs_f32().sin() + 1.0) / 2.0
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // === Gate input ===

    pub fn gate_select_previous(&mut self) {
        self.gate.select_previous();
    }

    pub fn gate_select_next(&mut self) {
        self.gate.select_next();
    }

    pub fn submit_answer(&mut self, choice: usize) -> Option<Outcome> {
        if self.screen != Screen::Gate {
            return None;
        }
        self.gate.submit_answer(choice)
    }

    pub fn submit_selected(&mut self) -> Option<Outcome> {
        self.submit_answer(self.gate.selected())
    }

    // === Book input (rejected until the reveal completes) ===

    pub fn next_page(&mut self) {
        if self.screen == Screen::Book {
            self.book.next_page();
        }
    }

    pub fn previous_page(&mut self) {
        if self.screen == Screen::Book {
            self.book.previous_page();
        }
    }

    pub fn go_to_page(&mut self, target: usize) {
        if self.screen == Screen::Book {
            self.book.go_to_page(target);
        }
    }

    pub fn toggle_auto_flip(&mut self) {
        if self.screen != Screen::Book {
            return;
        }
        if self.book.auto_flip_active() {
            self.book.stop_auto_flip();
        } else {
            self.book.start_auto_flip(self.auto_flip_interval);
        }
    }

    // === Mouse wiring ===

    /// Replace the clickable regions. Called by the draw pass every frame
    /// so hit testing always matches what is on screen.
    pub fn set_hit_zones(&mut self, zones: Vec<(Zone, HitTarget)>) {
        self.hit_zones = zones;
    }

    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hit_zones
            .iter()
            .find(|(zone, _)| zone.contains(x, y))
            .map(|(_, target)| *target)
    }

    pub fn press(&mut self, target: HitTarget) {
        match target {
            HitTarget::GateOption(i) => {
                self.submit_answer(i);
            }
            HitTarget::PrevPage | HitTarget::PageBack => self.previous_page(),
            HitTarget::NextPage | HitTarget::PageForward => self.next_page(),
            HitTarget::AutoFlipToggle => self.toggle_auto_flip(),
            HitTarget::Shortcut(i) => self.go_to_page(i),
        }
    }

    // === Sound ===

    /// Drain cues pending emission. The binary plays them best-effort.
    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        self.cues.take()
    }
}

fn resolve_ui_options(app: Option<&AppConfig>) -> UiOptions {
    app.map_or_else(UiOptions::default, |app| UiOptions {
        ascii_only: app.ascii_only,
        high_contrast: app.high_contrast,
        reduced_motion: app.reduced_motion,
        sound: app.sound,
    })
}

fn resolve_prompt(trivia: Option<&TriviaConfig>) -> Result<TriviaPrompt, ResolveError> {
    let question = trivia
        .and_then(|t| t.question.clone())
        .unwrap_or_else(|| default_question().to_string());
    let labels: Vec<String> = trivia.and_then(|t| t.options.clone()).unwrap_or_else(|| {
        default_options().iter().map(|s| (*s).to_string()).collect()
    });

    let correct = match trivia.and_then(|t| t.answer.as_ref()) {
        Some(answer) => labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(answer))
            .ok_or_else(|| ResolveError::UnknownAnswer(answer.clone()))?,
        None => DEFAULT_CORRECT,
    };

    let options = labels.into_iter().map(AnswerOption::new).collect();
    Ok(TriviaPrompt::new(question, options, correct)?)
}

fn resolve_deck(book: Option<&BookConfig>) -> Result<Deck, ResolveError> {
    let pages = match book.and_then(|b| b.pages.as_ref()) {
        Some(pages) => pages
            .iter()
            .map(|p| Page::new(p.title.clone(), p.body.clone()))
            .collect(),
        None => default_pages(),
    };
    Ok(Deck::new(pages)?)
}

const DEFAULT_CORRECT: usize = 1;

fn default_question() -> &'static str {
    "Which film industry is famous for breaking into a musical number?"
}

fn default_options() -> [&'static str; 4] {
    ["Hollywood", "Bollywood", "Nollywood", "Tollywood"]
}

fn default_pages() -> Vec<Page> {
    vec![
        Page::new("Happy Birthday!", "A little book,\njust for you."),
        Page::new(
            "Contents",
            "1. A wish\n2. A memory\n3. A promise\n4. A song\n5. The end",
        ),
        Page::new(
            "A Wish",
            "May this year bring you\neverything you hoped for,\nand one good surprise.",
        ),
        Page::new(
            "A Memory",
            "Remember the night we\nmissed the last train and\nwalked home singing?",
        ),
        Page::new(
            "A Promise",
            "Cake first.\nCandles second.\nNo exceptions.",
        ),
        Page::new(
            "A Song",
            "You know the one.\nEveryone is about to\nsing it off-key.",
        ),
        Page::new("The End", "...until next year.\n\nWith love."),
    ]
}
