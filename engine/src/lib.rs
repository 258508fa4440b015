//! Core engine for Pageturn - state machines and timers.
//!
//! This crate contains the trivia gate, the paginator, and the app wiring
//! between them, without any TUI dependencies. All animation is
//! duration-driven data advanced by frame deltas; the binary owns the
//! clock and the renderer owns the pixels.

mod animation;
mod app;
mod book;
mod config;
mod gate;
mod schedule;
mod sound;

pub use animation::EffectTimer;
pub use app::{App, HitTarget, ResolveError, Screen, Zone};
pub use book::{
    DEFAULT_AUTO_FLIP_INTERVAL, FLIP_DURATION, FlipDirection, Paginator, STAGGER_DELAY,
};
pub use config::{
    AppConfig, BookConfig, ConfigError, PageConfig, PageturnConfig, TriviaConfig,
};
pub use gate::{
    GATE_CORRECT_HOLD, GATE_FADE, GATE_RETRY_DELAY, GATE_REVEAL_DELAY, GatePhase, TriviaGate,
};
pub use schedule::Schedule;
pub use sound::{CueQueue, SoundCue};
