//! Audible feedback cues.
//!
//! The engine only records that a cue should play; the binary decides how
//! (terminal BEL today). Emission is allowed to fail and nothing here ever
//! reports that failure back into paginator state.

/// A cue the frontend may play.
///
/// Closed enum - only engine code constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A page transition started.
    PageFlip,
}

/// Queue of cues pending emission.
///
/// Cues accumulate during a frame's state advance and are drained by the
/// binary right before rendering.
#[derive(Debug, Default)]
pub struct CueQueue {
    pending: Vec<SoundCue>,
}

impl CueQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: SoundCue) {
        self.pending.push(cue);
    }

    /// Take all pending cues, clearing the queue.
    pub fn take(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
