//! UI option flags shared between the engine and the renderer.

/// Rendering and feedback options resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and controls.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable motion effects (flip sweep, breathing border).
    pub reduced_motion: bool,
    /// Emit the audible page-flip cue.
    pub sound: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            sound: true,
        }
    }
}
