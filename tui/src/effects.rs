//! Animation geometry for the book view.
//!
//! All inputs are engine-side progress values in `[0, 1]`; this module turns
//! them into rectangles and colors the draw pass can paint directly.

use ratatui::layout::Rect;
use ratatui::style::Color;

use pageturn_engine::FlipDirection;

/// Rectangle covered by the moving fold of a flipping page.
///
/// A forward flip sweeps the fold from the right edge of the page surface to
/// the left edge; a backward flip sweeps the other way. The returned rect is
/// the part of the page the fold has already passed over.
#[must_use]
pub fn fold_rect(surface: Rect, progress: f32, direction: FlipDirection) -> Rect {
    let t = ease_out_cubic(progress);
    let swept = (f32::from(surface.width) * t).round() as u16;
    let swept = swept.min(surface.width);
    match direction {
        FlipDirection::Forward => Rect {
            x: surface
                .x
                .saturating_add(surface.width.saturating_sub(swept)),
            y: surface.y,
            width: swept,
            height: surface.height,
        },
        FlipDirection::Backward => Rect {
            x: surface.x,
            y: surface.y,
            width: swept,
            height: surface.height,
        },
    }
}

/// Horizontal offset of the book, leaning toward whichever cover is heavier.
///
/// `tilt` is the reading position in `[0, 1]`; the offset is centered at the
/// midpoint so the spine drifts at most `max_offset` cells either way.
#[must_use]
pub fn tilt_offset(tilt: f32, max_offset: u16) -> i16 {
    let t = tilt.clamp(0.0, 1.0);
    let centered = (t - 0.5) * 2.0;
    (centered * f32::from(max_offset)).round() as i16
}

/// Shift a rect horizontally by a signed cell offset, clamped to the viewport.
#[must_use]
pub fn shift_rect(base: Rect, offset: i16, viewport: Rect) -> Rect {
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let x = (i32::from(base.x) + i32::from(offset)).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}

/// Blend two colors by `level` in `[0, 1]`. Non-RGB colors pass through
/// unblended so high-contrast named colors stay exact.
#[must_use]
pub fn breathe(from: Color, to: Color, level: f32) -> Color {
    let t = level.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            lerp_channel(r0, r1, t),
            lerp_channel(g0, g1, t),
            lerp_channel(b0, b1, t),
        ),
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
