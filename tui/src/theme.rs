//! Color theme and glyphs for the Pageturn TUI.
//!
//! A warm paper-and-leather palette by default with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use pageturn_types::UiOptions;

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 20, 18); // table felt
    pub const BG_PANEL: Color = Color::Rgb(38, 30, 26); // card stock
    pub const BG_HIGHLIGHT: Color = Color::Rgb(58, 46, 38);

    // === Book surfaces ===
    pub const COVER: Color = Color::Rgb(94, 50, 38); // worn leather
    pub const COVER_EDGE: Color = Color::Rgb(140, 90, 56);
    pub const PAGE: Color = Color::Rgb(238, 226, 198); // cream paper
    pub const PAGE_SHADOW: Color = Color::Rgb(196, 182, 152);
    pub const PAGE_INK: Color = Color::Rgb(52, 44, 36);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 224, 200);
    pub const TEXT_SECONDARY: Color = Color::Rgb(199, 184, 154);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 116, 100);
    pub const TEXT_DISABLED: Color = Color::Rgb(94, 86, 76);

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(216, 140, 74); // candlelight
    pub const PRIMARY_DIM: Color = Color::Rgb(160, 110, 66);
    pub const GOLD: Color = Color::Rgb(222, 186, 98);
    pub const GREEN: Color = Color::Rgb(148, 176, 100);
    pub const RED: Color = Color::Rgb(204, 92, 84);

    // === Semantic aliases ===
    pub const SUCCESS: Color = GREEN;
    pub const ERROR: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub cover: Color,
    pub cover_edge: Color,
    pub page: Color,
    pub page_shadow: Color,
    pub page_ink: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub gold: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            cover: colors::COVER,
            cover_edge: colors::COVER_EDGE,
            page: colors::PAGE,
            page_shadow: colors::PAGE_SHADOW,
            page_ink: colors::PAGE_INK,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            gold: colors::GOLD,
            success: colors::SUCCESS,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            cover: Color::DarkGray,
            cover_edge: Color::Gray,
            page: Color::White,
            page_shadow: Color::Gray,
            page_ink: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::Yellow,
            primary_dim: Color::Yellow,
            gold: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and controls.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub prev: &'static str,
    pub next: &'static str,
    pub play: &'static str,
    pub stop: &'static str,
    pub selected: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub bullet: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            prev: "<",
            next: ">",
            play: ">",
            stop: "#",
            selected: ">",
            correct: "+",
            incorrect: "x",
            bullet: "*",
        }
    }

    #[must_use]
    pub fn unicode() -> Self {
        Self {
            prev: "◀",
            next: "▶",
            play: "▶",
            stop: "■",
            selected: "❯",
            correct: "✓",
            incorrect: "✗",
            bullet: "•",
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}

/// Shared style helpers.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn option_selected(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn option_idle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn option_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled)
    }
}
