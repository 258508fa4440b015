//! TUI rendering for Pageturn using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{breathe, fold_rect, shift_rect, tilt_offset};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use pageturn_engine::{App, GatePhase, HitTarget, Zone};
use pageturn_types::Outcome;

/// Book panel dimensions, clamped to the viewport.
const BOOK_WIDTH: u16 = 46;
const BOOK_HEIGHT: u16 = 16;
/// Maximum sideways drift of the book as reading progresses.
const TILT_MAX_OFFSET: u16 = 3;

/// Main draw function. Registers this frame's clickable regions on the app
/// so mouse input resolves against exactly what is on screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let mut zones = Vec::new();
    if app.book_visible() {
        draw_book(frame, app, &mut zones, &palette, &glyphs);
    } else {
        draw_gate(frame, app, &mut zones, &palette, &glyphs);
    }
    app.set_hit_zones(zones);
}

fn zone_of(rect: Rect) -> Zone {
    Zone {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap into rows of at most `width` cells. Words wider than a
/// whole row are hard-split. Always yields at least one row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();

    for word in text.split_whitespace() {
        for piece in split_to_width(word, width) {
            let sep = usize::from(!row.is_empty());
            if row.width() + sep + piece.width() <= width {
                if sep == 1 {
                    row.push(' ');
                }
                row.push_str(&piece);
            } else {
                rows.push(std::mem::take(&mut row));
                row = piece;
            }
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut used = 0;
    for c in word.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            used = 0;
        }
        piece.push(c);
        used += cw;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

// === Gate view ===

fn draw_gate(
    frame: &mut Frame,
    app: &App,
    zones: &mut Vec<(Zone, HitTarget)>,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let gate = app.gate();

    // While the gate fades, sink every color toward the backdrop.
    let fade = gate.fade_progress().unwrap_or(0.0);
    let dim = |color| breathe(color, palette.bg_dark, fade);

    // The question is wrapped here, not by the paragraph, so the rendered
    // rows and the registered option zones cannot disagree. Panel width
    // minus borders and padding is the usable text width.
    let panel_width = 52.min(frame.area().width);
    let text_width = usize::from(panel_width.saturating_sub(6).max(1));
    let question = wrap_words(gate.question(), text_width);
    let question_lines = question.len() as u16;

    let panel_height =
        (gate.options().len() as u16 + question_lines + 5).min(frame.area().height);
    let panel = centered_rect(panel_width, panel_height, frame.area());

    // The frame dims while the options are locked out.
    let border = if gate.input_enabled() {
        palette.primary
    } else {
        palette.primary_dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim(border)))
        .title(" One question first ")
        .title_style(Style::default().fg(dim(palette.gold)))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let question_style = Style::default()
        .fg(dim(palette.text_primary))
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = question
        .into_iter()
        .map(|row| Line::from(Span::styled(row, question_style)))
        .collect();
    lines.push(Line::from(""));

    let interactive = gate.input_enabled();
    for (i, option) in gate.options().iter().enumerate() {
        let is_selected = i == gate.selected();
        let mark = match gate.marked() {
            Some((m, Outcome::Correct)) if m == i => {
                Span::styled(format!(" {}", glyphs.correct), Style::default().fg(palette.success))
            }
            Some((m, Outcome::Incorrect)) if m == i => {
                Span::styled(format!(" {}", glyphs.incorrect), Style::default().fg(palette.error))
            }
            _ => Span::raw(""),
        };

        let pointer = if is_selected && interactive {
            format!("{} ", glyphs.selected)
        } else {
            "  ".to_string()
        };
        let style = if !interactive {
            styles::option_disabled(palette)
        } else if is_selected {
            styles::option_selected(palette)
        } else {
            styles::option_idle(palette)
        };
        let style = style.fg(dim(style.fg.unwrap_or(palette.text_secondary)));

        lines.push(Line::from(vec![
            Span::styled(pointer, Style::default().fg(dim(palette.primary))),
            Span::styled(format!("{}. {}", i + 1, option.label()), style),
            mark,
        ]));

        // One clickable row per option, aligned with the line just pushed.
        let row = inner.y + question_lines + 1 + i as u16;
        if row < inner.y + inner.height {
            zones.push((
                zone_of(Rect {
                    x: inner.x,
                    y: row,
                    width: inner.width,
                    height: 1,
                }),
                HitTarget::GateOption(i),
            ));
        }
    }

    lines.push(Line::from(""));
    let hint = match gate.phase() {
        GatePhase::Feedback if matches!(gate.marked(), Some((_, Outcome::Incorrect))) => {
            "Not quite. Try again in a moment."
        }
        GatePhase::Feedback | GatePhase::FadeOut => "Yes! Opening your book...",
        _ => "Up/Down choose   Enter pick   1-9 quick pick   q quit",
    };
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(dim(palette.text_muted)),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// === Book view ===

fn draw_book(
    frame: &mut Frame,
    app: &App,
    zones: &mut Vec<(Zone, HitTarget)>,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let book = app.book();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // Book
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Page shortcuts
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_book_panel(frame, app, zones, chunks[0], palette);
    draw_controls(frame, app, zones, chunks[1], palette, glyphs);
    draw_shortcuts(frame, book.total_pages(), zones, chunks[2], palette);
    draw_hints(frame, book.total_pages(), chunks[3], palette, glyphs);
}

fn draw_book_panel(
    frame: &mut Frame,
    app: &App,
    zones: &mut Vec<(Zone, HitTarget)>,
    area: Rect,
    palette: &Palette,
) {
    let book = app.book();

    let centered = centered_rect(BOOK_WIDTH, BOOK_HEIGHT, area);
    let offset = tilt_offset(book.tilt_progress(), TILT_MAX_OFFSET);
    let panel = shift_rect(centered, offset, area);

    // The cover breathes between its edge color and gold.
    let border = breathe(palette.cover_edge, palette.gold, app.breathing_level());
    let cover = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.cover));
    let surface = cover.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(cover, panel);

    draw_page(frame, app, surface, palette);
    draw_flip_overlay(frame, app, surface, palette);

    // Left half steps back, right half steps forward, like tapping a page
    // edge. Taps during a flip still land here; the paginator rejects them.
    let half = surface.width / 2;
    zones.push((
        zone_of(Rect {
            width: half,
            ..surface
        }),
        HitTarget::PageBack,
    ));
    zones.push((
        zone_of(Rect {
            x: surface.x + half,
            width: surface.width - half,
            ..surface
        }),
        HitTarget::PageForward,
    ));
}

fn draw_page(frame: &mut Frame, app: &App, surface: Rect, palette: &Palette) {
    let book = app.book();
    let Some(page) = book.page(book.current_page()) else {
        return;
    };

    let paper = Block::default().style(Style::default().bg(palette.page));
    frame.render_widget(paper, surface);

    let mut lines = vec![
        Line::from(Span::styled(
            page.title().to_string(),
            Style::default()
                .fg(palette.page_ink)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for body_line in page.body() {
        lines.push(Line::from(Span::styled(
            body_line.clone(),
            Style::default().fg(palette.page_ink),
        )));
    }

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    let inset = Rect {
        x: surface.x + 1,
        y: surface.y + 1,
        width: surface.width.saturating_sub(2),
        height: surface.height.saturating_sub(2),
    };
    frame.render_widget(text, inset);
}

/// Paint the moving fold of the page currently mid-turn. During a staggered
/// jump several pages animate at once; the least-finished one is the fold
/// the eye tracks, so that is the one drawn.
fn draw_flip_overlay(frame: &mut Frame, app: &App, surface: Rect, palette: &Palette) {
    if app.ui_options().reduced_motion {
        return;
    }
    let book = app.book();
    let Some(direction) = book.flip_direction() else {
        return;
    };

    let active = (0..book.total_pages())
        .filter_map(|page| book.flip_progress(page))
        .filter(|p| *p < 1.0)
        .fold(None::<f32>, |min, p| {
            Some(min.map_or(p, |m| m.min(p)))
        });
    let Some(progress) = active else {
        return;
    };

    let fold = fold_rect(surface, progress, direction);
    if fold.width == 0 {
        return;
    }
    let shadow = Block::default().style(Style::default().bg(palette.page_shadow));
    frame.render_widget(shadow, fold);
}

fn draw_controls(
    frame: &mut Frame,
    app: &App,
    zones: &mut Vec<(Zone, HitTarget)>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let book = app.book();

    let prev_label = format!(" {} Prev ", glyphs.prev);
    let next_label = format!(" Next {} ", glyphs.next);
    let auto_label = if book.auto_flip_active() {
        format!(" {} Stop ", glyphs.stop)
    } else {
        format!(" {} Auto ", glyphs.play)
    };
    let indicator = format!("  {}  ", book.indicator());

    let button = |enabled: bool| {
        if enabled {
            Style::default().fg(palette.text_primary).bg(palette.bg_highlight)
        } else {
            Style::default().fg(palette.text_disabled).bg(palette.bg_panel)
        }
    };

    let row_width = (prev_label.width()
        + indicator.width()
        + next_label.width()
        + 2
        + auto_label.width()) as u16;
    let mut x = area.x + (area.width.saturating_sub(row_width)) / 2;
    let y = area.y;

    let mut place = |label: &str, style: Style, target: Option<HitTarget>| {
        let width = label.width() as u16;
        let rect = Rect {
            x,
            y,
            width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(label.to_string(), style)), rect);
        if let Some(target) = target {
            zones.push((zone_of(rect), target));
        }
        x += width;
    };

    place(
        &prev_label,
        button(book.prev_enabled()),
        Some(HitTarget::PrevPage),
    );
    place(&indicator, styles::key_highlight(palette), None);
    place(
        &next_label,
        button(book.next_enabled()),
        Some(HitTarget::NextPage),
    );
    place("  ", Style::default(), None);
    let auto_style = if book.auto_flip_active() {
        Style::default().fg(palette.bg_dark).bg(palette.gold)
    } else {
        button(true)
    };
    place(&auto_label, auto_style, Some(HitTarget::AutoFlipToggle));
}

fn draw_shortcuts(
    frame: &mut Frame,
    total_pages: usize,
    zones: &mut Vec<(Zone, HitTarget)>,
    area: Rect,
    palette: &Palette,
) {
    let cell = 4u16;
    let row_width = cell * total_pages as u16;
    let mut x = area.x + (area.width.saturating_sub(row_width)) / 2;

    for page in 0..total_pages {
        let rect = Rect {
            x,
            y: area.y,
            width: cell,
            height: 1,
        };
        let label = format!(" {:^2} ", page + 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default().fg(palette.text_secondary),
            )),
            rect,
        );
        zones.push((zone_of(rect), HitTarget::Shortcut(page)));
        x += cell;
    }
}

fn draw_hints(
    frame: &mut Frame,
    total_pages: usize,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let sep = glyphs.bullet;
    let hint =
        format!("Left/Right flip  {sep}  1-{total_pages} jump  {sep}  a auto  {sep}  q quit");
    frame.render_widget(
        Paragraph::new(Span::styled(hint, styles::key_hint(palette)))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::wrap_words;

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let rows = wrap_words("may this year bring one good surprise", 12);
        assert!(rows.iter().all(|row| row.len() <= 12));
        assert_eq!(rows.join(" "), "may this year bring one good surprise");
    }

    #[test]
    fn wrap_counts_rows_a_width_estimate_would_miss() {
        // Three 10-cell words at width 24: the first two share a row, the
        // third starts its own. ceil(32 / 24) would claim two words fit.
        let rows = wrap_words("aaaaaaaaaa bbbbbbbbbb cccccccccc", 24);
        assert_eq!(rows, vec!["aaaaaaaaaa bbbbbbbbbb", "cccccccccc"]);

        let rows = wrap_words("aaaaaaaaaa bbbbbbbbbb cccccccccc", 12);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn wrap_hard_splits_overlong_words() {
        let rows = wrap_words("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_text_still_occupies_one_row() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }
}
