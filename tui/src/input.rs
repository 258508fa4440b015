//! Input handling for the Pageturn TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::trace;

use pageturn_engine::{App, Screen};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Minimum horizontal travel, in cells, for a drag to count as a swipe.
const SWIPE_THRESHOLD_CELLS: u16 = 6;

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    /// Cell where the left button went down, if a press is in flight.
    press_origin: Option<(u16, u16)>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            press_origin: None,
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events so button taps are never lost under load.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending events into the app. Returns `Ok(true)` when the app should
/// quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        match ev {
            Event::Key(key) => {
                if apply_key(app, key) {
                    return Ok(true);
                }
            }
            Event::Mouse(mouse) => apply_mouse(app, input, mouse),
            _ => {}
        }

        processed += 1;
    }
    Ok(app.should_quit())
}

fn apply_key(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.kind, KeyEventKind::Release) {
        return app.should_quit();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.screen() {
        Screen::Gate => handle_gate_keys(app, key),
        Screen::Book => handle_book_keys(app, key),
    }
    app.should_quit()
}

fn handle_gate_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.gate_select_previous();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.gate_select_next();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_selected();
        }
        // Direct selection with number keys
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0) as usize;
            if digit > 0 && digit <= app.gate().options().len() {
                app.submit_answer(digit - 1);
            }
        }
        _ => {}
    }
}

fn handle_book_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
        }
        KeyCode::Char('a') => {
            app.toggle_auto_flip();
        }
        // Jump straight to a page with number keys
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0) as usize;
            if digit > 0 && digit <= app.book().total_pages() {
                app.go_to_page(digit - 1);
            }
        }
        _ => {}
    }
}

fn apply_mouse(app: &mut App, input: &mut InputPump, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            input.press_origin = Some((mouse.column, mouse.row));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some((ox, oy)) = input.press_origin.take() else {
                return;
            };
            let dx = i32::from(mouse.column) - i32::from(ox);
            let dy = i32::from(mouse.row) - i32::from(oy);

            // A horizontally dominant drag past the threshold is a swipe;
            // anything shorter resolves as a click at the release point.
            if dx.abs() > dy.abs() && dx.unsigned_abs() >= u32::from(SWIPE_THRESHOLD_CELLS) {
                trace!(dx, dy, "swipe");
                if app.screen() == Screen::Book {
                    if dx < 0 {
                        app.next_page();
                    } else {
                        app.previous_page();
                    }
                }
                return;
            }

            if let Some(target) = app.hit_test(mouse.column, mouse.row) {
                trace!(?target, "press");
                app.press(target);
            }
        }
        _ => {}
    }
}
