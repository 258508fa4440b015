//! Auto-flip behavior through the app.

use std::time::Duration;

use pageturn_engine::{FLIP_DURATION, HitTarget};

use crate::common::{pass_gate, test_app};

const INTERVAL: Duration = Duration::from_millis(3000);

#[test]
fn toggle_button_starts_and_stops_the_interval() {
    let mut app = test_app(5);
    pass_gate(&mut app);

    app.press(HitTarget::AutoFlipToggle);
    assert!(app.book().auto_flip_active());

    app.advance(INTERVAL);
    assert_eq!(app.book().current_page(), 1);

    app.press(HitTarget::AutoFlipToggle);
    assert!(!app.book().auto_flip_active());
    app.advance(INTERVAL * 3);
    assert_eq!(app.book().current_page(), 1);
}

#[test]
fn auto_flip_wraps_to_the_cover_at_the_end() {
    let mut app = test_app(3);
    pass_gate(&mut app);
    app.press(HitTarget::AutoFlipToggle);

    app.advance(INTERVAL);
    app.advance(FLIP_DURATION);
    app.advance(INTERVAL - FLIP_DURATION);
    assert_eq!(app.book().current_page(), 2);

    app.advance(FLIP_DURATION);
    app.advance(INTERVAL - FLIP_DURATION);
    assert_eq!(app.book().current_page(), 0);
}

#[test]
fn manual_navigation_keeps_working_while_auto_runs() {
    let mut app = test_app(7);
    pass_gate(&mut app);
    app.press(HitTarget::AutoFlipToggle);

    app.press(HitTarget::NextPage);
    app.advance(FLIP_DURATION);
    assert_eq!(app.book().current_page(), 1);
    assert!(app.book().auto_flip_active());

    // The next interval fire continues from wherever the reader is.
    app.advance(INTERVAL - FLIP_DURATION);
    assert_eq!(app.book().current_page(), 2);
}

#[test]
fn quitting_the_gate_never_arms_auto_flip() {
    let mut app = test_app(5);
    app.press(HitTarget::AutoFlipToggle);
    assert!(!app.book().auto_flip_active());
}
