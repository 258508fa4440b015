//! End-to-end gate behavior through the app.

use std::time::Duration;

use pageturn_engine::{GATE_RETRY_DELAY, GatePhase, HitTarget, Screen, Zone};
use pageturn_types::Outcome;

use crate::common::{CORRECT, pass_gate, settle, test_app};

#[test]
fn wrong_then_right_is_the_expected_journey() {
    let mut app = test_app(7);

    // First guess is wrong: marked, locked, still on the gate.
    assert_eq!(app.submit_answer(0), Some(Outcome::Incorrect));
    assert_eq!(app.gate().marked(), Some((0, Outcome::Incorrect)));
    assert!(!app.gate().input_enabled());
    assert_eq!(app.screen(), Screen::Gate);

    // The mark clears after the retry delay, with no carried-over penalty.
    app.advance(GATE_RETRY_DELAY);
    assert_eq!(app.gate().marked(), None);
    assert_eq!(app.gate().phase(), GatePhase::Prompt);

    // Second guess is right and the book opens on page one.
    pass_gate(&mut app);
    assert_eq!(app.screen(), Screen::Book);
    assert_eq!(app.book().current_page(), 0);
    assert_eq!(app.book().indicator(), "1 / 7");
}

#[test]
fn gate_ignores_book_input_and_book_ignores_gate_input() {
    let mut app = test_app(7);

    app.next_page();
    app.go_to_page(4);
    assert_eq!(app.book().current_page(), 0);

    pass_gate(&mut app);

    // Submissions after the pass are inert.
    assert_eq!(app.submit_answer(CORRECT), None);
    app.next_page();
    settle(&mut app);
    assert_eq!(app.book().current_page(), 1);
}

#[test]
fn clicking_an_option_submits_it() {
    let mut app = test_app(7);
    app.set_hit_zones(vec![(
        Zone {
            x: 4,
            y: 6,
            width: 20,
            height: 1,
        },
        HitTarget::GateOption(CORRECT),
    )]);

    let target = app.hit_test(10, 6).expect("option row is clickable");
    app.press(target);
    assert_eq!(app.gate().marked(), Some((CORRECT, Outcome::Correct)));
}

#[test]
fn selection_cursor_survives_a_failed_attempt() {
    let mut app = test_app(7);
    app.gate_select_next();
    app.gate_select_next();
    assert_eq!(app.gate().selected(), 2);

    assert_eq!(app.submit_selected(), Some(Outcome::Incorrect));
    app.advance(GATE_RETRY_DELAY);

    // The cursor stays on the attempted option for a quick correction.
    assert_eq!(app.gate().selected(), 2);
    app.gate_select_previous();
    assert_eq!(app.submit_selected(), Some(Outcome::Correct));
}

#[test]
fn reveal_window_shows_the_book_before_it_listens() {
    let mut app = test_app(7);
    assert_eq!(app.submit_answer(CORRECT), Some(Outcome::Correct));

    app.advance(pageturn_engine::GATE_CORRECT_HOLD);
    app.advance(pageturn_engine::GATE_FADE);
    assert!(app.book_visible());
    assert_eq!(app.screen(), Screen::Gate);

    app.next_page();
    assert_eq!(app.book().current_page(), 0);

    app.advance(Duration::from_millis(100));
    assert_eq!(app.screen(), Screen::Book);
}
