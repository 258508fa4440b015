//! Page navigation through the app, after the gate has been passed.

use pageturn_engine::{FLIP_DURATION, HitTarget, STAGGER_DELAY};

use crate::common::{pass_gate, settle, test_app};

#[test]
fn page_halves_step_backward_and_forward() {
    let mut app = test_app(7);
    pass_gate(&mut app);

    app.press(HitTarget::PageForward);
    settle(&mut app);
    app.press(HitTarget::PageForward);
    settle(&mut app);
    assert_eq!(app.book().current_page(), 2);

    app.press(HitTarget::PageBack);
    settle(&mut app);
    assert_eq!(app.book().current_page(), 1);
}

#[test]
fn navigation_locks_for_the_whole_staggered_jump() {
    let mut app = test_app(7);
    pass_gate(&mut app);

    app.go_to_page(5);
    assert_eq!(app.book().indicator(), "6 / 7");

    // Settle time covers the pre-move distance: 4 staggers plus one flip.
    let settle_time = STAGGER_DELAY * 4 + FLIP_DURATION;
    app.advance(settle_time - std::time::Duration::from_millis(1));
    assert!(app.book().is_animating());
    app.press(HitTarget::PrevPage);
    assert_eq!(app.book().current_page(), 5);

    app.advance(std::time::Duration::from_millis(1));
    assert!(!app.book().is_animating());
    app.press(HitTarget::PrevPage);
    assert_eq!(app.book().current_page(), 4);
}

#[test]
fn shortcuts_jump_directly_to_their_page() {
    let mut app = test_app(7);
    pass_gate(&mut app);

    app.press(HitTarget::Shortcut(6));
    settle(&mut app);
    assert_eq!(app.book().current_page(), 6);
    assert!(!app.book().next_enabled());

    app.press(HitTarget::Shortcut(0));
    settle(&mut app);
    assert_eq!(app.book().current_page(), 0);
    assert!(!app.book().prev_enabled());
}

#[test]
fn flipped_marks_match_the_reading_position() {
    let mut app = test_app(7);
    pass_gate(&mut app);

    app.go_to_page(3);
    settle(&mut app);
    for page in 0..3 {
        assert!(app.book().is_flipped(page), "page {page} should be turned");
    }
    for page in 3..7 {
        assert!(!app.book().is_flipped(page), "page {page} should be open");
    }
}

#[test]
fn one_flip_cue_per_transition() {
    let mut app = test_app(7);
    pass_gate(&mut app);
    app.advance(std::time::Duration::ZERO);
    app.take_sound_cues();

    app.next_page();
    settle(&mut app);
    assert_eq!(app.take_sound_cues().len(), 1);

    // A five-page jump is still a single transition, one cue.
    app.go_to_page(6);
    settle(&mut app);
    assert_eq!(app.take_sound_cues().len(), 1);
}

#[test]
fn tilt_follows_the_reading_position() {
    let mut app = test_app(5);
    pass_gate(&mut app);

    assert!(app.book().tilt_progress().abs() < f32::EPSILON);
    app.go_to_page(4);
    settle(&mut app);
    assert!((app.book().tilt_progress() - 1.0).abs() < f32::EPSILON);
}
