use canvas_shooter::input::*;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

// ── Key names ─────────────────────────────────────────────────────────────────

#[test]
fn parses_logical_names() {
    assert_eq!(Key::parse("SPACE"), Some(Key::Space));
    assert_eq!(Key::parse("left"), Some(Key::Left));
    assert_eq!(Key::parse("Up"), Some(Key::Up));
    assert_eq!(Key::parse("w"), Some(Key::Letter('W')));
    assert_eq!(Key::parse("D"), Some(Key::Letter('D')));
    assert_eq!(Key::parse("F1"), None);
    assert_eq!(Key::parse("ab"), None);
    assert_eq!(Key::parse("1"), None);
    assert_eq!(Key::parse(""), None);
}

#[test]
fn maps_terminal_key_codes() {
    assert_eq!(Key::from_code(KeyCode::Char(' ')), Some(Key::Space));
    assert_eq!(Key::from_code(KeyCode::Down), Some(Key::Down));
    assert_eq!(Key::from_code(KeyCode::Char('a')), Some(Key::Letter('A')));
    assert_eq!(Key::from_code(KeyCode::Char('A')), Some(Key::Letter('A')));
    assert_eq!(Key::from_code(KeyCode::Enter), None);
    assert_eq!(Key::from_code(KeyCode::Char('7')), None);
}

// ── InputTracker ──────────────────────────────────────────────────────────────

#[test]
fn letters_are_case_insensitive() {
    let mut t = InputTracker::new();
    t.handle_event(&press(KeyCode::Char('s')));
    assert!(t.is_down_named("s"));
    assert!(t.is_down_named("S"));
    assert!(t.is_down(Key::letter('s')));
}

#[test]
fn release_clears_key() {
    let mut t = InputTracker::new();
    t.handle_event(&press(KeyCode::Left));
    assert!(t.is_down(Key::Left));
    t.handle_event(&release(KeyCode::Left));
    assert!(!t.is_down(Key::Left));
}

#[test]
fn focus_loss_clears_everything() {
    let mut t = InputTracker::new();
    t.handle_event(&press(KeyCode::Right));
    t.handle_event(&press(KeyCode::Char(' ')));
    t.handle_event(&Event::FocusLost);
    assert!(!t.is_down(Key::Right));
    assert!(!t.is_down(Key::Space));
}

#[test]
fn unknown_names_never_down() {
    let mut t = InputTracker::new();
    t.handle_event(&press(KeyCode::Enter));
    assert!(!t.is_down_named("ENTER"));
    assert!(!t.is_down_named("nope"));
}

#[test]
fn held_keys_expire_without_repeats() {
    let mut t = InputTracker::with_hold_window(HOLD_WINDOW);
    t.begin_frame(); // frame 1
    t.handle_event(&press(KeyCode::Up));

    for _ in 0..HOLD_WINDOW {
        t.begin_frame();
        assert!(t.is_down(Key::Up));
    }
    t.begin_frame();
    assert!(!t.is_down(Key::Up));

    // a repeat refreshes it
    t.handle_event(&press(KeyCode::Up));
    assert!(t.is_down(Key::Up));
}

#[test]
fn keys_never_expire_when_releases_are_reported() {
    let mut t = InputTracker::new();
    t.handle_event(&press(KeyCode::Up));
    for _ in 0..100 {
        t.begin_frame();
    }
    assert!(t.is_down(Key::Up));
}

#[test]
fn snapshot_merges_arrows_and_wasd() {
    let mut t = InputTracker::new();
    t.set_key(Key::letter('w'), true);
    t.set_key(Key::Right, true);
    t.set_key(Key::Space, true);

    let snap = t.snapshot();
    assert_eq!(
        snap,
        InputSnapshot { up: true, down: false, left: false, right: true, fire: true }
    );

    t.set_key(Key::letter('w'), false);
    t.set_key(Key::letter('a'), true);
    t.set_key(Key::Down, true);
    let snap = t.snapshot();
    assert!(snap.left && snap.down && !snap.up);
}
