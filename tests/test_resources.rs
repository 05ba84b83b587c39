use canvas_shooter::resources::*;
use image::{Rgba, RgbaImage};

#[test]
fn nothing_ready_before_poll() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = Resources::new(dir.path());
    r.load(&[SPRITE_SHEET]);

    // completions only land in the cache through poll
    assert!(r.get(SPRITE_SHEET).is_none());
    assert!(!r.is_ready());
    assert!(!r.take_ready());
    assert_eq!(r.pending(), 1);
}

#[test]
fn repeated_load_requests_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = Resources::new(dir.path());
    r.load(&[SPRITE_SHEET, SPRITE_SHEET]);
    r.load(&[SPRITE_SHEET]);
    assert_eq!(r.pending(), 1);
}

#[test]
fn ready_gate_fires_exactly_once() {
    let mut r = Resources::new(".");
    r.insert(SPRITE_SHEET, RgbaImage::new(4, 4));
    assert!(r.is_ready());
    assert!(r.take_ready());
    assert!(!r.take_ready());
    assert!(r.is_ready());
}

#[test]
fn unknown_key_is_not_ready() {
    let r = Resources::new(".");
    assert!(r.get("images/never.png").is_none());
}

#[test]
fn failed_load_reports_and_substitutes() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = Resources::new(dir.path());
    r.load(&[TERRAIN]);

    let mut events = Vec::new();
    for _ in 0..400 {
        events.extend(r.poll());
        if r.is_ready() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert!(matches!(events.as_slice(), [LoadEvent::Failed(_)]));
    assert_eq!(r.get(TERRAIN), Some(&placeholder(TERRAIN)));
    assert!(r.take_ready());
}

#[test]
fn placeholder_sheet_covers_catalogue() {
    let sheet = placeholder(SPRITE_SHEET);
    // last explosion frame
    let px = sheet.get_pixel(12 * 39 + 5, 117 + 5);
    assert_eq!(px[3], 255);
    // forward bullet
    assert_eq!(sheet.get_pixel(2, 42)[3], 255);
    // gap between sprite rows stays transparent
    assert_eq!(*sheet.get_pixel(200, 50), Rgba([0, 0, 0, 0]));
}
