pub mod common;

use ouroboros_keymap::event::KeyEvent;
use postcard::experimental::max_size::MaxSize;

#[test]
fn key_event_wire_roundtrip() {
    let event = KeyEvent { row: 3, col: 11, pressed: true };

    let mut buf = [0u8; KeyEvent::POSTCARD_MAX_SIZE];
    let used = postcard::to_slice(&event, &mut buf).unwrap();
    let decoded: KeyEvent = postcard::from_bytes(used).unwrap();

    assert_eq!(decoded, event);
}

#[test]
fn key_event_fits_a_split_link_frame() {
    assert_eq!(KeyEvent::POSTCARD_MAX_SIZE, 3);
}
