use core::cell::RefCell;

use ouroboros_keymap::action::KeyAction;
use ouroboros_keymap::config::BehaviorConfig;
use ouroboros_keymap::event::KeyEvent;
use ouroboros_keymap::keymap::KeyMap;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn press(row: u8, col: u8) -> KeyEvent {
    KeyEvent { row, col, pressed: true }
}

pub fn release(row: u8, col: u8) -> KeyEvent {
    KeyEvent { row, col, pressed: false }
}

/// Leak a keymap grid into a `'static` `RefCell<KeyMap>` a controller can
/// borrow for the rest of the test. Box::leak is acceptable in tests.
pub fn wrap_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: [[[KeyAction; C]; R]; L],
    config: BehaviorConfig,
) -> &'static RefCell<KeyMap<'static, R, C, L>> {
    let leaked_keymap = Box::leak(Box::new(keymap));

    Box::leak(Box::new(RefCell::new(KeyMap::new(leaked_keymap, config))))
}

/// Active layer indices as a plain vec, lowest first.
pub fn active_layers<const R: usize, const C: usize, const L: usize>(
    keymap: &RefCell<KeyMap<'static, R, C, L>>,
) -> Vec<u8> {
    keymap.borrow().active_layers().to_vec()
}

// a rust macro to create a key sequence to simulate key presses
#[macro_export]
macro_rules! key_sequence {
    ($([$row:expr, $col:expr, $pressed:expr]),* $(,)?) => {
        vec![
            $(
                ouroboros_keymap::event::KeyEvent {
                    row: $row,
                    col: $col,
                    pressed: $pressed,
                },
            )*
        ]
    };
}
