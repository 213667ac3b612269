pub mod common;

use ouroboros_keymap::action::KeyAction;
use ouroboros_keymap::controller::{EventResult, LayerController};
use ouroboros_keymap::keymaps::{numpad, ouroboros};
use ouroboros_keymap::{k, shifted};

use crate::common::{press, release, wrap_keymap};

#[test]
fn transparent_entry_defers_to_next_active_layer() {
    let keymap = wrap_keymap(ouroboros::keymap(), ouroboros::behavior_config());

    // Layers {0, 2, 3} active, layer 3 activated directly.
    keymap.borrow_mut().activate_layer(2);
    keymap.borrow_mut().activate_layer(3);

    // (1, 5) is transparent on the function layer but concrete on the symbol
    // layer, so the symbol layer supplies the key.
    let mut controller = LayerController::new(keymap);
    assert_eq!(controller.process_event(press(1, 5)), EventResult::Forward(shifted!(Kc5)));
}

#[test]
fn release_resolves_on_the_layer_that_took_the_press() {
    let keymap = wrap_keymap(ouroboros::keymap(), ouroboros::behavior_config());
    let mut controller = LayerController::new(keymap);

    controller.process_event(press(3, 4)); // hold symbol
    assert_eq!(controller.process_event(press(0, 1)), EventResult::Forward(k!(Kc1)));
    controller.process_event(release(3, 4)); // drop symbol while the key is down

    // The release still cancels the symbol-layer digit, not base Q.
    assert_eq!(controller.process_event(release(0, 1)), EventResult::Forward(k!(Kc1)));

    // With the cache drained, the next press resolves on base again.
    assert_eq!(controller.process_event(press(0, 1)), EventResult::Forward(k!(Q)));
}

#[test]
fn scan_stops_at_a_transparent_default_layer() {
    let keymap = wrap_keymap(numpad::keymap(), numpad::behavior_config());
    let mut controller = LayerController::new(keymap);

    // The number layer is sparse; making it the default exposes its holes
    // instead of falling through to base.
    keymap.borrow_mut().set_default_layer(numpad::NUMBER);
    assert_eq!(controller.process_event(press(0, 0)), EventResult::Forward(KeyAction::No));
    assert_eq!(controller.process_event(press(0, 7)), EventResult::Forward(k!(Kp7)));
}

#[test]
fn base_layer_resolution_is_total() {
    let keymap = wrap_keymap(ouroboros::keymap(), ouroboros::behavior_config());

    for row in 0..4 {
        for col in 0..12 {
            let action = keymap.borrow_mut().resolve_action(press(row, col));
            assert_ne!(action, KeyAction::Transparent, "({row}, {col}) resolved transparent");
            assert_ne!(action, KeyAction::No, "({row}, {col}) resolved to nothing");
            // Drain the per-position cache again.
            keymap.borrow_mut().resolve_action(release(row, col));
        }
    }
}
