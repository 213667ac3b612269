pub mod common;

use ouroboros_keymap::action::{Action, KeyAction};
use ouroboros_keymap::config::BehaviorConfig;
use ouroboros_keymap::keymaps::{COLS, ROWS, mac, mouse, numpad, ouroboros};

fn check_variant<const L: usize>(name: &str, keymap: [[[KeyAction; COLS]; ROWS]; L], config: BehaviorConfig) {
    // The base layer must resolve every position by itself.
    for (row, columns) in keymap[0].iter().enumerate() {
        for (col, action) in columns.iter().enumerate() {
            assert_ne!(
                *action,
                KeyAction::Transparent,
                "{name}: transparent entry on the base layer at ({row}, {col})",
            );
        }
    }

    // Every layer reference stays inside the variant.
    for layer in keymap.iter() {
        for columns in layer.iter() {
            for action in columns.iter() {
                if let KeyAction::Single(
                    Action::LayerOn(target) | Action::LayerToggle(target) | Action::DefaultLayer(target),
                ) = action
                {
                    assert!((*target as usize) < L, "{name}: layer reference {target} out of range");
                }
            }
        }
    }

    if let Some([a, b, c]) = config.tri_layer {
        assert!(a != b && b != c && a != c, "{name}: tri-layer indices must be distinct");
        assert!((c as usize) < L, "{name}: tri-layer target {c} out of range");

        // Both operand layers must be reachable from the base layer.
        for operand in [a, b] {
            let reachable = keymap[0]
                .iter()
                .flatten()
                .any(|action| *action == KeyAction::Single(Action::LayerOn(operand)));
            assert!(reachable, "{name}: tri-layer operand {operand} has no momentary key on base");
        }
    }
}

#[test]
fn all_variants_hold_the_shape_invariants() {
    check_variant("ouroboros", ouroboros::keymap(), ouroboros::behavior_config());
    check_variant("mac", mac::keymap(), mac::behavior_config());
    check_variant("numpad", numpad::keymap(), numpad::behavior_config());
    check_variant("mouse", mouse::keymap(), mouse::behavior_config());
}

#[test]
fn mac_variant_only_swaps_ctrl_and_gui() {
    let reference = ouroboros::keymap();
    let swapped = mac::keymap();

    for layer in 0..ouroboros::NUM_LAYERS {
        for row in 0..ROWS {
            for col in 0..COLS {
                let expected = match (layer, row, col) {
                    (0, 3, 1) => reference[0][3][3],
                    (0, 3, 3) => reference[0][3][1],
                    _ => reference[layer][row][col],
                };
                assert_eq!(swapped[layer][row][col], expected, "unexpected difference at ({layer}, {row}, {col})");
            }
        }
    }
}

#[test]
fn mouse_variant_can_always_leave_the_mouse_layer() {
    let keymap = mouse::keymap();

    let base_toggle = keymap[mouse::BASE as usize]
        .iter()
        .flatten()
        .any(|action| *action == KeyAction::Single(Action::LayerToggle(mouse::MOUSE)));
    let mouse_toggle = keymap[mouse::MOUSE as usize]
        .iter()
        .flatten()
        .any(|action| *action == KeyAction::Single(Action::LayerToggle(mouse::MOUSE)));
    let mouse_reset = keymap[mouse::MOUSE as usize]
        .iter()
        .flatten()
        .any(|action| *action == KeyAction::Single(Action::DefaultLayer(mouse::BASE)));

    assert!(base_toggle, "no way into the mouse layer from base");
    assert!(mouse_toggle, "no way out of the mouse layer");
    assert!(mouse_reset, "no default-layer reset on the mouse layer");
}

#[test]
fn variants_agree_on_the_shared_tri_layer_rule() {
    for config in [
        ouroboros::behavior_config(),
        mac::behavior_config(),
        numpad::behavior_config(),
        mouse::behavior_config(),
    ] {
        assert_eq!(config.tri_layer, Some([1, 2, 3]));
    }
}
