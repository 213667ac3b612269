//! The layer controller: turns key events into layer-state changes.

use core::cell::RefCell;

use crate::action::{Action, KeyAction};
use crate::event::KeyEvent;
use crate::keymap::KeyMap;

/// Outcome of feeding one key event to the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventResult {
    /// The event was a layer control and has been applied; the host must not
    /// process it further.
    Consumed,
    /// Not a layer control. The resolved action is handed back so the host
    /// can run its normal key handling exactly once.
    Forward(KeyAction),
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Receiver for layer activation changes, e.g. a status LED or a click
/// sound driver in the host firmware.
pub trait LayerChangeListener {
    fn on_layer_change(&mut self, layer: u8, active: bool);
}

/// Processes key events against a [`KeyMap`], executing layer controls and
/// forwarding everything else.
///
/// The controller is the only writer of the keymap's layer state; the host
/// calls [`LayerController::process_event`] once per physical key transition,
/// in scan order.
pub struct LayerController<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
    listener: Option<&'a mut dyn LayerChangeListener>,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerController<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>) -> Self {
        Self { keymap, listener: None }
    }

    /// Attach a listener that is notified of every layer activation change,
    /// including tri-layer derived ones.
    pub fn with_listener(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>, listener: &'a mut dyn LayerChangeListener) -> Self {
        Self { keymap, listener: Some(listener) }
    }

    /// Process one key transition. Returns whether the event was consumed as
    /// a layer control or should be forwarded to normal key handling.
    pub fn process_event(&mut self, event: KeyEvent) -> EventResult {
        let action = self.keymap.borrow_mut().resolve_action(event);
        match action {
            KeyAction::No | KeyAction::Transparent => EventResult::Forward(action),
            KeyAction::Single(a) => self.process_action(a, event),
        }
    }

    fn process_action(&mut self, action: Action, event: KeyEvent) -> EventResult {
        match action {
            Action::Key(_) | Action::KeyWithModifier(..) => EventResult::Forward(KeyAction::Single(action)),
            Action::LayerOn(layer_num) => {
                self.apply(|keymap| {
                    if event.pressed {
                        keymap.activate_layer(layer_num);
                    } else {
                        keymap.deactivate_layer(layer_num);
                    }
                });
                EventResult::Consumed
            }
            Action::LayerToggle(layer_num) => {
                // Toggle on release, so a toggle key held through a layer
                // switch does not bounce.
                if !event.pressed {
                    self.apply(|keymap| keymap.toggle_layer(layer_num));
                }
                EventResult::Consumed
            }
            Action::DefaultLayer(layer_num) => {
                // Press only, the release of a default-layer key is a no-op.
                if event.pressed {
                    self.keymap.borrow_mut().set_default_layer(layer_num);
                }
                EventResult::Consumed
            }
        }
    }

    /// Run a layer-state mutation and report the resulting activation diff,
    /// so derived tri-layer transitions reach the listener as well.
    fn apply(&mut self, f: impl FnOnce(&mut KeyMap<'a, ROW, COL, NUM_LAYER>)) {
        let before = self.keymap.borrow().layer_state();
        f(&mut self.keymap.borrow_mut());
        if let Some(listener) = self.listener.as_mut() {
            let after = self.keymap.borrow().layer_state();
            for layer in 0..NUM_LAYER {
                if before[layer] != after[layer] {
                    listener.on_layer_change(layer as u8, after[layer]);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::{a, df, k, mo};

    fn press(row: u8, col: u8) -> KeyEvent {
        KeyEvent { row, col, pressed: true }
    }

    fn release(row: u8, col: u8) -> KeyEvent {
        KeyEvent { row, col, pressed: false }
    }

    #[test]
    fn layer_keys_consumed_plain_keys_forwarded() {
        let mut map = [[[k!(A), mo!(1), df!(0)]], [[k!(B), a!(Transparent), a!(Transparent)]]];
        let keymap = RefCell::new(KeyMap::new(&mut map, BehaviorConfig::default()));
        let mut controller = LayerController::new(&keymap);

        assert_eq!(controller.process_event(press(0, 0)), EventResult::Forward(k!(A)));
        assert!(controller.process_event(press(0, 1)).is_consumed());
        assert_eq!(keymap.borrow().get_activated_layer(), 1);
        assert_eq!(controller.process_event(press(0, 0)), EventResult::Forward(k!(B)));
        assert!(controller.process_event(release(0, 1)).is_consumed());
        assert!(controller.process_event(press(0, 2)).is_consumed());
    }

    #[test]
    fn listener_sees_activation_diff() {
        struct Recorder(std::vec::Vec<(u8, bool)>);
        impl LayerChangeListener for Recorder {
            fn on_layer_change(&mut self, layer: u8, active: bool) {
                self.0.push((layer, active));
            }
        }

        let mut map = [[[mo!(1), mo!(2)]], [[a!(Transparent); 2]], [[a!(Transparent); 2]], [[a!(Transparent); 2]]];
        let keymap = RefCell::new(KeyMap::new(&mut map, BehaviorConfig { tri_layer: Some([1, 2, 3]) }));
        let mut recorder = Recorder(Vec::new());
        {
            let mut controller = LayerController::with_listener(&keymap, &mut recorder);
            controller.process_event(press(0, 0));
            controller.process_event(press(0, 1));
            controller.process_event(release(0, 0));
        }

        assert_eq!(recorder.0, vec![(1, true), (2, true), (3, true), (1, false), (3, false)]);
    }
}
