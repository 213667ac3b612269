use heapless::Vec;

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;

/// KeyMap represents the stack of layers.
///
/// The keymap is bound to the physical key matrix: the host firmware detects
/// key strokes and uses `(row, col)` plus the current layer state to resolve
/// the action at a position. Layer 0 is the base layer; it is never toggled
/// on or off, only replaced through [`KeyMap::set_default_layer`].
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number, the fallback when no other layer is active
    default_layer: u8,
    /// Layer cache, records which layer resolved each pressed position
    layer_cache: [[u8; COL]; ROW],
    /// Options for configurable behavior
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            behavior,
        }
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        info!("Default layer set to {}", layer_num);
        self.default_layer = layer_num;
    }

    /// Resolve the action for a key event against the active layer stack.
    ///
    /// A press scans active layers from the highest index down and takes the
    /// first non-transparent entry, remembering the winning layer per
    /// position. The matching release resolves against that remembered layer,
    /// so a key released after its layer was deactivated still cancels the
    /// action it triggered.
    pub fn resolve_action(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // The scan stops below the default layer, whose entries are expected
        // to be non-transparent.
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let action = self.layers[layer_idx][row][col];
                if action == KeyAction::Transparent {
                    if layer_idx as u8 == self.default_layer {
                        break;
                    }
                    continue;
                }

                self.save_layer_cache(row, col, layer_idx as u8);
                return action;
            }
        }

        KeyAction::No
    }

    /// The highest currently active layer, falling back to the default layer.
    pub fn get_activated_layer(&self) -> u8 {
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    /// Indices of all active layers, lowest first, default layer included.
    pub fn active_layers(&self) -> Vec<u8, NUM_LAYER> {
        let mut layers = Vec::new();
        for layer_idx in 0..NUM_LAYER {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let _ = layers.push(layer_idx as u8);
            }
        }

        layers
    }

    pub(crate) fn layer_state(&self) -> [bool; NUM_LAYER] {
        self.layer_state
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Re-derive the tri-layer target after a change to `layer_num`.
    ///
    /// The rule is driven by its two operand layers only; a direct momentary
    /// hold of the target layer is left alone.
    fn update_tri_layer(&mut self, layer_num: u8) {
        if let Some([a, b, c]) = self.behavior.tri_layer {
            if layer_num == a || layer_num == b {
                self.layer_state[c as usize] = self.layer_state[a as usize] && self.layer_state[b as usize];
            }
        }
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        debug!("Activating layer {}", layer_num);
        self.layer_state[layer_num as usize] = true;
        self.update_tri_layer(layer_num);
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        debug!("Deactivating layer {}", layer_num);
        self.layer_state[layer_num as usize] = false;
        self.update_tri_layer(layer_num);
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }

        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
        self.update_tri_layer(layer_num);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{a, k};

    fn sparse_keymap() -> [[[KeyAction; 2]; 1]; 4] {
        [[[k!(A), k!(B)]], [[a!(Transparent), k!(C)]], [[a!(No), k!(D)]], [[k!(E), a!(Transparent)]]]
    }

    #[test]
    fn tri_layer_follows_operands() {
        let mut map = sparse_keymap();
        let mut keymap = KeyMap::new(&mut map, BehaviorConfig { tri_layer: Some([1, 2, 3]) });

        keymap.activate_layer(1);
        assert_eq!(keymap.layer_state(), [false, true, false, false]);
        keymap.activate_layer(2);
        assert_eq!(keymap.layer_state(), [false, true, true, true]);
        keymap.deactivate_layer(1);
        assert_eq!(keymap.layer_state(), [false, false, true, false]);
    }

    #[test]
    fn tri_layer_target_held_directly_is_untouched() {
        let mut map = sparse_keymap();
        let mut keymap = KeyMap::new(&mut map, BehaviorConfig { tri_layer: Some([1, 2, 3]) });

        keymap.activate_layer(3);
        assert_eq!(keymap.layer_state(), [false, false, false, true]);
        keymap.deactivate_layer(3);
        assert_eq!(keymap.layer_state(), [false, false, false, false]);
    }

    #[test]
    fn out_of_range_layer_is_ignored() {
        let mut map = sparse_keymap();
        let mut keymap = KeyMap::new(&mut map, BehaviorConfig::default());

        keymap.activate_layer(9);
        keymap.set_default_layer(9);
        assert_eq!(keymap.layer_state(), [false; 4]);
        assert_eq!(keymap.get_default_layer(), 0);
    }

    #[test]
    fn active_layers_snapshot() {
        let mut map = sparse_keymap();
        let mut keymap = KeyMap::new(&mut map, BehaviorConfig::default());

        assert_eq!(keymap.active_layers().as_slice(), &[0]);
        keymap.activate_layer(2);
        assert_eq!(keymap.active_layers().as_slice(), &[0, 2]);
        assert_eq!(keymap.get_activated_layer(), 2);
    }
}
