use navi10_types::action::KeyAction;

use crate::event::KeyEvent;
use crate::layer::LayerStack;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// Hardware key strokes use tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers, read-only after startup
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// Layer each pressed key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Fetch the action of a layer directly, without looking at the layer state.
    /// Returns `None` if the position or layer is out of range.
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> Option<KeyAction> {
        self.layers.get(layer_num)?.get(row)?.get(col).copied()
    }

    /// Fetch the action for a key event, with layer cache.
    ///
    /// A release is resolved on the layer its press was resolved on, so switching layers while a key is held
    /// doesn't release a different key.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event out of matrix: ({}, {})", key_event.row, key_event.col);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);
                return action;
            }

            if layer_idx as u8 == self.default_layer {
                break;
            }
        }

        KeyAction::No
    }

    /// Topmost active layer, the default layer when nothing is switched on
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    fn is_valid_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerStack for KeyMap<'_, ROW, COL, NUM_LAYER> {
    fn layer_on(&mut self, layer_num: u8) {
        if self.is_valid_layer(layer_num) {
            debug!("Layer {} on", layer_num);
            self.layer_state[layer_num as usize] = true;
        }
    }

    fn layer_off(&mut self, layer_num: u8) {
        if self.is_valid_layer(layer_num) {
            debug!("Layer {} off", layer_num);
            self.layer_state[layer_num as usize] = false;
        }
    }

    fn layer_clear(&mut self) {
        debug!("Clear all layers");
        self.layer_state = [false; NUM_LAYER];
    }

    fn is_layer_active(&self, layer_num: u8) -> bool {
        self.layer_state
            .get(layer_num as usize)
            .copied()
            .unwrap_or(false)
    }
}
