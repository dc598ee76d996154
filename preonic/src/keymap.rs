use preonic_types::action::KeyAction;
use preonic_types::layer::{Layer, NUM_LAYER};
use strum::IntoEnumIterator;

use crate::config::BehaviorConfig;
use crate::event::KeyEvent;

/// The Preonic's layer state on top of its static layer tables.
///
/// Each [`Layer`] has one `ROW` x `COL` table. The active flags and the
/// default layer decide which table answers for a matrix position.
pub struct KeyMap<'a, const ROW: usize, const COL: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer
    default_layer: Layer,
    /// Layer cache, the layer each pressed key was resolved from
    layer_cache: [[Layer; COL]; ROW],
    /// Options for configurable action behavior
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize> KeyMap<'a, ROW, COL> {
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        behavior: BehaviorConfig,
        default_layer: Layer,
    ) -> Self {
        KeyMap {
            layers,
            layer_state: [false; NUM_LAYER],
            default_layer,
            layer_cache: [[default_layer; COL]; ROW],
            behavior,
        }
    }

    /// Get the default layer
    pub fn get_default_layer(&self) -> Layer {
        self.default_layer
    }

    /// Set the default layer. This doesn't activate or deactivate any layer.
    pub fn set_default_layer(&mut self, layer: Layer) {
        info!("Default layer: {:?}", layer);
        self.default_layer = layer;
    }

    /// Whether the layer is activated. The default layer is not activated unless it's turned on explicitly.
    pub fn is_layer_active(&self, layer: Layer) -> bool {
        self.layer_state[layer.index()]
    }

    /// Fetch the action in keymap
    pub fn get_action_at(&self, row: usize, col: usize, layer: Layer) -> KeyAction {
        self.layers[layer.index()][row][col]
    }

    /// Resolve the action produced by a key position.
    ///
    /// Layers are checked from the highest to the lowest, an activated layer
    /// or the default layer yields its action unless it's transparent. The
    /// default layer is the last layer checked: a transparent key there
    /// resolves to `KeyAction::No`, where qmk would keep walking down.
    pub fn resolve(&self, row: usize, col: usize) -> KeyAction {
        self.resolve_with_layer(row, col)
            .map(|(action, _)| action)
            .unwrap_or(KeyAction::No)
    }

    /// Fetch the action in keymap, with layer cache
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.get_action_at(row, col, layer);
        }

        match self.resolve_with_layer(row, col) {
            Some((action, layer)) => {
                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer);
                action
            }
            None => KeyAction::No,
        }
    }

    /// The highest activated layer, or the default layer if none of the layers above it is activated
    pub fn get_activated_layer(&self) -> Layer {
        Layer::iter()
            .rev()
            .find(|layer| self.is_layer_active(*layer) || *layer == self.default_layer)
            .unwrap_or(self.default_layer)
    }

    fn resolve_with_layer(&self, row: usize, col: usize) -> Option<(KeyAction, Layer)> {
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return None;
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for layer in Layer::iter().rev() {
            if self.is_layer_active(layer) || layer == self.default_layer {
                let action = self.get_action_at(row, col, layer);
                if action != KeyAction::Transparent {
                    return Some((action, layer));
                }
            }

            if layer == self.default_layer {
                // No action
                break;
            }
        }

        None
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> Layer {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer: Layer) {
        self.layer_cache[row][col] = layer;
    }

    /// Update Tri Layer state, if the changed layer is one of the tri layer triggers
    fn update_tri_layer(&mut self, changed: Layer) {
        if let Some(tri_layer) = self.behavior.tri_layer {
            if tri_layer.is_trigger(changed) {
                let adjust = self.is_layer_active(tri_layer.lower) && self.is_layer_active(tri_layer.upper);
                if self.is_layer_active(tri_layer.adjust) != adjust {
                    debug!("Tri layer {:?}: {}", tri_layer.adjust, adjust);
                }
                self.layer_state[tri_layer.adjust.index()] = adjust;
            }
        }
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer: Layer) {
        if !self.is_layer_active(layer) {
            debug!("Activate layer {:?}", layer);
        }
        self.layer_state[layer.index()] = true;
        self.update_tri_layer(layer);
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer: Layer) {
        if self.is_layer_active(layer) {
            debug!("Deactivate layer {:?}", layer);
        }
        self.layer_state[layer.index()] = false;
        self.update_tri_layer(layer);
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer: Layer) {
        if self.is_layer_active(layer) {
            self.deactivate_layer(layer);
        } else {
            self.activate_layer(layer);
        }
    }
}
