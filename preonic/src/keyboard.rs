use preonic_types::action::{Action, KeyAction};
use preonic_types::keycode::{CustomKeyCode, HidKeyCode, KeyCode};
use preonic_types::layer::Layer;

use crate::config::KeyboardConfig;
use crate::event::KeyEvent;
use crate::host::{Audio, Host};
use crate::indicator::{Indicator, NoIndicator};
use crate::keymap::KeyMap;
use crate::layout::{COL, Layout, ROW};
use crate::muse::{MuseClock, PhaseClock};
use crate::sequencer::{AdjustTarget, Sequencer};

/// Dip switch which holds the adjust layer
pub const DIP_SWITCH_ADJUST: u8 = 0;
/// Dip switch which turns music mode on
pub const DIP_SWITCH_MUSIC: u8 = 1;

/// The Preonic keymap, glued to its host firmware.
///
/// The host calls the `*_update`, `process_*` and `matrix_scan` hooks from its
/// main loop; the keyboard answers with calls into [`Host`], [`Audio`] and
/// [`Indicator`].
pub struct Keyboard<'a, H: Host + Audio, I: Indicator = NoIndicator, C: PhaseClock = MuseClock> {
    pub keymap: KeyMap<'a, ROW, COL>,
    pub sequencer: Sequencer<C>,
    host: H,
    indicator: I,
}

impl<'a, H: Host + Audio, I: Indicator, C: PhaseClock> Keyboard<'a, H, I, C> {
    pub fn new(layout: &'a Layout, config: KeyboardConfig, clock: C, host: H, indicator: I) -> Self {
        Self {
            keymap: KeyMap::new(layout, config.behavior_config, config.default_layer),
            sequencer: Sequencer::new(config.sequencer_config, clock),
            host,
            indicator,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Process a key event from the matrix.
    ///
    /// Returns the resolved action if the host should process it, or `None`
    /// if the keymap consumed it.
    pub fn process_key_event(&mut self, event: KeyEvent) -> Option<KeyAction> {
        let action = self.keymap.get_action_with_layer_cache(event);
        let forward = action
            .single()
            .is_none_or(|a| self.process_record(a, event.pressed));
        forward.then_some(action)
    }

    /// Process an action of a pressed or released key.
    ///
    /// Returns `false` when the action is handled here and the host's default
    /// handling must be skipped.
    pub fn process_record(&mut self, action: Action, pressed: bool) -> bool {
        let Action::Custom(custom) = action else {
            return true;
        };

        match custom {
            CustomKeyCode::Qwerty => self.set_default_layer_on_press(Layer::Qwerty, pressed),
            CustomKeyCode::Colemak => self.set_default_layer_on_press(Layer::Colemak, pressed),
            CustomKeyCode::Dvorak => self.set_default_layer_on_press(Layer::Dvorak, pressed),
            CustomKeyCode::Gui => self.momentary_layer(Layer::Gui, pressed),
            CustomKeyCode::Numeric => self.momentary_layer(Layer::Numeric, pressed),
            CustomKeyCode::Symbol => self.momentary_layer(Layer::Symbol, pressed),
            CustomKeyCode::Backlit => {
                let rshift = KeyCode::Hid(HidKeyCode::RShift);
                if pressed {
                    self.host.register_code(rshift);
                    self.indicator.backlight_step();
                    self.indicator.rgblight_step();
                    self.indicator.set_indicator(true);
                } else {
                    self.host.unregister_code(rshift);
                    self.indicator.set_indicator(false);
                }
            }
            CustomKeyCode::Nav => {
                debug!("Nav has no handler");
                return true;
            }
        }
        false
    }

    /// Process a rotary encoder step.
    ///
    /// In music mode the encoder changes the note offset while the symbol
    /// layer is held, and the tempo otherwise. Outside music mode it pages.
    pub fn encoder_update(&mut self, index: u8, clockwise: bool) -> bool {
        if self.sequencer.is_enabled() {
            let target = if self.keymap.is_layer_active(Layer::Symbol) {
                AdjustTarget::Offset
            } else {
                AdjustTarget::Tempo
            };
            self.sequencer.adjust(target, clockwise);
        } else if clockwise {
            self.host.tap_code(KeyCode::Hid(HidKeyCode::PageDown));
        } else {
            self.host.tap_code(KeyCode::Hid(HidKeyCode::PageUp));
        }
        debug!("Encoder {} clockwise: {}", index, clockwise);
        true
    }

    /// Process a dip switch change
    pub fn dip_switch_update(&mut self, index: u8, active: bool) -> bool {
        match index {
            DIP_SWITCH_ADJUST => {
                if active {
                    self.keymap.activate_layer(Layer::Adjust);
                } else {
                    self.keymap.deactivate_layer(Layer::Adjust);
                }
            }
            DIP_SWITCH_MUSIC => self.sequencer.set_enabled(active, &mut self.host),
            _ => debug!("Dip switch {} is not used", index),
        }
        true
    }

    /// Hook called once per matrix scan
    pub fn matrix_scan(&mut self) {
        self.sequencer.tick(&mut self.host);
    }

    /// Whether music mode may turn the action into a note.
    ///
    /// The layer keys are excluded so that they keep working while music mode is on.
    pub fn music_mask(&self, action: Action) -> bool {
        !matches!(
            action,
            Action::Custom(CustomKeyCode::Numeric) | Action::Custom(CustomKeyCode::Symbol)
        )
    }

    fn set_default_layer_on_press(&mut self, layer: Layer, pressed: bool) {
        if pressed {
            self.keymap.set_default_layer(layer);
            self.host.persist_default_layer(layer);
        }
    }

    fn momentary_layer(&mut self, layer: Layer, pressed: bool) {
        if pressed {
            self.keymap.activate_layer(layer);
        } else {
            self.keymap.deactivate_layer(layer);
        }
    }
}
