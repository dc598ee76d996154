//! Services the keymap calls into on the host firmware.

use preonic_types::keycode::KeyCode;
use preonic_types::layer::Layer;

/// Key reporting and persistent storage of the host firmware.
pub trait Host {
    /// Hold a key in the next reports, until it is unregistered
    fn register_code(&mut self, keycode: KeyCode);

    /// Release a key registered by [`Host::register_code`]
    fn unregister_code(&mut self, keycode: KeyCode);

    /// Press and release a key
    fn tap_code(&mut self, keycode: KeyCode) {
        self.register_code(keycode);
        self.unregister_code(keycode);
    }

    /// Save the default layer so that it survives a power cycle
    fn persist_default_layer(&mut self, layer: Layer);
}

/// Audio driver of the host firmware
pub trait Audio {
    fn play_note(&mut self, frequency: f32, velocity: u8);

    fn stop_note(&mut self, frequency: f32);

    fn stop_all_notes(&mut self);
}
