#![allow(dead_code)]

use preonic::config::KeyboardConfig;
use preonic::host::{Audio, Host};
use preonic::indicator::{Indicator, NoIndicator};
use preonic::keyboard::Keyboard;
use preonic::layout::{Layout, get_default_keymap};
use preonic::muse::{MuseClock, PhaseClock};
use preonic::types::keycode::KeyCode;
use preonic::types::layer::Layer;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub static LAYOUT: Layout = get_default_keymap();

/// Everything the keymap asked the host to do, in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    Register(KeyCode),
    Unregister(KeyCode),
    PersistDefaultLayer(Layer),
    PlayNote(f32, u8),
    StopNote(f32),
    StopAll,
}

#[derive(Debug, Default)]
pub struct MockHost {
    pub calls: Vec<HostCall>,
}

impl MockHost {
    pub fn take(&mut self) -> Vec<HostCall> {
        core::mem::take(&mut self.calls)
    }

    pub fn played_notes(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, HostCall::PlayNote(..))).count()
    }

    pub fn stop_all_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, HostCall::StopAll)).count()
    }
}

impl Host for MockHost {
    fn register_code(&mut self, keycode: KeyCode) {
        self.calls.push(HostCall::Register(keycode));
    }

    fn unregister_code(&mut self, keycode: KeyCode) {
        self.calls.push(HostCall::Unregister(keycode));
    }

    fn persist_default_layer(&mut self, layer: Layer) {
        self.calls.push(HostCall::PersistDefaultLayer(layer));
    }
}

impl Audio for MockHost {
    fn play_note(&mut self, frequency: f32, velocity: u8) {
        self.calls.push(HostCall::PlayNote(frequency, velocity));
    }

    fn stop_note(&mut self, frequency: f32) {
        self.calls.push(HostCall::StopNote(frequency));
    }

    fn stop_all_notes(&mut self) {
        self.calls.push(HostCall::StopAll);
    }
}

/// Records the lighting calls of the keymap
#[derive(Debug, Default)]
pub struct MockIndicator {
    pub backlight_steps: usize,
    pub rgblight_steps: usize,
    pub on: bool,
}

impl Indicator for MockIndicator {
    fn backlight_step(&mut self) {
        self.backlight_steps += 1;
    }

    fn rgblight_step(&mut self) {
        self.rgblight_steps += 1;
    }

    fn set_indicator(&mut self, on: bool) {
        self.on = on;
    }
}

/// Phase clock which always returns the same phase
pub struct FixedClock(pub usize);

impl PhaseClock for FixedClock {
    fn next_phase(&mut self) -> usize {
        self.0
    }
}

pub fn create_test_keyboard() -> Keyboard<'static, MockHost> {
    Keyboard::new(
        &LAYOUT,
        KeyboardConfig::default(),
        MuseClock::new(),
        MockHost::default(),
        NoIndicator,
    )
}

pub fn create_test_keyboard_with_indicator() -> Keyboard<'static, MockHost, MockIndicator> {
    Keyboard::new(
        &LAYOUT,
        KeyboardConfig::default(),
        MuseClock::new(),
        MockHost::default(),
        MockIndicator::default(),
    )
}

pub fn create_test_keyboard_with_config<C: PhaseClock>(
    config: KeyboardConfig,
    clock: C,
) -> Keyboard<'static, MockHost, NoIndicator, C> {
    Keyboard::new(&LAYOUT, config, clock, MockHost::default(), NoIndicator)
}
