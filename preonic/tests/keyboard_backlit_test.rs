mod common;

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use preonic::config::KeyboardConfig;
use preonic::indicator::PinIndicator;
use preonic::keyboard::Keyboard;
use preonic::muse::MuseClock;
use preonic::types::action::Action;
use preonic::types::keycode::{CustomKeyCode, HidKeyCode, KeyCode};

use crate::common::{HostCall, LAYOUT, MockHost, create_test_keyboard_with_indicator};

const RSHIFT: KeyCode = KeyCode::Hid(HidKeyCode::RShift);
const BACKLIT: Action = Action::Custom(CustomKeyCode::Backlit);

#[test]
fn test_backlit_key() {
    let mut keyboard = create_test_keyboard_with_indicator();

    assert!(!keyboard.process_record(BACKLIT, true));
    assert_eq!(keyboard.host().calls, [HostCall::Register(RSHIFT)]);
    assert_eq!(keyboard.indicator().backlight_steps, 1);
    assert_eq!(keyboard.indicator().rgblight_steps, 1);
    assert!(keyboard.indicator().on);

    assert!(!keyboard.process_record(BACKLIT, false));
    assert_eq!(
        keyboard.host().calls,
        [HostCall::Register(RSHIFT), HostCall::Unregister(RSHIFT)]
    );
    assert_eq!(keyboard.indicator().backlight_steps, 1);
    assert!(!keyboard.indicator().on);
}

#[test]
fn test_backlit_drives_low_active_pin() {
    let expectations = [PinTransaction::set(State::Low), PinTransaction::set(State::High)];
    let pin = PinMock::new(&expectations);
    let mut pin_check = pin.clone();

    let mut keyboard = Keyboard::new(
        &LAYOUT,
        KeyboardConfig::default(),
        MuseClock::new(),
        MockHost::default(),
        PinIndicator::new(pin, true),
    );
    keyboard.process_record(BACKLIT, true);
    keyboard.process_record(BACKLIT, false);

    pin_check.done();
}

#[test]
fn test_backlit_drives_high_active_pin() {
    let expectations = [PinTransaction::set(State::High), PinTransaction::set(State::Low)];
    let pin = PinMock::new(&expectations);
    let mut pin_check = pin.clone();

    let mut keyboard = Keyboard::new(
        &LAYOUT,
        KeyboardConfig::default(),
        MuseClock::new(),
        MockHost::default(),
        PinIndicator::new(pin, false),
    );
    keyboard.process_record(BACKLIT, true);
    keyboard.process_record(BACKLIT, false);

    pin_check.done();
}
