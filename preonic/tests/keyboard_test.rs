mod common;

use preonic::types::action::Action;
use preonic::types::keycode::{CustomKeyCode, FrameworkKey, HidKeyCode, KeyCode};
use preonic::types::modifier::SHIFT;

use crate::common::create_test_keyboard;

#[test]
fn test_music_mask() {
    let keyboard = create_test_keyboard();

    assert!(!keyboard.music_mask(Action::Custom(CustomKeyCode::Numeric)));
    assert!(!keyboard.music_mask(Action::Custom(CustomKeyCode::Symbol)));
    assert!(keyboard.music_mask(Action::Custom(CustomKeyCode::Gui)));
    assert!(keyboard.music_mask(Action::Custom(CustomKeyCode::Backlit)));
    assert!(keyboard.music_mask(Action::Key(KeyCode::Hid(HidKeyCode::A))));
    assert!(keyboard.music_mask(Action::Framework(FrameworkKey::MusicOn)));
}

#[test]
fn test_unhandled_actions_are_forwarded() {
    let mut keyboard = create_test_keyboard();

    for action in [
        Action::Key(KeyCode::Hid(HidKeyCode::A)),
        Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Kc1), SHIFT),
        Action::Modifier(SHIFT),
        Action::Framework(FrameworkKey::Bootloader),
        Action::Custom(CustomKeyCode::Nav),
    ] {
        assert!(keyboard.process_record(action, true));
        assert!(keyboard.process_record(action, false));
    }
    assert!(keyboard.host().calls.is_empty());
}

#[test]
fn test_default_layer_keys_only_act_on_press() {
    let mut keyboard = create_test_keyboard();

    assert!(!keyboard.process_record(Action::Custom(CustomKeyCode::Dvorak), false));
    assert!(keyboard.host().calls.is_empty());
    assert!(!keyboard.process_record(Action::Custom(CustomKeyCode::Dvorak), true));
    assert_eq!(
        keyboard.keymap.get_default_layer(),
        preonic::types::layer::Layer::Dvorak
    );
}
