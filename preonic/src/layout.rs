//! Layer tables of the Preonic grid layout.

use crate::types::action::KeyAction;
use crate::types::layer::NUM_LAYER;
use crate::types::modifier::{ALT, CTRL, GUI, HYPER, SHIFT};
use crate::{a, custom, fw, k, layer, media, modifier, mt, mt_shifted, shifted, sys};

/// Rows of the Preonic grid
pub const ROW: usize = 5;
/// Columns of the Preonic grid
pub const COL: usize = 12;

/// Action tables for every layer, indexed by `Layer`, then row, then column
pub type Layout = [[[KeyAction; COL]; ROW]; NUM_LAYER];

/// The Preonic layout.
///
/// The bottom row of the three base layouts is shared:
///
/// ```text
/// | Gui/[ | Hyper | Alt/< | GUI | Numeric | Space | Enter | Symbol | Nav | Alt/> | Hyper | Gui/] |
/// ```
///
/// `Nav` has no layer table, its layer stays empty. Numeric + Symbol raise Adjust.
#[rustfmt::skip]
pub const fn get_default_keymap() -> Layout {
    [
        // Qwerty
        layer!([
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Backspace)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backslash)],
            [mt!(Escape, CTRL), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [mt_shifted!(Kc9, SHIFT), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), mt_shifted!(Kc0, SHIFT.on_right())],
            [mt!(LeftBracket, GUI), modifier!(HYPER), mt_shifted!(Comma, ALT), k!(LGui), custom!(Numeric), k!(Space), k!(Enter), custom!(Symbol), custom!(Nav), mt_shifted!(Dot, ALT.on_right()), modifier!(HYPER.on_right()), mt!(RightBracket, GUI.on_right())]
        ]),
        // Colemak
        layer!([
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Backspace)],
            [k!(Tab), k!(Q), k!(W), k!(F), k!(P), k!(G), k!(J), k!(L), k!(U), k!(Y), k!(Semicolon), k!(Backslash)],
            [mt!(Escape, CTRL), k!(A), k!(R), k!(S), k!(T), k!(D), k!(H), k!(N), k!(E), k!(I), k!(O), k!(Quote)],
            [mt_shifted!(Kc9, SHIFT), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(K), k!(M), k!(Comma), k!(Dot), k!(Slash), mt_shifted!(Kc0, SHIFT.on_right())],
            [mt!(LeftBracket, GUI), modifier!(HYPER), mt_shifted!(Comma, ALT), k!(LGui), custom!(Numeric), k!(Space), k!(Enter), custom!(Symbol), custom!(Nav), mt_shifted!(Dot, ALT.on_right()), modifier!(HYPER.on_right()), mt!(RightBracket, GUI.on_right())]
        ]),
        // Dvorak
        layer!([
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Backspace)],
            [k!(Tab), k!(Quote), k!(Comma), k!(Dot), k!(P), k!(Y), k!(F), k!(G), k!(C), k!(R), k!(L), k!(Backslash)],
            [mt!(Escape, CTRL), k!(A), k!(O), k!(E), k!(U), k!(I), k!(D), k!(H), k!(T), k!(N), k!(S), k!(Slash)],
            [mt_shifted!(Kc9, SHIFT), k!(Semicolon), k!(Q), k!(J), k!(K), k!(X), k!(B), k!(M), k!(W), k!(V), k!(Z), mt_shifted!(Kc0, SHIFT.on_right())],
            [mt!(LeftBracket, GUI), modifier!(HYPER), mt_shifted!(Comma, ALT), k!(LGui), custom!(Numeric), k!(Space), k!(Enter), custom!(Symbol), custom!(Nav), mt_shifted!(Dot, ALT.on_right()), modifier!(HYPER.on_right()), mt!(RightBracket, GUI.on_right())]
        ]),
        // Numeric
        layer!([
            [a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), a!(Transparent)],
            [a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), a!(Transparent)],
            [a!(Transparent), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), a!(Transparent)],
            [a!(Transparent), k!(Minus), k!(Equal), k!(Grave), k!(Backslash), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Backspace), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Symbol
        layer!([
            [a!(Transparent), k!(F11), k!(F12), k!(F13), k!(F14), k!(F15), k!(F16), k!(F17), k!(F18), k!(F19), k!(F20), a!(Transparent)],
            [a!(Transparent), k!(F11), k!(F12), k!(F13), k!(F14), k!(F15), k!(F16), k!(F17), k!(F18), k!(F19), k!(F20), a!(Transparent)],
            [a!(Transparent), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), a!(Transparent)],
            [a!(Transparent), shifted!(Minus), shifted!(Equal), shifted!(Grave), shifted!(Backslash), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Delete), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Gui
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(MouseBtn1), k!(MouseUp), k!(MouseBtn2), a!(Transparent), a!(Transparent), media!(PrevTrack), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(MouseLeft), k!(MouseDown), k!(MouseRight), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), media!(NextTrack), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), media!(PrevTrack), media!(PlayPause), media!(NextTrack), media!(BrightnessDown), sys!(Sleep), a!(Transparent), media!(BrightnessUp), media!(Mute), media!(VolumeDecrement), media!(VolumeIncrement), a!(Transparent)]
        ]),
        // Nav
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Adjust
        layer!([
            [k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
            [a!(Transparent), fw!(Bootloader), fw!(DebugToggle), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), fw!(TerminalOn), fw!(TerminalOff), a!(Transparent), a!(Transparent), k!(Delete)],
            [a!(Transparent), a!(Transparent), fw!(MusicModeNext), fw!(AudioOn), fw!(AudioOff), fw!(AltGuiNormal), fw!(AltGuiSwap), custom!(Qwerty), custom!(Colemak), custom!(Dvorak), a!(Transparent), a!(Transparent)],
            [a!(Transparent), fw!(MusicVoiceDown), fw!(MusicVoiceUp), fw!(MusicOn), fw!(MusicOff), fw!(MidiOn), fw!(MidiOff), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::action::Action;
    use crate::types::keycode::{CustomKeyCode, HidKeyCode, KeyCode};
    use crate::types::layer::Layer;

    static LAYOUT: Layout = get_default_keymap();

    #[test]
    fn test_base_layouts_share_bottom_row() {
        let bottom = LAYOUT[Layer::Qwerty.index()][4];
        assert_eq!(LAYOUT[Layer::Colemak.index()][4], bottom);
        assert_eq!(LAYOUT[Layer::Dvorak.index()][4], bottom);
        assert_eq!(bottom[4], KeyAction::Single(Action::Custom(CustomKeyCode::Numeric)));
        assert_eq!(bottom[7], KeyAction::Single(Action::Custom(CustomKeyCode::Symbol)));
    }

    #[test]
    fn test_home_rows() {
        use HidKeyCode::*;
        let home = |layer: Layer| -> [Option<Action>; 10] {
            core::array::from_fn(|i| LAYOUT[layer.index()][2][i + 1].single())
        };
        let letters = |keys: [HidKeyCode; 10]| keys.map(|kc| Some(Action::Key(KeyCode::Hid(kc))));
        assert_eq!(home(Layer::Qwerty), letters([A, S, D, F, G, H, J, K, L, Semicolon]));
        assert_eq!(home(Layer::Colemak), letters([A, R, S, T, D, H, N, E, I, O]));
        assert_eq!(home(Layer::Dvorak), letters([A, O, E, U, I, D, H, T, N, S]));
    }

    #[test]
    fn test_adjust_selects_default_layers() {
        let row = LAYOUT[Layer::Adjust.index()][2];
        assert_eq!(row[7], KeyAction::Single(Action::Custom(CustomKeyCode::Qwerty)));
        assert_eq!(row[8], KeyAction::Single(Action::Custom(CustomKeyCode::Colemak)));
        assert_eq!(row[9], KeyAction::Single(Action::Custom(CustomKeyCode::Dvorak)));
    }

    #[test]
    fn test_nav_layer_is_empty() {
        assert!(LAYOUT[Layer::Nav.index()]
            .iter()
            .flatten()
            .all(|a| *a == KeyAction::No));
    }
}
