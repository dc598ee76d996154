use serde::{Deserialize, Serialize};

/// Key codes of the HID keyboard page that the Preonic layouts emit.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// `a` and `A`
    A = 0x04,
    /// `b` and `B`
    B = 0x05,
    /// `c` and `C`
    C = 0x06,
    /// `d` and `D`
    D = 0x07,
    /// `e` and `E`
    E = 0x08,
    /// `f` and `F`
    F = 0x09,
    /// `g` and `G`
    G = 0x0A,
    /// `h` and `H`
    H = 0x0B,
    /// `i` and `I`
    I = 0x0C,
    /// `j` and `J`
    J = 0x0D,
    /// `k` and `K`
    K = 0x0E,
    /// `l` and `L`
    L = 0x0F,
    /// `m` and `M`
    M = 0x10,
    /// `n` and `N`
    N = 0x11,
    /// `o` and `O`
    O = 0x12,
    /// `p` and `P`
    P = 0x13,
    /// `q` and `Q`
    Q = 0x14,
    /// `r` and `R`
    R = 0x15,
    /// `s` and `S`
    S = 0x16,
    /// `t` and `T`
    T = 0x17,
    /// `u` and `U`
    U = 0x18,
    /// `v` and `V`
    V = 0x19,
    /// `w` and `W`
    W = 0x1A,
    /// `x` and `X`
    X = 0x1B,
    /// `y` and `Y`
    Y = 0x1C,
    /// `z` and `Z`
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PageUp = 0x4B,
    Delete = 0x4C,
    PageDown = 0x4E,
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    /// Mouse Up
    MouseUp = 0xCD,
    /// Mouse Down
    MouseDown = 0xCE,
    /// Mouse Left
    MouseLeft = 0xCF,
    /// Mouse Right
    MouseRight = 0xD0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    LGui = 0xE3,
    RShift = 0xE5,
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    BrightnessUp = 0x6F,
    BrightnessDown = 0x70,
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    PlayPause = 0xCD,
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}

/// Keys in `Generic Desktop Page`, generally used for system control
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemControlKey {
    Sleep = 0x82,
}

/// A key which ends up in one of the HID reports sent to the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Consumer(ConsumerKey),
    SystemControl(SystemControlKey),
}

/// Keycodes implemented by the host firmware itself.
///
/// The keymap only places them in the layout; pressing one is always forwarded
/// to the host's default handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameworkKey {
    /// Jump to the bootloader
    Bootloader,
    DebugToggle,
    TerminalOn,
    TerminalOff,
    AudioOn,
    AudioOff,
    /// Cycle through the music modes
    MusicModeNext,
    MusicOn,
    MusicOff,
    MusicVoiceDown,
    MusicVoiceUp,
    MidiOn,
    MidiOff,
    /// Restore the Alt/GUI positions
    AltGuiNormal,
    /// Swap the Alt and GUI keys
    AltGuiSwap,
}

/// Keycodes owned by this keymap, handled before the host sees them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeyCode {
    /// Make the qwerty layer the persistent default layer
    Qwerty,
    /// Make the colemak layer the persistent default layer
    Colemak,
    /// Make the dvorak layer the persistent default layer
    Dvorak,
    /// Momentary numeric layer, one half of the tri-layer pair
    Numeric,
    /// Momentary symbol layer, the other half of the tri-layer pair
    Symbol,
    /// Momentary gui layer
    Gui,
    Nav,
    /// Right shift held together with a backlight step
    Backlit,
}
