/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
        ))
    };
}

/// Create a consumer key, such as media and brightness keys
#[macro_export]
macro_rules! media {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Consumer($crate::types::keycode::ConsumerKey::$k),
        ))
    };
}

/// Create a system control key
#[macro_export]
macro_rules! sys {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::SystemControl($crate::types::keycode::SystemControlKey::$k),
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::SHIFT)
    };
}

/// Create a modifier action
#[macro_export]
macro_rules! modifier {
    ($m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Modifier($m))
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::types::action::KeyAction::TapHold(
            $crate::types::action::Action::Key($crate::types::keycode::KeyCode::Hid(
                $crate::types::keycode::HidKeyCode::$k,
            )),
            $crate::types::action::Action::Modifier($m),
        )
    };
}

/// Create a modifier-tap-hold action whose tap is a shifted key
#[macro_export]
macro_rules! mt_shifted {
    ($k: ident, $m: expr) => {
        $crate::types::action::KeyAction::TapHold(
            $crate::types::action::Action::KeyWithModifier(
                $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
                $crate::types::modifier::SHIFT,
            ),
            $crate::types::action::Action::Modifier($m),
        )
    };
}

/// Create a custom keycode of this keymap
#[macro_export]
macro_rules! custom {
    ($c: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Custom(
            $crate::types::keycode::CustomKeyCode::$c,
        ))
    };
}

/// Create a keycode which is handled by the host firmware
#[macro_export]
macro_rules! fw {
    ($f: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Framework(
            $crate::types::keycode::FrameworkKey::$f,
        ))
    };
}
