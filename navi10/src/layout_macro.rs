/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(Up)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::Up)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
        ))
    };
}

/// Create a normal key with modifier action, e.g. `wm!(Z, CTRL)` for Ctrl+Z
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$x),
            $m,
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

/// Create a tap dance key, referencing a tap dance registration by index
#[macro_export]
macro_rules! td {
    ($x: expr) => {
        $crate::types::action::KeyAction::TapDance($x)
    };
}
