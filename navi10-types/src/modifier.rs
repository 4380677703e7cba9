use core::ops::BitOr;

use bitfield_struct::bitfield;

use crate::keycode::HidKeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Same combination in a const context, `|` is not const
    pub const fn and(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    /// Convert the combination to modifier keycodes, in ctrl/shift/alt/gui order.
    /// Returns the keycodes and the number of valid entries.
    pub fn to_modifier_keycodes(self) -> ([HidKeyCode; 4], usize) {
        let (ctrl, shift, alt, gui) = if self.right() {
            (HidKeyCode::RCtrl, HidKeyCode::RShift, HidKeyCode::RAlt, HidKeyCode::RGui)
        } else {
            (HidKeyCode::LCtrl, HidKeyCode::LShift, HidKeyCode::LAlt, HidKeyCode::LGui)
        };
        let mut keycodes = [HidKeyCode::No; 4];
        let mut i = 0;
        for (set, keycode) in [(self.ctrl(), ctrl), (self.shift(), shift), (self.alt(), alt), (self.gui(), gui)] {
            if set {
                keycodes[i] = keycode;
                i += 1;
            }
        }
        (keycodes, i)
    }
}
