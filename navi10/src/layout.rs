use navi10_types::action::KeyAction;
use navi10_types::modifier::{ALT, CTRL, ModifierCombination, SHIFT};

use crate::constants::{COL, ROW};
use crate::layer::NUM_LAYER;
use crate::tap_dance::TAPPY_KEY;
use crate::{a, k, layer, td, wm};

const C_S: ModifierCombination = CTRL.and(SHIFT);
const LCA: ModifierCombination = CTRL.and(ALT);

// Matrix positions (2, 0) and (2, 2) are not wired on the pcb, the up arrow sits alone on row 2.
#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Base
    layer!([
        [td!(TAPPY_KEY), wm!(Z, CTRL), wm!(Y, CTRL)],
        [wm!(X, CTRL), wm!(C, CTRL), wm!(V, CTRL)],
        [a!(No), k!(Up), a!(No)],
        [k!(Left), k!(Down), k!(Right)]
    ]),
    // Media, while the tap dance key is held. The arrows are disabled
    layer!([
        [a!(Transparent), k!(AudioVolDown), k!(AudioVolUp)],
        [k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack)],
        [a!(No), a!(No), a!(No)],
        [a!(No), a!(No), a!(No)]
    ]),
    // Navigation, single tap
    layer!([
        [a!(Transparent), wm!(M, CTRL), wm!(D, C_S)],
        [wm!(E, CTRL), k!(F8), wm!(W, CTRL)],
        [a!(No), wm!(T, LCA), a!(No)],
        [wm!(L, LCA), wm!(F, LCA), wm!(R, LCA)]
    ]),
    // Inline editing, double tap
    layer!([
        [a!(Transparent), k!(Up), wm!(Z, CTRL)],
        [wm!(X, CTRL), k!(Down), wm!(Y, CTRL)],
        [a!(No), wm!(V, CTRL), a!(No)],
        [k!(Left), k!(Backspace), k!(Right)]
    ]),
];
