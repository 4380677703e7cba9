//! Keymap firmware logic of the navi10 macropad.
//!
//! Four layers on a 4x3 matrix, switched by a single tap dance key:
//! tap for navigation, hold for media, double tap for inline editing and triple tap to reset.
//! The status LEDs are active-low and driven through [`embedded_hal::digital::OutputPin`].

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod config;
mod constants {
    include!(concat!(env!("OUT_DIR"), "/constants.rs"));
}
pub mod event;
pub mod keyboard;
pub mod keymap;
pub mod layer;
pub mod layer_select;
pub mod layout;
pub mod layout_macro;
pub mod light;
pub mod tap_dance;

pub use constants::{COL, ROW};
pub use keyboard::Keyboard;
pub use navi10_types as types;

/// Name of the keyboard, from `keyboard.toml`
pub const KEYBOARD_NAME: &str = constants::KEYBOARD_NAME;
/// Product name of the keyboard, from `keyboard.toml`
pub const PRODUCT_NAME: &str = constants::PRODUCT_NAME;

/// MCU pins of the (indicator, tx, rx) LEDs, from `keyboard.toml`
pub const LED_PINS: (&str, &str, &str) = (
    constants::INDICATOR_LED_PIN,
    constants::TX_LED_PIN,
    constants::RX_LED_PIN,
);
