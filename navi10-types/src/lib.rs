//! # navi10 types
//!
//! Fundamental type definitions shared by the navi10 keymap:
//!
//! - [`action`] - Key actions stored in the keymap
//! - [`keycode`] - HID keyboard page and consumer page keycodes
//! - [`modifier`] - Modifier key combinations

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod modifier;
