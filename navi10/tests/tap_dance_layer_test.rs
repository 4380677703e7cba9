pub mod common;

use std::io::ErrorKind;

use embassy_time::Duration;
use embedded_hal_mock::eh1::MockError;
use navi10::event::KeyEvent;
use navi10::layer::Layer;
use navi10::tap_dance::{Gesture, TAPPY_KEY, TapDanceState};
use navi10::types::action::{Action, KeyAction};
use navi10::types::keycode::{HidKeyCode, KeyCode};
use navi10::types::modifier::CTRL;

use crate::common::{TestPins, create_keyboard, dark, is_active, lit, tap_dance};

#[test]
fn test_boot_turns_tx_rx_off() {
    let mut pins = TestPins::new(&[], &[], &[]);
    let keyboard = create_keyboard(&pins);

    assert_eq!(keyboard.leds().states(), (false, false, false));
    assert!(!is_active(&keyboard, Layer::Media));
    assert!(!is_active(&keyboard, Layer::Navigation));
    assert!(!is_active(&keyboard, Layer::InlineEdit));
    pins.done();
}

#[test]
fn test_single_tap_toggles_navigation() {
    let mut pins = TestPins::new(&[lit(), dark()], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    let session = tap_dance(&mut keyboard, 1, false);
    assert_eq!(session.gesture(), Gesture::SingleTap);
    assert!(is_active(&keyboard, Layer::Navigation));
    assert!(keyboard.leds().indicator_on());

    tap_dance(&mut keyboard, 1, false);
    assert!(!is_active(&keyboard, Layer::Navigation));
    assert!(!keyboard.leds().indicator_on());
    pins.done();
}

#[test]
fn test_hold_activates_media_until_reset() {
    let mut pins = TestPins::new(&[], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    let state = TapDanceState::new(1, true);
    let session = keyboard.tap_dance_finished(TAPPY_KEY, &state).unwrap();
    assert_eq!(session.gesture(), Gesture::SingleHold);
    assert!(is_active(&keyboard, Layer::Media));

    keyboard.tap_dance_reset(TAPPY_KEY, session, &TapDanceState::new(1, false));
    assert!(!is_active(&keyboard, Layer::Media));
    pins.done();
}

#[test]
fn test_hold_twice_never_toggles_media_off() {
    let mut pins = TestPins::new(&[], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    let state = TapDanceState::new(1, true);
    let first = keyboard.tap_dance_finished(TAPPY_KEY, &state).unwrap();
    // A second hold resolving before the reset keeps media on
    let second = keyboard.tap_dance_finished(TAPPY_KEY, &state).unwrap();
    assert!(is_active(&keyboard, Layer::Media));

    keyboard.tap_dance_reset(TAPPY_KEY, first, &state);
    keyboard.tap_dance_reset(TAPPY_KEY, second, &state);
    assert!(!is_active(&keyboard, Layer::Media));
    pins.done();
}

#[test]
fn test_double_tap_toggles_inline_edit() {
    let mut pins = TestPins::new(&[lit(), dark()], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    assert_eq!(tap_dance(&mut keyboard, 2, false).gesture(), Gesture::DoubleTap);
    assert!(is_active(&keyboard, Layer::InlineEdit));
    assert!(!is_active(&keyboard, Layer::Navigation));

    tap_dance(&mut keyboard, 2, false);
    assert!(!is_active(&keyboard, Layer::InlineEdit));
    pins.done();
}

#[test]
fn test_double_tap_keeps_navigation_on() {
    let mut pins = TestPins::new(&[lit(), lit()], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    tap_dance(&mut keyboard, 1, false);
    tap_dance(&mut keyboard, 2, false);

    // Navigation and inline editing are independent toggles
    assert!(is_active(&keyboard, Layer::Navigation));
    assert!(is_active(&keyboard, Layer::InlineEdit));
    assert!(keyboard.leds().indicator_on());
    pins.done();
}

#[test]
fn test_triple_tap_resets_everything() {
    let mut pins = TestPins::new(&[lit(), lit(), dark()], &[dark()], &[dark()]);
    let mut keyboard = create_keyboard(&pins);

    tap_dance(&mut keyboard, 1, false);
    tap_dance(&mut keyboard, 2, false);
    let state = TapDanceState::new(1, true);
    let hold = keyboard.tap_dance_finished(TAPPY_KEY, &state).unwrap();

    assert_eq!(tap_dance(&mut keyboard, 3, false).gesture(), Gesture::TripleTap);
    assert!(!is_active(&keyboard, Layer::Media));
    assert!(!is_active(&keyboard, Layer::Navigation));
    assert!(!is_active(&keyboard, Layer::InlineEdit));
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Base as u8);
    assert_eq!(keyboard.leds().states(), (false, false, false));

    keyboard.tap_dance_reset(TAPPY_KEY, hold, &state);
    pins.done();
}

#[test]
fn test_triple_tap_turns_leds_off_when_tx_fails() {
    let broken_tx = dark().with_error(MockError::Io(ErrorKind::NotConnected));
    let mut pins = TestPins::new(&[lit(), dark()], &[broken_tx], &[dark()]);
    let mut keyboard = create_keyboard(&pins);

    tap_dance(&mut keyboard, 1, false);
    assert!(keyboard.leds().indicator_on());

    // TX write fails, RX and the indicator are still driven off
    tap_dance(&mut keyboard, 3, false);
    assert!(!is_active(&keyboard, Layer::Navigation));
    assert_eq!(keyboard.leds().states(), (false, false, false));
    pins.done();
}

#[test]
fn test_more_than_three_taps_do_nothing() {
    let mut pins = TestPins::new(&[lit()], &[], &[]);
    let mut keyboard = create_keyboard(&pins);
    tap_dance(&mut keyboard, 1, false);

    for count in [4, 5, 8, 255] {
        for pressed in [false, true] {
            assert_eq!(tap_dance(&mut keyboard, count, pressed).gesture(), Gesture::Unknown);
        }
    }

    assert!(is_active(&keyboard, Layer::Navigation));
    assert!(!is_active(&keyboard, Layer::Media));
    assert!(!is_active(&keyboard, Layer::InlineEdit));
    assert!(keyboard.leds().indicator_on());
    pins.done();
}

#[test]
fn test_unregistered_tap_dance() {
    let mut pins = TestPins::new(&[], &[], &[]);
    let mut keyboard = create_keyboard(&pins);

    assert!(keyboard.tap_dance_finished(1, &TapDanceState::new(1, false)).is_none());
    assert!(!is_active(&keyboard, Layer::Navigation));
    assert_eq!(keyboard.tapping_term(TAPPY_KEY), Some(Duration::from_millis(275)));
    assert_eq!(keyboard.tapping_term(1), None);
    pins.done();
}

#[test]
fn test_media_keys_while_held() {
    let mut pins = TestPins::new(&[], &[], &[]);
    let mut keyboard = create_keyboard(&pins);
    let press = KeyEvent { row: 0, col: 1, pressed: true };
    let release = KeyEvent { row: 0, col: 1, pressed: false };
    let vol_down = KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::AudioVolDown)));
    let undo = KeyAction::Single(Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Z), CTRL));

    // Hold the tap dance key, press volume down
    assert_eq!(
        keyboard.process_key_event(KeyEvent { row: 0, col: 0, pressed: true }),
        KeyAction::TapDance(TAPPY_KEY)
    );
    let state = TapDanceState::new(1, true);
    let session = keyboard.tap_dance_finished(TAPPY_KEY, &state).unwrap();
    assert_eq!(keyboard.process_key_event(press), vol_down);

    // Let the tap dance key go before volume down, the release still hits the media layer
    keyboard.tap_dance_reset(TAPPY_KEY, session, &TapDanceState::new(1, false));
    assert_eq!(keyboard.process_key_event(release), vol_down);

    assert_eq!(keyboard.process_key_event(press), undo);
    assert_eq!(keyboard.process_key_event(release), undo);
    pins.done();
}
