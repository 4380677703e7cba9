use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use navi10_types::action::KeyAction;

use crate::config::{BehaviorConfig, KeyboardConfig};
use crate::constants::{COL, ROW};
use crate::event::KeyEvent;
use crate::keymap::KeyMap;
use crate::layer::NUM_LAYER;
use crate::layer_select::LayerSelect;
use crate::light::StatusLeds;
use crate::tap_dance::{GestureSession, TAPPY_KEY, TapDanceHandler, TapDanceState};

/// The navi10 keyboard: keymap resolution and the tap dance callbacks.
///
/// Matrix scanning, the tap dance engine and HID reporting run elsewhere and call into this.
pub struct Keyboard<'a, P: OutputPin> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    layer_select: LayerSelect<P>,
    behavior: BehaviorConfig,
}

impl<'a, P: OutputPin> Keyboard<'a, P> {
    /// Create the keyboard and run the boot hook of the status LEDs
    pub fn new(keymap: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER], config: KeyboardConfig<P>) -> Self {
        let mut leds = StatusLeds::new(config.light_config);
        if leds.init().is_err() {
            error!("Failed to initialize status LEDs");
        }
        Self {
            keymap: KeyMap::new(keymap),
            layer_select: LayerSelect::new(leds),
            behavior: config.behavior_config,
        }
    }

    /// Resolve a key event to the action of the topmost active layer
    pub fn process_key_event(&mut self, event: KeyEvent) -> KeyAction {
        let action = self.keymap.get_action_with_layer_cache(event);
        trace!("Key ({}, {}) pressed {}: {:?}", event.row, event.col, event.pressed, action);
        action
    }

    /// Tapping term of a registered tap dance
    pub fn tapping_term(&self, index: u8) -> Option<Duration> {
        match index {
            TAPPY_KEY => Some(self.behavior.tap_dance.tapping_term),
            _ => None,
        }
    }

    /// The tap dance engine resolved a gesture of tap dance `index`.
    ///
    /// Returns the session to pass back to [`Keyboard::tap_dance_reset`], `None` if no tap dance is registered
    /// at `index`.
    pub fn tap_dance_finished(&mut self, index: u8, state: &TapDanceState) -> Option<GestureSession> {
        match index {
            TAPPY_KEY => Some(self.layer_select.finished(state, &mut self.keymap)),
            _ => {
                warn!("Tap dance {} is not registered", index);
                None
            }
        }
    }

    /// The tap dance key `index` was released or its gesture timed out
    pub fn tap_dance_reset(&mut self, index: u8, session: GestureSession, state: &TapDanceState) {
        match index {
            TAPPY_KEY => self.layer_select.reset(session, state, &mut self.keymap),
            _ => warn!("Tap dance {} is not registered", index),
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn leds(&self) -> &StatusLeds<P> {
        self.layer_select.leds()
    }
}
