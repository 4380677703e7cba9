use embedded_hal::digital::OutputPin;

use crate::layer::{Layer, LayerStack};
use crate::light::StatusLeds;
use crate::tap_dance::{Gesture, GestureSession, TapDanceHandler, TapDanceState};

/// Layer selection policy of the tap dance key.
///
/// | gesture | action |
/// | --- | --- |
/// | single tap | toggle [`Layer::Navigation`], indicator follows it |
/// | hold | [`Layer::Media`] while held |
/// | double tap | toggle [`Layer::InlineEdit`], indicator follows it |
/// | triple tap | clear all layers, all LEDs off |
///
/// Navigation and inline editing are toggled independently, both can be on at the same time.
pub struct LayerSelect<P: OutputPin> {
    leds: StatusLeds<P>,
}

impl<P: OutputPin> LayerSelect<P> {
    pub fn new(leds: StatusLeds<P>) -> Self {
        Self { leds }
    }

    pub fn leds(&self) -> &StatusLeds<P> {
        &self.leds
    }

    fn toggle_with_indicator<L: LayerStack>(&mut self, layer: Layer, layers: &mut L) {
        let on = layers.layer_toggle(layer.into());
        info!("{:?} layer {}", layer, if on { "on" } else { "off" });
        let result = self.leds.set_indicator(on);
        check_led(result);
    }
}

impl<P: OutputPin, L: LayerStack> TapDanceHandler<L> for LayerSelect<P> {
    fn finished(&mut self, state: &TapDanceState, layers: &mut L) -> GestureSession {
        let gesture = Gesture::classify(state);
        debug!("Tap dance finished: count {}, pressed {}, {:?}", state.count, state.pressed, gesture);

        match gesture {
            Gesture::SingleTap => self.toggle_with_indicator(Layer::Navigation, layers),
            Gesture::SingleHold => layers.layer_on(Layer::Media.into()),
            Gesture::DoubleTap => self.toggle_with_indicator(Layer::InlineEdit, layers),
            Gesture::TripleTap => {
                layers.layer_clear();
                let result = self.leds.all_off();
                check_led(result);
            }
            Gesture::Unknown => debug!("No action for {} taps", state.count),
        }

        GestureSession::new(gesture)
    }

    fn reset(&mut self, session: GestureSession, _state: &TapDanceState, layers: &mut L) {
        // A hold only lasts until the key is released
        if session.gesture() == Gesture::SingleHold {
            layers.layer_off(Layer::Media.into());
        }
    }
}

/// Pin writes on the navi10 can't fail, a failure is logged and otherwise ignored
fn check_led<E>(result: Result<(), E>) {
    if result.is_err() {
        error!("Failed to drive status LED");
    }
}
