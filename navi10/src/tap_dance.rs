//! Tap dance gestures reported by the tap dance engine.
//!
//! The engine counts taps of the key within the tapping term. When the gesture resolves it calls
//! [`TapDanceHandler::finished`], and once the key is released (or the gesture times out) it calls
//! [`TapDanceHandler::reset`] with the session returned by `finished`.

use crate::layer::LayerStack;

/// Index of the layer-select tap dance key
pub const TAPPY_KEY: u8 = 0;

/// State of a tap dance key when its gesture resolves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceState {
    /// Number of taps counted within the tapping term
    pub count: u8,
    /// Whether the key is still held down
    pub pressed: bool,
}

impl TapDanceState {
    pub const fn new(count: u8, pressed: bool) -> Self {
        Self { count, pressed }
    }
}

/// A resolved tap dance gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    SingleTap,
    SingleHold,
    DoubleTap,
    TripleTap,
    /// Any other tap count, which has no action
    Unknown,
}

impl Gesture {
    pub fn classify(state: &TapDanceState) -> Self {
        match (state.count, state.pressed) {
            (1, false) => Gesture::SingleTap,
            (1, true) => Gesture::SingleHold,
            (2, _) => Gesture::DoubleTap,
            (3, _) => Gesture::TripleTap,
            _ => Gesture::Unknown,
        }
    }
}

impl From<&TapDanceState> for Gesture {
    fn from(state: &TapDanceState) -> Self {
        Gesture::classify(state)
    }
}

/// What a finished gesture did, handed back to the handler on reset.
///
/// The engine holds it from `finished` to `reset`, there is no policy state outside of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureSession {
    gesture: Gesture,
}

impl GestureSession {
    pub fn new(gesture: Gesture) -> Self {
        Self { gesture }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
}

/// Callbacks registered for a tap dance key, invoked by the tap dance engine
pub trait TapDanceHandler<L: LayerStack> {
    /// The gesture resolved
    fn finished(&mut self, state: &TapDanceState, layers: &mut L) -> GestureSession;

    /// The key was released or the gesture timed out
    fn reset(&mut self, session: GestureSession, state: &TapDanceState, layers: &mut L);
}
