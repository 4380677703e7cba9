use embassy_time::Duration;
use embedded_hal::digital::OutputPin;

use crate::constants::{LED_LOW_ACTIVE, TAPPING_TERM_MS};

/// The config struct for the navi10 keyboard.
///
/// - `light_config`: pins of the status LEDs
/// - `behavior_config`: tunable tap dance behavior
pub struct KeyboardConfig<O: OutputPin> {
    pub light_config: LightConfig<O>,
    pub behavior_config: BehaviorConfig,
}

impl<O: OutputPin> KeyboardConfig<O> {
    pub fn new(light_config: LightConfig<O>) -> Self {
        Self {
            light_config,
            behavior_config: BehaviorConfig::default(),
        }
    }
}

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_dance: TapDanceConfig,
}

/// Configurations for the tap dance key
#[derive(Clone, Copy, Debug)]
pub struct TapDanceConfig {
    /// Taps within this window count towards the same gesture
    pub tapping_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(TAPPING_TERM_MS),
        }
    }
}

/// Pins of the three status LEDs on the navi10.
///
/// The indicator LED follows the toggled layers, TX and RX are the Pro Micro's on-board LEDs.
pub struct LightConfig<O: OutputPin> {
    pub indicator: LightPinConfig<O>,
    pub tx: LightPinConfig<O>,
    pub rx: LightPinConfig<O>,
}

impl<O: OutputPin> LightConfig<O> {
    /// All three LEDs with the polarity from `keyboard.toml`
    pub fn new(indicator: O, tx: O, rx: O) -> Self {
        Self {
            indicator: LightPinConfig::new(indicator),
            tx: LightPinConfig::new(tx),
            rx: LightPinConfig::new(rx),
        }
    }
}

pub struct LightPinConfig<O: OutputPin> {
    pub pin: O,
    pub low_active: bool,
}

impl<O: OutputPin> LightPinConfig<O> {
    pub fn new(pin: O) -> Self {
        Self {
            pin,
            low_active: LED_LOW_ACTIVE,
        }
    }
}
