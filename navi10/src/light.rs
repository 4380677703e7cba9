use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{LightConfig, LightPinConfig};

/// A single LED driven by an output pin
pub(crate) struct SingleLed<P: OutputPin> {
    /// Logical on/off state as last driven
    state: bool,

    /// Pin state when turning LED on
    on_state: PinState,

    /// GPIO for controlling the LED
    pin: P,
}

impl<P: OutputPin> SingleLed<P> {
    pub(crate) fn new(config: LightPinConfig<P>) -> Self {
        let on_state = if config.low_active { PinState::Low } else { PinState::High };
        Self {
            state: false,
            on_state,
            pin: config.pin,
        }
    }

    /// Turn LED off
    pub(crate) fn off(&mut self) -> Result<(), P::Error> {
        self.set(false)
    }

    pub(crate) fn set(&mut self, on: bool) -> Result<(), P::Error> {
        let level = if on { self.on_state } else { !self.on_state };
        self.pin.set_state(level)?;
        self.state = on;
        Ok(())
    }

    pub(crate) fn is_on(&self) -> bool {
        self.state
    }
}

/// The indicator, TX and RX LEDs of the navi10
pub struct StatusLeds<P: OutputPin> {
    indicator: SingleLed<P>,
    tx: SingleLed<P>,
    rx: SingleLed<P>,
}

impl<P: OutputPin> StatusLeds<P> {
    pub fn new(light_config: LightConfig<P>) -> Self {
        Self {
            indicator: SingleLed::new(light_config.indicator),
            tx: SingleLed::new(light_config.tx),
            rx: SingleLed::new(light_config.rx),
        }
    }

    /// Boot hook: the TX and RX LEDs come up lit on the Pro Micro, turn them off.
    ///
    /// The indicator LED is not touched until a layer is toggled.
    pub fn init(&mut self) -> Result<(), P::Error> {
        let tx = self.tx.off();
        let rx = self.rx.off();
        info!("Status LEDs initialized");
        tx.and(rx)
    }

    /// Show whether a toggled layer is active
    pub fn set_indicator(&mut self, on: bool) -> Result<(), P::Error> {
        self.indicator.set(on)
    }

    /// Turn every status LED off.
    ///
    /// All three pins are driven even if one fails, the first error is returned.
    pub fn all_off(&mut self) -> Result<(), P::Error> {
        let tx = self.tx.off();
        let rx = self.rx.off();
        let indicator = self.indicator.off();
        tx.and(rx).and(indicator)
    }

    pub fn indicator_on(&self) -> bool {
        self.indicator.is_on()
    }

    /// Logical state of the (indicator, tx, rx) LEDs
    pub fn states(&self) -> (bool, bool, bool) {
        (self.indicator.is_on(), self.tx.is_on(), self.rx.is_on())
    }
}
