use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};
use navi10::Keyboard;
use navi10::config::{KeyboardConfig, LightConfig};
use navi10::layer::{Layer, LayerStack};
use navi10::layout::KEYMAP;
use navi10::tap_dance::{GestureSession, TAPPY_KEY, TapDanceState};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Electrical level of a lit LED on the navi10
pub fn lit() -> Transaction {
    Transaction::set(State::Low)
}

/// Electrical level of a dark LED on the navi10
pub fn dark() -> Transaction {
    Transaction::set(State::High)
}

/// Mocked status LED pins
pub struct TestPins {
    pub indicator: PinMock,
    pub tx: PinMock,
    pub rx: PinMock,
}

impl TestPins {
    /// Pins expecting the boot hook, then the given transactions
    pub fn new(indicator: &[Transaction], tx: &[Transaction], rx: &[Transaction]) -> Self {
        let boot = |after: &[Transaction]| -> Vec<Transaction> { [dark()].iter().chain(after).cloned().collect() };
        Self {
            indicator: PinMock::new(indicator),
            tx: PinMock::new(&boot(tx)),
            rx: PinMock::new(&boot(rx)),
        }
    }

    /// Check all expected pin transactions happened
    pub fn done(&mut self) {
        self.indicator.done();
        self.tx.done();
        self.rx.done();
    }
}

pub fn create_keyboard(pins: &TestPins) -> Keyboard<'static, PinMock> {
    let light_config = LightConfig::new(pins.indicator.clone(), pins.tx.clone(), pins.rx.clone());
    Keyboard::new(&KEYMAP, KeyboardConfig::new(light_config))
}

/// A complete gesture of the layer-select key: finished, then reset.
/// Returns the session the engine held in between.
pub fn tap_dance(keyboard: &mut Keyboard<'static, PinMock>, count: u8, pressed: bool) -> GestureSession {
    let state = TapDanceState::new(count, pressed);
    let session = keyboard
        .tap_dance_finished(TAPPY_KEY, &state)
        .expect("layer-select key is registered");
    keyboard.tap_dance_reset(TAPPY_KEY, session, &TapDanceState::new(count, false));
    session
}

pub fn is_active(keyboard: &Keyboard<'static, PinMock>, layer: Layer) -> bool {
    keyboard.keymap().is_layer_active(layer.into())
}
