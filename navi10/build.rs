use std::path::{Path, PathBuf};
use std::{env, fs};

use const_gen::*;
use serde::Deserialize;

/// Rows and columns of the navi10 pcb, the keymap in `src/layout.rs` is written for this matrix
const NAVI10_MATRIX: (usize, usize) = (4, 3);

#[derive(Deserialize)]
struct KeyboardTomlConfig {
    keyboard: KeyboardInfo,
    matrix: MatrixConfig,
    tap_dance: TapDanceConfig,
    light: LightConfig,
}

#[derive(Deserialize)]
struct KeyboardInfo {
    name: String,
    product_name: String,
}

#[derive(Deserialize)]
struct MatrixConfig {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct TapDanceConfig {
    tapping_term_ms: u64,
}

#[derive(Deserialize)]
struct LightConfig {
    low_active: bool,
    indicator_pin: String,
    tx_pin: String,
    rx_pin: String,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Use the bundled keyboard.toml unless another one is given
    let toml_path = env::var("KEYBOARD_TOML_PATH").map(PathBuf::from).unwrap_or_else(|_| {
        Path::new(&env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo")).join("keyboard.toml")
    });
    println!("cargo:rerun-if-changed={}", toml_path.display());

    let config_str = fs::read_to_string(&toml_path).expect("Failed to read keyboard.toml");
    let config: KeyboardTomlConfig = toml::from_str(&config_str).expect("Failed to parse keyboard.toml\n");

    if (config.matrix.rows, config.matrix.cols) != NAVI10_MATRIX {
        panic!(
            "keyboard.toml: navi10 keymap needs a {}x{} matrix, got {}x{}",
            NAVI10_MATRIX.0, NAVI10_MATRIX.1, config.matrix.rows, config.matrix.cols
        );
    }
    if config.tap_dance.tapping_term_ms == 0 {
        panic!("keyboard.toml: tap_dance.tapping_term_ms must be greater than 0");
    }

    let constants = get_constants_str(&config);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(config: &KeyboardTomlConfig) -> String {
    let keyboard_name: &str = &config.keyboard.name;
    let product_name: &str = &config.keyboard.product_name;
    let indicator_pin: &str = &config.light.indicator_pin;
    let tx_pin: &str = &config.light.tx_pin;
    let rx_pin: &str = &config.light.rx_pin;
    [
        const_declaration!(pub(crate) KEYBOARD_NAME = keyboard_name),
        const_declaration!(pub(crate) PRODUCT_NAME = product_name),
        const_declaration!(pub ROW = config.matrix.rows),
        const_declaration!(pub COL = config.matrix.cols),
        const_declaration!(pub(crate) TAPPING_TERM_MS = config.tap_dance.tapping_term_ms),
        const_declaration!(pub(crate) LED_LOW_ACTIVE = config.light.low_active),
        const_declaration!(pub(crate) INDICATOR_LED_PIN = indicator_pin),
        const_declaration!(pub(crate) TX_LED_PIN = tx_pin),
        const_declaration!(pub(crate) RX_LED_PIN = rx_pin),
    ]
    .join("\n")
}
