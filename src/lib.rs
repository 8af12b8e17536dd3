pub mod butterfly;
pub mod config;
pub mod error;

pub use butterfly::compute_stage_permutations;

use crate::butterfly::{FftSize, FrameSnapshot, StepperState};
use crate::config::SimConfig;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the microsim-core version string.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

/// WASM-exposed: every stage ordering of an `n`-point transform as nested arrays,
/// identity first, bit-reversed last.
#[wasm_bindgen(js_name = stagePermutations)]
pub fn stage_permutations(n: u32) -> Result<JsValue, JsValue> {
    let orders = compute_stage_permutations(n as usize).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&orders).map_err(js_err)
}

/// WASM-exposed butterfly session, owned by the page and driven by its
/// Start/Next Step button, Reset button and size radio.
#[wasm_bindgen]
pub struct ButterflySim {
    state: StepperState,
}

#[wasm_bindgen]
impl ButterflySim {
    #[wasm_bindgen(constructor)]
    pub fn new(fft_size: u32) -> Result<ButterflySim, JsValue> {
        let size = FftSize::try_from(fft_size as usize).map_err(js_err)?;
        Ok(ButterflySim {
            state: StepperState::new(size),
        })
    }

    /// Build a session from a JSON config such as `{"fftSize": 16}`.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<ButterflySim, JsValue> {
        let config = SimConfig::from_json(json).map_err(js_err)?;
        Ok(ButterflySim {
            state: config.stepper(),
        })
    }

    /// Returns whether the stage moved.
    #[wasm_bindgen(js_name = nextStep)]
    pub fn next_step(&mut self) -> bool {
        self.state.advance()
    }

    pub fn reset(&mut self) {
        self.state.restart();
    }

    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, fft_size: u32) -> Result<(), JsValue> {
        let size = FftSize::try_from(fft_size as usize).map_err(js_err)?;
        self.state.reset(size);
        Ok(())
    }

    #[wasm_bindgen(js_name = currentStage)]
    pub fn current_stage(&self) -> u32 {
        self.state.current_stage() as u32
    }

    #[wasm_bindgen(js_name = maxStage)]
    pub fn max_stage(&self) -> u32 {
        self.state.max_stage() as u32
    }

    #[wasm_bindgen(js_name = isDone)]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    #[wasm_bindgen(js_name = buttonLabel)]
    pub fn button_label(&self) -> String {
        self.state.button_label().to_string()
    }

    pub fn title(&self) -> String {
        self.state.title()
    }

    /// Frame data for the render callback, as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&FrameSnapshot::capture(&self.state)).map_err(js_err)
    }
}
