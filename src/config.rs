//! Session settings handed over by the page, as JSON.

use serde::{Deserialize, Serialize};

use crate::butterfly::{FftSize, StepperState};
use crate::error::SimError;

/// Initial settings for a butterfly session. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    /// Transform size selected when the sim loads.
    pub fft_size: FftSize,
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn stepper(&self) -> StepperState {
        StepperState::new(self.fft_size)
    }
}
