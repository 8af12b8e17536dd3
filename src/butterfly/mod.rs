//! FFT butterfly stepper: the decimation-in-time regrouping of data items,
//! revealed one stage at a time.
//!
//! `stages` builds the orderings, `stepper` tracks which one is showing, and
//! `frame` turns both into what a canvas needs to draw.

pub mod frame;
pub mod size;
pub mod stages;
pub mod stepper;

pub use frame::{Connection, FrameSnapshot, NodeRole};
pub use size::FftSize;
pub use stages::{StageTable, Weave, bit_reversal_order, compute_stage_permutations, weave_blocks};
pub use stepper::{Phase, StepperState};
