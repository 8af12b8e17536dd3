//! Transform sizes offered by the stepper's size selector.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ButterflyError;

/// The transform sizes a butterfly session can be built for.
///
/// Serialized as the bare point count (`8`, not `"N8"`) so page-side config
/// and snapshots stay plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum FftSize {
    N4,
    N8,
    N16,
    N32,
}

impl FftSize {
    /// Every selectable size, smallest first.
    pub const ALL: [FftSize; 4] = [FftSize::N4, FftSize::N8, FftSize::N16, FftSize::N32];

    /// Number of data points.
    pub fn points(self) -> usize {
        match self {
            FftSize::N4 => 4,
            FftSize::N8 => 8,
            FftSize::N16 => 16,
            FftSize::N32 => 32,
        }
    }

    /// Number of butterfly stages, `log2(points)`.
    pub fn log2(self) -> u32 {
        self.points().trailing_zeros()
    }

    /// Node numbers are unreadable at 32 points, so they are only drawn below that.
    pub fn shows_index_labels(self) -> bool {
        self.points() < 32
    }
}

impl Default for FftSize {
    fn default() -> Self {
        FftSize::N8
    }
}

impl TryFrom<usize> for FftSize {
    type Error = ButterflyError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            4 => Ok(FftSize::N4),
            8 => Ok(FftSize::N8),
            16 => Ok(FftSize::N16),
            32 => Ok(FftSize::N32),
            n if n >= 2 && n.is_power_of_two() => Err(ButterflyError::UnsupportedSize { size }),
            _ => Err(ButterflyError::InvalidSize { size }),
        }
    }
}

impl From<FftSize> for usize {
    fn from(size: FftSize) -> Self {
        size.points()
    }
}

impl fmt::Display for FftSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}
