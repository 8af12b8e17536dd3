use std::fmt;

#[derive(Debug)]
pub enum SimError {
    Butterfly(ButterflyError),
    Config(serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButterflyError {
    /// Not a power of two, or smaller than 2.
    InvalidSize { size: usize },
    /// A power of two the stepper does not offer.
    UnsupportedSize { size: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Butterfly(e) => write!(f, "Butterfly error: {e}"),
            SimError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Butterfly(e) => Some(e),
            SimError::Config(e) => Some(e),
        }
    }
}

impl fmt::Display for ButterflyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButterflyError::InvalidSize { size } => {
                write!(f, "Invalid transform size {size}: expected a power of two >= 2")
            }
            ButterflyError::UnsupportedSize { size } => {
                write!(f, "Unsupported transform size {size}: expected one of 4, 8, 16, 32")
            }
        }
    }
}

impl std::error::Error for ButterflyError {}

impl From<ButterflyError> for SimError {
    fn from(e: ButterflyError) -> Self {
        SimError::Butterfly(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Config(e)
    }
}
