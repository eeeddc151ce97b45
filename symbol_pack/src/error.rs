#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum PackError {
    #[cfg_attr(
        feature = "std",
        error("Bit width must be in the range 1..=32, got {0}")
    )]
    InvalidBitWidth(u32),

    #[cfg_attr(feature = "std", error("Value {value} does not fit in {bits} bits"))]
    OutOfRange { value: u32, bits: u32 },

    #[cfg_attr(
        feature = "std",
        error("Insufficient bytes: need {needed}, have {available}")
    )]
    InsufficientBytes { needed: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("Unknown sanitize policy {0:?} (expected wrap or skip)")
    )]
    UnknownPolicy(String),

    /// Byte sink failure (only available in std builds)
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackError::InvalidBitWidth(n) => {
                write!(f, "Bit width must be in the range 1..=32, got {}", n)
            }
            PackError::OutOfRange { value, bits } => {
                write!(f, "Value {} does not fit in {} bits", value, bits)
            }
            PackError::InsufficientBytes { needed, available } => {
                write!(f, "Insufficient bytes: need {}, have {}", needed, available)
            }
            PackError::UnknownPolicy(name) => {
                write!(f, "Unknown sanitize policy {:?} (expected wrap or skip)", name)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, PackError>;
