#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitWordsError {
    #[cfg_attr(feature = "std", error("failed to allocate {words} storage words"))]
    Allocation { words: usize },

    #[cfg_attr(feature = "std", error("Bit {index} is out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("length mismatch: expected {expected} bits, found {found}")
    )]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitWordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitWordsError::Allocation { words } => {
                write!(f, "failed to allocate {} storage words", words)
            }
            BitWordsError::OutOfBounds { index, len } => {
                write!(f, "Bit {} is out of bounds for length {}", index, len)
            }
            BitWordsError::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "length mismatch: expected {} bits, found {}",
                    expected, found
                )
            }
        }
    }
}
