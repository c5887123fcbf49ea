use bit_words::BitWordsError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSetError {
    #[cfg_attr(
        feature = "std",
        error("failed to allocate {words} words of state storage")
    )]
    Allocation { words: usize },

    #[cfg_attr(
        feature = "std",
        error("capacity mismatch: expected {expected}, found {found}")
    )]
    CapacityMismatch { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("state set is not usable"))]
    Unusable,

    #[cfg_attr(
        feature = "std",
        error("invalid state character {byte:#04x} at position {position}")
    )]
    InvalidCharacter { position: usize, byte: u8 },

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Storage(#[cfg_attr(feature = "std", source)] BitWordsError),
}

impl From<BitWordsError> for StateSetError {
    fn from(err: BitWordsError) -> Self {
        match err {
            BitWordsError::Allocation { words } => StateSetError::Allocation { words },
            other => StateSetError::Storage(other),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StateSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateSetError::Allocation { words } => {
                write!(f, "failed to allocate {} words of state storage", words)
            }
            StateSetError::CapacityMismatch { expected, found } => {
                write!(f, "capacity mismatch: expected {}, found {}", expected, found)
            }
            StateSetError::Unusable => write!(f, "state set is not usable"),
            StateSetError::InvalidCharacter { position, byte } => {
                write!(
                    f,
                    "invalid state character {:#04x} at position {}",
                    byte, position
                )
            }
            StateSetError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}
