//! # bit_words
//!
//! A `no_std` compatible, fixed-length buffer of byte-sized words with
//! bit-level access.
//!
//! ```rust
//! use bit_words::BitWords;
//!
//! let mut bits = BitWords::try_zeroed(10).expect("failed to allocate words");
//! bits.set(3, true).unwrap();
//! bits.set(9, true).unwrap();
//!
//! assert_eq!(bits.word_len(), 2);
//! assert_eq!(bits.get(3), Some(true));
//! assert_eq!(bits.count_ones(), 2);
//! assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![3, 9]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bit_ops;
pub mod error;
pub mod words;

pub use bit_ops::WORD_BITS;
pub use error::BitWordsError;
pub use words::{BitWords, Ones};
