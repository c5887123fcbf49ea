//! # state_set
//!
//! A `no_std` compatible set of boolean states packed into a bit array, with
//! optional one-hot (exclusive) semantics, snapshot/restore and string
//! serialization.
//!
//! ```rust
//! use state_set::StateSet;
//!
//! let mut modes = StateSet::try_new(10).expect("failed to allocate state set");
//!
//! // Selecting a mode exclusively clears every other one.
//! modes.set_true(3, true);
//! assert_eq!(modes.to_bit_string(), "0001000000");
//! assert_eq!(modes.describe_index(), "3 assigned");
//!
//! modes.toggle(3);
//! assert_eq!(modes.describe_index(), "- unassigned");
//! ```
//!
//! ## Snapshots
//!
//! ```rust
//! use state_set::StateSet;
//!
//! let mut modes = StateSet::try_new(10).expect("failed to allocate state set");
//! modes.set_range(2, 5, true);
//! modes.save();
//!
//! modes.set_true(7, true);
//! assert_eq!(modes.to_bit_string(), "0000000100");
//!
//! modes.restore();
//! assert_eq!(modes.to_bit_string(), "0011110000");
//! assert_eq!(modes.primary_index(), Some(2));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::StateSetError;

mod snapshot;
pub mod set;
pub mod text;

pub use set::{MAX_CAPACITY, MIN_CAPACITY, StateSet, TrueIndices, clamp_capacity};
pub use text::{ASSIGNED_SUFFIX, IndexLabel, UNASSIGNED};
