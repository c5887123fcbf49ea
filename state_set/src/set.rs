//! Fixed-capacity set of boolean states with a cached primary index.
//!
//! # Examples
//!
//! ## Exclusive selection
//!
//! ```rust
//! use state_set::StateSet;
//!
//! let mut modes = StateSet::try_new(4).expect("failed to allocate state set");
//! modes.set_true(1, true);
//! modes.set_true(2, true);
//!
//! assert!(!modes.get_value(1));
//! assert!(modes.is_exactly_one_set());
//! assert_eq!(modes.primary_index(), Some(2));
//! ```
//!
//! ## Shared selection
//!
//! ```rust
//! use state_set::StateSet;
//!
//! let mut flags = StateSet::try_new(4).expect("failed to allocate state set");
//! flags.set_true(1, false);
//! flags.set_true(3, false);
//! assert_eq!(flags.all_true_indices(), vec![1, 3]);
//!
//! // Clearing the primary falls back to the lowest remaining state.
//! flags.set_value(3, false, false);
//! assert_eq!(flags.primary_index(), Some(1));
//! ```

use crate::StateSetError;
use crate::snapshot::Snapshot;
use bit_words::BitWords;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, StateSetError>;

/// Largest number of states a set can hold.
///
/// Keeps every index representable next to the "no primary" sentinel in an
/// 8-bit signed index.
pub const MAX_CAPACITY: usize = 254;

/// Smallest number of states a set can hold.
pub const MIN_CAPACITY: usize = 1;

/// Ascending iterator over the indices of true states.
pub type TrueIndices<'a> = bit_words::Ones<'a>;

/// Clamps a requested capacity into `MIN_CAPACITY..=MAX_CAPACITY`.
///
/// ```
/// use state_set::clamp_capacity;
///
/// assert_eq!(clamp_capacity(0), 1);
/// assert_eq!(clamp_capacity(300), 254);
/// ```
pub const fn clamp_capacity(requested: usize) -> usize {
    if requested < MIN_CAPACITY {
        MIN_CAPACITY
    } else if requested > MAX_CAPACITY {
        MAX_CAPACITY
    } else {
        requested
    }
}

#[derive(Clone)]
pub struct StateSet {
    pub(crate) bits: BitWords,
    pub(crate) primary: Option<u8>,
    pub(crate) snapshot: Snapshot,
}

impl StateSet {
    /// Creates a set of `capacity` states, all false.
    ///
    /// The capacity is clamped into `1..=254`. Both the live storage and the
    /// snapshot buffer are allocated up front; if either allocation is
    /// refused the error is returned and nothing is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_set::StateSet;
    ///
    /// let set = StateSet::try_new(0).unwrap();
    /// assert_eq!(set.capacity(), 1);
    ///
    /// let set = StateSet::try_new(300).unwrap();
    /// assert_eq!(set.capacity(), 254);
    /// assert_eq!(set.storage_size(), 32);
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self> {
        let clamped = clamp_capacity(capacity);
        if clamped != capacity {
            log::debug!("state capacity {} clamped to {}", capacity, clamped);
        }
        let bits = BitWords::try_zeroed(clamped)?;
        let snapshot = Snapshot::try_zeroed(clamped)?;
        Ok(Self {
            bits,
            primary: None,
            snapshot,
        })
    }

    /// Creates a set of `capacity` states, degrading to an inert set when
    /// allocation fails.
    ///
    /// Check [`StateSet::is_usable`] before relying on the result.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(set) => set,
            Err(err) => {
                log::warn!("state set degraded to inert: {}", err);
                Self::inert()
            }
        }
    }

    /// A zero-capacity set on which every call is a no-op.
    pub const fn inert() -> Self {
        Self {
            bits: BitWords::empty(),
            primary: None,
            snapshot: Snapshot::empty(),
        }
    }

    pub fn is_usable(&self) -> bool {
        !self.bits.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bits.bit_len()
    }

    /// Number of storage words backing the set.
    pub fn storage_size(&self) -> usize {
        self.bits.word_len()
    }

    /// Packed storage, index 0 in the least significant bit of word 0.
    pub fn as_words(&self) -> &[u8] {
        self.bits.as_words()
    }

    #[inline]
    fn is_valid_index(&self, index: usize) -> bool {
        self.is_usable() && index < self.capacity()
    }

    #[inline]
    fn set_bit(&mut self, index: usize, value: bool) {
        if self.is_valid_index(index) {
            // bounds checked above
            let _ = self.bits.set(index, value);
        }
    }

    #[inline]
    fn get_bit(&self, index: usize) -> bool {
        self.is_valid_index(index) && self.bits.get(index) == Some(true)
    }

    fn mark_primary(&mut self, index: usize) {
        self.primary = u8::try_from(index).ok();
    }

    pub(crate) fn recompute_primary(&mut self) {
        self.primary = self.first_true_index().and_then(|i| u8::try_from(i).ok());
    }

    fn clear_others(&mut self, index: usize) {
        if self.is_usable() {
            self.bits.retain_only(index);
        }
    }

    //
    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Sets state `index` to true and makes it the primary index.
    ///
    /// With `exclusive` every other state is cleared.
    pub fn set_true(&mut self, index: usize, exclusive: bool) {
        self.set_value(index, true, exclusive);
    }

    /// Sets state `index` to `value`.
    ///
    /// Clearing the primary index moves it to the lowest remaining true
    /// state, or to none.
    pub fn set_value(&mut self, index: usize, value: bool, exclusive: bool) {
        if !self.is_valid_index(index) {
            return;
        }
        self.set_bit(index, value);
        if value {
            self.mark_primary(index);
            if exclusive {
                self.clear_others(index);
            }
        } else if self.primary_index() == Some(index) {
            self.recompute_primary();
        }
    }

    /// Flips state `index`. Turning a state on is always exclusive.
    pub fn toggle(&mut self, index: usize) {
        if !self.is_valid_index(index) {
            return;
        }
        let now = !self.get_bit(index);
        self.set_bit(index, now);
        if now {
            self.mark_primary(index);
            self.clear_others(index);
        } else if self.primary_index() == Some(index) {
            self.recompute_primary();
        }
    }

    pub fn reset_all(&mut self) {
        if !self.is_usable() {
            return;
        }
        self.bits.fill(false);
        self.primary = None;
    }

    /// Sets every state to `value`; the primary index becomes 0 or none.
    pub fn set_all(&mut self, value: bool) {
        if !self.is_usable() {
            return;
        }
        self.bits.fill(value);
        self.primary = value.then_some(0);
    }

    /// Leaves only state 0 set.
    pub fn set_default(&mut self) {
        if !self.is_usable() {
            return;
        }
        self.reset_all();
        self.set_bit(0, true);
        self.primary = Some(0);
    }

    /// Resets the whole set, then sets `start..=end` to `value`.
    ///
    /// States outside the range do not survive: the reset is part of the
    /// operation. `end` is clamped to the last index and a `start` past the
    /// last index leaves the set untouched. When `value` is true the primary
    /// index becomes `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_set::StateSet;
    ///
    /// let mut set = StateSet::try_new(10).unwrap();
    /// set.set_true(9, true);
    /// set.set_range(2, 5, true);
    ///
    /// assert!(!set.get_value(9));
    /// assert_eq!(set.to_bit_string(), "0011110000");
    /// ```
    pub fn set_range(&mut self, start: usize, end: usize, value: bool) {
        if !self.is_usable() || start >= self.capacity() {
            return;
        }
        let end = end.min(self.capacity() - 1);
        log::trace!("resetting states before range {}..={}", start, end);
        self.reset_all();
        for i in start..=end {
            self.set_bit(i, value);
            if value && self.primary.is_none() {
                self.mark_primary(i);
            }
        }
    }

    /// Flips every state; the primary index becomes the lowest true state.
    pub fn invert_all(&mut self) {
        if !self.is_usable() {
            return;
        }
        self.bits.invert();
        self.recompute_primary();
    }

    //
    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn get_value(&self, index: usize) -> bool {
        self.get_bit(index)
    }

    pub fn primary_index(&self) -> Option<usize> {
        self.primary.map(usize::from)
    }

    pub fn first_true_index(&self) -> Option<usize> {
        self.find(true)
    }

    /// Lowest index whose state equals `value`.
    pub fn find(&self, value: bool) -> Option<usize> {
        self.bits.position(value)
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_any_set(&self) -> bool {
        self.first_true_index().is_some()
    }

    pub fn is_exactly_one_set(&self) -> bool {
        self.count() == 1
    }

    pub fn iter_true(&self) -> TrueIndices<'_> {
        self.bits.iter_ones()
    }

    /// Indices of every true state, ascending.
    ///
    /// The vector is sized to exactly the number of true states and does not
    /// allocate when there are none.
    pub fn all_true_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let count = self.count();
        if count == 0 {
            return indices;
        }
        indices.reserve_exact(count);
        indices.extend(self.iter_true());
        indices
    }

    //
    // -------------------------------------------------------------------------
    // Copy
    // -------------------------------------------------------------------------

    /// Copies the states and primary index of `other`.
    ///
    /// Both sets must be usable and of equal capacity; otherwise `self` is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_set::{StateSet, StateSetError};
    ///
    /// let mut source = StateSet::try_new(8).unwrap();
    /// source.set_true(5, true);
    ///
    /// let mut target = StateSet::try_new(8).unwrap();
    /// target.copy_from(&source).unwrap();
    /// assert_eq!(target, source);
    ///
    /// let mut other = StateSet::try_new(9).unwrap();
    /// assert_eq!(
    ///     other.copy_from(&source),
    ///     Err(StateSetError::CapacityMismatch { expected: 9, found: 8 })
    /// );
    /// ```
    pub fn copy_from(&mut self, other: &StateSet) -> Result<()> {
        if !self.is_usable() || !other.is_usable() {
            log::debug!("copy between unusable state sets refused");
            return Err(StateSetError::Unusable);
        }
        if self.capacity() != other.capacity() {
            log::debug!(
                "copy refused: capacity {} != {}",
                self.capacity(),
                other.capacity()
            );
            return Err(StateSetError::CapacityMismatch {
                expected: self.capacity(),
                found: other.capacity(),
            });
        }
        self.bits.copy_from(&other.bits)?;
        self.primary = other.primary;
        Ok(())
    }
}

impl Default for StateSet {
    fn default() -> Self {
        Self::inert()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.primary == other.primary
    }
}

impl Eq for StateSet {}

impl core::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateSet")
            .field("capacity", &self.capacity())
            .field("states", &format_args!("{}", self))
            .field("primary", &self.primary)
            .finish()
    }
}
