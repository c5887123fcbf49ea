use crate::StateSet;
use bit_words::{BitWords, BitWordsError};

/// Saved copy of a set's states and primary index.
///
/// Allocated zeroed together with the live storage, so restoring before any
/// save yields an all-false set with no primary.
#[derive(Debug, Clone, Default)]
pub(crate) struct Snapshot {
    bits: BitWords,
    primary: Option<u8>,
    taken: bool,
}

impl Snapshot {
    pub(crate) fn try_zeroed(capacity: usize) -> Result<Self, BitWordsError> {
        Ok(Self {
            bits: BitWords::try_zeroed(capacity)?,
            primary: None,
            taken: false,
        })
    }

    pub(crate) const fn empty() -> Self {
        Self {
            bits: BitWords::empty(),
            primary: None,
            taken: false,
        }
    }
}

impl StateSet {
    /// Saves the current states and primary index, replacing any earlier
    /// snapshot.
    pub fn save(&mut self) {
        if !self.is_usable() {
            return;
        }
        match self.snapshot.bits.copy_from(&self.bits) {
            Ok(()) => {
                self.snapshot.primary = self.primary;
                self.snapshot.taken = true;
                log::trace!("saved {} states", self.capacity());
            }
            Err(err) => log::debug!("snapshot save skipped: {}", err),
        }
    }

    /// Restores the states and primary index captured by the last
    /// [`save`](StateSet::save).
    ///
    /// Without an earlier save this clears the set.
    pub fn restore(&mut self) {
        if !self.is_usable() {
            return;
        }
        match self.bits.copy_from(&self.snapshot.bits) {
            Ok(()) => {
                self.primary = self.snapshot.primary;
                log::trace!("restored {} states", self.capacity());
            }
            Err(err) => log::debug!("snapshot restore skipped: {}", err),
        }
    }

    /// Whether [`save`](StateSet::save) has been called on this set.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.taken
    }
}
