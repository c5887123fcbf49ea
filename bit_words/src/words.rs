//! Fixed-length bit buffer grouped into byte-sized words.
//!
//! # Examples
//!
//! ```rust
//! use bit_words::BitWords;
//!
//! let mut bits = BitWords::try_zeroed(12).expect("failed to allocate words");
//! bits.fill(true);
//!
//! // Only the 12 addressable bits are set; the last word's padding stays clear.
//! assert_eq!(bits.as_words(), &[0xFF, 0x0F]);
//!
//! bits.invert();
//! assert_eq!(bits.count_ones(), 0);
//! ```

use crate::BitWordsError;
use crate::bit_ops::{self, WORD_BITS, tail_mask, words_for};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, BitWordsError>;

/// Owned buffer of `bit_len` bits, stored least-significant bit first in
/// `ceil(bit_len / 8)` words.
///
/// Bits past `bit_len` in the last word are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitWords {
    words: Vec<u8>,
    bits: usize,
}

impl BitWords {
    /// Allocates a zeroed buffer of `bits` bits.
    ///
    /// The allocation is fallible: an allocator refusal is reported as
    /// [`BitWordsError::Allocation`] instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_words::BitWords;
    ///
    /// let bits = BitWords::try_zeroed(17).unwrap();
    /// assert_eq!(bits.bit_len(), 17);
    /// assert_eq!(bits.word_len(), 3);
    /// ```
    pub fn try_zeroed(bits: usize) -> Result<Self> {
        let count = words_for(bits);
        let mut words = Vec::new();
        if words.try_reserve_exact(count).is_err() {
            log::warn!("allocation of {} words for {} bits refused", count, bits);
            return Err(BitWordsError::Allocation { words: count });
        }
        words.resize(count, 0);
        Ok(Self { words, bits })
    }

    /// A zero-length buffer that owns no allocation.
    pub const fn empty() -> Self {
        Self {
            words: Vec::new(),
            bits: 0,
        }
    }

    pub fn bit_len(&self) -> usize {
        self.bits
    }

    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn as_words(&self) -> &[u8] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bits {
            return None;
        }
        Some(bit_ops::get_bit(&self.words, index))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.bits {
            return Err(BitWordsError::OutOfBounds {
                index,
                len: self.bits,
            });
        }
        bit_ops::set_bit(&mut self.words, index, value);
        Ok(())
    }

    /// Sets every addressable bit to `value`.
    pub fn fill(&mut self, value: bool) {
        let word = if value { u8::MAX } else { 0 };
        self.words.iter_mut().for_each(|w| *w = word);
        self.mask_tail();
    }

    /// Flips every addressable bit.
    pub fn invert(&mut self) {
        self.words.iter_mut().for_each(|w| *w = !*w);
        self.mask_tail();
    }

    /// Clears every bit except `index`. An out-of-range `index` clears all.
    pub fn retain_only(&mut self, index: usize) {
        let keep = if index < self.bits {
            bit_ops::word_index(index)
        } else {
            usize::MAX
        };
        for (i, word) in self.words.iter_mut().enumerate() {
            if i == keep {
                *word &= bit_ops::bit_mask(index);
            } else {
                *word = 0;
            }
        }
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Lowest index whose bit equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_words::BitWords;
    ///
    /// let mut bits = BitWords::try_zeroed(10).unwrap();
    /// bits.fill(true);
    /// assert_eq!(bits.position(false), None);
    /// bits.set(9, false).unwrap();
    /// assert_eq!(bits.position(false), Some(9));
    /// ```
    pub fn position(&self, value: bool) -> Option<usize> {
        let last = self.words.len().checked_sub(1)?;
        self.words.iter().enumerate().find_map(|(i, &word)| {
            let mut probe = if value { word } else { !word };
            if i == last {
                probe &= tail_mask(self.bits);
            }
            (probe != 0).then(|| i * WORD_BITS + probe.trailing_zeros() as usize)
        })
    }

    /// Overwrites this buffer with `other`'s words.
    pub fn copy_from(&mut self, other: &BitWords) -> Result<()> {
        if other.bits != self.bits {
            return Err(BitWordsError::LengthMismatch {
                expected: self.bits,
                found: other.bits,
            });
        }
        self.words.copy_from_slice(&other.words);
        Ok(())
    }

    pub fn iter_ones(&self) -> Ones<'_> {
        Ones::new(self)
    }

    fn mask_tail(&mut self) {
        let mask = tail_mask(self.bits);
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }
}

/// Ascending iterator over the set bits of a [`BitWords`].
pub struct Ones<'a> {
    words: &'a [u8],
    word: usize,
    current: u8,
    remaining: usize,
}

impl<'a> Ones<'a> {
    fn new(bits: &'a BitWords) -> Self {
        Self {
            words: &bits.words,
            word: 0,
            current: bits.words.first().copied().unwrap_or(0),
            remaining: bits.count_ones(),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // drop lowest set bit
                self.current &= self.current - 1;
                self.remaining -= 1;
                return Some(self.word * WORD_BITS + bit);
            }
            if self.word + 1 >= self.words.len() {
                return None;
            }
            self.word += 1;
            self.current = self.words[self.word];
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ones<'_> {}

impl core::iter::FusedIterator for Ones<'_> {}
