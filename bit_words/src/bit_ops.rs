/// Width of one storage word.
pub const WORD_BITS: usize = 8;

/// Word holding bit `pos`.
#[inline(always)]
pub const fn word_index(pos: usize) -> usize {
    pos / WORD_BITS
}

/// Mask selecting bit `pos` inside its word.
#[inline(always)]
pub const fn bit_mask(pos: usize) -> u8 {
    1 << (pos % WORD_BITS)
}

/// Number of words needed for `bits` bits.
#[inline(always)]
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask of the addressable bits in the last word of a `bits`-long buffer.
///
/// A buffer whose length is a multiple of the word width keeps its whole
/// last word, so the mask is `0xFF`.
#[inline(always)]
pub const fn tail_mask(bits: usize) -> u8 {
    match bits % WORD_BITS {
        0 => u8::MAX,
        used => (1u8 << used) - 1,
    }
}

pub fn set_bit(slice: &mut [u8], pos: usize, value: bool) {
    let word = word_index(pos);
    if value {
        slice[word] |= bit_mask(pos);
    } else {
        slice[word] &= !bit_mask(pos);
    }
}

pub fn get_bit(slice: &[u8], pos: usize) -> bool {
    (slice[word_index(pos)] & bit_mask(pos)) != 0
}
