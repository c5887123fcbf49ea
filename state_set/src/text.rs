//! Text forms of a [`StateSet`]: the `'0'`/`'1'` state string and the
//! primary index label.
//!
//! The buffer-based writers never overflow the caller's buffer. Output that
//! does not fit is dropped and the result is always NUL-terminated.
//!
//! ```rust
//! use state_set::StateSet;
//!
//! let mut set = StateSet::try_new(10).unwrap();
//! set.set_true(3, true);
//!
//! let mut buf = [0u8; 6];
//! let written = set.serialize(&mut buf);
//! assert_eq!(written, 5);
//! assert_eq!(&buf, b"00010\0");
//!
//! let mut label = [0u8; 32];
//! let written = set.index_description(&mut label);
//! assert_eq!(&label[..written], b"3 assigned");
//! ```

use crate::{StateSet, StateSetError};
use core::fmt::{self, Write};

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Appended to the primary index in its label.
pub const ASSIGNED_SUFFIX: &str = " assigned";

/// Label of a set without a primary index.
pub const UNASSIGNED: &str = "- unassigned";

/// Writes into a byte buffer, keeping the last byte for the terminator.
struct TerminatedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> TerminatedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Option<Self> {
        if buf.is_empty() {
            return None;
        }
        Some(Self { buf, len: 0 })
    }

    fn finish(self) -> usize {
        self.buf[self.len] = 0;
        self.len
    }
}

impl Write for TerminatedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - 1 - self.len;
        let n = s.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

/// Display adapter for the primary index label.
///
/// ```
/// use state_set::StateSet;
///
/// let mut set = StateSet::try_new(4).unwrap();
/// assert_eq!(set.index_label().to_string(), "- unassigned");
/// set.set_true(2, true);
/// assert_eq!(format!("[{}]", set.index_label()), "[2 assigned]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexLabel {
    primary: Option<usize>,
}

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primary {
            Some(index) => write!(f, "{}{}", index, ASSIGNED_SUFFIX),
            None => f.write_str(UNASSIGNED),
        }
    }
}

impl StateSet {
    /// Buffer size `serialize` needs for the whole set, terminator included.
    pub fn serialized_size(&self) -> usize {
        self.capacity() + 1
    }

    /// Writes one `'1'`/`'0'` per state, index 0 first, then a NUL.
    ///
    /// Returns the number of state characters written. Output is truncated to
    /// `buf.len() - 1` characters; an empty buffer is left untouched.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let Some(mut writer) = TerminatedWriter::new(buf) else {
            return 0;
        };
        // the writer truncates instead of failing
        let _ = write!(writer, "{}", self);
        writer.finish()
    }

    /// Writes the primary index label (`"3 assigned"` or `"- unassigned"`)
    /// followed by a NUL, truncated to fit.
    ///
    /// Returns the number of label bytes written.
    pub fn index_description(&self, buf: &mut [u8]) -> usize {
        let Some(mut writer) = TerminatedWriter::new(buf) else {
            return 0;
        };
        let _ = write!(writer, "{}", self.index_label());
        writer.finish()
    }

    pub fn index_label(&self) -> IndexLabel {
        IndexLabel {
            primary: self.primary_index(),
        }
    }

    pub fn to_bit_string(&self) -> String {
        self.to_string()
    }

    pub fn describe_index(&self) -> String {
        self.index_label().to_string()
    }

    /// Loads states from a `'0'`/`'1'` string such as `serialize` produces.
    ///
    /// Reading stops at a NUL byte or after `capacity` characters. States not
    /// covered by the input are cleared and the primary index becomes the
    /// lowest true state. Any other character is rejected and the set is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_set::{StateSet, StateSetError};
    ///
    /// let mut set = StateSet::try_new(6).unwrap();
    /// set.load_serialized(b"0101\0").unwrap();
    /// assert_eq!(set.to_bit_string(), "010100");
    /// assert_eq!(set.primary_index(), Some(1));
    ///
    /// assert_eq!(
    ///     set.load_serialized(b"01x"),
    ///     Err(StateSetError::InvalidCharacter { position: 2, byte: b'x' })
    /// );
    /// assert_eq!(set.to_bit_string(), "010100");
    /// ```
    pub fn load_serialized(&mut self, input: &[u8]) -> Result<(), StateSetError> {
        if !self.is_usable() {
            return Err(StateSetError::Unusable);
        }
        let digits = input
            .iter()
            .take_while(|&&byte| byte != 0)
            .take(self.capacity());

        if let Some((position, &byte)) = digits
            .clone()
            .enumerate()
            .find(|&(_, &byte)| byte != b'0' && byte != b'1')
        {
            log::debug!("rejected state string: {:#04x} at {}", byte, position);
            return Err(StateSetError::InvalidCharacter { position, byte });
        }

        self.bits.fill(false);
        for (index, &byte) in digits.enumerate() {
            if byte == b'1' {
                self.bits.set(index, true)?;
            }
        }
        self.recompute_primary();
        Ok(())
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.capacity() {
            f.write_char(if self.get_value(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
