//! Input sanitization for raw card-field text.
//!
//! Keystrokes arrive with separators, stray letters, and whatever else the
//! user pasted. `sanitize` reduces that to a digit-only sequence capped at
//! [`MAX_PAN_DIGITS`], which is the form every other stage of the engine
//! works on.

use crate::network::MAX_PAN_DIGITS;
use std::fmt;
use zeroize::Zeroize;

/// A digit-only card number extracted from raw field text.
///
/// Digits are stored as values 0-9 in a fixed-size array that is zeroed
/// on drop, so a full PAN never lingers in freed memory. `Debug` output
/// is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct SanitizedNumber {
    digits: [u8; MAX_PAN_DIGITS],
    len: u8,
}

impl SanitizedNumber {
    /// Returns the digits as values 0-9.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if no digits survived sanitization.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first digit, if any. Classification dispatches on this.
    #[inline]
    pub fn leading_digit(&self) -> Option<u8> {
        self.digits().first().copied()
    }

    /// Renders the digits as a plain string.
    ///
    /// This exposes the full number; it exists for the display pipeline,
    /// not for logging. Use `Debug` output where masking is wanted.
    #[inline]
    pub fn to_digit_string(&self) -> String {
        self.digits().iter().map(|&d| (b'0' + d) as char).collect()
    }
}

impl fmt::Debug for SanitizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len as usize;
        let mut masked = String::with_capacity(len);
        for (i, &d) in self.digits().iter().enumerate() {
            if len > 4 && i < len - 4 {
                masked.push('*');
            } else {
                masked.push((b'0' + d) as char);
            }
        }
        f.debug_struct("SanitizedNumber")
            .field("digits", &masked)
            .field("len", &len)
            .finish()
    }
}

impl Drop for SanitizedNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Strips every non-digit character and truncates to [`MAX_PAN_DIGITS`].
///
/// Pure and total: any input produces a `SanitizedNumber`, possibly empty.
///
/// # Example
///
/// ```
/// use card_input::sanitize;
///
/// let number = sanitize("4111-1111 1111x1111");
/// assert_eq!(number.len(), 16);
/// assert_eq!(number.to_digit_string(), "4111111111111111");
///
/// // Truncated past 19 digits
/// let number = sanitize("111111111111111111111111");
/// assert_eq!(number.len(), 19);
/// ```
pub fn sanitize(raw: &str) -> SanitizedNumber {
    let mut digits = [0u8; MAX_PAN_DIGITS];
    let mut len = 0usize;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            if len == MAX_PAN_DIGITS {
                break;
            }
            digits[len] = (c as u8) - b'0';
            len += 1;
        }
    }

    SanitizedNumber {
        digits,
        len: len as u8,
    }
}
