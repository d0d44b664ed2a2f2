//! Card network classification from BIN/IIN prefixes.
//!
//! The first 2-6 digits of a card number identify the issuing network.
//! This module matches those prefixes with slice patterns over digit
//! values and applies the input field's branch policy: each leading digit
//! selects one decision path, and that path fixes both the reported
//! network and the digit-count window that counts as complete.
//!
//! The branch policy is not the same thing as raw prefix matching. Two
//! ranges are deliberately collapsed by it:
//!
//! - every number starting with `4` reports [`CardNetwork::Visa`], even
//!   when it sits in a Visa Electron range;
//! - every number starting with `6` reports [`CardNetwork::Generic`],
//!   even when it sits in a Discover or Maestro range.
//!
//! The raw per-network patterns, including the collapsed ones, remain
//! queryable through [`CardNetwork::matches_prefix`].
//!
//! # Performance
//!
//! Classification is O(1) over at most the first 6 digits - no loops,
//! no allocation beyond the sanitized copy.

use crate::network::CardNetwork;
use crate::sanitize::{sanitize, SanitizedNumber};

/// Outcome of classifying a raw card-field value.
///
/// An absent network means the input could not be classified at all
/// (unknown leading digit, or a `2`-leading number outside the
/// MasterCard 2-series). That is a stronger statement than
/// [`CardNetwork::Generic`], which is a positive "accepted, no specific
/// network" result. When the network is absent, `valid` is always false.
#[derive(Debug, Clone)]
pub struct Classification {
    network: Option<CardNetwork>,
    number: SanitizedNumber,
    valid: bool,
}

impl Classification {
    /// Returns the leading network candidate, if one was resolved.
    #[inline]
    pub const fn network(&self) -> Option<CardNetwork> {
        self.network
    }

    /// Returns the candidates as a slice, preserving the list-shaped
    /// contract consumed by indicator UIs. At most one entry.
    #[inline]
    pub fn networks(&self) -> Option<&[CardNetwork]> {
        self.network.as_ref().map(std::slice::from_ref)
    }

    /// Returns the sanitized number the classification was made from.
    #[inline]
    pub const fn number(&self) -> &SanitizedNumber {
        &self.number
    }

    /// Returns true if the digit count completes a number for the
    /// resolved branch.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Classifies raw card-field text into a network candidate plus a
/// completeness flag.
///
/// The input is sanitized first; dispatch is on the leading digit of the
/// sanitized number.
///
/// # Example
///
/// ```
/// use card_input::{classify, CardNetwork};
///
/// let c = classify("4111 1111 1111 1111");
/// assert_eq!(c.network(), Some(CardNetwork::Visa));
/// assert!(c.is_valid());
///
/// // Unknown leading digit: no network at all
/// let c = classify("9999999999999999");
/// assert_eq!(c.network(), None);
/// assert!(!c.is_valid());
/// ```
pub fn classify(raw: &str) -> Classification {
    let number = sanitize(raw);
    let len = number.len();

    let (network, valid) = match number.digits() {
        [] => (None, false),

        // MasterCard 2-series needs all six prefix digits before it can
        // match; anything else in the 2x space is unclassifiable.
        d @ [2, ..] => {
            if mastercard_prefix(d) {
                (Some(CardNetwork::MasterCard), len == 16)
            } else {
                (None, false)
            }
        }

        d @ [3, ..] => {
            if amex_prefix(d) {
                (Some(CardNetwork::Amex), len == 15)
            } else {
                (Some(CardNetwork::Generic), (14..=19).contains(&len))
            }
        }

        // Electron ranges (4026, 417500, 4405, 4508, 4844, 4913, 4917)
        // sit inside this space but the field reports Visa for all of it,
        // with Visa's 13-19 window. Query electron_prefix via
        // CardNetwork::matches_prefix if the raw range is needed.
        [4, ..] => (Some(CardNetwork::Visa), (13..=19).contains(&len)),

        d @ [5, ..] => {
            if mastercard_prefix(d) {
                (Some(CardNetwork::MasterCard), len == 16)
            } else if maestro_prefix(d) {
                (Some(CardNetwork::Maestro), (12..=19).contains(&len))
            } else {
                (Some(CardNetwork::Generic), len == 16)
            }
        }

        // Discover (6011, 622126-622925, 644-649, 65) and Maestro
        // (600000-699999) both live here, but the field resolves the
        // whole 6x space to Generic with a 16-19 window.
        [6, ..] => (Some(CardNetwork::Generic), (16..=19).contains(&len)),

        _ => (None, false),
    };

    Classification {
        network,
        number,
        valid,
    }
}

impl CardNetwork {
    /// Tests the raw prefix pattern for this network against a digit
    /// sequence.
    ///
    /// Unlike [`classify`], this applies no branch policy: the Visa
    /// Electron, Discover, and Maestro ranges that classification
    /// collapses all report true here. `Generic` has no prefix pattern
    /// and always reports false.
    ///
    /// # Example
    ///
    /// ```
    /// use card_input::{classify, CardNetwork};
    ///
    /// let digits = [4, 0, 2, 6, 0, 0];
    /// assert!(CardNetwork::VisaElectron.matches_prefix(&digits));
    /// assert!(CardNetwork::Visa.matches_prefix(&digits));
    ///
    /// // The field itself still reports Visa for that range
    /// assert_eq!(classify("402600").network(), Some(CardNetwork::Visa));
    /// ```
    pub fn matches_prefix(&self, digits: &[u8]) -> bool {
        match self {
            Self::Generic => false,
            Self::Amex => amex_prefix(digits),
            Self::Discover => discover_prefix(digits),
            Self::MasterCard => mastercard_prefix(digits),
            Self::Maestro => maestro_prefix(digits),
            Self::Visa => visa_prefix(digits),
            Self::VisaElectron => electron_prefix(digits),
        }
    }
}

// Prefix patterns. Ranges that need N digits to decide only match once
// all N are present, mirroring anchored prefix tests.

/// MasterCard: 51-55, or the 2-series 222100-272099 (six digits needed).
#[inline]
fn mastercard_prefix(d: &[u8]) -> bool {
    matches!(
        d,
        [5, 1..=5, ..]
            | [2, 2, 2, 1..=9, _, _, ..]
            | [2, 2, 3..=9, _, _, _, ..]
            | [2, 3..=6, _, _, _, _, ..]
            | [2, 7, 0..=1, _, _, _, ..]
            | [2, 7, 2, 0, _, _, ..]
    )
}

/// American Express: 34 or 37.
#[inline]
fn amex_prefix(d: &[u8]) -> bool {
    matches!(d, [3, 4, ..] | [3, 7, ..])
}

/// Visa: everything starting with 4.
#[inline]
fn visa_prefix(d: &[u8]) -> bool {
    matches!(d, [4, ..])
}

/// Visa Electron: 4026, 417500, 4405, 4508, 4844, 4913, 4917.
#[inline]
fn electron_prefix(d: &[u8]) -> bool {
    matches!(
        d,
        [4, 0, 2, 6, ..]
            | [4, 1, 7, 5, 0, 0, ..]
            | [4, 4, 0, 5, ..]
            | [4, 5, 0, 8, ..]
            | [4, 8, 4, 4, ..]
            | [4, 9, 1, 3, ..]
            | [4, 9, 1, 7, ..]
    )
}

/// Maestro: 506000-509999 or 600000-699999 (six digits needed).
#[inline]
fn maestro_prefix(d: &[u8]) -> bool {
    matches!(d, [5, 0, 6..=9, _, _, _, ..] | [6, _, _, _, _, _, ..])
}

/// Discover: 6011, 622126-622925, 644-649, 65.
#[inline]
fn discover_prefix(d: &[u8]) -> bool {
    matches!(
        d,
        [6, 0, 1, 1, ..]
            | [6, 4, 4..=9, ..]
            | [6, 5, ..]
            | [6, 2, 2, 1, 2, 6..=9, ..]
            | [6, 2, 2, 1, 3..=9, _, ..]
            | [6, 2, 2, 2..=8, _, _, ..]
            | [6, 2, 2, 9, 0..=1, _, ..]
            | [6, 2, 2, 9, 2, 0..=5, ..]
    )
}
