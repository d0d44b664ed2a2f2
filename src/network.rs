//! Card network types and per-network length rules.
//!
//! This module provides the `CardNetwork` enum for identifying the payment
//! network behind a digit sequence, together with the length windows each
//! network accepts.

use std::fmt;

/// Maximum number of digits kept from a card input field.
///
/// Sanitization truncates everything past this point, so no other part of
/// the engine ever sees a longer digit sequence.
pub const MAX_PAN_DIGITS: usize = 19;

/// Card networks recognized by the input engine.
///
/// `Generic` is a real classification (an accepted number that matched no
/// specific prefix policy), distinct from "could not classify at all",
/// which the classifier reports as an absent network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardNetwork {
    /// Fallback network for accepted-but-unrecognized prefixes.
    Generic,
    /// American Express - prefix 34, 37, length 15.
    Amex,
    /// Discover - prefix 6011, 622126-622925, 644-649, 65, length 16.
    Discover,
    /// MasterCard - prefix 51-55, 2221-2720, length 16.
    MasterCard,
    /// Maestro - prefix 506000-509999, 600000-699999, length 12-19.
    Maestro,
    /// Visa - prefix 4, length 13-19.
    Visa,
    /// Visa Electron - prefix 4026, 417500, 4405, 4508, 4844, 4913, 4917, length 16.
    VisaElectron,
}

impl CardNetwork {
    /// Returns true if the given digit count is acceptable for this network.
    ///
    /// Usable standalone; the classifier applies its own per-branch windows
    /// which are not always identical to these (see [`crate::classify`]).
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        match self {
            Self::Amex => length == 15,
            Self::Discover | Self::MasterCard | Self::VisaElectron => length == 16,
            Self::Maestro => length >= 12 && length <= MAX_PAN_DIGITS,
            Self::Visa => length >= 13 && length <= MAX_PAN_DIGITS,
            Self::Generic => length <= MAX_PAN_DIGITS,
        }
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::MasterCard => "MasterCard",
            Self::Maestro => "Maestro",
            Self::Visa => "Visa",
            Self::VisaElectron => "Visa Electron",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
