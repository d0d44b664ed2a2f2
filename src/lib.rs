//! # card_input
//!
//! Payment card input engine for text fields: classifies the digit
//! sequence into a card network by prefix, validates the digit count for
//! that network, formats the digits into network-specific visual groups,
//! and remaps the caret so the insertion point does not jump while the
//! user types.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{reformat, CardNetwork};
//!
//! // One call per input change
//! let state = reformat("4111111111111111", 16);
//! assert_eq!(state.text, "4111 1111 1111 1111");
//! assert_eq!(state.caret, 19);
//! assert_eq!(state.network, Some(CardNetwork::Visa));
//! assert!(state.valid);
//! ```
//!
//! ## Individual Stages
//!
//! ```rust
//! use card_input::{classify, format_card_number, map_cursor, sanitize, CardNetwork};
//!
//! // Sanitize: digits only, capped at 19
//! let number = sanitize("3700-0000 0000 002x");
//! assert_eq!(number.to_digit_string(), "370000000000002");
//!
//! // Classify: network candidate + completeness
//! let c = classify("370000000000002");
//! assert_eq!(c.network(), Some(CardNetwork::Amex));
//! assert!(c.is_valid());
//!
//! // Format: network-specific grouping
//! assert_eq!(format_card_number(c.network(), c.number()), "3700 000000 00002");
//!
//! // Caret remap across the rewrite
//! assert_eq!(map_cursor(15, "370000000000002"), Some(17));
//! ```
//!
//! ## Expiry Fields
//!
//! ```rust
//! use card_input::format_expiry;
//!
//! let out = format_expiry("1225", 4);
//! assert_eq!(out.text, "12/25");
//! assert_eq!(out.caret, 5);
//! ```
//!
//! ## Classification Policy
//!
//! The engine dispatches on the leading digit and resolves exactly one
//! candidate per branch:
//!
//! | Leading digit | Resolution | Complete at |
//! |---|---|---|
//! | 2 | MasterCard (222100-272099) or unclassifiable | 16 |
//! | 3 | Amex (34, 37), else Generic | 15 / 14-19 |
//! | 4 | Visa, always | 13-19 |
//! | 5 | MasterCard (51-55), else Maestro (506000-509999), else Generic | 16 / 12-19 / 16 |
//! | 6 | Generic, always | 16-19 |
//! | other | unclassifiable | never |
//!
//! The `4` and `6` branches deliberately collapse the Visa Electron,
//! Discover, and Maestro sub-ranges; the raw patterns remain available
//! via [`CardNetwork::matches_prefix`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for result types |
//! | `wasm` | WebAssembly bindings for browser input handlers |
//!
//! ## Security
//!
//! - Sanitized numbers live in fixed-size arrays, zeroized on drop
//! - `Debug` output masks all but the last four digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cursor;
pub mod expiry;
pub mod format;
pub mod grouping;
pub mod input;
pub mod network;
pub mod sanitize;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use classify::{classify, Classification};
pub use cursor::map_cursor;
pub use expiry::{format_expiry, ExpiryInput};
pub use format::{format_card_number, format_raw};
pub use grouping::{grouping_rules, resolve_grouping};
pub use input::{reformat, InputState};
pub use network::{CardNetwork, MAX_PAN_DIGITS};
pub use sanitize::{sanitize, SanitizedNumber};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test numbers from payment processors
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const AMEX: &str = "370000000000002";
    const MASTERCARD: &str = "5500000000000004";
    const MASTERCARD_2SERIES: &str = "2221000000000009";
    const MAESTRO_12: &str = "506812345678";
    const DISCOVER_LOOKING: &str = "6011000000000004";

    #[test]
    fn test_visa_pipeline() {
        let state = reformat(VISA_16, 16);
        assert_eq!(state.network, Some(CardNetwork::Visa));
        assert!(state.valid);
        assert_eq!(state.text, "4111 1111 1111 1111");
        assert_eq!(state.caret, 19);

        let state = reformat(VISA_13, 13);
        assert!(state.valid);
        assert_eq!(state.text, "4222 2222 2222 2");
    }

    #[test]
    fn test_amex_pipeline() {
        let state = reformat(AMEX, 15);
        assert_eq!(state.network, Some(CardNetwork::Amex));
        assert!(state.valid);
        assert_eq!(state.text, "3700 000000 00002");
        assert_eq!(state.caret, 17);
    }

    #[test]
    fn test_mastercard_pipeline() {
        for raw in [MASTERCARD, MASTERCARD_2SERIES] {
            let state = reformat(raw, raw.len());
            assert_eq!(state.network, Some(CardNetwork::MasterCard), "{}", raw);
            assert!(state.valid);
        }
    }

    #[test]
    fn test_maestro_pipeline() {
        let state = reformat(MAESTRO_12, 12);
        assert_eq!(state.network, Some(CardNetwork::Maestro));
        assert!(state.valid);
        assert_eq!(state.text, "5068 1234 5678");
    }

    #[test]
    fn test_six_space_resolves_generic() {
        let state = reformat(DISCOVER_LOOKING, 16);
        assert_eq!(state.network, Some(CardNetwork::Generic));
        assert!(state.valid);
        assert_eq!(state.text, "6011 0000 0000 0004");
    }

    #[test]
    fn test_unclassifiable_input() {
        let c = classify("999999999999999");
        assert_eq!(c.network(), None);
        assert!(!c.is_valid());
    }

    #[test]
    fn test_round_trip() {
        for raw in [VISA_16, AMEX, MAESTRO_12, DISCOVER_LOOKING] {
            let c = classify(raw);
            let text = format_card_number(c.network(), c.number());
            assert_eq!(
                sanitize(&text).to_digit_string(),
                c.number().to_digit_string()
            );
        }
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNetwork>();
        assert_send_sync::<SanitizedNumber>();
        assert_send_sync::<Classification>();
        assert_send_sync::<InputState>();
        assert_send_sync::<ExpiryInput>();
    }
}
