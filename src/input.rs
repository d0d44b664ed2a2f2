//! Per-keystroke orchestration of the card number pipeline.
//!
//! An input-change handler owns the text field; on every change it hands
//! over the raw text and the caret offset, and gets back the reformatted
//! text, the translated caret, and the network candidate that drives the
//! logo indicator.

use crate::classify::classify;
use crate::cursor::map_cursor;
use crate::format::format_card_number;
use crate::network::CardNetwork;

/// Everything the field needs after one input change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    /// Sanitized, group-formatted display text.
    pub text: String,
    /// Caret offset in `text`.
    pub caret: usize,
    /// Leading network candidate for the logo indicator, if any.
    pub network: Option<CardNetwork>,
    /// True when the digit count completes a number for that network.
    pub valid: bool,
}

/// Runs the full pipeline for one input change.
///
/// Classification, formatting, and caret mapping all run on the same
/// raw snapshot. When the caret cannot be remapped (see
/// [`crate::map_cursor`]) it is left at its old offset.
///
/// # Example
///
/// ```
/// use card_input::{reformat, CardNetwork};
///
/// let state = reformat("4111111111111111", 16);
/// assert_eq!(state.text, "4111 1111 1111 1111");
/// assert_eq!(state.caret, 19);
/// assert_eq!(state.network, Some(CardNetwork::Visa));
/// assert!(state.valid);
/// ```
pub fn reformat(raw: &str, caret: usize) -> InputState {
    let c = classify(raw);
    let text = format_card_number(c.network(), c.number());
    let caret = map_cursor(caret, raw).unwrap_or(caret);

    InputState {
        text,
        caret,
        network: c.network(),
        valid: c.is_valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_while_typing() {
        let state = reformat("41111", 5);
        assert_eq!(state.text, "4111 1");
        assert_eq!(state.caret, 6);
        assert_eq!(state.network, Some(CardNetwork::Visa));
        assert!(!state.valid);
    }

    #[test]
    fn test_reformat_complete_number() {
        let state = reformat("4111111111111111", 16);
        assert_eq!(state.text, "4111 1111 1111 1111");
        assert_eq!(state.caret, 19);
        assert!(state.valid);
    }

    #[test]
    fn test_unmappable_caret_stays_put() {
        let state = reformat("4111111111111111", 0);
        assert_eq!(state.caret, 0);
        assert_eq!(state.text, "4111 1111 1111 1111");
    }

    #[test]
    fn test_unclassifiable_input() {
        let state = reformat("9999", 4);
        assert_eq!(state.network, None);
        assert!(!state.valid);
        // Still formatted with the fallback grouping
        assert_eq!(state.text, "9999");
    }

    #[test]
    fn test_empty_field() {
        let state = reformat("", 0);
        assert_eq!(state.text, "");
        assert_eq!(state.caret, 0);
        assert_eq!(state.network, None);
        assert!(!state.valid);
    }

    #[test]
    fn test_paste_with_separators() {
        let state = reformat("4111-1111-1111-1111", 19);
        assert_eq!(state.text, "4111 1111 1111 1111");
        assert_eq!(state.caret, 19);
    }
}
