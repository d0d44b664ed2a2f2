//! Caret position remapping across reformatting.
//!
//! Reformatting replaces the field text wholesale, so the caret offset
//! the user had in the old text has to be translated to the equivalent
//! offset in the new text or the insertion point jumps while typing.

use crate::classify::classify;
use crate::grouping::resolve_grouping;
use crate::network::MAX_PAN_DIGITS;

/// Maps a caret offset in the pre-format text to the matching offset in
/// the post-format text.
///
/// Offsets are character indices. The mapping counts the digits sitting
/// before the caret, finds which display group that digit count lands
/// in, and adds one separator per group boundary crossed.
///
/// Returns `None` when the caret sits on a group boundary with no digit
/// on either side to anchor it (the degenerate case is a caret at
/// offset 0). Callers should leave the caret where it was;
/// [`crate::reformat`] does exactly that.
///
/// # Example
///
/// ```
/// use card_input::map_cursor;
///
/// // "41111" formats to "4111 1"; a caret after the 5th digit
/// // lands after "4111 1"
/// assert_eq!(map_cursor(5, "41111"), Some(6));
///
/// // Caret at the start has no anchoring digit
/// assert_eq!(map_cursor(0, "41111"), None);
/// ```
pub fn map_cursor(old_offset: usize, old_raw: &str) -> Option<usize> {
    let c = classify(old_raw);
    let rule = resolve_grouping(c.network(), c.number().len());

    // Digits strictly before the caret in the raw text. Digits past the
    // sanitized maximum are truncated out of the formatted text, so they
    // cannot anchor the caret either.
    let digit_index = old_raw
        .chars()
        .take(old_offset)
        .filter(char::is_ascii_digit)
        .count()
        .min(MAX_PAN_DIGITS);

    let mut position = 0;
    for (i, &group_size) in rule.iter().enumerate() {
        if digit_index > position && digit_index <= position + group_size {
            // Inside group i: one separator inserted before each
            // preceding group
            return Some(digit_index + i);
        }
        position += group_size;
    }

    // Past every ruled group: the caret is in the unsegmented tail
    if position < c.number().len() && digit_index > position {
        return Some(digit_index + rule.len());
    }

    None
}
