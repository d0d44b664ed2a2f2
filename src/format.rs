//! Display formatting of sanitized card numbers.
//!
//! Digits are joined into network-specific visual groups separated by
//! single spaces. The resolver in [`crate::grouping`] picks the group
//! sizes; this module slices the digits accordingly.
//!
//! # Example
//!
//! ```
//! use card_input::format_raw;
//!
//! assert_eq!(format_raw("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_raw("370000000000002"), "3700 000000 00002");
//! ```

use crate::classify::classify;
use crate::grouping::resolve_grouping;
use crate::network::CardNetwork;
use crate::sanitize::SanitizedNumber;

/// Formats a sanitized number into space-separated display groups.
///
/// Walks the resolved rule's group sizes in order, slicing consecutive
/// digit groups. Empty trailing groups are skipped; digits left over
/// after the rule is consumed are appended as one unsegmented tail
/// group, so the output degrades gracefully for counts the rule tables
/// don't fully cover (17-19 digit Visa numbers, for example).
///
/// # Example
///
/// ```
/// use card_input::{classify, format_card_number};
///
/// let c = classify("4111111111111111111");
/// let text = format_card_number(c.network(), c.number());
/// assert_eq!(text, "4111 1111 1111 1111 111");
/// ```
pub fn format_card_number(network: Option<CardNetwork>, number: &SanitizedNumber) -> String {
    let rule = resolve_grouping(network, number.len());
    let digits = number.digits();

    let mut out = String::with_capacity(digits.len() + rule.len());
    let mut pos = 0;

    for &size in rule {
        let end = (pos + size).min(digits.len());
        if end == pos {
            break;
        }
        if pos > 0 {
            out.push(' ');
        }
        for &d in &digits[pos..end] {
            out.push((b'0' + d) as char);
        }
        pos = end;
    }

    // Unsegmented tail for digits past the rule's total
    if pos < digits.len() {
        if pos > 0 {
            out.push(' ');
        }
        for &d in &digits[pos..] {
            out.push((b'0' + d) as char);
        }
    }

    out
}

/// Classifies raw field text and formats it in one step.
pub fn format_raw(raw: &str) -> String {
    let c = classify(raw);
    format_card_number(c.network(), c.number())
}
