//! Expiry date (MM/YY) input formatting.
//!
//! A much smaller sibling of the card number pipeline: sanitize to at
//! most four digits, insert the `/` separator once the month is
//! complete, and keep the caret in place across the rewrite.

/// Reformatted expiry field text plus the translated caret offset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryInput {
    /// The display text, `MM/YY` once two or more digits are present.
    pub text: String,
    /// Caret offset in `text`.
    pub caret: usize,
}

/// Formats raw expiry input as `MM/YY` and remaps the caret.
///
/// Non-digits are stripped and the digits truncated to four. Fewer than
/// two digits pass through unseparated; otherwise a `/` is inserted
/// after the second digit. The caret moves forward by one exactly when
/// more than two digits precede it (it has crossed the inserted `/`).
///
/// # Example
///
/// ```
/// use card_input::format_expiry;
///
/// let out = format_expiry("1225", 4);
/// assert_eq!(out.text, "12/25");
/// assert_eq!(out.caret, 5);
///
/// let out = format_expiry("1", 1);
/// assert_eq!(out.text, "1");
/// assert_eq!(out.caret, 1);
/// ```
pub fn format_expiry(raw: &str, caret: usize) -> ExpiryInput {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(4).collect();

    let text = if digits.len() < 2 {
        digits.iter().collect()
    } else {
        let mut t = String::with_capacity(digits.len() + 1);
        t.push(digits[0]);
        t.push(digits[1]);
        t.push('/');
        t.extend(digits[2..].iter());
        t
    };

    let digits_before = raw
        .chars()
        .take(caret)
        .filter(char::is_ascii_digit)
        .count();
    let caret = if digits_before <= 2 { caret } else { caret + 1 };

    ExpiryInput { text, caret }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_expiry() {
        let out = format_expiry("1225", 4);
        assert_eq!(out.text, "12/25");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn test_partial_input() {
        assert_eq!(format_expiry("", 0).text, "");
        assert_eq!(format_expiry("1", 1).text, "1");

        // The separator appears as soon as the month is complete
        let out = format_expiry("12", 2);
        assert_eq!(out.text, "12/");
        assert_eq!(out.caret, 2);

        let out = format_expiry("123", 3);
        assert_eq!(out.text, "12/3");
        assert_eq!(out.caret, 4);
    }

    #[test]
    fn test_non_digits_are_stripped() {
        assert_eq!(format_expiry("12/25", 0).text, "12/25");
        assert_eq!(format_expiry("1a2b2c5", 0).text, "12/25");
    }

    #[test]
    fn test_truncated_to_four_digits() {
        assert_eq!(format_expiry("122534", 0).text, "12/25");
    }

    #[test]
    fn test_caret_counts_digits_only() {
        // "12/2|5": four chars before the caret, three of them digits
        let out = format_expiry("12/25", 4);
        assert_eq!(out.text, "12/25");
        assert_eq!(out.caret, 5);

        // Caret before the third digit stays put
        let out = format_expiry("12/25", 3);
        assert_eq!(out.caret, 3);
    }
}
