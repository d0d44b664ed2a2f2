//! Digit grouping rules per card network.
//!
//! A grouping rule is an ordered list of group sizes used to insert
//! visual separators into a digit string. Most networks have exactly one
//! rule; Maestro has several, chosen by digit count.

use crate::network::CardNetwork;

const RULE_4444: &[usize] = &[4, 4, 4, 4];
const RULE_AMEX: &[usize] = &[4, 6, 5];

const MAESTRO_RULES: &[&[usize]] = &[
    &[4, 4, 5],
    &[4, 6, 5],
    &[4, 4, 4, 4],
    &[4, 4, 4, 4, 3],
];

/// Returns the candidate grouping rules for a network, in preference
/// order. An absent network groups like `Generic`.
pub fn grouping_rules(network: Option<CardNetwork>) -> &'static [&'static [usize]] {
    match network {
        Some(CardNetwork::Amex) => &[RULE_AMEX],
        Some(CardNetwork::Maestro) => MAESTRO_RULES,
        _ => &[RULE_4444],
    }
}

/// Picks the grouping rule for a network and digit count.
///
/// Single-rule networks always use their rule. For Maestro the first
/// rule (in listed order) whose total covers the digit count wins; if
/// none does, the last rule is used.
///
/// # Example
///
/// ```
/// use card_input::{resolve_grouping, CardNetwork};
///
/// assert_eq!(resolve_grouping(Some(CardNetwork::Amex), 15), &[4, 6, 5]);
/// assert_eq!(resolve_grouping(Some(CardNetwork::Maestro), 12), &[4, 4, 5]);
/// assert_eq!(resolve_grouping(Some(CardNetwork::Maestro), 19), &[4, 4, 4, 4, 3]);
/// assert_eq!(resolve_grouping(None, 16), &[4, 4, 4, 4]);
/// ```
pub fn resolve_grouping(network: Option<CardNetwork>, digit_count: usize) -> &'static [usize] {
    let rules = grouping_rules(network);
    if rules.len() == 1 {
        return rules[0];
    }

    for &rule in rules {
        if rule.iter().sum::<usize>() >= digit_count {
            return rule;
        }
    }
    rules[rules.len() - 1]
}
