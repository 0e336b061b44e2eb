//! Text parsing and extraction utilities for Twitter content.
//!
//! This module splits tweet text into whitespace-delimited tokens and pulls
//! out `@mentions`. Two acceptance policies exist: a lenient one that takes
//! whatever follows the `@`, and a strict one that only accepts tokens made
//! entirely of username characters.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid username regex"));

/// How the text after `@` is validated before it counts as a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentionPolicy {
    /// Accept the whole remainder of the token, punctuation included.
    /// `"@alice,"` yields `"alice,"`.
    #[default]
    Lenient,
    /// Accept the remainder only if it is a valid username.
    /// `"@alice,"` yields nothing.
    Strict,
}

impl MentionPolicy {
    fn accepts(self, candidate: &str) -> bool {
        match self {
            MentionPolicy::Lenient => true,
            MentionPolicy::Strict => is_valid_username(candidate),
        }
    }
}

/// Returns `true` if `candidate` is a non-empty run of ASCII letters, digits or `_`.
///
/// Examples: "alice" ✓, "Bob_99" ✓, "alice," ✗, "" ✗, "zoë" ✗
pub fn is_valid_username(candidate: &str) -> bool {
    USERNAME.is_match(candidate)
}

/// Extracts the lowercased usernames mentioned in a single tweet text.
///
/// A token is a maximal run of non-whitespace characters. It is a mention when
/// it starts with `@`, has at least one character after it, and that remainder
/// passes `policy`.
///
/// # Parameters
///
/// - `text`: The tweet text to scan
/// - `policy`: Whether the remainder must be a valid username
///
/// # Returns
///
/// The distinct mentioned usernames, lowercased. Empty if there are none.
pub(crate) fn extract_mentions(text: &str, policy: MentionPolicy) -> HashSet<String> {
    let mut mentions = HashSet::new();
    for candidate in mention_candidates(text) {
        if policy.accepts(candidate) {
            mentions.insert(candidate.to_lowercase());
        }
    }
    mentions
}

/// Yields the text after `@` for each token that starts with `@` and is longer than it.
fn mention_candidates(text: &str) -> impl Iterator<Item = &str> {
    WHITESPACE
        .split(text)
        .filter_map(|token| token.strip_prefix('@'))
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_require_leading_at_and_a_remainder() {
        let found: Vec<&str> = mention_candidates("@ a@b @c  @@d\t@e\n").collect();
        assert_eq!(found, vec!["c", "@d", "e"]);
    }

    #[test]
    fn leading_whitespace_produces_no_empty_mention() {
        let found: Vec<&str> = mention_candidates("   @alice").collect();
        assert_eq!(found, vec!["alice"]);
    }

    #[test]
    fn unicode_whitespace_separates_tokens() {
        // U+00A0 NO-BREAK SPACE and U+2003 EM SPACE
        let found: Vec<&str> = mention_candidates("@alice\u{00A0}@bob\u{2003}@carol").collect();
        assert_eq!(found, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn strict_policy_rejects_punctuation() {
        let mentions = extract_mentions("hi @alice, @Bob! @carol_1", MentionPolicy::Strict);
        assert_eq!(mentions, HashSet::from(["carol_1".to_string()]));
    }

    #[test]
    fn lenient_policy_keeps_punctuation() {
        let mentions = extract_mentions("hi @alice, @Bob!", MentionPolicy::Lenient);
        assert_eq!(
            mentions,
            HashSet::from(["alice,".to_string(), "bob!".to_string()])
        );
    }

    #[test]
    fn mentions_are_lowercased_and_deduplicated() {
        let mentions = extract_mentions("@Alice @ALICE @alice", MentionPolicy::Strict);
        assert_eq!(mentions, HashSet::from(["alice".to_string()]));
    }

    #[test]
    fn username_validation() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("Bob_99"));
        assert!(is_valid_username("_"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("alice,"));
        assert!(!is_valid_username("zoë"));
        assert!(!is_valid_username("a b"));
    }
}
