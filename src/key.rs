//! Canonical anagram keys
//!
//! Two words are anagrams exactly when their keys are equal.

use std::fmt;

/// A word's characters sorted in ascending code point order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnagramKey(String);

impl AnagramKey {
    /// Compute the key of a word
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort the characters of a word into its canonical key string
#[inline]
pub fn canonical_key(word: &str) -> String {
    AnagramKey::of(word).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_characters() {
        assert_eq!(canonical_key("listen"), "eilnst");
        assert_eq!(canonical_key("silent"), "eilnst");
        assert_eq!(canonical_key("cat"), "act");
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn test_permutations_share_key() {
        let word = "stressed";
        let mut chars: Vec<char> = word.chars().collect();

        for _ in 0..chars.len() {
            chars.rotate_left(1);
            let rotated: String = chars.iter().collect();
            assert_eq!(canonical_key(&rotated), canonical_key(word));

            let reversed: String = chars.iter().rev().collect();
            assert_eq!(canonical_key(&reversed), canonical_key(word));
        }
    }

    #[test]
    fn test_multiset_not_set() {
        // Same letters, different counts
        assert_ne!(canonical_key("aab"), canonical_key("abb"));
        assert_ne!(canonical_key("ab"), canonical_key("aab"));
    }

    #[test]
    fn test_unicode_code_points() {
        // 'é' (U+00E9) sorts after every ASCII letter
        assert_eq!(canonical_key("été"), "téé");
        assert_eq!(canonical_key("çava"), canonical_key("avaç"));
    }

    #[test]
    fn test_key_display() {
        let key = AnagramKey::of("enlist");
        assert_eq!(key.to_string(), "eilnst");
        assert_eq!(key.as_str(), "eilnst");
        assert_eq!(key, AnagramKey::of("tinsel"));
    }
}
