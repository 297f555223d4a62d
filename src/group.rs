//! Anagram grouping
//!
//! Buckets words by canonical key and turns the buckets into sorted output lines.

use crate::key::AnagramKey;
use ahash::RandomState;
use hashbrown::HashMap;

/// Words bucketed by anagram key, each bucket in insertion order
#[derive(Debug, Default)]
pub struct AnagramGroups {
    groups: HashMap<AnagramKey, Vec<String>, RandomState>,
    word_count: usize,
}

impl AnagramGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            word_count: 0,
        }
    }

    /// Group a sequence of words; duplicates are kept
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter();
        let mut groups = Self::with_capacity(words.size_hint().0);
        for word in words {
            groups.insert(word);
        }
        groups
    }

    /// Append a word to the group of its key
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.groups
            .entry(AnagramKey::of(&word))
            .or_default()
            .push(word);
        self.word_count += 1;
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total words inserted, duplicates included
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The group holding `word`'s anagrams (including `word` if it was inserted)
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.groups.get(&AnagramKey::of(word)).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnagramKey, &[String])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Output lines: each multi-word group sorted and joined by single spaces,
    /// lines sorted as whole strings
    pub fn into_lines(self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .groups
            .into_values()
            .filter(|words| words.len() > 1)
            .map(|mut words| {
                words.sort_unstable();
                words.join(" ")
            })
            .collect();

        lines.sort_unstable();
        lines
    }
}
