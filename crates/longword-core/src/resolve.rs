//! Deferred resolution of concatenation candidates.
//!
//! While the index is being built, each word that passed a known word
//! boundary is queued together with the suffixes left after those
//! boundaries. Whether a suffix is itself a sequence of words can only be
//! decided once every word is in the index, so the queue is resolved in a
//! second pass.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::decompose::Decomposer;
use crate::index::PrefixIndex;

/// Order in which queued entries are resolved.
///
/// Only ties between equally long words depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveOrder {
    /// First queued, first resolved.
    #[default]
    Insertion,
    /// Last queued, first resolved.
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub word: String,
    /// Remainders after each known prefix word, shortest prefix first.
    pub missing: Vec<String>,
}

/// A word confirmed to be a concatenation of other words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub word: String,
    pub len: usize,
    /// The remainder that resolved, i.e. the word minus its first part.
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub matches: Vec<Match>,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct PendingQueue {
    entries: Vec<PendingEntry>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `word` unless it has no missing suffixes, in which case it
    /// cannot be a concatenation. Returns whether it was queued.
    pub fn push(&mut self, word: impl Into<String>, missing: Vec<String>) -> bool {
        if missing.is_empty() {
            return false;
        }
        self.entries.push(PendingEntry {
            word: word.into(),
            missing,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self, order: ResolveOrder) -> Box<dyn Iterator<Item = &PendingEntry> + '_> {
        match order {
            ResolveOrder::Insertion => Box::new(self.entries.iter()),
            ResolveOrder::Reverse => Box::new(self.entries.iter().rev()),
        }
    }

    /// Resolve every entry against the finished `index`.
    ///
    /// An entry matches on the first of its suffixes that splits into
    /// indexed words; later suffixes are not tried. Entries with no such
    /// suffix are dropped. The queue is only borrowed, so resolving again
    /// over the same index gives the same result.
    pub fn resolve_all(&self, index: &PrefixIndex, order: ResolveOrder) -> Resolution {
        let _span = debug_span!("resolve_all", entries = self.entries.len(), ?order).entered();

        let mut decomposer = Decomposer::new(index);
        let matches: Vec<Match> = self
            .iter(order)
            .filter_map(|entry| {
                let suffix = entry
                    .missing
                    .iter()
                    .find(|suffix| decomposer.can_decompose(suffix))?;
                Some(Match {
                    word: entry.word.clone(),
                    len: entry.word.len(),
                    suffix: suffix.clone(),
                })
            })
            .collect();

        let stats = decomposer.stats();
        debug!(
            matched = matches.len(),
            searches = stats.searches,
            states = stats.states,
        );

        Resolution {
            total: matches.len(),
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_for(words: &[&str]) -> (PrefixIndex, PendingQueue) {
        let mut index = PrefixIndex::new();
        let mut queue = PendingQueue::new();
        for w in words {
            let missing = index.insert(w).unwrap();
            queue.push(*w, missing);
        }
        (index, queue)
    }

    #[test]
    fn push_skips_words_without_boundary() {
        let mut queue = PendingQueue::new();
        assert!(!queue.push("cat", Vec::new()));
        assert!(queue.push("catdog", vec!["dog".to_string()]));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn resolves_first_matching_suffix_only() {
        let (index, queue) = queue_for(&["a", "aa", "aaa"]);
        // "aaa" has suffixes ["aa", "a"]; both split, only the first is used.
        let res = queue.resolve_all(&index, ResolveOrder::Insertion);
        assert_eq!(res.total, 2);
        assert_eq!(res.matches[0].word, "aa");
        assert_eq!(res.matches[1].word, "aaa");
        assert_eq!(res.matches[1].suffix, "aa");
    }

    #[test]
    fn suffix_may_use_later_words() {
        // "dog" comes after "catdog"; resolution still sees it.
        let (index, queue) = queue_for(&["cat", "catdog", "dog"]);
        let res = queue.resolve_all(&index, ResolveOrder::Insertion);
        assert_eq!(res.total, 1);
        assert_eq!(
            res.matches[0],
            Match {
                word: "catdog".to_string(),
                len: 6,
                suffix: "dog".to_string(),
            }
        );
    }

    #[test]
    fn unresolved_entries_are_dropped() {
        let (index, queue) = queue_for(&["cat", "cats", "catsdo"]);
        assert_eq!(queue.len(), 2);
        let res = queue.resolve_all(&index, ResolveOrder::Insertion);
        assert_eq!(res, Resolution::default());
    }

    #[test]
    fn reverse_order() {
        let (index, queue) = queue_for(&["a", "b", "ab", "ba"]);
        let forward = queue.resolve_all(&index, ResolveOrder::Insertion);
        let reverse = queue.resolve_all(&index, ResolveOrder::Reverse);
        let words = |r: &Resolution| r.matches.iter().map(|m| m.word.clone()).collect::<Vec<_>>();
        assert_eq!(words(&forward), vec!["ab", "ba"]);
        assert_eq!(words(&reverse), vec!["ba", "ab"]);
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let (index, queue) = queue_for(&["cat", "cats", "dog", "catsdog", "dogcat"]);
        let first = queue.resolve_all(&index, ResolveOrder::Insertion);
        let second = queue.resolve_all(&index, ResolveOrder::Insertion);
        assert_eq!(first, second);
        assert_eq!(first.total, 2);
    }

    #[test]
    fn single_word_never_matches() {
        let (index, queue) = queue_for(&["ab"]);
        assert!(queue.is_empty());
        assert_eq!(queue.resolve_all(&index, ResolveOrder::Insertion).total, 0);
    }
}
