//! Longest concatenated word search.
//!
//! A word list is loaded into a [`PrefixIndex`](index::PrefixIndex). Every
//! word whose prefix is already a known word leaves a
//! [`PendingEntry`](resolve::PendingEntry) behind. Once the whole list is in,
//! the pending suffixes are resolved with the [`Decomposer`](decompose::Decomposer)
//! and the confirmed words are ranked by a
//! [`CandidateTracker`](tracker::CandidateTracker).
//!
//! ```
//! use longword_core::analyze::Vocabulary;
//! use longword_core::resolve::ResolveOrder;
//!
//! let vocab = Vocabulary::from_words(["cat", "cats", "dog", "catsdog"]).unwrap();
//! let report = vocab.report(ResolveOrder::Insertion, false);
//! assert_eq!(report.longest.unwrap().word, "catsdog");
//! assert_eq!(report.total, 1);
//! ```

pub mod analyze;
pub mod decompose;
pub mod index;
pub mod resolve;
pub mod settings;
pub mod tracker;
pub mod wordlist;

#[cfg(test)]
pub(crate) mod testutil;
