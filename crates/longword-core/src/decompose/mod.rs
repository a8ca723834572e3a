//! Splitting text into words of a [`PrefixIndex`].
//!
//! The search works over restart positions: offsets in the text where a new
//! word may begin. From a restart position it walks the trie along the text,
//! and every word end it passes is a restart position for the next word.
//! Text is accepted once a word ends exactly at its end.
//!
//! Restart positions are explored depth-first with an explicit stack and each
//! is expanded at most once. Only restart positions are remembered, so memory
//! is linear in the text length, and the work is bounded by
//! `trie depth × text length` rather than the number of ways to split the
//! text.


use crate::index::PrefixIndex;

/// Counters accumulated over the lifetime of a [`Decomposer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub searches: usize,
    /// Distinct restart positions reached across all searches.
    pub states: usize,
}

/// Reusable search over a finished index.
///
/// Holding `&PrefixIndex` means no word can be inserted while a decomposer
/// exists. Scratch buffers are kept between calls.
pub struct Decomposer<'a> {
    index: &'a PrefixIndex,
    reached: Vec<bool>,
    /// Restart position the word ending at each reached position began at.
    parent: Vec<usize>,
    stack: Vec<usize>,
    stats: SearchStats,
}

impl<'a> Decomposer<'a> {
    pub fn new(index: &'a PrefixIndex) -> Self {
        Self {
            index,
            reached: Vec::new(),
            parent: Vec::new(),
            stack: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// True iff `text` is a concatenation of one or more indexed words.
    ///
    /// This has no notion of word count: a `text` that is itself a word is
    /// accepted. Callers get the two-word guarantee by only passing the
    /// remainder after a known prefix word (see [`PrefixIndex::insert`]).
    pub fn can_decompose(&mut self, text: &str) -> bool {
        self.search(text.as_bytes())
    }

    /// One way of splitting `text` into indexed words, if any.
    pub fn segment<'t>(&mut self, text: &'t str) -> Option<Vec<&'t str>> {
        if !self.search(text.as_bytes()) {
            return None;
        }

        let mut cuts = vec![text.len()];
        let mut pos = text.len();
        while pos > 0 {
            pos = self.parent[pos];
            cuts.push(pos);
        }
        cuts.reverse();

        Some(cuts.windows(2).map(|w| &text[w[0]..w[1]]).collect())
    }

    /// Split `word` into two or more indexed words, never `word` itself.
    ///
    /// Prefix words are tried shortest first, and the first remainder that
    /// segments wins.
    pub fn split_compound<'t>(&mut self, word: &'t str) -> Option<Vec<&'t str>> {
        let mut node = self.index.root();
        for (offset, byte) in word.bytes().enumerate() {
            if self.index.is_word_end(node) {
                if let Some(rest) = self.segment(&word[offset..]) {
                    let mut parts = Vec::with_capacity(rest.len() + 1);
                    parts.push(&word[..offset]);
                    parts.extend(rest);
                    return Some(parts);
                }
            }
            node = self.index.child(node, byte)?;
        }
        None
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, text: &[u8]) -> bool {
        let len = text.len();
        self.reached.clear();
        self.reached.resize(len + 1, false);
        self.parent.clear();
        self.parent.resize(len + 1, 0);
        self.stack.clear();
        self.stats.searches += 1;

        if len == 0 {
            return false;
        }
        self.reach(0, 0);
        while let Some(start) = self.stack.pop() {
            let mut node = self.index.root();
            for (pos, &byte) in text.iter().enumerate().skip(start) {
                let Some(child) = self.index.child(node, byte) else {
                    break;
                };
                node = child;
                let end = pos + 1;
                if !self.index.is_word_end(node) || self.reached[end] {
                    continue;
                }
                self.reach(end, start);
                if end == len {
                    return true;
                }
            }
        }
        false
    }

    /// Mark `pos` as a restart position entered from `from`. Positions are
    /// pushed shortest word first, so the longest first word is tried first.
    fn reach(&mut self, pos: usize, from: usize) {
        self.reached[pos] = true;
        self.parent[pos] = from;
        self.stack.push(pos);
        self.stats.states += 1;
    }
}

/// One-shot [`Decomposer::can_decompose`].
pub fn can_decompose(index: &PrefixIndex, text: &str) -> bool {
    Decomposer::new(index).can_decompose(text)
}
