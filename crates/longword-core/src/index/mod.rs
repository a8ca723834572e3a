//! Prefix index over the word list.
//!
//! `PrefixIndex` is a 26-way trie kept in a flat arena. Nodes are addressed by
//! [`NodeId`]; the root is always `NodeId::ROOT` and is never a word end.
//! Dropping the index frees the whole arena at once, so there is no recursive
//! teardown however long the words are.

mod node;

pub use node::{letter_slot, NodeId, ALPHABET_LEN};

use node::TrieNode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("invalid byte {byte:#04x} at offset {offset} in {word:?} (expected a-z)")]
    InvalidLetter { word: String, offset: usize, byte: u8 },

    #[error("trie node limit reached while inserting {0:?}")]
    Capacity(String),
}

/// Check that `word` only uses the letters `a..=z`.
pub fn validate_word(word: &str) -> Result<(), IndexError> {
    let bytes = word.as_bytes();
    match bytes.iter().position(|&b| letter_slot(b).is_none()) {
        Some(offset) => Err(IndexError::InvalidLetter {
            word: word.to_string(),
            offset,
            byte: bytes[offset],
        }),
        None => Ok(()),
    }
}

pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Insert `word` and return its missing suffixes.
    ///
    /// Every time the descent passes a node that already ends a known word,
    /// the part of `word` not consumed yet is recorded, first boundary first.
    /// For "catdogfish" with "cat" and "catdog" known this is
    /// `["dogfish", "fish"]`.
    ///
    /// Only words inserted earlier can produce a boundary, so callers that
    /// need every boundary must insert in sorted order. The empty word and
    /// words already present are no-ops returning no suffixes. A word with a
    /// byte outside `a..=z` is rejected before the trie is touched.
    pub fn insert(&mut self, word: &str) -> Result<Vec<String>, IndexError> {
        validate_word(word)?;
        let bytes = word.as_bytes();
        if bytes.is_empty() || self.contains_exact(word) {
            return Ok(Vec::new());
        }
        if NodeId::from_index(self.nodes.len() + bytes.len()).is_none() {
            return Err(IndexError::Capacity(word.to_string()));
        }

        let mut missing = Vec::new();
        let mut node = NodeId::ROOT;
        for (offset, &byte) in bytes.iter().enumerate() {
            if self.nodes[node.index()].word_end {
                missing.push(word[offset..].to_string());
            }
            let slot = (byte - b'a') as usize;
            node = match self.nodes[node.index()].child(slot) {
                Some(child) => child,
                None => self.push_child(node, slot),
            };
        }
        self.nodes[node.index()].word_end = true;
        self.words += 1;

        Ok(missing)
    }

    fn push_child(&mut self, parent: NodeId, slot: usize) -> NodeId {
        // Capacity was checked for the whole word before the descent started.
        let child = NodeId::from_index(self.nodes.len()).unwrap_or(NodeId::ROOT);
        self.nodes.push(TrieNode::default());
        self.nodes[parent.index()].set_child(slot, child);
        child
    }

    /// True iff `word` was inserted.
    pub fn contains_exact(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.is_word_end(n))
    }

    /// True iff some inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    fn walk(&self, text: &str) -> Option<NodeId> {
        text.bytes()
            .try_fold(NodeId::ROOT, |node, byte| self.child(node, byte))
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `byte`. Bytes outside `a..=z` have no edge.
    #[inline]
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        letter_slot(byte).and_then(|slot| self.nodes[node.index()].child(slot))
    }

    #[inline]
    pub fn is_word_end(&self, node: NodeId) -> bool {
        self.nodes[node.index()].word_end
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}
