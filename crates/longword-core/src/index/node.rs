/// Number of edge labels per node (`a..=z`).
pub const ALPHABET_LEN: usize = 26;

/// Handle to a node in a [`PrefixIndex`](super::PrefixIndex) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub(super) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Maps `a..=z` to an edge slot in `0..ALPHABET_LEN`.
#[inline]
pub fn letter_slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| (byte - b'a') as usize)
}

#[derive(Debug, Clone, Default)]
pub(super) struct TrieNode {
    pub word_end: bool,
    // 0 is the root, which is never anyone's child, so it marks an empty slot.
    children: [u32; ALPHABET_LEN],
}

impl TrieNode {
    #[inline]
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        match self.children[slot] {
            0 => None,
            id => Some(NodeId(id)),
        }
    }

    pub fn set_child(&mut self, slot: usize, child: NodeId) {
        debug_assert_ne!(child, NodeId::ROOT);
        self.children[slot] = child.0;
    }
}
