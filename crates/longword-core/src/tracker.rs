use serde::Serialize;

/// A word together with its length in letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub word: String,
    pub len: usize,
}

/// Running top-2 of confirmed concatenated words.
///
/// Only a strictly longer word displaces a kept one, so among words of equal
/// length the first offered wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTracker {
    longest: Option<Ranked>,
    second_longest: Option<Ranked>,
    total: usize,
}

impl CandidateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, word: &str, len: usize) {
        self.total += 1;
        if len > rank_len(&self.longest) {
            self.second_longest = self.longest.take();
            self.longest = Some(Ranked {
                word: word.to_string(),
                len,
            });
        } else if len > rank_len(&self.second_longest) {
            self.second_longest = Some(Ranked {
                word: word.to_string(),
                len,
            });
        }
    }

    pub fn longest(&self) -> Option<&Ranked> {
        self.longest.as_ref()
    }

    pub fn second_longest(&self) -> Option<&Ranked> {
        self.second_longest.as_ref()
    }

    /// Every offered word, kept or not.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn into_parts(self) -> (Option<Ranked>, Option<Ranked>, usize) {
        (self.longest, self.second_longest, self.total)
    }
}

fn rank_len(slot: &Option<Ranked>) -> usize {
    slot.as_ref().map_or(0, |r| r.len)
}
