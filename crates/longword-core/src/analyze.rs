//! End-to-end analysis of a word list.
//!
//! Two phases with a hard barrier between them:
//!
//! 1. every word goes into the [`PrefixIndex`], and words passing a known
//!    prefix word are queued with their missing suffixes;
//! 2. the queue is resolved against the finished index and confirmed words
//!    are ranked.
//!
//! Words are inserted in sorted order so that every prefix word is already
//! in the index when a longer word built on it is inserted. The input itself
//! may come in any order.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::index::{validate_word, IndexError, PrefixIndex};
use crate::resolve::{Match, PendingQueue, Resolution, ResolveOrder};
use crate::settings::{InputSettings, InvalidLinePolicy, Settings};
use crate::tracker::{CandidateTracker, Ranked};
use crate::wordlist::{classify, Line};

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: IndexError,
    },

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Counters from reading and indexing the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    /// Distinct words in the index.
    pub words: usize,
    /// Lines below the minimum length.
    pub skipped: usize,
    /// Lines with characters outside `a..=z`.
    pub rejected: usize,
    pub duplicates: usize,
    /// Words queued for resolution.
    pub candidates: usize,
    pub nodes: usize,
}

/// A fully built index together with its resolution queue.
pub struct Vocabulary {
    index: PrefixIndex,
    pending: PendingQueue,
    stats: ScanStats,
}

impl Vocabulary {
    /// Build from words given in any order.
    pub fn from_words<I, S>(words: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lines = words.len();
        Self::insert_sorted(
            words,
            ScanStats {
                lines,
                ..ScanStats::default()
            },
        )
    }

    /// Build from a file with one word per line.
    pub fn open(path: &Path, input: &InputSettings) -> Result<Self, AnalyzeError> {
        let file = File::open(path).map_err(|source| AnalyzeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(BufReader::new(file), input)
    }

    /// Build from one word per line.
    pub fn read<R: BufRead>(reader: R, input: &InputSettings) -> Result<Self, AnalyzeError> {
        let _span = debug_span!("read_words", min_word_len = input.min_word_len).entered();

        let mut stats = ScanStats::default();
        let mut words = Vec::new();
        for (i, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = i + 1;
            stats.lines += 1;

            let word = match classify(&raw, input.min_word_len) {
                Line::Short => {
                    stats.skipped += 1;
                    continue;
                }
                Line::Word(word) => word,
            };
            if let Err(e) = validate_word(&word) {
                match input.on_invalid {
                    InvalidLinePolicy::Skip => {
                        warn!(line, "skipping invalid word: {e}");
                        stats.rejected += 1;
                        continue;
                    }
                    InvalidLinePolicy::Fail => {
                        return Err(AnalyzeError::InvalidWord { line, source: e })
                    }
                }
            }
            words.push(word.into_owned());
        }
        debug!(
            lines = stats.lines,
            skipped = stats.skipped,
            rejected = stats.rejected
        );

        Ok(Self::insert_sorted(words, stats)?)
    }

    fn insert_sorted(mut words: Vec<String>, mut stats: ScanStats) -> Result<Self, IndexError> {
        let _span = debug_span!("insert_words", words = words.len()).entered();

        words.sort_unstable();
        let before = words.len();
        words.dedup();
        stats.duplicates += before - words.len();

        let mut index = PrefixIndex::new();
        let mut pending = PendingQueue::new();
        for word in words {
            let missing = index.insert(&word)?;
            pending.push(word, missing);
        }

        stats.words = index.len();
        stats.candidates = pending.len();
        stats.nodes = index.node_count();
        debug!(
            words = stats.words,
            candidates = stats.candidates,
            nodes = stats.nodes
        );

        Ok(Self {
            index,
            pending,
            stats,
        })
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn resolve(&self, order: ResolveOrder) -> Resolution {
        self.pending.resolve_all(&self.index, order)
    }

    /// Resolve and rank. `list_matches` keeps every confirmed word in the
    /// report, in resolution order.
    pub fn report(&self, order: ResolveOrder, list_matches: bool) -> Report {
        let resolution = self.resolve(order);

        let mut tracker = CandidateTracker::new();
        for m in &resolution.matches {
            tracker.offer(&m.word, m.len);
        }
        let (longest, second_longest, total) = tracker.into_parts();

        Report {
            longest,
            second_longest,
            total,
            scan: self.stats,
            matches: if list_matches {
                resolution.matches
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub longest: Option<Ranked>,
    pub second_longest: Option<Ranked>,
    pub total: usize,
    pub scan: ScanStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<Match>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Longest concatenated word is : {}",
            word_or_null(&self.longest)
        )?;
        writeln!(
            f,
            "2nd longest concatenated word is : {}",
            word_or_null(&self.second_longest)
        )?;
        write!(
            f,
            "There are {} concatenated words in the file.",
            self.total
        )
    }
}

fn word_or_null(slot: &Option<Ranked>) -> &str {
    slot.as_ref().map_or("NULL", |r| r.word.as_str())
}

pub fn analyze<R: BufRead>(reader: R, settings: &Settings) -> Result<Report, AnalyzeError> {
    let vocab = Vocabulary::read(reader, &settings.input)?;
    Ok(vocab.report(settings.resolve.order, settings.report.list_matches))
}

pub fn analyze_file(path: &Path, settings: &Settings) -> Result<Report, AnalyzeError> {
    let vocab = Vocabulary::open(path, &settings.input)?;
    Ok(vocab.report(settings.resolve.order, settings.report.list_matches))
}
