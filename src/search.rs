//! Exhaustive keyspace search for brute-force key recovery.
//!
//! Enumerates every key of a fixed length in lexicographic order,
//! decrypts the ciphertext with each candidate, and stops at the first
//! candidate whose decryption contains the expected word. Enumeration
//! order is deterministic, so identical inputs always report the same
//! key and attempt count.
//!
//! This is the dominant cost center: `26^key_length` candidates, each
//! requiring an O(|ciphertext|) transform. Sequential search past key
//! length 5-6 is impractical; see [`KeySpace::partitions`] for the
//! natural split point if the work is ever spread across workers.

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;

use crate::cipher::{transform, Direction};
use crate::keyspace::KeySpace;

/// Default length of the decrypted-text preview in a [`SearchResult::Found`].
pub const DEFAULT_PREVIEW_LEN: usize = 50;

/// Candidates between deadline checks. Keeps `Instant::now()` off the
/// per-candidate hot path.
const DEADLINE_CHECK_INTERVAL: u128 = 4_096;

/// Candidates between verbose progress lines.
const PROGRESS_INTERVAL: u128 = 1_048_576;

/// Errors produced while validating search arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Requested key length is below 1.
    #[error("Key length must be at least 1")]
    InvalidKeyLength,
}

/// Outcome of one search invocation. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchResult {
    /// The first candidate (in enumeration order) whose decryption
    /// contains the target word.
    Found {
        /// The matching key, in text form.
        key: String,
        /// Bounded preview of the decrypted text.
        preview: String,
        /// Candidates examined, 1-indexed and inclusive of the match.
        attempts: u128,
        /// Wall-clock time for the search.
        elapsed: Duration,
    },

    /// The whole space was enumerated without a match.
    Exhausted {
        /// Total candidates examined, `26^key_length`.
        attempts: u128,
        /// Wall-clock time for the search.
        elapsed: Duration,
    },

    /// The configured deadline expired before the space was exhausted.
    /// Distinct from [`Exhausted`](SearchResult::Exhausted): the attempt
    /// count here is partial.
    DeadlineExceeded {
        /// Candidates examined before the deadline hit.
        attempts: u128,
        /// Wall-clock time for the search.
        elapsed: Duration,
    },
}

impl SearchResult {
    /// Whether a key was recovered.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// Candidates examined, regardless of outcome.
    pub fn attempts(&self) -> u128 {
        match self {
            SearchResult::Found { attempts, .. }
            | SearchResult::Exhausted { attempts, .. }
            | SearchResult::DeadlineExceeded { attempts, .. } => *attempts,
        }
    }

    /// Wall-clock time for the search, regardless of outcome.
    pub fn elapsed(&self) -> Duration {
        match self {
            SearchResult::Found { elapsed, .. }
            | SearchResult::Exhausted { elapsed, .. }
            | SearchResult::DeadlineExceeded { elapsed, .. } => *elapsed,
        }
    }
}

/// Tuning knobs for a search invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum characters of decrypted text carried in a `Found` result.
    pub preview_len: usize,
    /// Abort the search after this much wall-clock time, reporting
    /// [`SearchResult::DeadlineExceeded`] with a partial attempt count.
    pub deadline: Option<Duration>,
    /// Print periodic progress to stderr.
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            deadline: None,
            verbose: false,
        }
    }
}

/// Searches the keyspace of `key_length` for a key whose decryption of
/// `ciphertext` contains `target_word` as a contiguous substring.
///
/// An empty `target_word` trivially matches the very first candidate;
/// degenerate but well-defined.
///
/// ```
/// use vigtool::search::search;
///
/// let result = search("RIJVS", "HELLO", 3).unwrap();
/// assert!(result.is_found());
/// ```
pub fn search(
    ciphertext: &str,
    target_word: &str,
    key_length: usize,
) -> Result<SearchResult, SearchError> {
    search_with_config(ciphertext, target_word, key_length, &SearchConfig::default())
}

/// [`search`] with explicit configuration.
pub fn search_with_config(
    ciphertext: &str,
    target_word: &str,
    key_length: usize,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let space = KeySpace::new(key_length)?;
    let total = space.len();
    let start = Instant::now();
    let mut attempts: u128 = 0;

    for key in space.iter() {
        attempts += 1;

        let decrypted = transform(ciphertext, &key, Direction::Decrypt);
        if decrypted.contains(target_word) {
            return Ok(SearchResult::Found {
                key: key.to_string(),
                preview: decrypted.chars().take(config.preview_len).collect(),
                attempts,
                elapsed: start.elapsed(),
            });
        }

        if attempts % DEADLINE_CHECK_INTERVAL == 0 {
            if let Some(deadline) = config.deadline {
                if start.elapsed() >= deadline {
                    return Ok(SearchResult::DeadlineExceeded {
                        attempts,
                        elapsed: start.elapsed(),
                    });
                }
            }
            if config.verbose && attempts % PROGRESS_INTERVAL == 0 {
                eprintln!("Checked {} of {} candidates...", attempts, total);
            }
        }
    }

    Ok(SearchResult::Exhausted {
        attempts,
        elapsed: start.elapsed(),
    })
}
