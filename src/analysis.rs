//! Manual frequency-analysis workbench state.
//!
//! Supports the interactive cryptanalysis mode: a mutable working buffer
//! derived from the ciphertext, letter-frequency counts over it, and the
//! small command grammar the REPL accepts (`X=Y`, `reset`, `exit`). The
//! loop itself lives in the CLI layer; everything here is plain state
//! that can be driven from tests.

use thiserror::Error;

use crate::alphabet::{position, symbol, ALPHABET_LEN};

/// Letter counts over a text, ignoring non-alphabet characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
    total: usize,
}

impl FrequencyTable {
    /// Counts the alphabet symbols in `text`.
    pub fn of(text: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        let mut total = 0usize;
        for c in text.chars() {
            if let Some(idx) = position(c) {
                counts[idx as usize] += 1;
                total += 1;
            }
        }
        Self { counts, total }
    }

    /// Occurrences of one alphabet symbol. Zero for non-alphabet input.
    pub fn count(&self, c: char) -> usize {
        position(c).map_or(0, |idx| self.counts[idx as usize])
    }

    /// Total alphabet symbols counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent symbols as (symbol, count, percentage),
    /// descending by count. Symbols that never occur are omitted; ties
    /// break alphabetically so the ordering is deterministic.
    pub fn top(&self, n: usize) -> Vec<(char, usize, f64)> {
        let mut entries: Vec<(char, usize)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(idx, &count)| (symbol(idx as u8), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(c, count)| {
                let percent = if self.total == 0 {
                    0.0
                } else {
                    count as f64 / self.total as f64 * 100.0
                };
                (c, count, percent)
            })
            .collect()
    }
}

/// Mutable working buffer for manual substitution.
///
/// Keeps the original ciphertext alongside the current text so the user
/// can always start over. Applied substitutions are written in lowercase
/// while untouched ciphertext stays uppercase, keeping the two visually
/// distinct while the analysis is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench {
    original: String,
    current: String,
}

impl Workbench {
    /// Starts a workbench over the (upper-cased) ciphertext.
    pub fn new(ciphertext: &str) -> Self {
        let original = ciphertext.to_uppercase();
        Self {
            current: original.clone(),
            original,
        }
    }

    /// The untouched ciphertext.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The working text with all substitutions applied so far.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Replaces every occurrence of ciphertext letter `from` with the
    /// guess `to`, written in lowercase to mark it as a substitution.
    pub fn replace(&mut self, from: char, to: char) {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_lowercase();
        self.current = self.current.replace(from, &to.to_string());
    }

    /// Discards all substitutions.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// Frequency counts over the current working text.
    pub fn frequencies(&self) -> FrequencyTable {
        FrequencyTable::of(&self.current)
    }

    /// The final text, upper-cased back to a uniform case.
    pub fn finished(&self) -> String {
        self.current.to_uppercase()
    }
}

/// Errors produced while parsing a workbench command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchParseError {
    /// Input was neither a replacement, `reset`, nor `exit`.
    #[error("Unrecognized command '{0}'. Use 'X=Y', 'reset', or 'exit'")]
    Unrecognized(String),

    /// A replacement must be exactly one character on each side of `=`.
    #[error("Invalid replacement. Format: A=E")]
    MalformedReplacement,
}

/// A parsed workbench command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbenchCommand {
    /// Replace every occurrence of the first letter with the second.
    Replace(char, char),
    /// Restore the original ciphertext.
    Reset,
    /// Leave the workbench.
    Exit,
}

impl WorkbenchCommand {
    /// Parses user input. Keywords are case-insensitive; replacements
    /// accept surrounding whitespace (`a = e` works).
    pub fn parse(input: &str) -> Result<Self, WorkbenchParseError> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("exit") {
            return Ok(Self::Exit);
        }
        if trimmed.eq_ignore_ascii_case("reset") {
            return Ok(Self::Reset);
        }

        if let Some((lhs, rhs)) = trimmed.split_once('=') {
            let mut lhs = lhs.trim().chars();
            let mut rhs = rhs.trim().chars();
            return match (lhs.next(), lhs.next(), rhs.next(), rhs.next()) {
                (Some(from), None, Some(to), None) => Ok(Self::Replace(from, to)),
                _ => Err(WorkbenchParseError::MalformedReplacement),
            };
        }

        Err(WorkbenchParseError::Unrecognized(trimmed.to_string()))
    }
}
