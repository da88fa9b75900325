//! Brute-force key recovery command.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::search::{search_with_config, SearchConfig, SearchResult};

use super::{read_text, CommandExecutor};

/// Recover a key by exhaustive search over all keys of a given length.
///
/// Every candidate decryption is checked for the expected word; the
/// search stops at the first match in lexicographic key order.
/// WARNING: the keyspace grows as 26^length - lengths beyond 5-6 are
/// impractical.
#[derive(Args, Debug)]
pub struct CrackCommand {
    /// Ciphertext to attack (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Word expected to appear in the decrypted text (stop condition)
    #[arg(short, long)]
    pub word: String,

    /// Key length to test
    #[arg(short, long)]
    pub length: usize,

    /// Abort after this many seconds, reporting partial attempt counts
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print periodic progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for CrackCommand {
    fn execute(&self) -> Result<()> {
        let ciphertext = read_text(self.text.as_deref())?.to_uppercase();
        let word = self.word.to_uppercase();

        let config = SearchConfig {
            deadline: self.deadline_secs.map(Duration::from_secs),
            verbose: self.verbose,
            ..Default::default()
        };

        if !self.json {
            eprintln!("Starting attack... this may take a while.");
        }

        let result = search_with_config(&ciphertext, &word, self.length, &config)
            .context("Search arguments are invalid")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .context("Failed to serialize search result")?
            );
            return Ok(());
        }

        match &result {
            SearchResult::Found {
                key,
                preview,
                attempts,
                elapsed,
            } => {
                println!("Key found: {}", key);
                println!("Text: {}...", preview);
                println!("Elapsed time: {:.4} seconds", elapsed.as_secs_f64());
                println!("Keys checked: {}", attempts);
            }
            SearchResult::Exhausted { attempts, elapsed } => {
                println!("Nothing found after {} attempts.", attempts);
                println!("Elapsed time: {:.4} seconds", elapsed.as_secs_f64());
            }
            SearchResult::DeadlineExceeded { attempts, elapsed } => {
                println!(
                    "Deadline reached after {} attempts (keyspace not exhausted).",
                    attempts
                );
                println!("Elapsed time: {:.4} seconds", elapsed.as_secs_f64());
            }
        }

        Ok(())
    }
}
