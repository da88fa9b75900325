//! Manual frequency-analysis command (interactive workbench).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::analysis::{Workbench, WorkbenchCommand};

use super::{read_text, CommandExecutor};

/// Analyze ciphertext by hand: letter frequencies plus manual substitution.
///
/// Shows the five most frequent letters of the working text, then reads
/// commands until 'exit': 'X=Y' replaces X with Y (written lowercase so
/// applied guesses stand out), 'reset' restores the original ciphertext.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Ciphertext to analyze (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self) -> Result<()> {
        let ciphertext = read_text(self.text.as_deref())?;
        let mut workbench = Workbench::new(&ciphertext);

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            show_state(&workbench);

            print!("> ");
            io::stdout().flush().context("Failed to flush stdout")?;

            let line = match lines.next() {
                Some(line) => line.context("Failed to read command")?,
                None => break, // EOF ends the session like 'exit'
            };

            match WorkbenchCommand::parse(&line) {
                Ok(WorkbenchCommand::Exit) => break,
                Ok(WorkbenchCommand::Reset) => workbench.reset(),
                Ok(WorkbenchCommand::Replace(from, to)) => workbench.replace(from, to),
                Err(e) => eprintln!("{}", e),
            }
        }

        println!();
        println!("Final text:");
        println!("{}", workbench.finished());
        Ok(())
    }
}

/// Prints the working text and its top letter frequencies.
fn show_state(workbench: &Workbench) {
    println!("--- Manual substitution (frequency analysis) ---");
    println!();
    println!("Current text:");
    println!("{}", workbench.current());
    println!("{}", "-".repeat(40));

    println!("Top 5 letters in the text:");
    for (symbol, _count, percent) in workbench.frequencies().top(5) {
        println!("'{}': {:.1}%", symbol, percent);
    }

    println!();
    println!("Hint: most frequent in German: E, N, I, S, R");
    println!("{}", "-".repeat(40));
    println!("Commands: 'X=Y' (replace X with Y), 'reset' (original), 'exit' (finish)");
}
