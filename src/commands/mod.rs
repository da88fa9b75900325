//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. The library core never prompts or prints; everything
//! user-facing lives here.

mod analyze;
mod crack;
mod decrypt;
mod encrypt;

pub use analyze::AnalyzeCommand;
pub use crack::CrackCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;

use std::io::{self, Read};

use anyhow::{Context, Result};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Returns the text argument, or reads it from stdin when absent.
fn read_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            eprintln!("Reading text from stdin (Ctrl+D to finish):");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer.trim().to_string())
        }
    }
}
