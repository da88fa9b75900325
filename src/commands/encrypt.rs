//! Encryption command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cipher::{encrypt, Key};

use super::{read_text, CommandExecutor};

/// Encrypt text with a Vigenère key.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Text to encrypt (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Key (alphabet letters only)
    #[arg(short, long)]
    pub key: String,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let text = read_text(self.text.as_deref())?.to_uppercase();
        let key = Key::new(&self.key).context("Invalid key")?;

        println!("{}", encrypt(&text, &key));
        Ok(())
    }
}
