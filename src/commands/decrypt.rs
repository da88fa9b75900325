//! Decryption command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cipher::{decrypt, Key};

use super::{read_text, CommandExecutor};

/// Decrypt text with a known Vigenère key.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Text to decrypt (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Key (alphabet letters only)
    #[arg(short, long)]
    pub key: String,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let text = read_text(self.text.as_deref())?.to_uppercase();
        let key = Key::new(&self.key).context("Invalid key")?;

        println!("{}", decrypt(&text, &key));
        Ok(())
    }
}
