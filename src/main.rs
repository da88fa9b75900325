//! Vigtool - Vigenère cipher toolkit
//!
//! A CLI for encrypting, decrypting, and breaking Vigenère ciphertext,
//! either by hand (frequency analysis) or by exhaustive key search.

use anyhow::Result;
use clap::{Parser, Subcommand};

use vigtool::commands::{
    AnalyzeCommand, CommandExecutor, CrackCommand, DecryptCommand, EncryptCommand,
};

/// Vigtool - Vigenère cipher toolkit
///
/// Works over the uppercase alphabet A-Z; everything else passes through
/// untouched. Text input is upper-cased before the cipher sees it.
#[derive(Parser)]
#[command(name = "vigtool")]
#[command(version)]
#[command(about = "Encrypt, decrypt, and break Vigenère ciphers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key
    Encrypt(EncryptCommand),

    /// Decrypt text with a known key
    Decrypt(DecryptCommand),

    /// Manual cryptanalysis: frequencies plus interactive substitution
    Analyze(AnalyzeCommand),

    /// Brute-force key recovery over all keys of a given length
    Crack(CrackCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command: &dyn CommandExecutor = match &cli.command {
        Commands::Encrypt(cmd) => cmd,
        Commands::Decrypt(cmd) => cmd,
        Commands::Analyze(cmd) => cmd,
        Commands::Crack(cmd) => cmd,
    };

    command.execute()
}
