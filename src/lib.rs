//! # Vigtool - Vigenère cipher toolkit
//!
//! A pedagogical toolkit for the Vigenère polyalphabetic substitution
//! cipher: encryption, decryption, manual frequency-analysis
//! cryptanalysis, and automated brute-force key recovery.
//!
//! The cipher operates over a fixed 26-symbol uppercase alphabet.
//! Non-alphabet characters (spaces, punctuation, digits) pass through
//! the transform unchanged and do not consume a key position. The
//! Vigenère cipher is historically broken; nothing here makes a
//! security claim.
//!
//! ## Example
//!
//! Encrypt and decrypt with a key:
//!
//! ```
//! use vigtool::{decrypt, encrypt, Key};
//!
//! let key = Key::new("KEY").unwrap();
//!
//! let ciphertext = encrypt("HELLO", &key);
//! assert_eq!(ciphertext, "RIJVS");
//! assert_eq!(decrypt(&ciphertext, &key), "HELLO");
//! ```
//!
//! Recover an unknown key by exhaustive search:
//!
//! ```
//! use vigtool::search::{search, SearchResult};
//!
//! let result = search("RIJVS", "HELLO", 3).unwrap();
//! match result {
//!     SearchResult::Found { key, attempts, .. } => {
//!         assert_eq!(key, "KEY");
//!         assert_eq!(attempts, 6_889);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: the fixed uppercase alphabet and position arithmetic
//! - [`cipher`]: the pure Vigenère transform and key validation
//! - [`keyspace`]: lazy lexicographic enumeration of fixed-length keys
//! - [`search`]: exhaustive brute-force key recovery
//! - [`analysis`]: frequency table and manual-substitution workbench
//! - [`commands`]: CLI command implementations

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod commands;
pub mod keyspace;
pub mod search;

// Re-export commonly used types at the crate root
pub use analysis::{FrequencyTable, Workbench, WorkbenchCommand};
pub use cipher::{decrypt, encrypt, transform, CipherError, Direction, Key};
pub use keyspace::{KeyIter, KeySpace};
pub use search::{search, search_with_config, SearchConfig, SearchError, SearchResult};
