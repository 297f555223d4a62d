//! # Anagram Groups
//!
//! Reads a wordlist and prints every group of words that are anagrams of one another.
//!
//! ## Pipeline
//!
//! - **Load**: one word per line, trimmed and lowercased, blank lines dropped
//! - **Key**: each word's characters sorted by code point
//! - **Group**: words bucketed by key, in input order
//! - **Emit**: groups with two or more words, sorted internally and against each other
//!
//! ## Usage
//!
//! ```bash
//! # Print anagram groups from words-utf8.txt
//! anagram-groups
//!
//! # Use another wordlist and write the groups to a file
//! anagram-groups -i /usr/share/dict/words -o anagrams.txt --stats
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use anagram_groups::processor::{Processor, ProcessorConfig};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ProcessorConfig {
//!     input: PathBuf::from("words-utf8.txt"),
//!     output: None,
//!     buffer_size: 1024 * 1024,
//!     show_stats: false,
//! };
//!
//! let processor = Processor::new(config);
//! let stdout = std::io::stdout();
//! let stats = processor.run(stdout.lock())?;
//! eprintln!("{} groups", stats.groups_written);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod group;
pub mod key;
pub mod loader;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use group::AnagramGroups;
pub use key::{canonical_key, AnagramKey};
pub use loader::{load_words, LoadError, WordList};
pub use processor::{Processor, ProcessorConfig};
