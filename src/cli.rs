//! Command-line interface definition for anagram-groups
//!
//! Provides argument parsing and validation for the anagram grouping tool.

use clap::Parser;
use std::path::PathBuf;

/// Group a wordlist into anagram classes
///
/// Every group of two or more words sharing the same letters is printed on one line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "anagram-groups",
    author = "m0h1nd4",
    version,
    about = "Group the words of a wordlist into anagram classes",
    long_about = r#"
Reads a wordlist (UTF-8, one word per line), lowercases and trims every line,
and prints each group of words that are anagrams of one another.

Words inside a group are sorted, groups are sorted by their first word, and
groups with a single member are omitted.

EXAMPLES:
    # Read words-utf8.txt from the current directory
    anagram-groups

    # Read another wordlist
    anagram-groups -i /usr/share/dict/words

    # Write the groups to a file and show statistics
    anagram-groups -i words.txt -o anagrams.txt --stats
"#
)]
pub struct Args {
    /// Input wordlist path
    #[arg(short, long, value_name = "PATH", default_value = "words-utf8.txt")]
    pub input: PathBuf,

    /// Write the groups to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show statistics on standard error after the run
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - only errors are reported
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Buffer size for writing the output (default: 1MB)
    #[arg(long, value_name = "SIZE", default_value = "1MB")]
    pub buffer_size: String,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }

    /// Log level implied by the quiet/verbose flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    if num == 0 {
        anyhow::bail!("Buffer size must be greater than zero");
    }

    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size too large: '{}'", size_str))
}
