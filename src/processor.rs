//! Core processing pipeline
//!
//! Runs load, group, filter, sort and print in a single pass.

use crate::cli::Args;
use crate::group::AnagramGroups;
use crate::loader::{load_words, WordList};
use crate::output::{create_output_file, GroupWriter};
use crate::progress::{print_error_chain, RunStats};

use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub input: PathBuf,
    /// `None` writes to standard output
    pub output: Option<PathBuf>,
    pub buffer_size: usize,
    pub show_stats: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            buffer_size: args.parse_buffer_size()?,
            show_stats: args.stats,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Run against the configured destination (file or standard output)
    pub fn process(&self) -> anyhow::Result<RunStats> {
        let stats = match self.config.output {
            Some(ref path) => {
                let file = create_output_file(path)?;
                self.run(file)?
            }
            None => {
                let stdout = std::io::stdout();
                self.run(stdout.lock())?
            }
        };

        if self.config.show_stats {
            stats.print_summary();
        }

        Ok(stats)
    }

    /// Run the whole pipeline, writing group lines to `out`
    ///
    /// A wordlist that cannot be loaded is reported and treated as empty; only
    /// output failures are returned as errors.
    pub fn run<W: Write>(&self, out: W) -> anyhow::Result<RunStats> {
        let mut stats = RunStats::new();

        log::debug!("Loading {:?}", self.config.input);
        let list = match load_words(&self.config.input) {
            Ok(list) => list,
            Err(e) => {
                print_error_chain(&e);
                log::warn!("Continuing with an empty wordlist");
                stats.load_failed = true;
                WordList::default()
            }
        };

        stats.input_bytes = list.bytes_read;
        stats.lines_read = list.lines_read;
        stats.words_loaded = list.words.len() as u64;
        log::info!("Loaded {} words from {:?}", list.words.len(), self.config.input);

        let groups = AnagramGroups::from_words(list.words);
        stats.distinct_keys = groups.len() as u64;
        log::debug!("Grouped {} words under {} keys", groups.word_count(), groups.len());

        let lines = groups.into_lines();
        log::debug!("{} groups with more than one word", lines.len());

        let mut writer = GroupWriter::new(out, self.config.buffer_size);
        writer
            .write_lines(&lines)
            .context("Failed to write anagram groups")?;
        writer.flush().context("Failed to flush output")?;

        stats.groups_written = writer.lines_written();
        stats.words_written = writer.words_written();
        log::info!(
            "Wrote {} groups ({} words) in {:?}",
            stats.groups_written,
            stats.words_written,
            stats.elapsed()
        );

        Ok(stats)
    }
}
