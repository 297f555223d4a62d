//! Anagram Groups - print the anagram classes of a wordlist
//!
//! Main entry point for the command-line application.

use clap::Parser;
use env_logger::Env;
use std::process;

use anagram_groups::cli::Args;
use anagram_groups::processor::{Processor, ProcessorConfig};
use anagram_groups::progress::print_error_chain;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG wins over the flags
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error_chain(&*e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ProcessorConfig::from_args(&args)?;
    log::debug!("Configuration: {:?}", config);

    let processor = Processor::new(config);
    processor.process()?;

    Ok(())
}
