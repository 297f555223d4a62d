//! Status reporting module
//!
//! Colored status lines and run statistics. Everything here goes to standard error
//! so standard output carries nothing but anagram groups.

use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print an error followed by its chain of causes
pub fn print_error_chain(err: &(dyn std::error::Error + 'static)) {
    print_error(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        print_error(&format!("  Caused by: {}", cause));
        source = cause.source();
    }
}

/// Counters collected over one run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub input_bytes: u64,
    pub lines_read: u64,
    pub words_loaded: u64,
    pub distinct_keys: u64,
    pub groups_written: u64,
    pub words_written: u64,
    pub load_failed: bool,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            input_bytes: 0,
            lines_read: 0,
            words_loaded: 0,
            distinct_keys: 0,
            groups_written: 0,
            words_written: 0,
            load_failed: false,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Words that ended up in singleton groups
    pub fn singletons(&self) -> u64 {
        self.words_loaded.saturating_sub(self.words_written)
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                    GROUPING COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Input size:     ".green(), ByteSize(self.input_bytes));
        eprintln!("  {} {}", "Lines read:     ".green(), format_number(self.lines_read));
        eprintln!("  {} {}", "Words loaded:   ".green(), format_number(self.words_loaded));
        eprintln!("  {} {}", "Distinct keys:  ".green(), format_number(self.distinct_keys));
        eprintln!("  {} {}", "Singletons:     ".yellow(), format_number(self.singletons()));
        eprintln!(
            "  {} {}",
            "Groups written: ".green().bold(),
            format_number(self.groups_written).green().bold()
        );
        eprintln!("  {} {}", "Words written:  ".green(), format_number(self.words_written));

        if self.load_failed {
            eprintln!("  {} {}", "Load:           ".red(), "failed".red());
        }

        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 1 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_singletons() {
        let mut stats = RunStats::new();
        stats.words_loaded = 10;
        stats.words_written = 7;
        assert_eq!(stats.singletons(), 3);
    }
}
