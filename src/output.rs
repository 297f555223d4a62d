//! Output management module
//!
//! Writes anagram group lines through a buffered, counting writer.

use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered line writer that counts what it emits
pub struct GroupWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    words_written: u64,
    bytes_written: u64,
}

impl<W: Write> GroupWriter<W> {
    pub fn new(inner: W, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            words_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one group line followed by a newline
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.words_written += line.split(' ').count() as u64;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    /// Write every line in order
    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// Create (or truncate) an output file
pub fn create_output_file(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Cannot create output file {:?}", path))
}
