//! Wordlist loading
//!
//! Reads a UTF-8 wordlist line by line and normalizes every line into a word.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Failure to read a wordlist
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path:?} at line {line}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid UTF-8 in {path:?} at line {line}")]
    InvalidUtf8 { path: PathBuf, line: u64 },
}

/// Words loaded from a file, in file order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
    /// Physical lines read, blank ones included
    pub lines_read: u64,
    pub bytes_read: u64,
}

/// Trim and lowercase a raw line; blank lines yield `None`
#[inline]
pub fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// A strict UTF-8 line iterator
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The terminator and a leading byte
/// order mark are stripped.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_buffer: Vec<u8>,
    line_number: u64,
    bytes_read: u64,
    /// The previous line ended in `\r`; a following `\n` belongs to it
    skip_lf: bool,
}

/// An error produced by [`LineReader`] before the file path is attached
#[derive(Debug)]
pub enum LineError {
    Io(std::io::Error),
    InvalidUtf8,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(64 * 1024, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, inner),
            line_buffer: Vec::with_capacity(256),
            line_number: 0,
            bytes_read: 0,
            skip_lf: false,
        }
    }

    /// Number of the line most recently returned (1-based)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn fill(reader: &mut BufReader<R>) -> io::Result<&[u8]> {
        loop {
            match reader.fill_buf() {
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(reader.buffer())
    }

    /// Read one line without its terminator into `line_buffer`.
    /// Returns false at end of input when nothing was read.
    fn read_line_bytes(&mut self) -> io::Result<bool> {
        if self.skip_lf {
            self.skip_lf = false;
            if Self::fill(&mut self.reader)?.first() == Some(&b'\n') {
                self.reader.consume(1);
                self.bytes_read += 1;
            }
        }

        let mut read_any = false;
        loop {
            let available = Self::fill(&mut self.reader)?;
            if available.is_empty() {
                return Ok(read_any);
            }
            read_any = true;

            match memchr::memchr2(b'\n', b'\r', available) {
                Some(i) => {
                    let terminator = available[i];
                    self.line_buffer.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    self.bytes_read += i as u64 + 1;
                    self.skip_lf = terminator == b'\r';
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.line_buffer.extend_from_slice(available);
                    self.reader.consume(len);
                    self.bytes_read += len as u64;
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.read_line_bytes() {
            Ok(false) => return None,
            Ok(true) => {}
            Err(e) => return Some(Err(LineError::Io(e))),
        }

        self.line_number += 1;

        let mut bytes = self.line_buffer.as_slice();
        if self.line_number == 1 {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }

        match std::str::from_utf8(bytes) {
            Ok(s) => Some(Ok(s.to_string())),
            Err(_) => Some(Err(LineError::InvalidUtf8)),
        }
    }
}

/// Load and normalize every word of a wordlist
///
/// Any read or decoding failure fails the whole load; no partial list is returned.
pub fn load_words(path: &Path) -> Result<WordList, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_words(file, path)
}

/// Load words from any reader; `path` is only used in error messages
pub fn read_words<R: Read>(inner: R, path: &Path) -> Result<WordList, LoadError> {
    let mut lines = LineReader::new(inner);
    let mut words = Vec::new();

    while let Some(line) = lines.next() {
        let line = line.map_err(|e| match e {
            LineError::Io(source) => LoadError::Read {
                path: path.to_path_buf(),
                line: lines.line_number() + 1,
                source,
            },
            LineError::InvalidUtf8 => LoadError::InvalidUtf8 {
                path: path.to_path_buf(),
                line: lines.line_number(),
            },
        })?;

        if let Some(word) = normalize(&line) {
            words.push(word);
        }
    }

    log::debug!(
        "Read {} lines ({} bytes) from {:?}, {} words",
        lines.line_number(),
        lines.bytes_read(),
        path,
        words.len()
    );

    Ok(WordList {
        words,
        lines_read: lines.line_number(),
        bytes_read: lines.bytes_read(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Listen \t"), Some("listen".to_string()));
        assert_eq!(normalize("ÉTÉ"), Some("été".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \t "), None);
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        // Trimming covers Unicode White_Space, not just ASCII
        assert_eq!(normalize("\u{00A0}Word\u{00A0}"), Some("word".to_string()));
        assert_eq!(normalize("\u{3000}tea\u{2003}"), Some("tea".to_string()));
        assert_eq!(normalize("\u{00A0}\u{3000}"), None);
        // Interior whitespace is kept
        assert_eq!(normalize(" ice cream "), Some("ice cream".to_string()));
    }

    #[test]
    fn test_load_words_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Listen").unwrap();
        writeln!(file, " silent ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "enlist").unwrap();
        writeln!(file, "cat").unwrap();

        let list = load_words(file.path()).unwrap();

        assert_eq!(list.words, vec!["listen", "silent", "enlist", "cat"]);
        assert_eq!(list.lines_read, 5);
    }

    #[test]
    fn test_crlf_and_bom() {
        let data = b"\xEF\xBB\xBFab\r\nBA\r\n\r\nab";
        let list = read_words(&data[..], Path::new("mem")).unwrap();

        assert_eq!(list.words, vec!["ab", "ba", "ab"]);
        assert_eq!(list.lines_read, 4);
        assert_eq!(list.bytes_read, data.len() as u64);
    }

    #[test]
    fn test_lone_cr_terminates_lines() {
        let data = b"ab\rBa\rcat\n";
        let list = read_words(&data[..], Path::new("mem")).unwrap();

        assert_eq!(list.words, vec!["ab", "ba", "cat"]);
        assert_eq!(list.lines_read, 3);
        assert_eq!(list.bytes_read, data.len() as u64);
    }

    #[test]
    fn test_mixed_terminators() {
        let data = b"one\rtwo\r\nthree\n\r\rfour";
        let lines: Vec<String> = LineReader::new(&data[..]).map(|r| r.unwrap()).collect();

        assert_eq!(lines, vec!["one", "two", "three", "", "", "four"]);
    }

    #[test]
    fn test_crlf_across_buffer_refills() {
        let data = b"ab\r\nba\r\n\r\ndog\rgod";
        for capacity in 1..=4 {
            let mut reader = LineReader::with_capacity(capacity, &data[..]);
            let lines: Vec<String> = reader.by_ref().map(|r| r.unwrap()).collect();

            assert_eq!(lines, vec!["ab", "ba", "", "dog", "god"], "capacity {capacity}");
            assert_eq!(reader.bytes_read(), data.len() as u64);
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn test_invalid_utf8_fails_whole_load() {
        let data = b"ab\nba\n\xFF\xFEzz\ncat\n";
        let err = read_words(&data[..], Path::new("mem")).unwrap_err();

        match err {
            LoadError::InvalidUtf8 { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let list = read_words(&b""[..], Path::new("mem")).unwrap();
        assert!(list.words.is_empty());
        assert_eq!(list.lines_read, 0);
    }
}
