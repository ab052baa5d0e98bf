//! Wordlist management module
//!
//! Handles loading and querying the reference wordlist of known-weak
//! passwords.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// A loaded set of known-weak passwords.
///
/// Comparison is exact and case-sensitive, against lines trimmed of
/// trailing whitespace. Load once and reuse across audits if repeated
/// full-file reads matter; nothing depends on caching.
#[derive(Debug, Clone)]
pub struct Wordlist {
    entries: HashSet<String>,
}

impl Wordlist {
    /// Loads a wordlist from a text file, one candidate password per line.
    ///
    /// Decoding is permissive: lines that are not valid UTF-8 are skipped
    /// (common wordlists such as rockyou.txt carry latin-1 stragglers).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;

        let entries: HashSet<String> = bytes
            .split(|&b| b == b'\n')
            .filter_map(|line| std::str::from_utf8(line).ok())
            .map(|l| l.trim_end())
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();

        tracing::debug!(count = entries.len(), path = %path.display(), "wordlist loaded");

        Ok(Self { entries })
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, password: &SecretString) -> bool {
        self.entries.contains(password.expose_secret())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_load_file_not_found() {
        let result = Wordlist::load("/nonexistent/path/wordlist.txt");

        match result {
            Err(WordlistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_load_success() {
        let temp_file = setup_with_tempfile(&["letmein", "qwerty123"]);

        let wordlist = Wordlist::load(temp_file.path()).expect("load should succeed");
        assert_eq!(wordlist.len(), 2);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let temp_file = setup_with_tempfile(&["letmein", "qwerty123"]);
        let wordlist = Wordlist::load(temp_file.path()).unwrap();

        assert!(wordlist.contains(&secret("letmein")));
        assert!(!wordlist.contains(&secret("Letmein")));
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "letmein   \r\nqwerty123\t\n").unwrap();

        let wordlist = Wordlist::load(temp_file.path()).unwrap();
        assert!(wordlist.contains(&secret("letmein")));
        assert!(wordlist.contains(&secret("qwerty123")));
    }

    #[test]
    fn test_undecodable_lines_are_skipped() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"letmein\n\xff\xfe\xfd\nqwerty123\n").unwrap();

        let wordlist = Wordlist::load(temp_file.path()).unwrap();
        assert_eq!(wordlist.len(), 2);
        assert!(wordlist.contains(&secret("letmein")));
    }

    #[test]
    fn test_empty_file_yields_empty_wordlist() {
        let temp_file = NamedTempFile::new().unwrap();

        let wordlist = Wordlist::load(temp_file.path()).unwrap();
        assert!(wordlist.is_empty());
        assert!(!wordlist.contains(&secret("anything")));
    }
}
