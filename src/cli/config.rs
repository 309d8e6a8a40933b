//! TOML configuration file support.
//!
//! Reader and writer settings can be kept in a file instead of repeating
//! flags:
//!
//! ```toml
//! # isatab.toml
//! [read]
//! quote = "'"
//! comment_prefix = "%"
//!
//! [write]
//! quote = "\""
//! line_terminator = "crlf"
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{bail, Context, Result};
use isatab::reader::ReaderConfig;
use isatab::writer::{LineTerminator, WriterConfig};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for isatab.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Settings for reading tables.
    #[serde(default)]
    pub read: ReadConfig,

    /// Settings for writing tables.
    #[serde(default)]
    pub write: WriteConfig,
}

/// Configuration for reading investigation, study and assay files.
#[derive(Debug, Default, Deserialize)]
pub struct ReadConfig {
    /// Quote character around cells.
    pub quote: Option<char>,

    /// Lines starting with this character are skipped.
    pub comment_prefix: Option<char>,
}

/// Configuration for writing study and assay tables.
#[derive(Debug, Default, Deserialize)]
pub struct WriteConfig {
    /// Quote every cell with this character.
    pub quote: Option<char>,

    /// `lf` or `crlf`.
    pub line_terminator: Option<LineTerminator>,
}

fn ascii_byte(c: char, setting: &str) -> Result<u8> {
    if !c.is_ascii() {
        bail!("{setting} must be an ASCII character, got '{c}'");
    }
    Ok(c as u8)
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reader settings.
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::default();
        if let Some(quote) = self.read.quote {
            config.quote = ascii_byte(quote, "read.quote")?;
        }
        if let Some(prefix) = self.read.comment_prefix {
            config.comment_prefix = ascii_byte(prefix, "read.comment_prefix")?;
        }
        Ok(config)
    }

    /// Writer settings, with command-line overrides applied.
    pub fn writer_config(&self, quote: Option<char>, crlf: bool) -> Result<WriterConfig> {
        let mut config = WriterConfig::default();
        if let Some(quote) = quote.or(self.write.quote) {
            config.quote = Some(ascii_byte(quote, "quote")?);
        }
        if crlf {
            config.line_terminator = LineTerminator::CrLf;
        } else if let Some(terminator) = self.write.line_terminator {
            config.line_terminator = terminator;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [read]
            quote = "'"
            comment_prefix = "%"

            [write]
            quote = '"'
            line_terminator = "crlf"
        "#;

        let config = Config::from_str(toml).unwrap();
        let read = config.reader_config().unwrap();
        assert_eq!(read.quote, b'\'');
        assert_eq!(read.comment_prefix, b'%');

        let write = config.writer_config(None, false).unwrap();
        assert_eq!(write.quote, Some(b'"'));
        assert_eq!(write.line_terminator, LineTerminator::CrLf);
    }

    #[test]
    fn test_flags_override_file() {
        let toml = r#"
            [write]
            quote = '"'
            line_terminator = "lf"
        "#;

        let config = Config::from_str(toml).unwrap();
        let write = config.writer_config(Some('\''), true).unwrap();
        assert_eq!(write.quote, Some(b'\''));
        assert_eq!(write.line_terminator, LineTerminator::CrLf);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.reader_config().unwrap(), ReaderConfig::default());
        assert_eq!(config.writer_config(None, false).unwrap(), WriterConfig::default());
    }

    #[test]
    fn test_non_ascii_quote_rejected() {
        let config = Config::from_str("[write]\nquote = \"»\"\n").unwrap();
        assert!(config.writer_config(None, false).is_err());
    }
}
