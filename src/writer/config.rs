use serde::{Deserialize, Serialize};

/// Line ending of written tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

/// Configuration for writing study and assay tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Quote every cell with this character; `None` quotes only cells that
    /// hold a tab, a `"` or a line break
    pub quote: Option<u8>,

    /// Line ending
    pub line_terminator: LineTerminator,
}

impl WriterConfig {
    /// Quote every cell with `quote`
    pub fn quoted(quote: u8) -> Self {
        Self {
            quote: Some(quote),
            ..Self::default()
        }
    }

    /// csv writer builder for tab-separated tables with these settings
    pub(crate) fn csv_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(b'\t').flexible(false);
        match self.quote {
            Some(quote) => builder.quote(quote).quote_style(csv::QuoteStyle::Always),
            None => builder.quote_style(csv::QuoteStyle::Necessary),
        };
        match self.line_terminator {
            LineTerminator::Lf => builder.terminator(csv::Terminator::Any(b'\n')),
            LineTerminator::CrLf => builder.terminator(csv::Terminator::CRLF),
        };
        builder
    }
}
