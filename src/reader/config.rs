/// Configuration for reading study and assay tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Quote character around cells
    pub quote: u8,
    /// Lines starting with this byte are skipped
    pub comment_prefix: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            quote: b'"',
            comment_prefix: b'#',
        }
    }
}

impl ReaderConfig {
    /// csv reader builder for tab-separated tables with these settings
    pub(crate) fn csv_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quote(self.quote)
            .comment(Some(self.comment_prefix));
        builder
    }
}
