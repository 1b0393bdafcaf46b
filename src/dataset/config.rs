/// Field layout of an uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// `text,label` rows. The label sits after the *last* comma, so free text
    /// may itself contain commas.
    CommaLabelLast,
    /// `label;text` rows. The text is everything after the first semicolon
    /// and may itself contain semicolons.
    SemicolonLabelFirst,
}

/// Configuration for dataset parsing.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub format: DatasetFormat,
    /// Lower-case labels on ingest. Off by default: the vocabulary is shown
    /// to the user exactly as written in the file.
    pub lowercase_labels: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            format: DatasetFormat::CommaLabelLast,
            lowercase_labels: false,
        }
    }
}
