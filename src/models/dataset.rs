//! Parsed dataset models.

use serde::{Deserialize, Serialize};

/// One labeled training example. Both fields are non-empty after trimming;
/// rows that would violate that are dropped during parsing, never stored
/// half-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetExample {
    pub text: String,
    pub label: String,
}

/// A successfully parsed dataset. Always non-empty: parsing that yields zero
/// examples fails instead of producing one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDataset {
    /// Source identifier, usually the uploaded filename. Metadata only.
    pub name: String,
    pub examples: Vec<DatasetExample>,
    /// Distinct labels in order of first appearance.
    pub label_vocabulary: Vec<String>,
}

impl ParsedDataset {
    pub fn example_count(&self) -> usize {
        self.examples.len()
    }
}
