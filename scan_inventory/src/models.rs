use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title and description attached to a scanned code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    #[serde(rename = "des")]
    pub description: String,
}

impl Record {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// One-line label used in the item list, e.g. "Stapler - Office use"
    pub fn summary(&self) -> String {
        format!("{} - {}", self.title, self.description)
    }
}

/// Scanned code to record.
///
/// Ordered so the persisted file and the item list come out the same way on
/// every save.
pub type Inventory = BTreeMap<String, Record>;

/// Counts reported after merging an imported file into the inventory
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Codes that were not in the inventory before the import
    pub added: usize,
    /// Codes whose existing record was overwritten by the imported one
    pub replaced: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.added + self.replaced
    }
}
