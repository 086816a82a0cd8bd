//! Key set comparison between a reference language and a candidate

use serde::{Deserialize, Serialize};

use super::document::{KeyPath, KeySet};

/// Keys present in only one of two key sets, each list sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// In the reference, absent from the candidate
    pub missing: Vec<KeyPath>,
    /// In the candidate, absent from the reference
    pub extra:   Vec<KeyPath>
}

/// Compare a candidate key set against the reference key set
pub fn compare(reference: &KeySet, candidate: &KeySet) -> KeyDiff {
    // BTreeSet difference iterates in ascending order
    KeyDiff {
        missing: reference.difference(candidate).cloned().collect(),
        extra:   candidate.difference(reference).cloned().collect()
    }
}

/// Discrepancies of one language against the reference language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    pub language: String,
    pub missing:  Vec<KeyPath>,
    pub extra:    Vec<KeyPath>
}

impl DiscrepancyReport {
    pub fn new(language: impl Into<String>, diff: KeyDiff) -> Self {
        Self { language: language.into(), missing: diff.missing, extra: diff.extra }
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }

    /// True when the language has exactly the reference keys
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
