//! Section-scoped field renaming
//!
//! A rule only touches the entries of one top-level section (`tools.<id>`, `seo.<id>`),
//! so unrelated fields sharing a short name elsewhere in the document are left alone.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use super::{constant::migrator, document::TranslationNode, error::I18nError};

/// Rename table applied to the catalog: (section, old field, new field)
const RENAME_TABLE: [(&str, &str, &str); 6] = [
    ("tools", "title", "toc_title"),
    ("tools", "page_title", "h1_title"),
    ("tools", "description", "card_description"),
    ("tools", "description_long", "tool_description"),
    ("seo", "pageTitle", "meta_title"),
    ("seo", "pageDescription", "meta_description")
];

/// Move `old_field` to `new_field` inside every entry of `section`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    pub section:   String,
    pub old_field: String,
    pub new_field: String
}

impl RenameRule {
    pub fn new(section: impl Into<String>, old_field: impl Into<String>, new_field: impl Into<String>) -> Self {
        Self { section: section.into(), old_field: old_field.into(), new_field: new_field.into() }
    }
}

/// The catalog's rename rules, in application order
pub fn default_rules() -> Vec<RenameRule> {
    RENAME_TABLE.iter().map(|(section, old, new)| RenameRule::new(*section, *old, *new)).collect()
}

/// What to do when the target field of a rename already exists with a different value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing value silently
    #[default]
    Overwrite,
    /// Replace the existing value and report the conflict
    Warn,
    /// Reject the whole document and leave it unchanged
    Fail
}

/// A rename that replaced a different, pre-existing value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConflict {
    pub section:   String,
    pub entry:     String,
    pub old_field: String,
    pub new_field: String,
    pub replaced:  TranslationNode
}

/// Outcome of migrating one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Number of fields moved to their new name
    pub renamed:   usize,
    pub conflicts: Vec<FieldConflict>
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.renamed == 0
    }
}

/// Applies rename rules to translation documents
#[derive(Debug, Clone)]
pub struct KeyMigrator {
    rules:  Vec<RenameRule>,
    policy: ConflictPolicy
}

impl Default for KeyMigrator {
    fn default() -> Self {
        Self::new(default_rules(), ConflictPolicy::default())
    }
}

impl KeyMigrator {
    pub fn new(rules: Vec<RenameRule>, policy: ConflictPolicy) -> Self {
        Self { rules, policy }
    }

    /// Return the migrated document, consuming the input
    pub fn migrate(
        &self,
        language: &str,
        mut document: TranslationNode
    ) -> Result<(TranslationNode, MigrationReport), I18nError> {
        let report = self.apply(language, &mut document)?;
        Ok((document, report))
    }

    /// Migrate `document` in place.
    ///
    /// Under [`ConflictPolicy::Fail`] the document is only modified when no conflict exists.
    pub fn apply(&self, language: &str, document: &mut TranslationNode) -> Result<MigrationReport, I18nError> {
        if self.policy == ConflictPolicy::Fail {
            let mut candidate = document.clone();
            let report = self.rename_fields(&mut candidate);
            if let Some(conflict) = report.conflicts.first() {
                for c in &report.conflicts {
                    event!(Level::WARN, event = migrator::RENAME_CONFLICT, language = %language,
                           section = %c.section, entry = %c.entry, field = %c.new_field, message = "rejected");
                }
                return Err(I18nError::rename_conflict(language, &conflict.section, &conflict.entry, &conflict.new_field));
            }
            *document = candidate;
            return Ok(report);
        }

        let report = self.rename_fields(document);
        let level_is_warn = self.policy == ConflictPolicy::Warn;
        for c in &report.conflicts {
            if level_is_warn {
                event!(Level::WARN, event = migrator::RENAME_CONFLICT, language = %language,
                       section = %c.section, entry = %c.entry, field = %c.new_field, message = "overwritten");
            } else {
                event!(Level::DEBUG, event = migrator::RENAME_CONFLICT, language = %language,
                       section = %c.section, entry = %c.entry, field = %c.new_field, message = "overwritten");
            }
        }
        Ok(report)
    }

    /// Sections named by the rules, first appearance first
    fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !sections.contains(&rule.section.as_str()) {
                sections.push(&rule.section);
            }
        }
        sections
    }

    fn rename_fields(&self, document: &mut TranslationNode) -> MigrationReport {
        let mut report = MigrationReport::default();
        let sections = self.sections();

        let Some(root) = document.as_mapping_mut() else {
            return report;
        };

        for section in sections {
            let Some(entries) = root.get_mut(section).and_then(TranslationNode::as_mapping_mut) else {
                continue;
            };

            for (entry_id, entry) in entries.iter_mut() {
                let Some(fields) = entry.as_mapping_mut() else {
                    continue;
                };

                for rule in self.rules.iter().filter(|r| r.section == section) {
                    // shift_remove keeps the remaining fields in their original order
                    let Some(value) = fields.shift_remove(&rule.old_field) else {
                        continue;
                    };

                    if let Some(existing) = fields.get(&rule.new_field)
                        && *existing != value
                    {
                        report.conflicts.push(FieldConflict {
                            section:   section.to_string(),
                            entry:     entry_id.clone(),
                            old_field: rule.old_field.clone(),
                            new_field: rule.new_field.clone(),
                            replaced:  existing.clone()
                        });
                    }

                    event!(Level::TRACE, event = migrator::FIELD_RENAMED, section = %section, entry = %entry_id,
                           from = %rule.old_field, to = %rule.new_field);
                    fields.insert(rule.new_field.clone(), value);
                    report.renamed += 1;
                }
            }
        }

        report
    }
}
