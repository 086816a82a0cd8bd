//! Core translation-catalog logic: document model, key sets and renaming rules

pub mod compare;
pub mod constant;
pub mod document;
pub mod error;
pub mod rename;

pub use compare::{DiscrepancyReport, KeyDiff, compare};
pub use document::{KEY_SEPARATOR, KeyPath, KeySet, TranslationNode, flatten};
pub use error::I18nError;
pub use rename::{ConflictPolicy, FieldConflict, KeyMigrator, MigrationReport, RenameRule, default_rules};
