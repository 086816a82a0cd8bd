//! # i18n-maint
//!
//! Maintenance tools for a translation catalog stored as one JSON document per language.
//!
//! This crate provides functionality to:
//! - Flatten nested translation documents into dot-joined key paths
//! - Compare key sets of every language against a reference language
//! - Rename fields inside the `tools` and `seo` sections of each document, in place

// Public API modules
pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod port;
pub mod service;
pub mod ui;

// Re-export commonly used types
pub use adapter::{InMemoryCatalog, JsonFileCatalog};
pub use config::{Settings, load_settings};
pub use domain::{
    ConflictPolicy, DiscrepancyReport, I18nError, KeyMigrator, KeySet, RenameRule, TranslationNode, compare,
    default_rules, flatten
};
pub use port::Catalog;
pub use service::{AuditOutcome, I18nKeyAuditor, MigrationRunner, MigrationSummary};
