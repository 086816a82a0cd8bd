//! Structured event names emitted through `tracing`

/// Catalog adapter events
pub mod catalog {
    pub const LANGUAGES_DISCOVERED: &str = "languages.discovered";
    pub const DOCUMENT_LOADED: &str = "document.loaded";
    pub const DOCUMENT_LOAD_FAILED: &str = "document.load_failed";
    pub const DOCUMENT_STORED: &str = "document.stored";
    pub const DOCUMENT_STORE_FAILED: &str = "document.store_failed";
}

/// Key audit events
pub mod auditor {
    pub const AUDIT_STARTED: &str = "audit.started";
    pub const REFERENCE_FLATTENED: &str = "reference.flattened";
    pub const LANGUAGE_COMPARED: &str = "language.compared";
    pub const LANGUAGE_FAILED: &str = "language.failed";
    pub const AUDIT_COMPLETED: &str = "audit.completed";
}

/// Key migration events
pub mod migrator {
    pub const MIGRATION_STARTED: &str = "migration.started";
    pub const FIELD_RENAMED: &str = "field.renamed";
    pub const RENAME_CONFLICT: &str = "rename.conflict";
    pub const DOCUMENT_MIGRATED: &str = "document.migrated";
    pub const DOCUMENT_FAILED: &str = "document.failed";
    pub const MIGRATION_COMPLETED: &str = "migration.completed";
}

/// Default file layout and reporting values
pub mod defaults {
    pub const CATALOG_DIR: &str = "config/i18n";
    pub const EXTENSION: &str = "json";
    pub const REFERENCE_LANGUAGE: &str = "en";
    pub const REPORT_LIMIT: usize = 50;
    pub const MIGRATE_LANGUAGES: [&str; 6] = ["en", "de", "es", "pt", "fr", "it"];
    pub const CONFIG_FILE: &str = "i18n-maint.yaml";
}
