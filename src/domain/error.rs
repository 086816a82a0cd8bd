use std::path::{Path, PathBuf};

use thiserror::Error;

/// Common error types for catalog maintenance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The document expected for a language does not exist
    #[error("[{language}] translation file not found: {}", .path.display())]
    DocumentNotFound { language: String, path: PathBuf },

    /// The document exists but could not be read
    #[error("[{language}] failed to read {}: {reason}", .path.display())]
    DocumentRead { language: String, path: PathBuf, reason: String },

    /// The document is not valid JSON
    #[error("[{language}] invalid JSON in {}: {reason}", .path.display())]
    DocumentParse { language: String, path: PathBuf, reason: String },

    /// The document could not be written back
    #[error("[{language}] failed to write {}: {reason}", .path.display())]
    DocumentWrite { language: String, path: PathBuf, reason: String },

    /// The catalog directory cannot be listed
    #[error("catalog directory {} is unavailable: {reason}", .path.display())]
    CatalogUnavailable { path: PathBuf, reason: String },

    /// A rename would replace an existing field holding a different value
    #[error("[{language}] rename conflict in {section}.{entry}: field '{field}' already holds a different value")]
    RenameConflict { language: String, section: String, entry: String, field: String }
}

impl I18nError {
    pub fn document_not_found(language: &str, path: &Path) -> Self {
        I18nError::DocumentNotFound { language: language.to_string(), path: path.to_path_buf() }
    }

    pub fn document_read(language: &str, path: &Path, error: impl std::fmt::Display) -> Self {
        I18nError::DocumentRead { language: language.to_string(), path: path.to_path_buf(), reason: error.to_string() }
    }

    pub fn document_parse(language: &str, path: &Path, error: impl std::fmt::Display) -> Self {
        I18nError::DocumentParse { language: language.to_string(), path: path.to_path_buf(), reason: error.to_string() }
    }

    pub fn document_write(language: &str, path: &Path, error: impl std::fmt::Display) -> Self {
        I18nError::DocumentWrite { language: language.to_string(), path: path.to_path_buf(), reason: error.to_string() }
    }

    pub fn catalog_unavailable(path: &Path, error: impl std::fmt::Display) -> Self {
        I18nError::CatalogUnavailable { path: path.to_path_buf(), reason: error.to_string() }
    }

    pub fn rename_conflict(language: &str, section: &str, entry: &str, field: &str) -> Self {
        I18nError::RenameConflict {
            language: language.to_string(),
            section:  section.to_string(),
            entry:    entry.to_string(),
            field:    field.to_string()
        }
    }
}
