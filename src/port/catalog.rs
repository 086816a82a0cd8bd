use std::path::PathBuf;

use crate::domain::{I18nError, TranslationNode};

/// Port for the store holding one translation document per language
pub trait Catalog {
    /// Language codes of every document in the catalog, sorted
    fn languages(&self) -> Result<Vec<String>, I18nError>;

    /// Load the full document of a language
    fn load(&self, language: &str) -> Result<TranslationNode, I18nError>;

    /// Replace the document of a language
    fn store(&self, language: &str, document: &TranslationNode) -> Result<(), I18nError>;

    /// Location of a language's document, used in reports
    fn location(&self, language: &str) -> PathBuf;
}
