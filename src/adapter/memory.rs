//! In-memory catalog, holding raw document text per language

use std::{cell::RefCell, collections::BTreeMap, path::PathBuf};

use crate::{
    domain::{I18nError, TranslationNode},
    port::Catalog
};

/// Catalog kept in memory; documents are stored as JSON text so malformed input can be modelled
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    documents: RefCell<BTreeMap<String, String>>
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the raw text of a language document
    pub fn with_document(self, language: &str, content: &str) -> Self {
        self.documents.borrow_mut().insert(language.to_string(), content.to_string());
        self
    }

    /// Raw text currently held for a language
    pub fn raw(&self, language: &str) -> Option<String> {
        self.documents.borrow().get(language).cloned()
    }
}

impl Catalog for InMemoryCatalog {
    fn languages(&self) -> Result<Vec<String>, I18nError> {
        Ok(self.documents.borrow().keys().cloned().collect())
    }

    fn load(&self, language: &str) -> Result<TranslationNode, I18nError> {
        let path = self.location(language);
        let documents = self.documents.borrow();
        let content = documents.get(language).ok_or_else(|| I18nError::document_not_found(language, &path))?;
        TranslationNode::from_json_str(content).map_err(|e| I18nError::document_parse(language, &path, e))
    }

    fn store(&self, language: &str, document: &TranslationNode) -> Result<(), I18nError> {
        let path = self.location(language);
        let content = document.to_json_pretty().map_err(|e| I18nError::document_write(language, &path, e))?;
        self.documents.borrow_mut().insert(language.to_string(), content);
        Ok(())
    }

    fn location(&self, language: &str) -> PathBuf {
        PathBuf::from("memory").join(format!("{}.json", language))
    }
}
