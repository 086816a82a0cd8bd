//! Directory-backed catalog: one `<lang>.json` document per language

use std::{
    ffi::OsStr,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf}
};

use tempfile::NamedTempFile;
use tracing::{Level, event};

use crate::{
    domain::{I18nError, TranslationNode, constant::catalog},
    port::Catalog
};

/// Catalog stored as a directory of JSON files named by language code
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    dir:       PathBuf,
    extension: String
}

impl JsonFileCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), extension: crate::domain::constant::defaults::EXTENSION.to_string() }
    }

    /// Use a file extension other than `json`
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Every non-directory entry with the catalog extension, including dangling links and
    /// non-UTF-8 names, so that `load` reports them instead of the listing hiding them
    fn language_of(&self, path: &Path) -> Option<String> {
        if path.is_dir() || path.extension() != Some(OsStr::new(&self.extension)) {
            return None;
        }
        path.file_stem().map(|s| s.to_string_lossy().into_owned())
    }

    /// Write to a temp file next to the real target, then rename it over the target.
    ///
    /// Symlinks are resolved first so the linked file is rewritten and the link survives.
    fn write_atomic(&self, language: &str, path: &Path, content: &str) -> Result<(), I18nError> {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let parent = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| I18nError::document_write(language, path, e))?;
        tmp.write_all(content.as_bytes()).map_err(|e| I18nError::document_write(language, path, e))?;
        tmp.as_file().sync_all().map_err(|e| I18nError::document_write(language, path, e))?;

        // temp files are created owner-only; keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| I18nError::document_write(language, path, e))?;
        }

        tmp.persist(&target).map_err(|e| I18nError::document_write(language, path, e.error))?;
        Ok(())
    }
}

impl Catalog for JsonFileCatalog {
    fn languages(&self) -> Result<Vec<String>, I18nError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| I18nError::catalog_unavailable(&self.dir, e))?;

        let mut languages = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| I18nError::catalog_unavailable(&self.dir, e))?;
            if let Some(language) = self.language_of(&entry.path()) {
                languages.push(language);
            }
        }

        languages.sort();
        event!(Level::DEBUG, event = catalog::LANGUAGES_DISCOVERED, dir = %self.dir.display(), count = languages.len());
        Ok(languages)
    }

    fn load(&self, language: &str) -> Result<TranslationNode, I18nError> {
        let path = self.location(language);

        let content = fs::read_to_string(&path).map_err(|e| {
            event!(Level::DEBUG, event = catalog::DOCUMENT_LOAD_FAILED, language = %language, error = %e);
            if e.kind() == ErrorKind::NotFound {
                I18nError::document_not_found(language, &path)
            } else {
                I18nError::document_read(language, &path, e)
            }
        })?;

        let document = TranslationNode::from_json_str(&content).map_err(|e| {
            event!(Level::DEBUG, event = catalog::DOCUMENT_LOAD_FAILED, language = %language, error = %e);
            I18nError::document_parse(language, &path, e)
        })?;

        event!(Level::DEBUG, event = catalog::DOCUMENT_LOADED, language = %language, path = %path.display());
        Ok(document)
    }

    fn store(&self, language: &str, document: &TranslationNode) -> Result<(), I18nError> {
        let path = self.location(language);
        let content = document.to_json_pretty().map_err(|e| I18nError::document_write(language, &path, e))?;

        match self.write_atomic(language, &path, &content) {
            Ok(()) => {
                event!(Level::DEBUG, event = catalog::DOCUMENT_STORED, language = %language, path = %path.display());
                Ok(())
            }
            Err(e) => {
                event!(Level::DEBUG, event = catalog::DOCUMENT_STORE_FAILED, language = %language, error = %e);
                Err(e)
            }
        }
    }

    fn location(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", language, self.extension))
    }
}
