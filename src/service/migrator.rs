//! Runs the key migration over a fixed list of catalog languages

use std::path::PathBuf;

use tracing::{Level, event};

use crate::{
    domain::{I18nError, KeyMigrator, MigrationReport, constant::migrator},
    port::Catalog
};

/// Outcome of migrating one language document
#[derive(Debug, Clone)]
pub struct DocumentMigration {
    pub language: String,
    pub path:     PathBuf,
    pub result:   Result<MigrationReport, I18nError>
}

/// Outcome of a whole migration run, in processing order
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    pub documents: Vec<DocumentMigration>
}

impl MigrationSummary {
    pub fn failures(&self) -> impl Iterator<Item = &DocumentMigration> {
        self.documents.iter().filter(|d| d.result.is_err())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn renamed(&self) -> usize {
        self.documents.iter().filter_map(|d| d.result.as_ref().ok()).map(|r| r.renamed).sum()
    }
}

/// Loads, migrates and stores each language document independently
pub struct MigrationRunner<C: Catalog> {
    catalog:   C,
    migrator:  KeyMigrator,
    languages: Vec<String>,
    dry_run:   bool
}

impl<C: Catalog> MigrationRunner<C> {
    pub fn new(catalog: C, migrator: KeyMigrator, languages: Vec<String>) -> Self {
        Self { catalog, migrator, languages, dry_run: false }
    }

    /// Compute reports without writing any document
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn run(&self) -> MigrationSummary {
        event!(Level::INFO, event = migrator::MIGRATION_STARTED, languages = self.languages.len(), dry_run = self.dry_run);

        let mut summary = MigrationSummary::default();
        for language in &self.languages {
            let result = self.migrate_language(language);
            match &result {
                Ok(report) => {
                    event!(Level::INFO, event = migrator::DOCUMENT_MIGRATED, language = %language,
                           renamed = report.renamed, conflicts = report.conflicts.len());
                }
                Err(e) => {
                    event!(Level::ERROR, event = migrator::DOCUMENT_FAILED, language = %language, error = %e);
                }
            }
            summary.documents.push(DocumentMigration {
                language: language.clone(),
                path: self.catalog.location(language),
                result
            });
        }

        event!(Level::INFO, event = migrator::MIGRATION_COMPLETED, renamed = summary.renamed(),
               failed = summary.failures().count());
        summary
    }

    fn migrate_language(&self, language: &str) -> Result<MigrationReport, I18nError> {
        let mut document = self.catalog.load(language)?;
        let report = self.migrator.apply(language, &mut document)?;
        if !self.dry_run {
            self.catalog.store(language, &document)?;
        }
        Ok(report)
    }
}
