//! Key consistency audit across every language of a catalog

use std::collections::BTreeMap;

use tracing::{Level, event};

use crate::{
    domain::{DiscrepancyReport, I18nError, KeySet, compare, constant::auditor},
    port::Catalog
};

/// Audit result of one language: a report, or the reason it could not be compared
pub type LanguageAudit = Result<DiscrepancyReport, I18nError>;

/// Results of a full audit, keyed and ordered by language code
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub reference:      String,
    pub reference_keys: usize,
    pub languages:      BTreeMap<String, LanguageAudit>
}

impl AuditOutcome {
    /// Successfully compared languages
    pub fn reports(&self) -> impl Iterator<Item = &DiscrepancyReport> {
        self.languages.values().filter_map(|r| r.as_ref().ok())
    }

    /// Languages whose document could not be loaded
    pub fn failures(&self) -> impl Iterator<Item = (&str, &I18nError)> {
        self.languages.iter().filter_map(|(lang, r)| r.as_ref().err().map(|e| (lang.as_str(), e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn has_discrepancies(&self) -> bool {
        self.reports().any(|r| !r.is_clean())
    }
}

/// Compares every language's key set against a reference language
pub struct I18nKeyAuditor<C: Catalog> {
    catalog:   C,
    reference: String
}

impl<C: Catalog> I18nKeyAuditor<C> {
    pub fn new(catalog: C, reference: impl Into<String>) -> Self {
        Self { catalog, reference: reference.into() }
    }

    /// Audit every language the catalog lists
    pub fn run(&self) -> Result<AuditOutcome, I18nError> {
        let languages = self.catalog.languages()?;
        self.audit(&languages)
    }

    /// Audit the given languages against the reference.
    ///
    /// Fails only when the reference document itself is unusable; any other language
    /// that cannot be loaded is recorded as a failed entry.
    pub fn audit(&self, languages: &[String]) -> Result<AuditOutcome, I18nError> {
        event!(Level::INFO, event = auditor::AUDIT_STARTED, reference = %self.reference, languages = languages.len());

        let reference_keys = self.catalog.load(&self.reference)?.key_set();
        event!(Level::DEBUG, event = auditor::REFERENCE_FLATTENED, reference = %self.reference, keys = reference_keys.len());

        let mut results = BTreeMap::new();
        for language in languages.iter().filter(|l| **l != self.reference) {
            let result = self.audit_language(language, &reference_keys);
            if let Err(e) = &result {
                event!(Level::WARN, event = auditor::LANGUAGE_FAILED, language = %language, error = %e);
            }
            results.insert(language.clone(), result);
        }

        event!(Level::INFO, event = auditor::AUDIT_COMPLETED, reference = %self.reference, languages = results.len());
        Ok(AuditOutcome { reference: self.reference.clone(), reference_keys: reference_keys.len(), languages: results })
    }

    fn audit_language(&self, language: &str, reference_keys: &KeySet) -> LanguageAudit {
        let keys = self.catalog.load(language)?.key_set();
        let report = DiscrepancyReport::new(language, compare(reference_keys, &keys));

        event!(Level::DEBUG, event = auditor::LANGUAGE_COMPARED, language = %language,
               missing = report.missing_count(), extra = report.extra_count());
        Ok(report)
    }
}
