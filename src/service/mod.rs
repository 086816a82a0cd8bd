//! Services orchestrating the domain over a catalog

pub mod auditor;
pub mod migrator;

pub use auditor::{AuditOutcome, I18nKeyAuditor, LanguageAudit};
pub use migrator::{DocumentMigration, MigrationRunner, MigrationSummary};
