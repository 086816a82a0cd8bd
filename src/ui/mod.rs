//! Terminal output

pub mod display;

pub use display::{write_audit_json, write_audit_report, write_migration_summary};
