//! Display utilities for audit and migration output

use std::io::{self, Write};

use serde_json::json;

use crate::service::{AuditOutcome, MigrationSummary};

/// Write the human-readable audit report, at most `limit` keys per category
pub fn write_audit_report<W: Write>(out: &mut W, outcome: &AuditOutcome, limit: usize) -> io::Result<()> {
    for (language, result) in &outcome.languages {
        match result {
            Ok(report) => {
                writeln!(out, "== {} == missing: {} extra: {}", language, report.missing_count(), report.extra_count())?;
                for key in report.missing.iter().take(limit) {
                    writeln!(out, "  MISSING: {}", key)?;
                }
                for key in report.extra.iter().take(limit) {
                    writeln!(out, "  EXTRA: {}", key)?;
                }
            }
            Err(e) => writeln!(out, "== {} == error: {}", language, e)?
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the audit as JSON, with complete key lists
pub fn write_audit_json<W: Write>(out: &mut W, outcome: &AuditOutcome) -> io::Result<()> {
    let mut languages = Vec::with_capacity(outcome.languages.len());
    for (language, result) in &outcome.languages {
        languages.push(match result {
            Ok(report) => serde_json::to_value(report)?,
            Err(e) => json!({ "language": language, "error": e.to_string() })
        });
    }

    let document = json!({
        "reference": outcome.reference,
        "reference_keys": outcome.reference_keys,
        "languages": languages
    });

    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

/// Write one line per document and a final summary line
pub fn write_migration_summary<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    summary: &MigrationSummary,
    dry_run: bool,
    show_conflicts: bool
) -> io::Result<()> {
    for document in &summary.documents {
        match &document.result {
            Ok(report) => {
                if dry_run {
                    writeln!(out, "• Would migrate {} ({} fields renamed)", document.path.display(), report.renamed)?;
                } else {
                    writeln!(out, "✓ Migrated {}", document.path.display())?;
                }
                if show_conflicts {
                    for conflict in &report.conflicts {
                        let replaced = serde_json::to_string(&conflict.replaced).unwrap_or_default();
                        writeln!(
                            out,
                            "  ! {}.{}.{} replaced existing value {} (from '{}')",
                            conflict.section, conflict.entry, conflict.new_field, replaced, conflict.old_field
                        )?;
                    }
                }
            }
            Err(e) => writeln!(err, "✗ Failed to migrate {}: {}", document.path.display(), e)?
        }
    }

    let failed = summary.failures().count();
    if failed == 0 {
        if dry_run {
            writeln!(out, "\n✓ Dry run complete: {} fields would be renamed", summary.renamed())?;
        } else {
            writeln!(out, "\n✓ All i18n files migrated successfully!")?;
        }
    } else {
        writeln!(err, "\n✗ {} of {} i18n files failed to migrate", failed, summary.documents.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, path::PathBuf};

    use super::*;
    use crate::{
        domain::{DiscrepancyReport, FieldConflict, I18nError, MigrationReport, TranslationNode},
        service::DocumentMigration
    };

    fn outcome() -> AuditOutcome {
        let mut languages = BTreeMap::new();
        languages.insert(
            "de".to_string(),
            Ok(DiscrepancyReport {
                language: "de".to_string(),
                missing:  vec!["a.b".to_string(), "a.c".to_string(), "a.d".to_string()],
                extra:    vec!["z".to_string()]
            })
        );
        languages.insert(
            "fr".to_string(),
            Err(I18nError::document_parse("fr", &PathBuf::from("config/i18n/fr.json"), "EOF while parsing"))
        );
        AuditOutcome { reference: "en".to_string(), reference_keys: 4, languages }
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_audit_report_format() {
        let mut out = Vec::new();

        write_audit_report(&mut out, &outcome(), 50).unwrap();

        assert_eq!(
            text(out),
            "== de == missing: 3 extra: 1\n  MISSING: a.b\n  MISSING: a.c\n  MISSING: a.d\n  EXTRA: z\n\n\
             == fr == error: [fr] invalid JSON in config/i18n/fr.json: EOF while parsing\n\n"
        );
    }

    #[test]
    fn test_audit_report_caps_each_category() {
        let mut out = Vec::new();

        write_audit_report(&mut out, &outcome(), 2).unwrap();

        let printed = text(out);
        assert!(printed.starts_with("== de == missing: 3 extra: 1\n"));
        assert_eq!(printed.matches("MISSING:").count(), 2);
        assert!(!printed.contains("a.d"));
        assert!(printed.contains("  EXTRA: z"));
    }

    #[test]
    fn test_audit_json_has_full_lists() {
        let mut out = Vec::new();

        write_audit_json(&mut out, &outcome()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["reference"], "en");
        assert_eq!(value["languages"][0]["missing"].as_array().unwrap().len(), 3);
        assert!(value["languages"][1]["error"].as_str().unwrap().contains("fr.json"));
    }

    #[test]
    fn test_audit_json_entries_are_discrepancy_reports() {
        let mut out = Vec::new();

        write_audit_json(&mut out, &outcome()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let report: DiscrepancyReport = serde_json::from_value(value["languages"][0].clone()).unwrap();
        assert_eq!(Some(&report), outcome().languages["de"].as_ref().ok());
    }

    #[test]
    fn test_migration_summary_lines() {
        let summary = MigrationSummary {
            documents: vec![
                DocumentMigration {
                    language: "en".to_string(),
                    path:     PathBuf::from("config/i18n/en.json"),
                    result:   Ok(MigrationReport {
                        renamed:   2,
                        conflicts: vec![FieldConflict {
                            section:   "tools".to_string(),
                            entry:     "uuid".to_string(),
                            old_field: "title".to_string(),
                            new_field: "toc_title".to_string(),
                            replaced:  TranslationNode::from(json!("Old"))
                        }]
                    })
                },
                DocumentMigration {
                    language: "de".to_string(),
                    path:     PathBuf::from("config/i18n/de.json"),
                    result:   Err(I18nError::document_not_found("de", &PathBuf::from("config/i18n/de.json")))
                },
            ]
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        write_migration_summary(&mut out, &mut err, &summary, false, true).unwrap();

        let out = text(out);
        let err = text(err);
        assert!(out.starts_with("✓ Migrated config/i18n/en.json\n"));
        assert!(out.contains("  ! tools.uuid.toc_title replaced existing value \"Old\" (from 'title')"));
        assert!(!out.contains("All i18n files"));
        assert!(err.contains("✗ Failed to migrate config/i18n/de.json: [de] translation file not found"));
        assert!(err.ends_with("✗ 1 of 2 i18n files failed to migrate\n"));
    }

    #[test]
    fn test_migration_success_summary() {
        let summary = MigrationSummary {
            documents: vec![DocumentMigration {
                language: "it".to_string(),
                path:     PathBuf::from("config/i18n/it.json"),
                result:   Ok(MigrationReport::default())
            }]
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        write_migration_summary(&mut out, &mut err, &summary, false, false).unwrap();

        assert_eq!(text(out), "✓ Migrated config/i18n/it.json\n\n✓ All i18n files migrated successfully!\n");
        assert!(err.is_empty());
    }
}
