//! CLI command handlers
//!
//! Each handler returns `Ok(true)` when the run succeeded and `Ok(false)` when it
//! completed but must end with a failure status.

use std::io::Write;

use anyhow::{Context, Result};

use super::{CheckArgs, MigrateArgs};
use crate::{
    config::Settings,
    domain::{ConflictPolicy, KeyMigrator, default_rules},
    service::{I18nKeyAuditor, MigrationRunner},
    ui
};

/// Handle the check command - audit every language against the reference
pub fn handle_check_command<W: Write>(settings: &Settings, args: &CheckArgs, out: &mut W) -> Result<bool> {
    let mut settings = settings.clone();
    if let Some(reference) = &args.reference {
        settings.reference_language = reference.clone();
    }
    if let Some(limit) = args.limit {
        settings.report_limit = limit;
    }
    settings.validate()?;

    let auditor = I18nKeyAuditor::new(settings.catalog(), settings.reference_language.clone());
    let outcome = auditor.run().context("Key audit failed")?;

    if args.json {
        ui::write_audit_json(out, &outcome)?;
    } else {
        ui::write_audit_report(out, &outcome, settings.report_limit)?;
    }
    out.flush()?;

    Ok(!outcome.has_failures() && !(args.fail_on_diff && outcome.has_discrepancies()))
}

/// Handle the migrate command - rename fields in every configured language
pub fn handle_migrate_command<W: Write, E: Write>(
    settings: &Settings,
    args: &MigrateArgs,
    out: &mut W,
    err: &mut E
) -> Result<bool> {
    let mut settings = settings.clone();
    if !args.languages.is_empty() {
        settings.migrate_languages = args.languages.clone();
    }
    if let Some(policy) = args.on_conflict {
        settings.on_conflict = policy;
    }
    settings.validate()?;

    let migrator = KeyMigrator::new(default_rules(), settings.on_conflict);
    let runner = MigrationRunner::new(settings.catalog(), migrator, settings.migrate_languages.clone())
        .dry_run(args.dry_run);
    let summary = runner.run();

    ui::write_migration_summary(out, err, &summary, args.dry_run, settings.on_conflict == ConflictPolicy::Warn)?;
    out.flush()?;
    err.flush()?;

    Ok(summary.all_succeeded())
}
