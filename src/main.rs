//! # i18n-maint CLI
//!
//! Command-line front end for the translation catalog maintenance tools.
//!
//! ## Usage
//!
//! ```bash
//! # Report missing/extra keys of every language against en
//! i18n-maint check
//!
//! # Rename tools/seo fields in en, de, es, pt, fr and it
//! i18n-maint migrate
//!
//! # Preview the migration for two languages, refusing silent overwrites
//! i18n-maint migrate --lang de,fr --on-conflict fail --dry-run
//! ```
//!
//! The catalog defaults to `config/i18n` relative to the working directory and can be
//! changed with `--catalog` or an `i18n-maint.yaml` settings file.

use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use i18n_maint::{
    cli::{Cli, Commands, handle_check_command, handle_migrate_command},
    config::load_settings,
    logging::init_logging
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(catalog) = &cli.catalog {
        settings.catalog_dir = catalog.clone();
    }

    match &cli.command {
        Commands::Check(args) => handle_check_command(&settings, args, &mut io::stdout().lock()),
        Commands::Migrate(args) => {
            handle_migrate_command(&settings, args, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
    }
}
