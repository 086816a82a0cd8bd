//! CLI argument parsing

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::ConflictPolicy;

#[derive(Parser, Debug)]
#[command(name = "i18n-maint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (defaults to ./i18n-maint.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding one JSON document per language
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report keys missing from or extra in each language compared to the reference
    Check(CheckArgs),
    /// Rename tools and seo fields in each language document, in place
    Migrate(MigrateArgs)
}

#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Reference language code
    #[arg(long, value_name = "LANG")]
    pub reference: Option<String>,

    /// Keys printed per category and language
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the full reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a failure status when any language has missing or extra keys
    #[arg(long)]
    pub fail_on_diff: bool
}

#[derive(Args, Debug, Default, Clone)]
pub struct MigrateArgs {
    /// Languages to migrate, comma separated
    #[arg(long = "lang", value_name = "LANG", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// What to do when a renamed field already exists with another value
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_conflict: Option<ConflictPolicy>,

    /// Show what would be renamed without writing files
    #[arg(long)]
    pub dry_run: bool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_needs_no_arguments() {
        let cli = Cli::try_parse_from(["i18n-maint", "check"]).unwrap();

        assert!(matches!(cli.command, Commands::Check(ref args) if args.reference.is_none() && !args.json));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_migrate_options() {
        let cli = Cli::try_parse_from([
            "i18n-maint",
            "migrate",
            "--lang",
            "en,de",
            "--on-conflict",
            "fail",
            "--dry-run",
            "--catalog",
            "locales",
            "-vv"
        ])
        .unwrap();

        match cli.command {
            Commands::Migrate(args) => {
                assert_eq!(args.languages, vec!["en", "de"]);
                assert_eq!(args.on_conflict, Some(ConflictPolicy::Fail));
                assert!(args.dry_run);
            }
            other => panic!("expected migrate, got {other:?}")
        }
        assert_eq!(cli.catalog, Some(PathBuf::from("locales")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["i18n-maint"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
