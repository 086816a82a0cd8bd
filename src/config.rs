use std::{
    fs,
    path::{Path, PathBuf}
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    adapter::JsonFileCatalog,
    domain::{ConflictPolicy, constant::defaults}
};

/// Settings shared by the check and migrate commands
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding one document per language
    pub catalog_dir:        PathBuf,
    /// Extension of the language documents, without the dot
    pub extension:          String,
    /// Language every other language is compared against
    pub reference_language: String,
    /// Maximum number of keys printed per category and language
    pub report_limit:       usize,
    /// Languages rewritten by the migration, in order
    pub migrate_languages:  Vec<String>,
    /// Handling of rename targets that already exist
    pub on_conflict:        ConflictPolicy
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_dir:        PathBuf::from(defaults::CATALOG_DIR),
            extension:          defaults::EXTENSION.to_string(),
            reference_language: defaults::REFERENCE_LANGUAGE.to_string(),
            report_limit:       defaults::REPORT_LIMIT,
            migrate_languages:  defaults::MIGRATE_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            on_conflict:        ConflictPolicy::default()
        }
    }
}

impl Settings {
    /// Catalog adapter for the configured directory and extension
    pub fn catalog(&self) -> JsonFileCatalog {
        JsonFileCatalog::new(&self.catalog_dir).with_extension(&self.extension)
    }

    /// Reject values that cannot name a document in the catalog
    pub fn validate(&self) -> Result<()> {
        check_language_code(&self.reference_language).context("Invalid reference_language")?;
        for language in &self.migrate_languages {
            check_language_code(language).context("Invalid entry in migrate_languages")?;
        }
        if self.extension.trim_start_matches('.').is_empty() {
            bail!("extension must not be empty");
        }
        Ok(())
    }
}

fn check_language_code(code: &str) -> Result<()> {
    if code.is_empty() {
        bail!("language code must not be empty");
    }
    if code.contains(['/', '\\']) || code == "." || code == ".." {
        bail!("'{}' is not a language code", code);
    }
    Ok(())
}

/// Parse settings from YAML; omitted fields keep their defaults
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(content).context("Failed to parse settings")?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `explicit`, or from `i18n-maint.yaml` in the working directory when present
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(defaults::CONFIG_FILE);
            if !default_path.exists() {
                return Ok(Settings::default());
            }
            default_path
        }
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    parse_settings(&content).with_context(|| format!("Invalid settings file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Catalog;

    #[test]
    fn test_defaults_match_catalog_layout() {
        let settings = Settings::default();

        assert_eq!(settings.catalog_dir, PathBuf::from("config/i18n"));
        assert_eq!(settings.reference_language, "en");
        assert_eq!(settings.report_limit, 50);
        assert_eq!(settings.migrate_languages, vec!["en", "de", "es", "pt", "fr", "it"]);
        assert_eq!(settings.on_conflict, ConflictPolicy::Overwrite);
        assert!(settings.catalog().location("de").ends_with("config/i18n/de.json"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = parse_settings("catalog_dir: locales\nreport_limit: 10\non_conflict: warn\n").unwrap();

        assert_eq!(settings.catalog_dir, PathBuf::from("locales"));
        assert_eq!(settings.report_limit, 10);
        assert_eq!(settings.on_conflict, ConflictPolicy::Warn);
        assert_eq!(settings.reference_language, "en");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(parse_settings("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(parse_settings("catalog: locales\n").is_err());
    }

    #[test]
    fn test_bad_language_code_is_rejected() {
        assert!(parse_settings("migrate_languages: [en, ../secrets]\n").is_err());
        assert!(parse_settings("reference_language: ''\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "reference_language: de\nmigrate_languages: [de]\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.reference_language, "de");
        assert_eq!(settings.migrate_languages, vec!["de"]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_settings(Some(Path::new("/no/such/settings.yaml"))).unwrap_err();

        assert!(format!("{:#}", err).contains("/no/such/settings.yaml"));
    }
}
