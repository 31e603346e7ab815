// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration: locale table and default locale.
//!
//! Sources, highest priority first: the `--config` path, the
//! `BATTLE_LEXICON_CONFIG` path, built-in defaults. `BATTLE_LEXICON_LOCALE`
//! then overrides `default_locale` whichever file was used. Files ending
//! in `.json` are read as JSON, anything else as YAML.

use crate::error::{Error, Result};
use crate::locale::{LocaleEntry, SupportedLocaleTable, DEFAULT_LOCALE};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "BATTLE_LEXICON_CONFIG";
pub const LOCALE_ENV: &str = "BATTLE_LEXICON_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_locale: String,
    pub locales: Vec<LocaleEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locales: SupportedLocaleTable::builtin().iter().cloned().collect(),
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config: Config = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the effective config from the process environment.
    pub fn discover(cli_path: Option<&Path>) -> Result<Self> {
        Self::discover_with(cli_path, |key| env::var(key).ok())
    }

    /// [`Config::discover`] with an injectable environment lookup.
    pub fn discover_with<F>(cli_path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_ENV).filter(|p| !p.is_empty()).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => {
                debug!("No config file given, using built-in locale table");
                Self::default()
            }
        };

        if let Some(locale) = lookup(LOCALE_ENV).filter(|l| !l.is_empty()) {
            debug!("{} overrides default locale with '{}'", LOCALE_ENV, locale);
            config.default_locale = locale;
            config.validate()?;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let table = self.locale_table()?;
        if !table.contains(&self.default_locale) {
            return Err(Error::Config(format!(
                "default locale '{}' is not in the locale table",
                self.default_locale
            )));
        }
        Ok(())
    }

    pub fn locale_table(&self) -> Result<SupportedLocaleTable> {
        SupportedLocaleTable::new(self.locales.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::discover_with(None, no_env).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.locale_table().unwrap().len(), 4);
    }

    #[test]
    fn locale_env_overrides_default() {
        let config = Config::discover_with(None, |key| {
            (key == LOCALE_ENV).then(|| "ja".to_string())
        })
        .unwrap();
        assert_eq!(config.default_locale, "ja");
    }

    #[test]
    fn unknown_default_locale_is_rejected() {
        let err = Config::discover_with(None, |key| {
            (key == LOCALE_ENV).then(|| "fr".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn empty_label_is_rejected() {
        let config = Config {
            default_locale: "en".into(),
            locales: vec![LocaleEntry {
                code: "en".into(),
                label: String::new(),
            }],
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidLocaleTable(_))
        ));
    }
}
