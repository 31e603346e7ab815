// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported locale table.
//!
//! Maps short locale codes to the human-readable labels shown in the
//! language picker. Record language maps are keyed by the *lowercased
//! label*, not by the code, so every name lookup goes through
//! [`SupportedLocaleTable::label_key_for`] first.
//!
//! ## Built-in table
//!
//! | Code | Label    | Record key |
//! |------|----------|------------|
//! | en   | English  | english    |
//! | ja   | Japanese | japanese   |
//! | ko   | Korean   | korean     |
//! | zh   | Chinese  | chinese    |
//!
//! A different table can be supplied through the config file (see
//! [`crate::config`]). Tables are validated on construction and never
//! mutated afterwards.

pub mod negotiate;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Locale used as the fallback slot and the negotiation default.
pub const DEFAULT_LOCALE: &str = "en";

const BUILTIN: &[(&str, &str)] = &[
    ("en", "English"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

/// One row of the locale table, as it appears in config files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleEntry {
    pub code: String,
    pub label: String,
}

/// Ordered, immutable `code -> label` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocaleTable {
    entries: Vec<LocaleEntry>,
    index: HashMap<String, usize>,
}

impl SupportedLocaleTable {
    /// Build a table from ordered entries.
    ///
    /// Fails when a code or label is empty, or a code repeats.
    pub fn new(entries: Vec<LocaleEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.code.trim().is_empty() {
                return Err(Error::InvalidLocaleTable(format!(
                    "entry {} has an empty code",
                    position
                )));
            }
            if entry.label.trim().is_empty() {
                return Err(Error::InvalidLocaleTable(format!(
                    "locale '{}' has an empty label",
                    entry.code
                )));
            }
            if index.insert(entry.code.clone(), position).is_some() {
                return Err(Error::InvalidLocaleTable(format!(
                    "locale '{}' is listed twice",
                    entry.code
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// Build a table from `(code, label)` pairs.
    pub fn from_pairs<C, L>(pairs: impl IntoIterator<Item = (C, L)>) -> Result<Self>
    where
        C: Into<String>,
        L: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(code, label)| LocaleEntry {
                    code: code.into(),
                    label: label.into(),
                })
                .collect(),
        )
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static SupportedLocaleTable {
        static TABLE: OnceLock<SupportedLocaleTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let entries = BUILTIN
                .iter()
                .map(|&(code, label)| LocaleEntry {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect::<Vec<_>>();
            let index = entries
                .iter()
                .enumerate()
                .map(|(position, entry)| (entry.code.clone(), position))
                .collect();
            SupportedLocaleTable { entries, index }
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&position| self.entries[position].label.as_str())
    }

    /// Key into a record's `lang` map for `code`: the lowercased label.
    ///
    /// # Examples
    /// ```
    /// use battle_lexicon::locale::SupportedLocaleTable;
    /// let table = SupportedLocaleTable::builtin();
    /// assert_eq!(table.label_key_for("ja").as_deref(), Some("japanese"));
    /// assert_eq!(table.label_key_for("fr"), None);
    /// ```
    pub fn label_key_for(&self, code: &str) -> Option<String> {
        self.label(code).map(str::to_lowercase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.entries.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SupportedLocaleTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
