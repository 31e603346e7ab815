// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display-name resolution for avatars and enemies.
//!
//! Resolution order for a locale code:
//!
//! 1. no record, or a code missing from the locale table → `""`;
//! 2. `lang[label_key_for(code)]` when non-empty;
//! 3. the English slot, `lang[label_key_for("en")]`, then the raw `"en"` key;
//! 4. `""`.
//!
//! Avatars with a numeric id above [`PLAYER_INSERT_THRESHOLD`] are
//! customizable trailblazer characters; their localized names are
//! placeholders, so a `"{Female|Male} {damageType} MC"` label replaces
//! whatever the lookup produced. Even ids are the female variant.

use crate::locale::{SupportedLocaleTable, DEFAULT_LOCALE};
use crate::types::{AvatarRecord, EnemyRecord, LocalizedRecord};

/// Ids strictly greater than this are player-insert characters.
pub const PLAYER_INSERT_THRESHOLD: f64 = 8000.0;

/// Resolver bound to one locale table.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'t> {
    table: &'t SupportedLocaleTable,
}

impl<'t> NameResolver<'t> {
    pub fn new(table: &'t SupportedLocaleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t SupportedLocaleTable {
        self.table
    }

    pub fn avatar_name(&self, locale: &str, record: Option<&AvatarRecord>) -> String {
        let Some(record) = record else {
            return String::new();
        };
        if !self.table.contains(locale) {
            return String::new();
        }
        match player_insert_label(record) {
            Some(label) => label,
            None => self.localized(locale, record),
        }
    }

    pub fn enemy_name(&self, locale: &str, record: Option<&EnemyRecord>) -> String {
        match record {
            Some(record) if self.table.contains(locale) => self.localized(locale, record),
            _ => String::new(),
        }
    }

    /// Steps shared by every record kind: requested slot, then English.
    fn localized<R: LocalizedRecord + ?Sized>(&self, locale: &str, record: &R) -> String {
        let requested = self
            .table
            .label_key_for(locale)
            .and_then(|key| non_empty(record.lang_entry(&key)));
        if let Some(text) = requested {
            return text.to_string();
        }

        let english = self
            .table
            .label_key_for(DEFAULT_LOCALE)
            .and_then(|key| non_empty(record.lang_entry(&key)))
            .or_else(|| non_empty(record.lang_entry(DEFAULT_LOCALE)));
        english.unwrap_or_default().to_string()
    }
}

impl Default for NameResolver<'static> {
    fn default() -> Self {
        Self::new(SupportedLocaleTable::builtin())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Synthesized label for player-insert avatars, `None` for everyone else.
pub fn player_insert_label(record: &AvatarRecord) -> Option<String> {
    let value = record.id.numeric_value()?;
    if value <= PLAYER_INSERT_THRESHOLD {
        return None;
    }
    let variant = if value % 2.0 == 0.0 { "Female" } else { "Male" };
    Some(format!("{} {} MC", variant, record.damage_type))
}

/// [`NameResolver::avatar_name`] against the built-in locale table.
///
/// # Examples
/// ```
/// use battle_lexicon::names::resolve_avatar_name;
/// use battle_lexicon::types::AvatarRecord;
///
/// let mut firefly = AvatarRecord::default();
/// firefly.id = "1310".into();
/// firefly.lang.insert("english".into(), "Firefly".into());
/// assert_eq!(resolve_avatar_name("ko", Some(&firefly)), "Firefly");
/// assert_eq!(resolve_avatar_name("fr", Some(&firefly)), "");
/// ```
pub fn resolve_avatar_name(locale: &str, record: Option<&AvatarRecord>) -> String {
    NameResolver::default().avatar_name(locale, record)
}

/// [`NameResolver::enemy_name`] against the built-in locale table.
pub fn resolve_enemy_name(locale: &str, record: Option<&EnemyRecord>) -> String {
    NameResolver::default().enemy_name(locale, record)
}
