// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core record types shared by the name resolver and the record loader

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Record identifier as it arrives from upstream data files.
///
/// Data dumps mix `"1001"`, `1001` and occasionally `1001.0`, so all three
/// shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RecordId {
    /// Numeric value of the identifier, or `None` when it is not a number.
    ///
    /// Strings are coerced loosely: whitespace is trimmed, `""` is `0`,
    /// `0x`/`0o`/`0b` prefixes are honoured and `Infinity` is a number.
    ///
    /// # Examples
    /// ```
    /// use battle_lexicon::types::RecordId;
    /// assert_eq!(RecordId::from(" 8002 ").numeric_value(), Some(8002.0));
    /// assert_eq!(RecordId::from("0x1F42").numeric_value(), Some(8002.0));
    /// assert_eq!(RecordId::from("trainer").numeric_value(), None);
    /// ```
    pub fn numeric_value(&self) -> Option<f64> {
        let value = match self {
            RecordId::Integer(n) => *n as f64,
            RecordId::Float(f) => *f,
            RecordId::Text(s) => coerce_number(s)?,
        };
        (!value.is_nan()).then_some(value)
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, RecordId::Text(s) if s.trim().is_empty())
    }
}

/// `null` ids load as the blank id, which coerces to `0`.
fn null_as_blank<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RecordId>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Integer(n) => write!(f, "{}", n),
            RecordId::Float(v) => write!(f, "{}", v),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Integer(value)
    }
}

fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        });
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Shared capability of every record that carries localized names.
pub trait LocalizedRecord {
    fn id(&self) -> &RecordId;

    /// Language map keyed by lowercased locale label (`"english"`, ...).
    fn lang(&self) -> &HashMap<String, String>;

    fn lang_entry(&self, key: &str) -> Option<&str> {
        self.lang().get(key).map(String::as_str)
    }
}

/// Playable character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarRecord {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub id: RecordId,
    /// Element tag, only used for the player-insert name template.
    #[serde(default)]
    pub damage_type: String,
    #[serde(default)]
    pub lang: HashMap<String, String>,
}

/// Enemy unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyRecord {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub id: RecordId,
    #[serde(default)]
    pub lang: HashMap<String, String>,
}

impl LocalizedRecord for AvatarRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn lang(&self) -> &HashMap<String, String> {
        &self.lang
    }
}

impl LocalizedRecord for EnemyRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn lang(&self) -> &HashMap<String, String> {
        &self.lang
    }
}
