// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading avatar and enemy records from JSON dumps.
//!
//! A records file is either an array of records or an object keyed by id.
//! For keyed files the map key fills in the id of records that omit it.

use crate::error::{Error, Result};
use crate::types::{AvatarRecord, EnemyRecord, RecordId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Records whose id can be back-filled from a map key.
pub trait KeyedRecord: DeserializeOwned {
    fn id_mut(&mut self) -> &mut RecordId;
}

impl KeyedRecord for AvatarRecord {
    fn id_mut(&mut self) -> &mut RecordId {
        &mut self.id
    }
}

impl KeyedRecord for EnemyRecord {
    fn id_mut(&mut self) -> &mut RecordId {
        &mut self.id
    }
}

pub fn load_avatars(path: &Path) -> Result<Vec<AvatarRecord>> {
    load_records(path)
}

pub fn load_enemies(path: &Path) -> Result<Vec<EnemyRecord>> {
    load_records(path)
}

/// Load records of any kind, in file order.
pub fn load_records<R: KeyedRecord>(path: &Path) -> Result<Vec<R>> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content).map_err(|err| match err {
        Error::Records { message, .. } => Error::Records {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a records document already in memory.
pub fn parse_records<R: KeyedRecord>(content: &str) -> Result<Vec<R>> {
    let document: Value = serde_json::from_str(content)?;
    match document {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect(),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, item)| {
                let mut record: R = serde_json::from_value(item)?;
                if record.id_mut().is_blank() {
                    *record.id_mut() = RecordId::Text(key);
                }
                Ok::<R, Error>(record)
            })
            .collect(),
        other => Err(Error::Records {
            path: PathBuf::new(),
            message: format!("expected an array or object, found {}", kind_of(&other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Every `*.json` file below `dir`, sorted by path.
///
/// Unreadable entries are skipped with a warning.
pub fn collect_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::Records {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), err);
                continue;
            }
        };
        let is_json = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!("Found {} record files in {}", files.len(), dir.display());
    Ok(files)
}

/// Load a file, or every record file below a directory, concatenated.
pub fn load_records_from<R: KeyedRecord>(path: &Path) -> Result<Vec<R>> {
    if !path.is_dir() {
        return load_records(path);
    }
    let mut records = Vec::new();
    for file in collect_record_files(path)? {
        records.extend(load_records::<R>(&file)?);
    }
    Ok(records)
}
