// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading records and config files from disk

use battle_lexicon::config::{Config, CONFIG_ENV};
use battle_lexicon::records::{collect_record_files, load_avatars, load_enemies, load_records_from};
use battle_lexicon::types::{EnemyRecord, RecordId};
use battle_lexicon::{Error, NameResolver};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_keyed_avatar_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "avatars.json",
        r#"{
            "1310": {"damageType": "Fire", "lang": {"english": "Firefly", "japanese": "ホタル"}},
            "8002": {"damageType": "Physical", "lang": {"english": "Trailblazer"}}
        }"#,
    );

    let avatars = load_avatars(&path).unwrap();
    assert_eq!(avatars.len(), 2);
    assert_eq!(avatars[0].id, RecordId::Text("1310".into()));

    let resolver = NameResolver::default();
    let names: Vec<String> = avatars
        .iter()
        .map(|a| resolver.avatar_name("ja", Some(a)))
        .collect();
    assert_eq!(names, vec!["ホタル", "Female Physical MC"]);
}

#[test]
fn test_load_enemy_array_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "enemies.json",
        r#"[{"id": 300, "lang": {"english": "Antibaryon"}}]"#,
    );
    let enemies = load_enemies(&path).unwrap();
    assert_eq!(enemies[0].id, RecordId::Integer(300));
}

#[test]
fn test_scalar_document_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "\"nope\"");
    match load_enemies(&path) {
        Err(Error::Records { path: reported, message }) => {
            assert_eq!(reported, path);
            assert!(message.contains("a string"));
        }
        other => panic!("expected records error, got {:?}", other),
    }
}

#[test]
fn test_directory_walk_is_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b.json", r#"[{"id": "2"}]"#);
    write(&dir, "a.json", r#"[{"id": "1"}]"#);
    write(&dir, "nested/c.JSON", r#"[{"id": "3"}]"#);
    write(&dir, "notes.txt", "ignored");

    let files = collect_record_files(dir.path()).unwrap();
    assert_eq!(files.len(), 3);

    let enemies: Vec<EnemyRecord> = load_records_from(dir.path()).unwrap();
    let ids: Vec<String> = enemies.iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_collect_rejects_plain_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.json", "[]");
    assert!(collect_record_files(&path).is_err());
}

#[test]
fn test_yaml_config_defines_table() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "lexicon.yaml",
        "default_locale: de\nlocales:\n  - code: en\n    label: English\n  - code: de\n    label: Deutsch\n",
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.default_locale, "de");
    let table = config.locale_table().unwrap();
    assert_eq!(table.label_key_for("de").as_deref(), Some("deutsch"));
    assert!(!table.contains("ja"));
}

#[test]
fn test_json_config_via_env_path() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "lexicon.json",
        r#"{"locales": [{"code": "en", "label": "English"}, {"code": "ja", "label": "Japanese"}]}"#,
    );
    let value = path.to_string_lossy().into_owned();
    let config = Config::discover_with(None, |key| (key == CONFIG_ENV).then(|| value.clone())).unwrap();
    assert_eq!(config.default_locale, "en");
    assert_eq!(config.locales.len(), 2);
}

#[test]
fn test_config_with_unknown_default_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "lexicon.yml",
        "default_locale: fr\nlocales:\n  - code: en\n    label: English\n",
    );
    assert!(matches!(Config::load(&path), Err(Error::Config(_))));
}
