// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end name resolution against custom and built-in locale tables

use battle_lexicon::types::{AvatarRecord, EnemyRecord, RecordId};
use battle_lexicon::{resolve_avatar_name, resolve_enemy_name, NameResolver, SupportedLocaleTable};
use std::collections::HashMap;

fn lang(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn firefly() -> AvatarRecord {
    AvatarRecord {
        id: "1001".into(),
        damage_type: "Fire".into(),
        lang: lang(&[("english", "Firefly"), ("japanese", "ホタル")]),
    }
}

#[test]
fn test_two_locale_table_example() {
    let table = SupportedLocaleTable::from_pairs([("en", "English"), ("ja", "Japanese")]).unwrap();
    let resolver = NameResolver::new(&table);
    let record = firefly();

    assert_eq!(resolver.avatar_name("ja", Some(&record)), "ホタル");
    assert_eq!(resolver.avatar_name("fr", Some(&record)), "");

    let trailblazer = AvatarRecord {
        id: "8002".into(),
        ..record.clone()
    };
    assert_eq!(
        resolver.avatar_name("ja", Some(&trailblazer)),
        "Female Fire MC"
    );
}

#[test]
fn test_korean_table_entry_falls_back_to_english() {
    // built-in table knows "ko", the record has no korean slot
    assert_eq!(resolve_avatar_name("ko", Some(&firefly())), "Firefly");
}

#[test]
fn test_player_insert_ignores_lang_contents() {
    for (id, expected) in [("8001", "Male Imaginary MC"), ("8006", "Female Imaginary MC")] {
        let record = AvatarRecord {
            id: id.into(),
            damage_type: "Imaginary".into(),
            lang: HashMap::new(),
        };
        assert_eq!(resolve_avatar_name("en", Some(&record)), expected, "id {id}");
    }
}

#[test]
fn test_integer_ids_behave_like_strings() {
    let record = AvatarRecord {
        id: RecordId::Integer(8004),
        damage_type: "Ice".into(),
        lang: lang(&[("english", "Trailblazer")]),
    };
    assert_eq!(resolve_avatar_name("zh", Some(&record)), "Female Ice MC");
}

#[test]
fn test_enemy_resolution_chain() {
    let record = EnemyRecord {
        id: "8015".into(),
        lang: lang(&[("english", "Silvermane Soldier"), ("chinese", "")]),
    };
    assert_eq!(resolve_enemy_name("zh", Some(&record)), "Silvermane Soldier");
    assert_eq!(resolve_enemy_name("xx", Some(&record)), "");
    assert_eq!(resolve_enemy_name("en", None), "");
}

#[test]
fn test_inputs_are_not_mutated() {
    let record = firefly();
    let before = record.clone();
    let _ = resolve_avatar_name("ja", Some(&record));
    let _ = resolve_avatar_name("fr", Some(&record));
    assert_eq!(record, before);
}
