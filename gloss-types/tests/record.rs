use gloss_types::{Record, record};
use serde_json::json;

#[test]
fn merge_overwrites_conflicting_keys() {
    let mut base = record! { "name" => "lexer", "stability" => "experimental" };
    base.merge(record! { "stability" => "stable" });
    assert_eq!(base.get("stability"), Some(&json!("stable")));
    assert_eq!(base.get("name"), Some(&json!("lexer")));
}

#[test]
fn merge_keeps_keys_absent_from_patch() {
    let mut base = record! { "a" => 1, "b" => 2 };
    base.merge(record! { "c" => 3 });
    assert_eq!(base.len(), 3);
    assert_eq!(base.get("a"), Some(&json!(1)));
    assert_eq!(base.get("b"), Some(&json!(2)));
    assert_eq!(base.get("c"), Some(&json!(3)));
}

#[test]
fn merge_replaces_nested_values_wholesale() {
    let mut base = record! { "signature" => json!({ "arity": 2, "rest": false }) };
    base.merge(record! { "signature" => json!({ "arity": 3 }) });
    assert_eq!(base.get("signature"), Some(&json!({ "arity": 3 })));
}

#[test]
fn merge_of_empty_record_changes_nothing() {
    let mut base = record! { "a" => 1 };
    base.merge(Record::new());
    assert_eq!(base, record! { "a" => 1 });
}

#[test]
fn insert_returns_the_displaced_value() {
    let mut record = Record::new();
    assert_eq!(record.insert("a", 1), None);
    assert_eq!(record.insert("a", 2), Some(json!(1)));
    assert_eq!(record.get("a"), Some(&json!(2)));
}

#[test]
fn remove_takes_the_key_out() {
    let mut record = record! { "a" => 1 };
    assert_eq!(record.remove("a"), Some(json!(1)));
    assert!(record.is_empty());
    assert_eq!(record.remove("a"), None);
}

#[test]
fn macro_without_pairs_is_the_empty_record() {
    assert!(record! {}.is_empty());
}

#[test]
fn collects_from_an_iterator_of_pairs() {
    let record: Record = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(record.len(), 2);
    assert!(record.contains("a") && record.contains("b"));
}

#[test]
fn serializes_as_a_plain_json_object() {
    let record = record! { "name" => "lexer", "arity" => 2 };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "name": "lexer", "arity": 2 })
    );
}

#[test]
fn deserializes_from_a_plain_json_object() {
    let record: Record = serde_json::from_value(json!({ "name": "lexer" })).unwrap();
    assert_eq!(record.get("name"), Some(&json!("lexer")));
}

#[test]
fn iterates_keys_and_pairs() {
    let record = record! { "a" => 1, "b" => 2 };
    let keys: Vec<&str> = record.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(record.iter().count(), 2);
}
