// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::db;
use gofinances::models::{parse_timestamp, NewTransaction, TransactionKind};
use gofinances::store::{
    transactions_key, KeyValueStore, MemoryStore, SqliteStore, TransactionRepository,
};
use gofinances::Error;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn expense(description: &str, amount: i64, category: &str) -> NewTransaction {
    NewTransaction {
        description: description.into(),
        amount: Decimal::from(amount),
        kind: TransactionKind::Expense,
        category: category.into(),
        date: parse_timestamp("2020-04-10"),
    }
}

#[test]
fn namespace_key_is_prefixed_user_id() {
    assert_eq!(
        transactions_key("1234").unwrap(),
        "@gofinances:transactions_user:1234"
    );
    assert!(matches!(transactions_key("  "), Err(Error::Validation(_))));
}

#[test]
fn missing_namespace_loads_empty() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn append_preserves_insertion_order_and_assigns_ids() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    let a = repo.append(expense("Hamburgueria", 59, "food")).unwrap();
    let b = repo.append(expense("Aluguel", 1200, "housing")).unwrap();
    assert_ne!(a.id, b.id);

    let loaded = repo.load().unwrap();
    assert_eq!(loaded, vec![a, b]);
}

#[test]
fn namespaces_are_isolated_per_user() {
    let store = MemoryStore::new();
    let alice = TransactionRepository::for_user(&store, "alice").unwrap();
    let bob = TransactionRepository::for_user(&store, "bob").unwrap();
    alice.append(expense("Lunch", 30, "food")).unwrap();
    assert_eq!(alice.load().unwrap().len(), 1);
    assert!(bob.load().unwrap().is_empty());
}

#[test]
fn append_rejects_invalid_input() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    assert!(matches!(
        repo.append(expense("   ", 10, "food")),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        repo.append(expense("Refund", 0, "food")),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        repo.append(expense("Refund", -5, "food")),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        repo.append(expense("Gadget", 10, "gadgets")),
        Err(Error::Validation(_))
    ));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn malformed_stored_records_are_integrity_errors() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();

    store
        .set(
            repo.key(),
            r#"[{"id":"1","name":"x","amount":"10","type":"negative","category":"food","date":"yesterday"}]"#,
        )
        .unwrap();
    assert!(matches!(repo.load(), Err(Error::DataIntegrity(_))));

    store
        .set(
            repo.key(),
            r#"[{"id":"1","name":"x","amount":"-10","type":"negative","category":"food","date":"2020-04-10"}]"#,
        )
        .unwrap();
    assert!(matches!(repo.load(), Err(Error::DataIntegrity(_))));

    store.set(repo.key(), "not json").unwrap();
    assert!(matches!(repo.load(), Err(Error::DataIntegrity(_))));
}

#[test]
fn reads_legacy_wire_values() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    store
        .set(
            repo.key(),
            r#"[
                {"id":"1","name":"Site","amount":"12000","type":"positive","category":"salary","date":"2020-04-13T10:00:00.000Z"},
                {"id":"2","name":"Burger","amount":59,"type":"outcome","category":"food","date":"2020-04-10"}
            ]"#,
        )
        .unwrap();
    let loaded = repo.load().unwrap();
    assert_eq!(loaded[0].kind, TransactionKind::Entry);
    assert_eq!(loaded[0].amount, Decimal::from(12000));
    assert_eq!(loaded[1].kind, TransactionKind::Expense);
    assert_eq!(loaded[1].amount, Decimal::from(59));
}

#[test]
fn clear_removes_the_namespace() {
    let store = MemoryStore::new();
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    repo.append(expense("Lunch", 30, "food")).unwrap();
    repo.clear().unwrap();
    assert_eq!(store.get(repo.key()).unwrap(), None);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn sqlite_store_round_trips_values() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = SqliteStore::new(&conn);
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    store.delete("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn transactions_survive_reopening_the_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gofinances.sqlite");
    {
        let conn = db::open_at(&path).unwrap();
        let store = SqliteStore::new(&conn);
        let repo = TransactionRepository::for_user(&store, "u1").unwrap();
        repo.append(expense("Lunch", 30, "food")).unwrap();
    }
    let conn = db::open_at(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let repo = TransactionRepository::for_user(&store, "u1").unwrap();
    let loaded = repo.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "Lunch");
}
