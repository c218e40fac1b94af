// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::aggregate::ReferenceMonth;
use gofinances::dashboard::{CategoryReport, Dashboard};
use gofinances::format::FormatPolicy;
use gofinances::models::{parse_timestamp, NewTransaction, TransactionKind};
use gofinances::session::{Session, User};
use gofinances::store::{KeyValueStore, MemoryStore, TransactionRepository};
use gofinances::Error;
use rust_decimal::Decimal;
use serde_json::json;

fn user(id: &str) -> User {
    User {
        id: id.into(),
        name: "Josafá".into(),
        email: "josafa@example.com".into(),
        photo: None,
    }
}

fn add(repo: &TransactionRepository<'_, MemoryStore>, kind: TransactionKind, amount: i64, category: &str, date: &str) {
    repo.append(NewTransaction {
        description: format!("{} {}", category, amount),
        amount: Decimal::from(amount),
        kind,
        category: category.into(),
        date: parse_timestamp(date),
    })
    .unwrap();
}

#[test]
fn requires_a_signed_in_user() {
    let store = MemoryStore::new();
    let session = Session::new(&store);
    assert_eq!(session.current().unwrap(), None);
    assert!(matches!(session.require_user(), Err(Error::NotSignedIn)));
    assert!(matches!(session.transactions(), Err(Error::NotSignedIn)));
}

#[test]
fn sign_in_persists_user() {
    let store = MemoryStore::new();
    Session::new(&store).sign_in(&user("42")).unwrap();
    // a fresh session over the same store sees the user
    assert_eq!(Session::new(&store).require_user().unwrap(), user("42"));
    assert!(Session::new(&store).sign_in(&user(" ")).is_err());
}

#[test]
fn sign_out_keeps_data_unless_purged() {
    let store = MemoryStore::new();
    let session = Session::new(&store);
    session.sign_in(&user("42")).unwrap();
    add(&session.transactions().unwrap(), TransactionKind::Expense, 10, "food", "2021-01-01");

    assert_eq!(session.sign_out(false).unwrap(), Some(user("42")));
    assert_eq!(session.current().unwrap(), None);
    let repo = TransactionRepository::for_user(&store, "42").unwrap();
    assert_eq!(repo.load().unwrap().len(), 1);

    session.sign_in(&user("42")).unwrap();
    session.sign_out(true).unwrap();
    assert_eq!(store.get(repo.key()).unwrap(), None);
    assert_eq!(session.sign_out(true).unwrap(), None);
}

#[test]
fn google_userinfo_mapping() {
    let info = json!({
        "id": "1099",
        "given_name": "Ana",
        "email": "ana@example.com",
        "picture": "https://example.com/ana.png"
    });
    let u = User::from_google_userinfo(&info).unwrap();
    assert_eq!(u.id, "1099");
    assert_eq!(u.name, "Ana");
    assert_eq!(u.photo.as_deref(), Some("https://example.com/ana.png"));
    assert!(User::from_google_userinfo(&json!({ "email": "x@y" })).is_err());
}

#[test]
fn apple_user_gets_initials_avatar() {
    let u = User::from_apple("001.abc", "Bia", "bia@example.com");
    assert_eq!(
        u.photo.as_deref(),
        Some("https://ui-avatars.com/api/?name=Bia&length=1")
    );
}

#[test]
fn dashboard_and_report_reload_from_store() {
    let store = MemoryStore::new();
    let session = Session::new(&store);
    session.sign_in(&user("42")).unwrap();
    let repo = session.transactions().unwrap();
    let policy = FormatPolicy::default();

    let empty = Dashboard::reload(&repo, &policy).unwrap();
    assert!(empty.transactions.is_empty());
    assert_eq!(empty.highlights.total_interval, "Não há transações");

    add(&repo, TransactionKind::Entry, 12000, "salary", "2020-04-13");
    add(&repo, TransactionKind::Expense, 59, "food", "2020-04-10");
    add(&repo, TransactionKind::Expense, 1200, "housing", "2020-04-30");

    let dash = Dashboard::reload(&repo, &policy).unwrap();
    assert_eq!(dash.transactions.len(), 3);
    assert_eq!(dash.highlights.balance, Decimal::from(10741));

    let report = CategoryReport::reload(&repo, ReferenceMonth::new(2020, 4).unwrap(), &policy).unwrap();
    assert_eq!(report.month_label, "abril, 2020");
    let chart = &report.chart;
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].label, "5%");
    assert_eq!(chart[1].value, Decimal::from(1200));

    let may = CategoryReport::reload(&repo, ReferenceMonth::new(2020, 5).unwrap(), &policy).unwrap();
    assert!(may.categories.is_empty());
}
