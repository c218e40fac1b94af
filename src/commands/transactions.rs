// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::format_transaction_list;
use crate::config::format_policy;
use crate::models::{NewTransaction, TransactionKind};
use crate::session::Session;
use crate::store::SqliteStore;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let repo = Session::new(&store).transactions()?;
    let policy = format_policy(conn)?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => Some(parse_date(d, policy.timezone)?),
        None => None,
    };
    let tx = NewTransaction {
        description: sub.get_one::<String>("description").unwrap().to_string(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        kind: TransactionKind::parse(sub.get_one::<String>("kind").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().to_string(),
        date,
    };
    let record = repo.append(tx)?;
    println!(
        "Recorded {} {} on {} ('{}')",
        record.kind.as_str(),
        policy.currency(record.amount),
        policy.short_date(record.date),
        record.description
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let repo = Session::new(&store).transactions()?;
    let policy = format_policy(conn)?;
    let data = format_transaction_list(&repo.load()?, &policy);
    if !maybe_print_json(sub.get_flag("json"), &data)? {
        let rows = data
            .iter()
            .map(|t| {
                let amount = match t.kind {
                    TransactionKind::Entry => t.amount.clone(),
                    TransactionKind::Expense => format!("- {}", t.amount),
                };
                vec![
                    t.date.clone(),
                    t.description.clone(),
                    amount,
                    t.category_name.clone().unwrap_or_else(|| t.category.clone()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Amount", "Category"], rows)
        );
    }
    Ok(())
}
