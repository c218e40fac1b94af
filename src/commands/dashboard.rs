// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::format_policy;
use crate::dashboard::Dashboard;
use crate::session::Session;
use crate::store::SqliteStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let session = Session::new(&store);
    let user = session.require_user()?;
    let repo = session.transactions()?;
    let policy = format_policy(conn)?;
    let dash = Dashboard::reload(&repo, &policy)?;
    if maybe_print_json(sub.get_flag("json"), &dash)? {
        return Ok(());
    }

    println!("Olá, {}", user.name);
    let h = &dash.highlights;
    let cards = vec![
        vec![
            "Entradas".to_string(),
            h.entries.formatted.clone(),
            h.entries.last_transaction.clone(),
        ],
        vec![
            "Saídas".to_string(),
            h.expenses.formatted.clone(),
            h.expenses.last_transaction.clone(),
        ],
        vec![
            "Total".to_string(),
            h.balance_formatted.clone(),
            h.total_interval.clone(),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount", "Last transaction"], cards));

    let rows = dash
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.description.clone(),
                t.amount.clone(),
                t.category_name.clone().unwrap_or_else(|| t.category.clone()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Amount", "Category"], rows)
    );
    Ok(())
}
