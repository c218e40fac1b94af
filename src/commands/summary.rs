// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::ReferenceMonth;
use crate::config::format_policy;
use crate::dashboard::CategoryReport;
use crate::format::FormatPolicy;
use crate::session::Session;
use crate::store::SqliteStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let policy = format_policy(conn)?;
    let month = selected_month(sub, &policy)?;
    let store = SqliteStore::new(conn);
    let repo = Session::new(&store).transactions()?;
    let report = CategoryReport::reload(&repo, month, &policy)?;
    if maybe_print_json(sub.get_flag("json"), &report)? {
        return Ok(());
    }

    println!("Resumo por categoria: {}", report.month_label);
    let rows = report
        .categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.total_formatted.clone(),
                c.percent.clone(),
                c.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Share", "Color"], rows)
    );
    Ok(())
}

/// `--month` (or the current month in the policy's zone), shifted by
/// `--prev` / `--next`.
pub fn selected_month(sub: &clap::ArgMatches, policy: &FormatPolicy) -> Result<ReferenceMonth> {
    let base = match sub.get_one::<String>("month") {
        Some(m) => ReferenceMonth::parse(m)?,
        None => ReferenceMonth::current_in(policy.timezone),
    };
    Ok(if sub.get_flag("prev") {
        base.prev()
    } else if sub.get_flag("next") {
        base.next()
    } else {
        base
    })
}
