// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{format_policy, get_locale, parse_timezone, set_locale, set_timezone};
use crate::format::Locale;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("locale", sub)) = m.subcommand() {
        match sub.get_one::<String>("value") {
            Some(v) => {
                let locale: Locale = v.parse()?;
                set_locale(conn, locale)?;
                println!(
                    "Locale set to {} (currency {})",
                    locale,
                    locale.currency_code()
                );
            }
            None => println!("{}", get_locale(conn)?),
        }
    }
    if let Some(("timezone", sub)) = m.subcommand() {
        match sub.get_one::<String>("value") {
            Some(v) => {
                let tz = parse_timezone(v)?;
                set_timezone(conn, tz)?;
                println!("Timezone set to {}", tz.name());
            }
            None => println!("{}", format_policy(conn)?.timezone.name()),
        }
    }
    Ok(())
}
