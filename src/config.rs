// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::format::{FormatPolicy, Locale};
use chrono_tz::Tz;
use rusqlite::{params, Connection, OptionalExtension};

const LOCALE_KEY: &str = "locale";
const TIMEZONE_KEY: &str = "timezone";

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_locale(conn: &Connection) -> Result<Locale> {
    match get_setting(conn, LOCALE_KEY)? {
        Some(tag) => tag.parse(),
        None => Ok(Locale::default()),
    }
}

pub fn set_locale(conn: &Connection, locale: Locale) -> Result<()> {
    set_setting(conn, LOCALE_KEY, locale.tag())
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::Validation(format!("invalid timezone: {}", name)))
}

/// The configured IANA zone, if one was set.
pub fn get_timezone(conn: &Connection) -> Result<Option<Tz>> {
    get_setting(conn, TIMEZONE_KEY)?
        .map(|name| parse_timezone(&name))
        .transpose()
}

pub fn set_timezone(conn: &Connection, tz: Tz) -> Result<()> {
    set_setting(conn, TIMEZONE_KEY, tz.name())
}

/// Locale from settings; the zone falls back to the locale's home zone.
pub fn format_policy(conn: &Connection) -> Result<FormatPolicy> {
    let policy = FormatPolicy::new(get_locale(conn)?);
    Ok(match get_timezone(conn)? {
        Some(tz) => policy.with_timezone(tz),
        None => policy,
    })
}
