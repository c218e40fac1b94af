// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{Session, User};
use crate::store::SqliteStore;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let user = build_user(sub)?;
    Session::new(&store).sign_in(&user)?;
    println!("Olá, {}! Signed in as {}", user.name, user.email);
    Ok(())
}

pub fn logout(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let purge = sub.get_flag("purge");
    match Session::new(&store).sign_out(purge)? {
        Some(u) if purge => println!("Signed out {} and removed their transactions", u.id),
        Some(u) => println!("Signed out {}", u.id),
        None => println!("Nobody is signed in"),
    }
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    let store = SqliteStore::new(conn);
    let user = Session::new(&store).require_user()?;
    println!("{} <{}> (id: {})", user.name, user.email, user.id);
    Ok(())
}

/// Maps the login flags onto a provider profile.
pub fn build_user(sub: &clap::ArgMatches) -> Result<User> {
    let arg = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    let provider = sub.get_one::<String>("provider").map(String::as_str);
    let userinfo = sub.get_one::<String>("userinfo");
    match (provider, userinfo) {
        (Some("apple"), Some(_)) => bail!("--userinfo is only accepted for Google sign-in"),
        (Some("apple"), None) => Ok(User::from_apple(&arg("id"), &arg("name"), &arg("email"))),
        (_, Some(raw)) => {
            let info: serde_json::Value =
                serde_json::from_str(raw).context("Invalid --userinfo JSON")?;
            Ok(User::from_google_userinfo(&info)?)
        }
        (_, None) => {
            let info = json!({
                "id": arg("id"),
                "given_name": arg("name"),
                "email": arg("email"),
                "picture": sub.get_one::<String>("photo"),
            });
            Ok(User::from_google_userinfo(&info)?)
        }
    }
}
