// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::store::{KeyValueStore, TransactionRepository};
use serde::{Deserialize, Serialize};

const USER_KEY: &str = "@gofinances:user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl User {
    /// Maps a Google `oauth2/v1/userinfo` response.
    pub fn from_google_userinfo(info: &serde_json::Value) -> Result<Self> {
        let field = |name: &str| {
            info.get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let id = field("id")
            .ok_or_else(|| Error::Validation("userinfo response has no id".into()))?;
        Ok(Self {
            id,
            name: field("given_name").unwrap_or_default(),
            email: field("email").unwrap_or_default(),
            photo: field("picture"),
        })
    }

    /// Apple credentials carry no picture, so an initials avatar is used.
    pub fn from_apple(id: &str, given_name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: given_name.to_string(),
            email: email.to_string(),
            photo: Some(format!(
                "https://ui-avatars.com/api/?name={}&length=1",
                given_name
            )),
        }
    }
}

/// The signed-in user, persisted alongside the transaction namespaces.
pub struct Session<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> Session<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn sign_in(&self, user: &User) -> Result<()> {
        if user.id.trim().is_empty() {
            return Err(Error::Validation("user id must not be empty".into()));
        }
        self.store.set(USER_KEY, &serde_json::to_string(user)?)?;
        tracing::info!(user = %user.id, "signed in");
        Ok(())
    }

    pub fn current(&self) -> Result<Option<User>> {
        match self.store.get(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn require_user(&self) -> Result<User> {
        self.current()?.ok_or(Error::NotSignedIn)
    }

    /// Forgets the signed-in user; `purge` also clears their transactions.
    pub fn sign_out(&self, purge: bool) -> Result<Option<User>> {
        let user = self.current()?;
        if let Some(u) = &user {
            if purge {
                TransactionRepository::for_user(self.store, &u.id)?.clear()?;
            }
            tracing::info!(user = %u.id, purge, "signed out");
        }
        self.store.delete(USER_KEY)?;
        Ok(user)
    }

    pub fn transactions(&self) -> Result<TransactionRepository<'s, S>> {
        let user = self.require_user()?;
        TransactionRepository::for_user(self.store, &user.id)
    }
}
