// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, StoredTransaction, TransactionRecord};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::HashMap;

const TRANSACTIONS_PREFIX: &str = "@gofinances:transactions_user:";

/// Flat string key/value storage; values are JSON documents.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Key/value storage on the `storage` table created by `db::init_schema`.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM storage WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM storage WHERE key=?1", params![key])?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn transactions_key(user_id: &str) -> Result<String> {
    let id = user_id.trim();
    if id.is_empty() {
        return Err(Error::Validation("user id must not be empty".into()));
    }
    Ok(format!("{}{}", TRANSACTIONS_PREFIX, id))
}

/// One user's append-only transaction sequence.
pub struct TransactionRepository<'s, S: KeyValueStore> {
    store: &'s S,
    key: String,
}

impl<'s, S: KeyValueStore> TransactionRepository<'s, S> {
    pub fn for_user(store: &'s S, user_id: &str) -> Result<Self> {
        Ok(Self {
            store,
            key: transactions_key(user_id)?,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored sequence in insertion order; a missing key is empty.
    pub fn load(&self) -> Result<Vec<TransactionRecord>> {
        let Some(raw) = self.store.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored transactions");
            return Ok(Vec::new());
        };
        let stored: Vec<StoredTransaction> = serde_json::from_str(&raw).map_err(|e| {
            Error::DataIntegrity(format!("stored transactions under {}: {}", self.key, e))
        })?;
        let records = stored
            .into_iter()
            .map(TransactionRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(key = %self.key, count = records.len(), "loaded transactions");
        Ok(records)
    }

    pub fn append(&self, tx: NewTransaction) -> Result<TransactionRecord> {
        let description = tx.description.trim();
        if description.is_empty() {
            return Err(Error::Validation("description must not be empty".into()));
        }
        if tx.amount <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "amount must be positive, got {}",
                tx.amount
            )));
        }
        if !categories::contains(&tx.category) {
            return Err(Error::Validation(format!(
                "Category '{}' not found",
                tx.category
            )));
        }
        let record = TransactionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.to_string(),
            amount: tx.amount,
            kind: tx.kind,
            category: tx.category,
            date: tx.date.unwrap_or_else(Utc::now),
        };

        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)?;
        tracing::info!(id = %record.id, kind = record.kind.as_str(), "recorded transaction");
        Ok(record)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.delete(&self.key)?;
        tracing::info!(key = %self.key, "cleared transactions");
        Ok(())
    }

    fn save(&self, records: &[TransactionRecord]) -> Result<()> {
        let stored: Vec<StoredTransaction> = records.iter().map(|r| r.to_stored()).collect();
        self.store.set(&self.key, &serde_json::to_string(&stored)?)
    }
}
