// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "positive", alias = "income", alias = "up")]
    Entry,
    #[serde(rename = "negative", alias = "outcome", alias = "down")]
    Expense,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "entry" | "income" | "positive" | "up" => Ok(Self::Entry),
            "expense" | "outcome" | "negative" | "down" => Ok(Self::Expense),
            other => Err(Error::Validation(format!(
                "Unknown transaction kind '{}', expected entry|expense",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Expense => "expense",
        }
    }
}

/// The JSON shape persisted under a user's namespace key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn to_stored(&self) -> StoredTransaction {
        StoredTransaction {
            id: self.id.clone(),
            name: self.description.clone(),
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
            date: self.date.to_rfc3339(),
        }
    }
}

impl TryFrom<StoredTransaction> for TransactionRecord {
    type Error = Error;

    fn try_from(raw: StoredTransaction) -> Result<Self> {
        let date = parse_timestamp(&raw.date).ok_or_else(|| {
            Error::DataIntegrity(format!(
                "transaction {} has unparseable date '{}'",
                raw.id, raw.date
            ))
        })?;
        if raw.amount <= Decimal::ZERO {
            return Err(Error::DataIntegrity(format!(
                "transaction {} has non-positive amount {}",
                raw.id, raw.amount
            )));
        }
        if raw.name.trim().is_empty() {
            return Err(Error::DataIntegrity(format!(
                "transaction {} has an empty description",
                raw.id
            )));
        }
        Ok(Self {
            id: raw.id,
            description: raw.name,
            amount: raw.amount,
            kind: raw.kind,
            category: raw.category,
            date,
        })
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
///
/// A bare date is anchored at 12:00 UTC, which falls on that same calendar
/// day in every zone from UTC-11 to UTC+11.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc())
}

/// User input for a new transaction, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTransaction {
    pub id: String,
    pub description: String,
    pub kind: TransactionKind,
    pub category: String,
    pub category_name: Option<String>,
    pub category_icon: Option<String>,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightCard {
    pub amount: Decimal,
    pub formatted: String,
    pub last_transaction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSummary {
    pub entries: HighlightCard,
    pub expenses: HighlightCard,
    pub balance: Decimal,
    pub balance_formatted: String,
    pub total_interval: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub color: String,
    pub total: Decimal,
    pub total_formatted: String,
    pub percent: String,
}
