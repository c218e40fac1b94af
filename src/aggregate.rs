// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a user's transaction list: highlight totals, the
//! monthly per-category breakdown and the display projection.

use crate::categories;
use crate::error::{Error, Result};
use crate::format::FormatPolicy;
use crate::models::{
    CategorySummary, DisplayTransaction, HighlightCard, HighlightSummary, TransactionKind,
    TransactionRecord,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

/// Calendar month used to scope the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReferenceMonth {
    pub year: i32,
    pub month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(format!("Invalid month number {}", month)));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month it currently is in `tz`.
    pub fn current_in(tz: Tz) -> Self {
        Self::from_date(Utc::now().with_timezone(&tz).date_naive())
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|_| Error::Validation(format!("Invalid month '{}', expected YYYY-MM", s)))?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { month: self.month + 1, ..self }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { month: self.month - 1, ..self }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Default)]
struct Partition {
    total: Decimal,
    latest: Option<DateTime<Utc>>,
}

fn overflow() -> Error {
    Error::DataIntegrity("transaction amounts overflow the representable total".into())
}

fn checked_total(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, a| acc.checked_add(a).ok_or_else(overflow))
}

impl Partition {
    fn add(&mut self, record: &TransactionRecord) -> Result<()> {
        self.total = self.total.checked_add(record.amount).ok_or_else(overflow)?;
        if self.latest.is_none_or(|d| record.date > d) {
            self.latest = Some(record.date);
        }
        Ok(())
    }

    fn card(&self, kind: TransactionKind, policy: &FormatPolicy) -> HighlightCard {
        HighlightCard {
            amount: self.total,
            formatted: policy.currency(self.total),
            last_transaction: policy.last_transaction(kind, self.latest),
        }
    }
}

/// Totals per kind over every record, plus the balance and interval label.
///
/// An empty partition yields a zero total and the "no transactions"
/// sentinel instead of a date. Totals beyond the decimal range are reported
/// as a data-integrity error.
pub fn compute_highlights(
    records: &[TransactionRecord],
    policy: &FormatPolicy,
) -> Result<HighlightSummary> {
    let mut entries = Partition::default();
    let mut expenses = Partition::default();
    for r in records {
        match r.kind {
            TransactionKind::Entry => entries.add(r)?,
            TransactionKind::Expense => expenses.add(r)?,
        }
    }
    let balance = entries.total.checked_sub(expenses.total).ok_or_else(overflow)?;
    tracing::debug!(
        records = records.len(),
        entries = %entries.total,
        expenses = %expenses.total,
        "computed highlights"
    );
    Ok(HighlightSummary {
        entries: entries.card(TransactionKind::Entry, policy),
        expenses: expenses.card(TransactionKind::Expense, policy),
        balance,
        balance_formatted: policy.currency(balance),
        total_interval: policy.interval(entries.latest),
    })
}

/// Expense totals per catalog category for `month`, in catalog order.
///
/// Categories without spending are omitted, so a month with no expenses
/// yields an empty list. Months are matched on the calendar of the policy's
/// time zone.
pub fn compute_category_breakdown(
    records: &[TransactionRecord],
    month: ReferenceMonth,
    policy: &FormatPolicy,
) -> Result<Vec<CategorySummary>> {
    let expenses: Vec<&TransactionRecord> = records
        .iter()
        .filter(|r| {
            r.kind == TransactionKind::Expense && month.contains(policy.local_date(r.date))
        })
        .collect();
    let expenses_total = checked_total(expenses.iter().map(|r| r.amount))?;

    let mut out = Vec::new();
    for category in categories::all() {
        let sum = checked_total(
            expenses
                .iter()
                .filter(|r| r.category == category.key)
                .map(|r| r.amount),
        )?;
        if sum <= Decimal::ZERO {
            continue;
        }
        let Some(percent) = policy.percent(sum, expenses_total) else {
            continue;
        };
        out.push(CategorySummary {
            key: category.key.to_string(),
            name: category.name.to_string(),
            color: category.color.to_string(),
            total: sum,
            total_formatted: policy.currency(sum),
            percent,
        });
    }
    tracing::debug!(%month, categories = out.len(), total = %expenses_total, "computed breakdown");
    Ok(out)
}

pub fn format_transaction_list(
    records: &[TransactionRecord],
    policy: &FormatPolicy,
) -> Vec<DisplayTransaction> {
    records
        .iter()
        .map(|r| {
            let category = categories::find(&r.category);
            DisplayTransaction {
                id: r.id.clone(),
                description: r.description.clone(),
                kind: r.kind,
                category: r.category.clone(),
                category_name: category.map(|c| c.name.to_string()),
                category_icon: category.map(|c| c.icon.to_string()),
                amount: policy.currency(r.amount),
                date: policy.short_date(r.date),
            }
        })
        .collect()
}
