// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reload entry points: fetch a user's records once, then aggregate.

use crate::aggregate::{
    compute_category_breakdown, compute_highlights, format_transaction_list, ReferenceMonth,
};
use crate::error::Result;
use crate::format::FormatPolicy;
use crate::models::{CategorySummary, DisplayTransaction, HighlightSummary};
use crate::store::{KeyValueStore, TransactionRepository};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub highlights: HighlightSummary,
    pub transactions: Vec<DisplayTransaction>,
}

impl Dashboard {
    pub fn reload<S: KeyValueStore>(
        repo: &TransactionRepository<'_, S>,
        policy: &FormatPolicy,
    ) -> Result<Self> {
        let records = repo.load()?;
        Ok(Self {
            highlights: compute_highlights(&records, policy)?,
            transactions: format_transaction_list(&records, policy),
        })
    }
}

/// A pie-chart slice: labelled by percentage, sized by total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub month: ReferenceMonth,
    pub month_label: String,
    pub categories: Vec<CategorySummary>,
    pub chart: Vec<ChartSlice>,
}

impl CategoryReport {
    pub fn reload<S: KeyValueStore>(
        repo: &TransactionRepository<'_, S>,
        month: ReferenceMonth,
        policy: &FormatPolicy,
    ) -> Result<Self> {
        let records = repo.load()?;
        let categories = compute_category_breakdown(&records, month, policy)?;
        let chart = categories
            .iter()
            .map(|c| ChartSlice {
                label: c.percent.clone(),
                value: c.total,
                color: c.color.clone(),
            })
            .collect();
        Ok(Self {
            month,
            month_label: policy.month_label(month),
            categories,
            chart,
        })
    }
}
