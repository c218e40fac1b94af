// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Locale-aware rendering of amounts, dates and summary labels.
//!
//! A single [`FormatPolicy`] carries the locale (and with it the currency)
//! plus the time zone whose calendar dates are shown and grouped by.

use crate::aggregate::ReferenceMonth;
use crate::error::{Error, Result};
use crate::models::TransactionKind;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PT_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    pub fn currency_code(&self) -> &'static str {
        match self {
            Self::PtBr => "BRL",
            Self::EnUs => "USD",
        }
    }

    pub fn default_timezone(&self) -> Tz {
        match self {
            Self::PtBr => chrono_tz::America::Sao_Paulo,
            Self::EnUs => chrono_tz::America::New_York,
        }
    }

    fn currency_symbol(&self) -> &'static str {
        match self {
            Self::PtBr => "R$ ",
            Self::EnUs => "$",
        }
    }

    // (thousands, decimal)
    fn separators(&self) -> (char, char) {
        match self {
            Self::PtBr => ('.', ','),
            Self::EnUs => (',', '.'),
        }
    }

    fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Self::PtBr => PT_MONTHS[idx],
            Self::EnUs => EN_MONTHS[idx],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            other => Err(Error::Validation(format!(
                "Unsupported locale '{}', expected pt-BR|en-US",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    pub locale: Locale,
    pub timezone: Tz,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl FormatPolicy {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            timezone: locale.default_timezone(),
        }
    }

    pub fn with_timezone(self, timezone: Tz) -> Self {
        Self { timezone, ..self }
    }

    /// Calendar date of `at` as seen in the policy's time zone.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.timezone).date_naive()
    }

    /// `R$ 1.259,00` / `$1,259.00`; negatives carry a leading `-`.
    pub fn currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        let (thousands, decimal) = self.locale.separators();
        format!(
            "{}{}{}{}{}",
            sign,
            self.locale.currency_symbol(),
            group_digits(int_part, thousands),
            decimal,
            frac_part
        )
    }

    pub fn short_date(&self, date: DateTime<Utc>) -> String {
        let date = self.local_date(date);
        match self.locale {
            Locale::PtBr => date.format("%d/%m/%y").to_string(),
            Locale::EnUs => date.format("%m/%d/%y").to_string(),
        }
    }

    pub fn day_month(&self, date: DateTime<Utc>) -> String {
        let date = self.local_date(date);
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("{} de {}", date.day(), month),
            Locale::EnUs => format!("{} {}", month, date.day()),
        }
    }

    pub fn no_transactions(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Não há transações",
            Locale::EnUs => "No transactions",
        }
    }

    pub fn last_transaction(&self, kind: TransactionKind, date: Option<DateTime<Utc>>) -> String {
        let Some(date) = date else {
            return self.no_transactions().to_string();
        };
        let day = self.day_month(date);
        match (self.locale, kind) {
            (Locale::PtBr, TransactionKind::Entry) => format!("Última entrada dia {}", day),
            (Locale::PtBr, TransactionKind::Expense) => format!("Última saída dia {}", day),
            (Locale::EnUs, TransactionKind::Entry) => format!("Last entry on {}", day),
            (Locale::EnUs, TransactionKind::Expense) => format!("Last expense on {}", day),
        }
    }

    /// Span from the first of the month up to `until`.
    pub fn interval(&self, until: Option<DateTime<Utc>>) -> String {
        let Some(until) = until else {
            return self.no_transactions().to_string();
        };
        match self.locale {
            Locale::PtBr => format!("01 a {}", self.day_month(until)),
            Locale::EnUs => format!(
                "{} 1 to {}",
                self.locale.month_name(self.local_date(until).month()),
                self.day_month(until)
            ),
        }
    }

    /// Integer percentage of `part` over `whole`; `None` when `whole` is zero.
    pub fn percent(&self, part: Decimal, whole: Decimal) -> Option<String> {
        if whole.is_zero() {
            return None;
        }
        let pct = (part / whole * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        Some(format!("{}%", pct))
    }

    pub fn month_label(&self, month: ReferenceMonth) -> String {
        let name = self.locale.month_name(month.month);
        format!("{}, {}", name, month.year)
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits("1", '.'), "1");
        assert_eq!(group_digits("123", '.'), "123");
        assert_eq!(group_digits("1234", '.'), "1.234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }

    #[test]
    fn locale_round_trips_through_tag() {
        for l in [Locale::PtBr, Locale::EnUs] {
            assert_eq!(l.tag().parse::<Locale>().unwrap(), l);
        }
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
