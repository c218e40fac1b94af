// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::aggregate::ReferenceMonth;
use chrono_tz::Tz;
use gofinances::format::{FormatPolicy, Locale};
use gofinances::models::{parse_timestamp, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn brazilian_currency() {
    let p = FormatPolicy::new(Locale::PtBr);
    assert_eq!(p.currency(dec("59")), "R$ 59,00");
    assert_eq!(p.currency(dec("1234567.891")), "R$ 1.234.567,89");
    assert_eq!(p.currency(dec("0.005")), "R$ 0,01");
    assert_eq!(p.currency(dec("-1259")), "-R$ 1.259,00");
    assert_eq!(p.currency(dec("-0.001")), "R$ 0,00");
}

#[test]
fn us_currency() {
    let p = FormatPolicy::new(Locale::EnUs);
    assert_eq!(p.currency(dec("12000")), "$12,000.00");
    assert_eq!(p.currency(dec("999.999")), "$1,000.00");
    assert_eq!(p.currency(dec("-3.5")), "-$3.50");
}

#[test]
fn dates_per_locale() {
    let d = parse_timestamp("2020-04-03T15:00:00Z").unwrap();
    let pt = FormatPolicy::new(Locale::PtBr);
    let en = FormatPolicy::new(Locale::EnUs);
    assert_eq!(pt.short_date(d), "03/04/20");
    assert_eq!(en.short_date(d), "04/03/20");
    assert_eq!(pt.day_month(d), "3 de abril");
    assert_eq!(en.day_month(d), "April 3");
    assert_eq!(en.interval(Some(d)), "April 1 to April 3");
    assert_eq!(
        en.last_transaction(TransactionKind::Entry, Some(d)),
        "Last entry on April 3"
    );
    assert_eq!(pt.last_transaction(TransactionKind::Expense, None), "Não há transações");
}

#[test]
fn percent_guards_zero_total() {
    let p = FormatPolicy::default();
    assert_eq!(p.percent(dec("0"), dec("0")), None);
    assert_eq!(p.percent(dec("59"), dec("1259")).as_deref(), Some("5%"));
    assert_eq!(p.percent(dec("1"), dec("8")).as_deref(), Some("13%"));
    assert_eq!(p.percent(dec("40"), dec("40")).as_deref(), Some("100%"));
}

#[test]
fn month_labels() {
    let m = ReferenceMonth::new(2020, 3).unwrap();
    assert_eq!(FormatPolicy::new(Locale::PtBr).month_label(m), "março, 2020");
    assert_eq!(FormatPolicy::new(Locale::EnUs).month_label(m), "March, 2020");
}

#[test]
fn default_locale_is_brazilian() {
    assert_eq!(Locale::default(), Locale::PtBr);
    assert_eq!(Locale::default().currency_code(), "BRL");
    assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
}

#[test]
fn dates_render_in_policy_zone() {
    let d = parse_timestamp("2021-01-01T02:00:00Z").unwrap();
    let pt = FormatPolicy::default();
    assert_eq!(pt.timezone, Tz::America__Sao_Paulo);
    assert_eq!(pt.local_date(d), NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
    assert_eq!(pt.short_date(d), "31/12/20");
    assert_eq!(pt.day_month(d), "31 de dezembro");
    assert_eq!(pt.interval(Some(d)), "01 a 31 de dezembro");

    let utc = pt.with_timezone(Tz::UTC);
    assert_eq!(utc.short_date(d), "01/01/21");
    assert_eq!(utc.day_month(d), "1 de janeiro");
}

#[test]
fn bare_dates_keep_their_day_across_zones() {
    let d = parse_timestamp("2020-04-13").unwrap();
    for tz in [Tz::America__Sao_Paulo, Tz::America__Los_Angeles, Tz::Asia__Tokyo] {
        let p = FormatPolicy::default().with_timezone(tz);
        assert_eq!(p.short_date(d), "13/04/20", "zone {}", tz);
    }
}
