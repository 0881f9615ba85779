// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-category expense totals for one calendar month.

use crate::catalog::Category;
use crate::errors::FinanceError;
use crate::format::Formatter;
use crate::models::{TransactionRecord, TransactionType};
use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A calendar month, kept as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthSelection {
    first_day: NaiveDate,
}

impl MonthSelection {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| MonthSelection { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthSelection {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    /// Moves by `months` calendar months. Stays put at the edge of chrono's
    /// date range.
    pub fn shift(self, months: i32) -> Self {
        let step = Months::new(months.unsigned_abs());
        let moved = if months >= 0 {
            self.first_day.checked_add_months(step)
        } else {
            self.first_day.checked_sub_months(step)
        };
        moved.map(|first_day| MonthSelection { first_day }).unwrap_or(self)
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn label(&self, fmt: &Formatter) -> String {
        fmt.month_year(self.first_day)
    }
}

impl fmt::Display for MonthSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthSelection {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map(|first_day| MonthSelection { first_day })
            .map_err(|_| FinanceError::InvalidMonth(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub key: String,
    pub category_name: String,
    pub color: String,
    pub total: Decimal,
    pub total_formatted: String,
    pub percentage: String,
}

/// Expense totals per catalog category for `month`, in catalog order.
///
/// Expenses whose category is not in `catalog` are left out of both the rows
/// and the grand total, so the row totals always add up to the grand total
/// and an empty result means nothing was spent.
pub fn categorize(
    records: &[TransactionRecord],
    month: MonthSelection,
    catalog: &[Category],
    fmt: &Formatter,
) -> Vec<CategoryTotal> {
    let mut by_key: HashMap<&str, Decimal> = HashMap::new();
    let mut total_from_all = Decimal::ZERO;
    for r in records
        .iter()
        .filter(|r| r.kind == TransactionType::Negative && month.contains(r.date))
    {
        let Some(amount) = r.parsed_amount() else {
            warn!(id = %r.id, amount = %r.amount, "skipping expense with malformed amount");
            continue;
        };
        if !catalog.iter().any(|c| c.key == r.category) {
            debug!(id = %r.id, category = %r.category, "expense has no catalog category");
            continue;
        }
        // every group total is bounded by the grand total, so checking the
        // grand total covers both
        let Some(grand) = total_from_all.checked_add(amount) else {
            warn!(id = %r.id, amount = %r.amount, "skipping expense that overflows the month total");
            continue;
        };
        total_from_all = grand;
        *by_key.entry(r.category.as_str()).or_insert(Decimal::ZERO) += amount;
    }

    if total_from_all.is_zero() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter_map(|c| {
            let total = *by_key.get(c.key)?;
            Some(CategoryTotal {
                key: c.key.to_string(),
                category_name: c.name.to_string(),
                color: c.color.to_string(),
                total,
                total_formatted: fmt.money(total),
                percentage: percentage(total, total_from_all),
            })
        })
        .collect()
}

fn percentage(part: Decimal, whole: Decimal) -> String {
    let pct = (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.0}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_whole_numbers() {
        let d = |s: &str| s.parse::<Decimal>().unwrap();
        assert_eq!(percentage(d("1"), d("3")), "33%");
        assert_eq!(percentage(d("2"), d("3")), "67%");
        assert_eq!(percentage(d("1"), d("8")), "13%");
        assert_eq!(percentage(d("5"), d("5")), "100%");
    }

    #[test]
    fn parses_and_displays_year_month() {
        let m: MonthSelection = "2022-04".parse().unwrap();
        assert_eq!((m.year(), m.month()), (2022, 4));
        assert_eq!(m.to_string(), "2022-04");
        assert!("2022-13".parse::<MonthSelection>().is_err());
        assert!("april".parse::<MonthSelection>().is_err());
    }
}
