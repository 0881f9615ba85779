// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard highlights: entries, expenses and net total.

use crate::catalog;
use crate::format::Formatter;
use crate::models::{TransactionRecord, TransactionType};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub amount: Decimal,
    pub amount_formatted: String,
    pub last_transaction: Option<NaiveDateTime>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightSummary {
    pub entries: Highlight,
    pub expenses: Highlight,
    pub total: Highlight,
    /// Ids of records left out because their amount did not parse or would
    /// overflow the running total.
    pub skipped: Vec<String>,
}

/// One row of the dashboard listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: String,
    pub name: String,
    pub amount_formatted: String,
    pub kind: TransactionType,
    pub category: String,
    pub category_name: String,
    pub date_formatted: String,
}

#[derive(Default)]
struct Tally {
    sum: Decimal,
    last: Option<NaiveDateTime>,
}

impl Tally {
    /// `false` when the running sum would overflow; the tally is unchanged.
    fn add(&mut self, amount: Decimal, date: NaiveDateTime) -> bool {
        let Some(sum) = self.sum.checked_add(amount) else {
            return false;
        };
        self.sum = sum;
        self.last = Some(self.last.map_or(date, |l| l.max(date)));
        true
    }
}

pub fn summarize(records: &[TransactionRecord], fmt: &Formatter) -> HighlightSummary {
    let mut entries = Tally::default();
    let mut expenses = Tally::default();
    let mut skipped = Vec::new();

    for r in records {
        let Some(amount) = r.parsed_amount() else {
            warn!(id = %r.id, amount = %r.amount, "skipping transaction with malformed amount");
            skipped.push(r.id.clone());
            continue;
        };
        let added = match r.kind {
            TransactionType::Positive => entries.add(amount, r.date),
            TransactionType::Negative => expenses.add(amount, r.date),
        };
        if !added {
            warn!(id = %r.id, amount = %r.amount, "skipping transaction that overflows the total");
            skipped.push(r.id.clone());
        }
    }

    // both sums are non-negative, so the difference cannot overflow
    let net = entries.sum - expenses.sum;
    HighlightSummary {
        entries: Highlight {
            amount: entries.sum,
            amount_formatted: fmt.money(entries.sum),
            last_transaction: entries.last,
            label: fmt.last_entry_label(entries.last),
        },
        expenses: Highlight {
            amount: expenses.sum,
            amount_formatted: fmt.money(expenses.sum),
            last_transaction: expenses.last,
            label: fmt.last_expense_label(expenses.last),
        },
        total: Highlight {
            amount: net,
            amount_formatted: fmt.money(net),
            last_transaction: expenses.last,
            label: fmt.interval_label(expenses.last),
        },
        skipped,
    }
}

pub fn present(record: &TransactionRecord, fmt: &Formatter) -> TransactionView {
    let amount_formatted = match record.parsed_amount() {
        Some(a) if record.kind == TransactionType::Negative => format!("- {}", fmt.money(a)),
        Some(a) => fmt.money(a),
        None => record.amount.clone(),
    };
    TransactionView {
        id: record.id.clone(),
        name: record.name.clone(),
        amount_formatted,
        kind: record.kind,
        category: record.category.clone(),
        category_name: catalog::display_name(&record.category).to_string(),
        date_formatted: fmt.short_date(record.date),
    }
}

/// Listing order for the dashboard: newest first, ties in stored order.
pub fn present_all(records: &[TransactionRecord], fmt: &Formatter) -> Vec<TransactionView> {
    let mut ordered: Vec<&TransactionRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered.into_iter().map(|r| present(r, fmt)).collect()
}
