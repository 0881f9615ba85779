// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketfin::app::FinanceApp;
use pocketfin::format::{Formatter, Locale};
use pocketfin::models::{TransactionRecord, TransactionType};
use pocketfin::storage::{MemoryKv, TransactionStore};
use pocketfin::summary::{present_all, summarize};
use rust_decimal::Decimal;

fn rec(
    id: &str,
    amount: &str,
    kind: TransactionType,
    category: &str,
    (y, m, d): (i32, u32, u32),
) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        name: format!("tx {}", id),
        amount: amount.into(),
        kind,
        category: category.into(),
        date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn april_scenario() -> Vec<TransactionRecord> {
    vec![
        rec("1", "100", TransactionType::Positive, "salary", (2022, 4, 1)),
        rec("2", "40", TransactionType::Negative, "food", (2022, 4, 2)),
        rec("3", "60", TransactionType::Negative, "transport", (2022, 4, 3)),
    ]
}

#[test]
fn scenario_nets_to_zero() {
    let s = summarize(&april_scenario(), &Formatter::default());
    assert_eq!(s.entries.amount, dec("100"));
    assert_eq!(s.expenses.amount, dec("100"));
    assert_eq!(s.total.amount, Decimal::ZERO);
    assert_eq!(s.entries.amount_formatted, "R$ 100,00");
    assert_eq!(s.total.amount_formatted, "R$ 0,00");
    assert_eq!(s.entries.label, "Última entrada dia 1 de abril");
    assert_eq!(s.expenses.label, "Última saída dia 3 de abril");
    assert_eq!(s.total.label, "01 a 03 de abril");
    assert!(s.skipped.is_empty());
}

#[test]
fn empty_list_has_zero_sums_and_no_dates() {
    let s = summarize(&[], &Formatter::default());
    for h in [&s.entries, &s.expenses, &s.total] {
        assert_eq!(h.amount, Decimal::ZERO);
        assert_eq!(h.amount_formatted, "R$ 0,00");
        assert!(h.last_transaction.is_none());
        assert_eq!(h.label, "Não há transações");
    }
}

#[test]
fn only_income_leaves_expense_labels_empty() {
    let records = vec![rec("1", "2500", TransactionType::Positive, "salary", (2022, 5, 5))];
    let s = summarize(&records, &Formatter::default());
    assert_eq!(s.entries.amount_formatted, "R$ 2.500,00");
    assert!(s.entries.last_transaction.is_some());
    assert!(s.expenses.last_transaction.is_none());
    assert_eq!(s.expenses.label, "Não há transações");
    assert_eq!(s.total.label, "Não há transações");
    assert_eq!(s.total.amount, dec("2500"));
}

#[test]
fn last_transaction_is_the_latest_date_not_the_last_stored() {
    let records = vec![
        rec("1", "10", TransactionType::Negative, "food", (2022, 4, 20)),
        rec("2", "10", TransactionType::Negative, "food", (2022, 4, 2)),
    ];
    let s = summarize(&records, &Formatter::default());
    assert_eq!(s.expenses.label, "Última saída dia 20 de abril");
}

#[test]
fn net_is_entries_minus_expenses() {
    let lists = vec![
        april_scenario(),
        vec![
            rec("a", "0.10", TransactionType::Positive, "salary", (2021, 1, 1)),
            rec("b", "0.20", TransactionType::Positive, "salary", (2021, 1, 2)),
            rec("c", "0.30", TransactionType::Negative, "food", (2021, 1, 3)),
        ],
        vec![
            rec("a", "1999.99", TransactionType::Negative, "purchases", (2023, 2, 1)),
            rec("b", "0.01", TransactionType::Positive, "salary", (2023, 2, 2)),
        ],
    ];
    for records in lists {
        let s = summarize(&records, &Formatter::default());
        assert_eq!(s.total.amount, s.entries.amount - s.expenses.amount);
    }
}

#[test]
fn tenths_add_up_exactly() {
    let records = vec![
        rec("a", "0.10", TransactionType::Positive, "salary", (2021, 1, 1)),
        rec("b", "0.20", TransactionType::Positive, "salary", (2021, 1, 2)),
        rec("c", "0.30", TransactionType::Negative, "food", (2021, 1, 3)),
    ];
    let s = summarize(&records, &Formatter::default());
    assert!(s.total.amount.is_zero());
}

#[test]
fn malformed_amounts_are_skipped_and_reported() {
    let mut records = april_scenario();
    records.push(rec("bad", "12abc", TransactionType::Negative, "food", (2022, 4, 30)));
    records.push(rec("neg", "-5", TransactionType::Positive, "salary", (2022, 4, 30)));
    let s = summarize(&records, &Formatter::default());
    assert_eq!(s.expenses.amount, dec("100"));
    assert_eq!(s.entries.amount, dec("100"));
    assert_eq!(s.skipped, vec!["bad".to_string(), "neg".to_string()]);
    // the skipped record's date does not count either
    assert_eq!(s.expenses.label, "Última saída dia 3 de abril");
}

#[test]
fn english_labels() {
    let f = Formatter::new(Locale::EnUs, "USD");
    let s = summarize(&april_scenario(), &f);
    assert_eq!(s.entries.amount_formatted, "$100.00");
    assert_eq!(s.entries.label, "Last entry on April 1");
    assert_eq!(s.total.label, "April 1 to 3");
}

#[test]
fn listing_is_newest_first_with_signed_expenses() {
    let views = present_all(&april_scenario(), &Formatter::default());
    let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
    assert_eq!(views[0].amount_formatted, "- R$ 60,00");
    assert_eq!(views[0].category_name, "Transporte");
    assert_eq!(views[0].date_formatted, "03/04/22");
    assert_eq!(views[2].amount_formatted, "R$ 100,00");
}

#[test]
fn app_dashboard_on_fresh_store() {
    let app = FinanceApp::new(TransactionStore::new(MemoryKv::new()), Formatter::default());
    let dashboard = app.load_transactions().unwrap();
    assert!(dashboard.transactions.is_empty());
    assert_eq!(dashboard.highlights.total.amount_formatted, "R$ 0,00");
    assert_eq!(dashboard.highlights.entries.label, "Não há transações");
}

const HUGE: &str = "50000000000000000000000000000";

#[test]
fn amounts_that_overflow_the_total_are_skipped() {
    let mut records = april_scenario();
    records.push(rec("big1", HUGE, TransactionType::Negative, "purchases", (2022, 4, 10)));
    records.push(rec("big2", HUGE, TransactionType::Negative, "purchases", (2022, 4, 11)));
    let s = summarize(&records, &Formatter::default());
    assert_eq!(s.expenses.amount, dec(HUGE) + dec("100"));
    assert_eq!(s.total.amount, -dec(HUGE));
    assert_eq!(s.skipped, vec!["big2".to_string()]);
    assert_eq!(s.expenses.label, "Última saída dia 10 de abril");
}

#[test]
fn app_dashboard_survives_huge_amounts() {
    let store = TransactionStore::new(MemoryKv::new());
    store
        .append_one(rec("a", HUGE, TransactionType::Positive, "salary", (2022, 4, 1)))
        .unwrap();
    store
        .append_one(rec("b", HUGE, TransactionType::Positive, "salary", (2022, 4, 2)))
        .unwrap();
    let app = FinanceApp::new(store, Formatter::default());
    let dashboard = app.load_transactions().unwrap();
    assert_eq!(dashboard.transactions.len(), 2);
    assert_eq!(dashboard.highlights.entries.amount, dec(HUGE));
    assert_eq!(dashboard.highlights.skipped, vec!["b".to_string()]);
}
