// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::FinanceApp;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let app = FinanceApp::from_connection(conn)?;
    let dashboard = app.load_transactions()?;
    if maybe_print_json(json_flag, jsonl_flag, &dashboard)? {
        return Ok(());
    }

    let h = &dashboard.highlights;
    let rows = vec![
        vec!["Entries".into(), h.entries.amount_formatted.clone(), h.entries.label.clone()],
        vec!["Expenses".into(), h.expenses.amount_formatted.clone(), h.expenses.label.clone()],
        vec!["Total".into(), h.total.amount_formatted.clone(), h.total.label.clone()],
    ];
    println!("{}", pretty_table(&["", "Amount", "Last transaction"], rows));
    if !h.skipped.is_empty() {
        eprintln!(
            "{} transaction(s) with an unreadable amount were left out; run `pocketfin doctor`",
            h.skipped.len()
        );
    }

    let listing: Vec<Vec<String>> = dashboard
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.date_formatted.clone(),
                t.name.clone(),
                t.amount_formatted.clone(),
                t.category_name.clone(),
            ]
        })
        .collect();
    if !listing.is_empty() {
        println!(
            "{}",
            pretty_table(&["Date", "Name", "Amount", "Category"], listing)
        );
    }
    Ok(())
}
