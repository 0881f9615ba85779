// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::FinanceApp;
use crate::breakdown::MonthSelection;
use crate::models::TransactionType;
use crate::register::RegisterForm;
use crate::summary::{self, TransactionView};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> Result<RegisterForm> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>().map_err(|e| anyhow!(e)))
        .transpose()?;
    Ok(RegisterForm {
        name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        kind,
        category: sub.get_one::<String>("category").cloned(),
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let app = FinanceApp::from_connection(conn)?;
    let form = form_from_args(sub)?;
    let record = app.register_transaction(&form)?;
    let view = summary::present(&record, app.formatter());
    println!(
        "Recorded {} '{}' ({}) on {}",
        view.amount_formatted, view.name, view.category_name, view.date_formatted
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date_formatted.clone(),
                    r.name.clone(),
                    r.amount_formatted.clone(),
                    r.category_name.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Name", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

/// Dashboard listing rows, newest first, narrowed by `--month` and `--limit`.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionView>> {
    let app = FinanceApp::from_connection(conn)?;
    let mut records = app.load_records()?;
    if let Some(month) = sub.get_one::<String>("month") {
        let month: MonthSelection = month.parse()?;
        records.retain(|r| month.contains(r.date));
    }
    let mut data = summary::present_all(&records, app.formatter());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
