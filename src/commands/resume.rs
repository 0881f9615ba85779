// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::FinanceApp;
use crate::breakdown::{CategoryTotal, MonthSelection};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let app = FinanceApp::from_connection(conn)?;
    let month = selected_month(m)?;
    let data = app.load_monthly_breakdown(month)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }

    println!("{}", month.label(app.formatter()));
    if data.is_empty() {
        println!("No expenses recorded this month");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|c| {
            vec![
                c.category_name.clone(),
                c.total_formatted.clone(),
                c.percentage.clone(),
                c.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], rows)
    );
    Ok(())
}

/// `--month` (or the current month) moved by `--shift`.
pub fn selected_month(m: &clap::ArgMatches) -> Result<MonthSelection> {
    let base = match m.get_one::<String>("month") {
        Some(s) => s.parse::<MonthSelection>()?,
        None => MonthSelection::current(),
    };
    Ok(base.shift(m.get_one::<i32>("shift").copied().unwrap_or(0)))
}

pub fn rows(conn: &Connection, m: &clap::ArgMatches) -> Result<Vec<CategoryTotal>> {
    let app = FinanceApp::from_connection(conn)?;
    Ok(app.load_monthly_breakdown(selected_month(m)?)?)
}
