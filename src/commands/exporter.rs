// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionRecord;
use crate::storage::{SqliteKv, TransactionStore};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let mut records = TransactionStore::new(SqliteKv::new(conn)).load_all()?;
    records.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => write_csv(out, &records)?,
        _ => std::fs::write(out, serde_json::to_string_pretty(&records)?)?,
    }
    println!("Exported {} transactions to {}", records.len(), out);
    Ok(())
}

fn write_csv(out: &str, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "date", "name", "type", "category", "amount"])?;
    for r in records {
        let date = r.date.format("%Y-%m-%dT%H:%M:%S").to_string();
        wtr.write_record([
            r.id.as_str(),
            date.as_str(),
            r.name.as_str(),
            r.kind.as_str(),
            r.category.as_str(),
            r.amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
