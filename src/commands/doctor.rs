// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::models::TransactionRecord;
use crate::storage::{SqliteKv, TransactionStore};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn find_issues(records: &[TransactionRecord]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for r in records {
        // 1) Category keys the catalog does not know; never shown in the resume
        if catalog::find(&r.category).is_none() {
            issues.push(Issue {
                kind: "unknown_category",
                detail: format!("{} '{}'", r.id, r.category),
            });
        }
        // 2) Amounts left out of every total
        if r.parsed_amount().is_none() {
            issues.push(Issue {
                kind: "malformed_amount",
                detail: format!("{} '{}'", r.id, r.amount),
            });
        }
    }
    issues
}

pub fn handle(conn: &Connection) -> Result<()> {
    let records = TransactionStore::new(SqliteKv::new(conn)).load_all()?;
    let rows: Vec<Vec<String>> = find_issues(&records)
        .into_iter()
        .map(|i| vec![i.kind.to_string(), i.detail])
        .collect();

    if rows.is_empty() {
        println!("✅ doctor: no issues found ({} transactions)", records.len());
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
