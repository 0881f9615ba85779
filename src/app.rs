// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The operations the screens call: dashboard load, monthly resume, register.

use crate::breakdown::{self, CategoryTotal, MonthSelection};
use crate::catalog;
use crate::errors::FinanceError;
use crate::format::Formatter;
use crate::models::TransactionRecord;
use crate::register::{self, RegisterForm};
use crate::storage::{KeyValueStore, SqliteKv, TransactionStore};
use crate::summary::{self, HighlightSummary, TransactionView};
use crate::utils::formatter_from_settings;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub transactions: Vec<TransactionView>,
    pub highlights: HighlightSummary,
}

pub struct FinanceApp<S> {
    store: TransactionStore<S>,
    formatter: Formatter,
}

impl<'c> FinanceApp<SqliteKv<'c>> {
    /// App over the database's `kv` table, formatted per the stored settings.
    pub fn from_connection(conn: &'c Connection) -> Result<Self> {
        let formatter = formatter_from_settings(conn)?;
        Ok(FinanceApp::new(
            TransactionStore::new(SqliteKv::new(conn)),
            formatter,
        ))
    }
}

impl<S: KeyValueStore> FinanceApp<S> {
    pub fn new(store: TransactionStore<S>, formatter: Formatter) -> Self {
        FinanceApp { store, formatter }
    }

    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn load_records(&self) -> Result<Vec<TransactionRecord>, FinanceError> {
        self.store.load_all()
    }

    pub fn load_transactions(&self) -> Result<Dashboard, FinanceError> {
        let records = self.store.load_all()?;
        Ok(Dashboard {
            transactions: summary::present_all(&records, &self.formatter),
            highlights: summary::summarize(&records, &self.formatter),
        })
    }

    pub fn load_monthly_breakdown(
        &self,
        month: MonthSelection,
    ) -> Result<Vec<CategoryTotal>, FinanceError> {
        let records = self.store.load_all()?;
        Ok(breakdown::categorize(
            &records,
            month,
            catalog::categories(),
            &self.formatter,
        ))
    }

    pub fn register_transaction(
        &self,
        form: &RegisterForm,
    ) -> Result<TransactionRecord, FinanceError> {
        register::register(&self.store, form)
    }
}
