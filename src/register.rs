// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::{self, Category};
use crate::errors::{FinanceError, ValidationError};
use crate::models::{TransactionRecord, TransactionType, parse_positive_amount};
use crate::storage::{KeyValueStore, TransactionStore};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

/// What the registration screen submits. Type and category start unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub amount: String,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
}

/// A form that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checked {
    pub kind: TransactionType,
    pub category: &'static Category,
    pub amount: Decimal,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Checked, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let amount = parse_positive_amount(&self.amount)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        let kind = self.kind.ok_or(ValidationError::MissingType)?;
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingCategory),
            Some(key) => {
                catalog::find(key).ok_or_else(|| ValidationError::UnknownCategory(key.to_string()))?
            }
        };
        Ok(Checked {
            kind,
            category,
            amount,
        })
    }

    /// Builds the record to persist, stamped with `now` and a fresh id.
    pub fn to_record(&self, now: NaiveDateTime) -> Result<TransactionRecord, ValidationError> {
        let checked = self.validate()?;
        Ok(TransactionRecord {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            amount: checked.amount.to_string(),
            kind: checked.kind,
            category: checked.category.key.to_string(),
            date: now,
        })
    }
}

/// Validates, then appends. Nothing is written when validation fails; a failed
/// write leaves the stored collection as it was.
pub fn register<S: KeyValueStore>(
    store: &TransactionStore<S>,
    form: &RegisterForm,
) -> Result<TransactionRecord, FinanceError> {
    let record = form.to_record(Local::now().naive_local())?;
    store.append_one(record.clone())?;
    info!(id = %record.id, kind = %record.kind, category = %record.category, "registered transaction");
    Ok(record)
}
