// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income (`positive`) or expense (`negative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Positive,
    Negative,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Positive => "positive",
            TransactionType::Negative => "negative",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "income" | "up" => Ok(TransactionType::Positive),
            "negative" | "expense" | "down" => Ok(TransactionType::Negative),
            other => Err(format!(
                "Unknown transaction type '{}', expected positive|negative",
                other
            )),
        }
    }
}

/// One persisted income or expense entry. The whole collection is stored as a
/// single JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "amount_text")]
    pub amount: String, // numeric string, e.g. "40.50"
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(deserialize_with = "timestamp")]
    pub date: NaiveDateTime,
}

impl TransactionRecord {
    /// The amount as a decimal, or `None` unless it is strictly positive.
    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_positive_amount(&self.amount)
    }
}

pub fn parse_positive_amount(s: &str) -> Option<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|d| *d > Decimal::ZERO)
}

/// Accepts naive local timestamps (`2022-04-01T10:00:00`) as well as RFC 3339
/// ones, which are converted to local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    raw.parse::<NaiveDateTime>().ok()
}

fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

// Older blobs may carry the amount as a JSON number.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
