// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Locale-aware money and date rendering for the dashboard and resume views.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "BRL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// `month` is 1-based, as returned by [`Datelike::month`].
    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => MONTHS_PT[idx],
            Locale::EnUs => MONTHS_EN[idx],
        }
    }

    fn separators(&self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(format!("Unsupported locale '{}' (use pt-BR|en-US)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    locale: Locale,
    currency: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(Locale::default(), DEFAULT_CURRENCY)
    }
}

impl Formatter {
    pub fn new(locale: Locale, currency: impl Into<String>) -> Self {
        Formatter {
            locale,
            currency: currency.into().trim().to_uppercase(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    fn symbol(&self) -> &str {
        match self.currency.as_str() {
            "BRL" => "R$",
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            other => other,
        }
    }

    /// `R$ 1.234,56` in pt-BR, `$1,234.56` in en-US.
    pub fn money(&self, amount: Decimal) -> String {
        let rounded = amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{:.2}", rounded);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let (thousands, decimal) = self.locale.separators();
        let sign = if amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = group_thousands(int_part, thousands);
        match self.locale {
            Locale::PtBr => format!("{}{} {}{}{}", sign, self.symbol(), digits, decimal, frac_part),
            Locale::EnUs => format!("{}{}{}{}{}", sign, self.symbol(), digits, decimal, frac_part),
        }
    }

    /// `13 de abril` / `April 13`.
    pub fn day_month(&self, date: NaiveDateTime) -> String {
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("{} de {}", date.day(), month),
            Locale::EnUs => format!("{} {}", month, date.day()),
        }
    }

    /// Two-digit day, month and year, in locale order.
    pub fn short_date(&self, date: NaiveDateTime) -> String {
        match self.locale {
            Locale::PtBr => date.format("%d/%m/%y").to_string(),
            Locale::EnUs => date.format("%m/%d/%y").to_string(),
        }
    }

    /// `abril, 2022` / `April, 2022`.
    pub fn month_year(&self, first_day: NaiveDate) -> String {
        format!(
            "{}, {}",
            self.locale.month_name(first_day.month()),
            first_day.year()
        )
    }

    pub fn no_transactions(&self) -> String {
        match self.locale {
            Locale::PtBr => "Não há transações".to_string(),
            Locale::EnUs => "No transactions yet".to_string(),
        }
    }

    pub fn last_entry_label(&self, last: Option<NaiveDateTime>) -> String {
        match (last, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(d), Locale::PtBr) => format!("Última entrada dia {}", self.day_month(d)),
            (Some(d), Locale::EnUs) => format!("Last entry on {}", self.day_month(d)),
        }
    }

    pub fn last_expense_label(&self, last: Option<NaiveDateTime>) -> String {
        match (last, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(d), Locale::PtBr) => format!("Última saída dia {}", self.day_month(d)),
            (Some(d), Locale::EnUs) => format!("Last expense on {}", self.day_month(d)),
        }
    }

    /// Net-total interval: always "from day 1" up to the last expense date.
    pub fn interval_label(&self, last_expense: Option<NaiveDateTime>) -> String {
        match (last_expense, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(d), Locale::PtBr) => format!(
                "01 a {:02} de {}",
                d.day(),
                self.locale.month_name(d.month())
            ),
            (Some(d), Locale::EnUs) => format!(
                "{} 1 to {}",
                self.locale.month_name(d.month()),
                d.day()
            ),
        }
    }
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
