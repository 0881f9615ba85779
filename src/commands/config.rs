// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::format::Locale;
use crate::utils::{get_currency, get_locale, pretty_table, set_currency, set_locale};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["locale".to_string(), get_locale(conn)?.to_string()],
                vec!["currency".to_string(), get_currency(conn)?],
                vec!["database".to_string(), db::db_path()?.display().to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-locale", sub)) => {
            let locale = sub
                .get_one::<String>("locale")
                .unwrap()
                .parse::<Locale>()
                .map_err(|e| anyhow!(e))?;
            set_locale(conn, locale)?;
            println!("Locale set to {}", locale);
        }
        Some(("set-currency", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap();
            set_currency(conn, ccy)?;
            println!("Currency set to {}", get_currency(conn)?);
        }
        _ => {}
    }
    Ok(())
}
