// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let data: Vec<Vec<String>> = catalog::categories()
            .iter()
            .map(|c| {
                vec![
                    c.key.to_string(),
                    c.name.to_string(),
                    c.color.to_string(),
                    c.icon.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Key", "Name", "Color", "Icon"], data));
    }
    Ok(())
}
