// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month, defaults to the current one")
}

pub fn build_cli() -> Command {
    Command::new("pocketfin")
        .about("Track income and expenses, see where the money went each month")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(json_flags(
            Command::new("dashboard").about("Entries, expenses and net total"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Register and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Register a transaction")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["positive", "negative"])
                                .help("positive = income, negative = expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category key, see `category list`"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("resume")
                .about("Expenses by category for one month")
                .arg(month_arg())
                .arg(
                    Arg::new("shift")
                        .long("shift")
                        .value_parser(value_parser!(i32))
                        .allow_negative_numbers(true)
                        .help("Move the month forward (or back, if negative)"),
                ),
        ))
        .subcommand(
            Command::new("category")
                .about("Category catalog")
                .subcommand(Command::new("list").about("List categories")),
        )
        .subcommand(
            Command::new("export")
                .about("Export stored data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored transactions for problems"))
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-locale").arg(
                        Arg::new("locale")
                            .required(true)
                            .help("pt-BR|en-US"),
                    ),
                )
                .subcommand(
                    Command::new("set-currency")
                        .arg(Arg::new("currency").required(true).help("e.g. BRL")),
                ),
        )
}
