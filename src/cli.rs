// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::MAX_SERIES_WINDOW;
use clap::builder::RangedU64ValueParser;
use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to use instead of the one being viewed")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Local personal finance tracker")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("login")
                .about("Start a local session")
                .arg(Arg::new("username").required(true))
                .arg(Arg::new("password").long("password").short('p').required(true)),
        )
        .subcommand(Command::new("logout").about("End the local session"))
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record income or an expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .short('n')
                                .value_parser(value_parser!(u32))
                                .help("Split an expense over N monthly installments"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List the month's transactions")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget")
                .subcommand(
                    Command::new("set").arg(Arg::new("amount").required(true)),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("month")
                .about("Month navigation")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("prev"))
                .subcommand(Command::new("next"))
                .subcommand(Command::new("today")),
        )
        .subcommand(json_args(
            Command::new("summary")
                .about("Income, expenses and budget use for a month")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("report")
                .about("Chart data")
                .subcommand(json_args(
                    Command::new("series")
                        .about("Income vs expenses over recent months")
                        .arg(month_arg())
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(
                                    RangedU64ValueParser::<usize>::new().range(1..=MAX_SERIES_WINDOW),
                                )
                                .help("Number of months to show, at most 120"),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("categories")
                        .about("Top expense categories for a month")
                        .arg(month_arg())
                        .arg(Arg::new("top").long("top").value_parser(value_parser!(usize))),
                )),
        )
        .subcommand(
            Command::new("categories")
                .about("Suggested categories")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .value_parser(["income", "expense"]),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .short('f')
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").short('o').required(true)),
            ),
        )
}
