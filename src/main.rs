// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fintrack::{cli, commands, config::Config, db};

fn setup_logging(config: &Config) {
    // stdout carries tables and JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_env();
    setup_logging(&config);

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init(&config)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path(&config)?.display());
        }
        Some(("login", sub)) => commands::auth::login(&conn, sub)?,
        Some(("logout", _)) => commands::auth::logout(&conn)?,
        Some(("whoami", _)) => commands::auth::whoami(&conn)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&conn, sub)?,
        Some(("month", sub)) => commands::month::handle(&conn, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
