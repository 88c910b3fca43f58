// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionType;
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kinds = match m.get_one::<String>("type") {
        Some(t) => vec![t.parse::<TransactionType>().map_err(|e| anyhow!(e))?],
        None => vec![TransactionType::Income, TransactionType::Expense],
    };
    let mut data = Vec::new();
    for kind in kinds {
        for cat in kind.suggested_categories() {
            data.push(vec![kind.to_string(), cat.to_string()]);
        }
    }
    println!("{}", pretty_table(&["Type", "Category"], data));
    Ok(())
}
