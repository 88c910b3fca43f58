// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::path::PathBuf;

/// Qualifier, organization and application name for `ProjectDirs`.
pub const APP: (&str, &str, &str) = ("com.fintrack", "Fintrack", "fintrack");

pub const DB_FILE: &str = "fintrack.sqlite";
pub const DB_ENV: &str = "FINTRACK_DB";
pub const LOG_ENV: &str = "FINTRACK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Months shown by the income/expense series.
pub const SERIES_WINDOW: usize = 6;
/// Upper bound for `report series --months`.
pub const MAX_SERIES_WINDOW: u64 = 120;
/// Categories kept by the expense breakdown.
pub const TOP_CATEGORIES: usize = 8;

/// Largest amount a single transaction may carry. Amounts are stored as
/// JSON numbers (f64), and any value up to this bound with at most
/// `AMOUNT_DP` decimal places reads back unchanged.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000i64)
}

/// Decimal places accepted on a transaction amount.
pub const AMOUNT_DP: u32 = 2;

pub fn default_budget() -> Decimal {
    Decimal::from(5000)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit database location; `None` means the platform data dir.
    pub db_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(DB_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let log_filter = lookup(LOG_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            db_path,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
