// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::YearMonth;
use chrono::{Local, NaiveDate};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prev" | "previous" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(format!("Unknown direction '{}' (use prev|next)", other)),
        }
    }
}

/// The calendar month being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    current: YearMonth,
}

impl MonthNavigator {
    pub fn new() -> Self {
        Self::at(YearMonth::today())
    }

    pub fn at(month: YearMonth) -> Self {
        Self { current: month }
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    pub fn step(&mut self, direction: Direction) -> YearMonth {
        self.current = match direction {
            Direction::Prev => self.current.pred(),
            Direction::Next => self.current.succ(),
        };
        self.current
    }

    /// Checked against the clock on every call.
    pub fn is_current_month(&self) -> bool {
        self.is_current_month_on(Local::now().date_naive())
    }

    pub fn is_current_month_on(&self, today: NaiveDate) -> bool {
        self.current.contains(today)
    }
}

impl Default for MonthNavigator {
    fn default() -> Self {
        Self::new()
    }
}
