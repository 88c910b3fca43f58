// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local session: who is logged in and which month they are looking at.
//!
//! There is no credential check. Any non-empty username and password
//! log in.

use crate::error::{Result, TrackerError};
use crate::models::YearMonth;
use crate::navigator::MonthNavigator;
use crate::storage::{CURRENT_USER_KEY, KeyValueStore, view_month_key};
use tracing::{info, warn};

pub fn current_user(kv: &dyn KeyValueStore) -> Result<Option<String>> {
    Ok(kv
        .get(CURRENT_USER_KEY)?
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty()))
}

pub fn login(kv: &dyn KeyValueStore, username: &str, password: &str) -> Result<String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(TrackerError::validation("username and password are required"));
    }
    kv.set(CURRENT_USER_KEY, username)?;
    kv.remove(&view_month_key(username))?;
    info!(user = username, "logged in");
    Ok(username.to_string())
}

/// Returns the user that was logged in, if any.
pub fn logout(kv: &dyn KeyValueStore) -> Result<Option<String>> {
    let user = current_user(kv)?;
    kv.remove(CURRENT_USER_KEY)?;
    if let Some(u) = &user {
        kv.remove(&view_month_key(u))?;
        info!(user = %u, "logged out");
    }
    Ok(user)
}

/// Navigator positioned on the user's saved month, or on today's month.
pub fn navigator(kv: &dyn KeyValueStore, user_id: &str) -> MonthNavigator {
    match kv.get(&view_month_key(user_id)) {
        Ok(Some(raw)) => match raw.parse::<YearMonth>() {
            Ok(m) => MonthNavigator::at(m),
            Err(e) => {
                warn!(user = user_id, error = %e, "invalid saved month ignored");
                MonthNavigator::new()
            }
        },
        Ok(None) => MonthNavigator::new(),
        Err(e) => {
            warn!(user = user_id, error = %e, "failed to read saved month");
            MonthNavigator::new()
        }
    }
}

pub fn save_navigator(kv: &dyn KeyValueStore, user_id: &str, nav: &MonthNavigator) -> Result<()> {
    kv.set(&view_month_key(user_id), &nav.current().to_string())
}
