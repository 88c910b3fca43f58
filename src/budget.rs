// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::default_budget;
use crate::error::{Result, TrackerError};
use crate::storage::{KeyValueStore, budget_key};
use rust_decimal::Decimal;
use tracing::warn;

/// Monthly budget for `user_id`; falls back to the default when unset or
/// unreadable.
pub fn load_budget(kv: &dyn KeyValueStore, user_id: &str) -> Decimal {
    match kv.get(&budget_key(user_id)) {
        Ok(Some(raw)) => match raw.trim().parse::<Decimal>() {
            Ok(v) if v >= Decimal::ZERO => v,
            _ => {
                warn!(user = user_id, value = %raw, "invalid stored budget ignored");
                default_budget()
            }
        },
        Ok(None) => default_budget(),
        Err(e) => {
            warn!(user = user_id, error = %e, "failed to read budget");
            default_budget()
        }
    }
}

pub fn save_budget(kv: &dyn KeyValueStore, user_id: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(TrackerError::validation("budget cannot be negative"));
    }
    kv.set(&budget_key(user_id), &amount.normalize().to_string())
}
