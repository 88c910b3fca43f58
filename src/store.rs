// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The per-user transaction ledger.
//!
//! [`TransactionStore`] owns the canonical list for one user. It is loaded
//! once from a [`KeyValueStore`] and rewritten in full after every change.
//! Storage is best-effort: a failed write is reported through
//! [`SaveStatus::Failed`] and logged, while the in-memory list stays
//! authoritative for the rest of the session.

use crate::config::{AMOUNT_DP, max_amount};
use crate::error::{Result, TrackerError};
use crate::models::{InstallmentInfo, NewTransaction, Transaction, TransactionType};
use crate::storage::{KeyValueStore, transactions_key};
use chrono::Months;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outcome of persisting after a mutation.
#[must_use]
#[derive(Debug)]
pub enum SaveStatus {
    Saved,
    /// Nothing changed, so nothing was written.
    Unchanged,
    /// The write failed; the in-memory change still stands.
    Failed(TrackerError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    pub fn warning(&self) -> Option<&TrackerError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Saved | Self::Unchanged => None,
        }
    }
}

/// Records created by a successful [`TransactionStore::add`].
#[derive(Debug)]
pub struct Added {
    pub ids: Vec<String>,
    pub status: SaveStatus,
}

pub struct TransactionStore<'a> {
    kv: &'a dyn KeyValueStore,
    user_id: String,
    transactions: Vec<Transaction>,
}

impl<'a> TransactionStore<'a> {
    /// Reads the user's ledger. Missing or unreadable data yields an
    /// empty ledger.
    pub fn load(kv: &'a dyn KeyValueStore, user_id: &str) -> Self {
        let transactions = read_ledger(kv, user_id);
        debug!(user = user_id, count = transactions.len(), "ledger loaded");
        Self {
            kv,
            user_id: user_id.to_string(),
            transactions,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Adds a candidate, expanding installment purchases into one record per
    /// month. Either every record is appended or, on a validation error,
    /// none is.
    pub fn add(&mut self, candidate: &NewTransaction) -> Result<Added> {
        let mut taken: HashSet<String> = self.transactions.iter().map(|t| t.id.clone()).collect();
        let records = expand(candidate, || fresh_id(&mut taken))?;
        let ids: Vec<String> = records.iter().map(|t| t.id.clone()).collect();
        self.transactions.extend(records);
        info!(
            user = %self.user_id,
            kind = %candidate.kind,
            records = ids.len(),
            "transaction added"
        );
        let status = self.save();
        Ok(Added { ids, status })
    }

    /// Removes the record with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> SaveStatus {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            debug!(user = %self.user_id, id, "remove: no such transaction");
            return SaveStatus::Unchanged;
        }
        info!(user = %self.user_id, id, "transaction removed");
        self.save()
    }

    /// Writes the whole ledger.
    pub fn save(&self) -> SaveStatus {
        let result = serde_json::to_string(&self.transactions)
            .map_err(TrackerError::from)
            .and_then(|json| self.kv.set(&transactions_key(&self.user_id), &json));
        match result {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!(user = %self.user_id, error = %e, "failed to persist ledger; keeping in-memory state");
                SaveStatus::Failed(e)
            }
        }
    }
}

impl std::fmt::Debug for TransactionStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("user_id", &self.user_id)
            .field("transactions", &self.transactions.len())
            .finish()
    }
}

fn read_ledger(kv: &dyn KeyValueStore, user_id: &str) -> Vec<Transaction> {
    let raw = match kv.get(&transactions_key(user_id)) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(user = user_id, error = %e, "failed to read ledger; starting empty");
            return Vec::new();
        }
    };
    let parsed: Vec<Transaction> = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(user = user_id, error = %e, "malformed ledger data ignored");
            return Vec::new();
        }
    };
    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter(|t| {
            let fresh = seen.insert(t.id.clone());
            if !fresh {
                warn!(user = user_id, id = %t.id, "duplicate transaction id dropped");
            }
            fresh
        })
        .collect()
}

fn fresh_id(taken: &mut HashSet<String>) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if taken.insert(id.clone()) {
            return id;
        }
    }
}

/// Turns a candidate into ledger records.
///
/// An installment purchase of `n` months yields `n` records dated on the
/// candidate's day in each consecutive month (clamped to the month's last
/// day), with `current` running `1..=n`. Every record carries the full
/// candidate amount.
pub fn expand<F>(candidate: &NewTransaction, mut next_id: F) -> Result<Vec<Transaction>>
where
    F: FnMut() -> String,
{
    validate(candidate)?;

    let Some(total) = candidate.installments else {
        return Ok(vec![Transaction {
            id: next_id(),
            kind: candidate.kind,
            amount: candidate.amount,
            description: candidate.description.trim().to_string(),
            category: candidate.category.trim().to_string(),
            date: candidate.date,
            is_installment: false,
            installment_info: None,
        }]);
    };

    // Compute every date first so a failure leaves nothing half-built.
    let dates = (0..total)
        .map(|i| {
            candidate.date.checked_add_months(Months::new(i)).ok_or_else(|| {
                TrackerError::validation("installment schedule exceeds the supported date range")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(dates
        .into_iter()
        .zip(1..=total)
        .map(|(date, current)| Transaction {
            id: next_id(),
            kind: candidate.kind,
            amount: candidate.amount,
            description: candidate.description.trim().to_string(),
            category: candidate.category.trim().to_string(),
            date,
            is_installment: true,
            installment_info: Some(InstallmentInfo {
                current,
                total,
                original_amount: candidate.amount,
                original_date: candidate.date,
            }),
        })
        .collect())
}

/// Checks a candidate before anything is generated. Amounts must be
/// positive, at most [`max_amount`], carry at most [`AMOUNT_DP`] decimal
/// places and read back unchanged from their stored JSON number.
pub fn validate(candidate: &NewTransaction) -> Result<()> {
    let amount = candidate.amount;
    if amount <= Decimal::ZERO {
        return Err(TrackerError::validation("amount must be positive"));
    }
    if amount > max_amount() {
        return Err(TrackerError::validation(format!(
            "amount must not exceed {}",
            max_amount()
        )));
    }
    if amount.round_dp(AMOUNT_DP) != amount {
        return Err(TrackerError::validation(format!(
            "amount must have at most {} decimal places",
            AMOUNT_DP
        )));
    }
    if !survives_float(amount) {
        return Err(TrackerError::validation(format!(
            "amount {} cannot be stored exactly",
            amount
        )));
    }
    if candidate.description.trim().is_empty() {
        return Err(TrackerError::validation("description is required"));
    }
    if candidate.category.trim().is_empty() {
        return Err(TrackerError::validation("category is required"));
    }
    if let Some(total) = candidate.installments {
        if total < 2 {
            return Err(TrackerError::validation(format!(
                "an installment purchase needs at least 2 installments, got {}",
                total
            )));
        }
        if candidate.kind != TransactionType::Expense {
            return Err(TrackerError::validation(
                "only expenses can be split into installments",
            ));
        }
    }
    Ok(())
}

// Mirrors the f64 path amounts take through `rust_decimal::serde::float`.
fn survives_float(amount: Decimal) -> bool {
    amount
        .to_f64()
        .and_then(|f| Decimal::from_str(&f.to_string()).ok())
        .is_some_and(|back| back == amount)
}
