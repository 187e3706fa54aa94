use crate::domain::money::MinorUnits;
use crate::domain::payout::AccountId;
use crate::error::PayoutError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed payout as remembered by the admission check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub occurred_on: NaiveDate,
    pub amount: MinorUnits,
    pub recipient_id: AccountId,
}

/// The transaction history the admission check runs against.
///
/// Records are kept in call order and may span multiple past dates;
/// entries older than the current date are logically expired and only
/// dropped when an evaluation runs. Construct one directly to seed a
/// controller for tests or to keep one state per merchant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdmissionState {
    pub history: Vec<TransactionRecord>,
}

/// Admission limits. Constructed once, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionConfig {
    daily_limit: u32,
    max_amount: MinorUnits,
}

impl AdmissionConfig {
    /// Both limits must be positive.
    pub fn new(daily_limit: u32, max_amount: MinorUnits) -> Result<Self, PayoutError> {
        if daily_limit == 0 {
            return Err(PayoutError::ValidationError(
                "daily limit must be positive".to_string(),
            ));
        }
        if max_amount == MinorUnits::ZERO {
            return Err(PayoutError::ValidationError(
                "amount ceiling must be positive".to_string(),
            ));
        }
        Ok(Self {
            daily_limit,
            max_amount,
        })
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    pub fn max_amount(&self) -> MinorUnits {
        self.max_amount
    }
}

impl Default for AdmissionConfig {
    /// 10 payouts per day, 15000 minor units ($150) per payout.
    fn default() -> Self {
        Self {
            daily_limit: 10,
            max_amount: MinorUnits::new(15000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    DailyLimitReached,
    AmountExceedsCeiling,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DailyLimitReached => f.write_str("daily limit reached"),
            Self::AmountExceedsCeiling => f.write_str("amount exceeds ceiling"),
        }
    }
}

/// Outcome of an admission evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected { reason: RejectReason },
}

/// Drops every record not dated `today`, preserving order.
///
/// Idempotent, so it is safe to run on every evaluation.
pub fn prune_expired(history: Vec<TransactionRecord>, today: NaiveDate) -> Vec<TransactionRecord> {
    history
        .into_iter()
        .filter(|record| record.occurred_on == today)
        .collect()
}

/// Decides whether a proposed payout may proceed and records completed
/// ones.
///
/// The expected caller sequence is `evaluate` → perform the external
/// transfer → `record` if it succeeded. The controller does not call
/// the provider itself and does not roll back a recorded payout; a
/// caller exposed to concurrency must serialize the whole sequence
/// (see `PayoutEngine`).
pub struct AdmissionController {
    config: AdmissionConfig,
    state: AdmissionState,
}

impl AdmissionController {
    pub fn new(config: AdmissionConfig) -> Self {
        Self::with_state(config, AdmissionState::default())
    }

    /// Builds a controller over an existing history.
    pub fn with_state(config: AdmissionConfig, state: AdmissionState) -> Self {
        Self { config, state }
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.state.history
    }

    /// Evaluates a proposed payout against today's recorded history.
    ///
    /// Prunes expired records as a side effect, even when the decision
    /// is a rejection. Never fails.
    pub fn evaluate(&mut self, amount: MinorUnits) -> Decision {
        self.evaluate_on(Local::now().date_naive(), amount)
    }

    /// [`Self::evaluate`] with the current date injected.
    pub fn evaluate_on(&mut self, today: NaiveDate, amount: MinorUnits) -> Decision {
        let history = std::mem::take(&mut self.state.history);
        self.state.history = prune_expired(history, today);

        if self.state.history.len() >= self.config.daily_limit as usize {
            return Decision::Rejected {
                reason: RejectReason::DailyLimitReached,
            };
        }
        if amount > self.config.max_amount {
            return Decision::Rejected {
                reason: RejectReason::AmountExceedsCeiling,
            };
        }
        Decision::Approved
    }

    /// Records a completed payout dated today.
    ///
    /// Caller contract: only call this after a corresponding
    /// [`Self::evaluate`] returned [`Decision::Approved`] and the
    /// external transfer succeeded.
    pub fn record(&mut self, amount: MinorUnits, recipient_id: AccountId) {
        self.record_on(Local::now().date_naive(), amount, recipient_id);
    }

    /// [`Self::record`] with the current date injected.
    pub fn record_on(&mut self, today: NaiveDate, amount: MinorUnits, recipient_id: AccountId) {
        self.state.history.push(TransactionRecord {
            occurred_on: today,
            amount,
            recipient_id,
        });
    }
}
