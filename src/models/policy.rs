//! Policy metadata model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata for the policy under audit.
///
/// All monetary fields are carrier-reported figures from the experience
/// rating worksheet; the engine treats them as already validated by the
/// normalization layer.
///
/// # Example
///
/// ```
/// use emod_engine::models::PolicyInfo;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PolicyInfo {
///     policy_number: "WC-123456".to_string(),
///     state: "GA".to_string(),
///     policy_effective_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     policy_expiration_date: NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
///     anniversary_rating_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     total_manual_premium: Decimal::from_str("250000").unwrap(),
///     total_standard_premium: Decimal::from_str("287500").unwrap(),
///     current_mod: Decimal::from_str("1.15").unwrap(),
/// };
/// assert!(policy.ard_aligned());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInfo {
    /// The carrier's policy number.
    pub policy_number: String,
    /// Uppercase 2-letter code of the governing jurisdiction.
    pub state: String,
    /// The policy effective date.
    pub policy_effective_date: NaiveDate,
    /// The policy expiration date.
    pub policy_expiration_date: NaiveDate,
    /// The anniversary rating date (ARD) the carrier applied.
    pub anniversary_rating_date: NaiveDate,
    /// Total manual premium across all class codes.
    pub total_manual_premium: Decimal,
    /// Total standard premium (manual premium after the mod).
    pub total_standard_premium: Decimal,
    /// The mod the carrier currently has on file.
    pub current_mod: Decimal,
}

impl PolicyInfo {
    /// Returns true when the anniversary rating date lines up with the
    /// policy effective date.
    ///
    /// A mismatch is an ARD leak the orchestrator reports, not a
    /// structural error.
    pub fn ard_aligned(&self) -> bool {
        self.anniversary_rating_date == self.policy_effective_date
    }
}
