//! Audit report models.
//!
//! This module contains the [`ModCalculationResult`] breakdown and the
//! [`AuditReport`] the orchestrator assembles. Both are constructed once
//! per audit run with their fields already rounded, so serialization is a
//! plain derive and identical inputs produce byte-identical JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DetectedLeak;

/// A complete experience mod calculation with its formula breakdown.
///
/// Amounts are rounded to 2 decimal places, the weighting value to 4, and
/// the mod itself to exactly 3 per the rating standard. Rounding happens at
/// construction so every downstream comparison sees the published figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModCalculationResult {
    /// The state whose rating values were used.
    pub state: String,
    /// Total expected losses across all class codes.
    pub expected_losses: Decimal,
    /// Expected primary losses.
    pub expected_primary: Decimal,
    /// Expected excess losses.
    pub expected_excess: Decimal,
    /// Actual primary losses from gate-processed claims.
    pub actual_primary: Decimal,
    /// Actual excess losses from gate-processed claims.
    pub actual_excess: Decimal,
    /// The weighting value W (credibility for excess losses).
    pub w: Decimal,
    /// The ballast value B.
    pub b: Decimal,
    /// The split point separating primary from excess loss.
    pub split_point: Decimal,
    /// The per-claim state accident limitation.
    pub sal_cap: Decimal,
    /// The mod formula numerator.
    pub numerator: Decimal,
    /// The mod formula denominator.
    pub denominator: Decimal,
    /// The resulting experience mod, rounded to 3 decimal places.
    pub experience_mod: Decimal,
}

/// The complete audit result for one policy.
///
/// Built once by the orchestrator and immutable afterward; this is the
/// JSON contract consumed by the letter-generation and reporting layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// The audited policy's number.
    pub policy_number: String,
    /// The governing jurisdiction.
    pub state: String,
    /// The mod the engine computes from the raw records.
    pub current_mod: Decimal,
    /// The mod after all corrections.
    pub corrected_mod: Decimal,
    /// Current mod minus corrected mod (both already rounded to 3 dp).
    pub mod_reduction: Decimal,
    /// Mod reduction times total manual premium.
    pub premium_savings: Decimal,
    /// Number of leaks detected.
    pub total_leaks_found: usize,
    /// Sum of every leak's dollar impact.
    pub total_leak_impact: Decimal,
    /// Probability-weighted recovery across all leaks.
    pub expected_recovery: Decimal,
    /// Every detected leak, in detection order, never deduplicated.
    pub leaks: Vec<DetectedLeak>,
    /// Full breakdown of the current-pass calculation.
    pub current_mod_breakdown: ModCalculationResult,
    /// Full breakdown of the corrected-pass calculation.
    pub corrected_mod_breakdown: ModCalculationResult,
}
