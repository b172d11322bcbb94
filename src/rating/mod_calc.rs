//! The experience modification formula.
//!
//! ```text
//! Mod = (Ap + W x Ae + (1 - W) x Ee + B) / (Ep + Ee + B)
//! ```
//!
//! where Ap/Ae are actual primary and excess losses from the gate-processed
//! claims, Ep/Ee are expected primary and excess losses from the exposures,
//! and W/B come from the jurisdiction's credibility formula.

use rust_decimal::Decimal;

use crate::config::StateRating;
use crate::error::EngineResult;
use crate::models::{ClassCodeExposure, ModCalculationResult};

use super::claim_gates::ProcessedClaim;

/// Decimal places in a published mod (2026 rating standard).
const MOD_DECIMALS: u32 = 3;

/// Calculates the experience mod from exposures and gate-processed claims.
///
/// The result carries the full formula breakdown with amounts rounded to
/// 2 decimal places, W to 4, and the mod to exactly 3 per the published-mod
/// contract, so every downstream comparison sees the same figure. A zero
/// denominator produces the neutral mod of exactly 1.000 rather than an
/// error.
///
/// # Errors
///
/// Fails only when the jurisdiction's credibility formula is unavailable
/// (non-NCCI bureau).
pub fn calculate_experience_mod(
    exposures: &[ClassCodeExposure],
    processed_claims: &[ProcessedClaim],
    rating: &StateRating,
) -> EngineResult<ModCalculationResult> {
    let expected_losses: Decimal = exposures.iter().map(|e| e.expected_losses()).sum();
    let expected_primary: Decimal = exposures.iter().map(|e| e.expected_primary()).sum();
    let expected_excess: Decimal = exposures.iter().map(|e| e.expected_excess()).sum();

    let actual_primary: Decimal = processed_claims.iter().map(|c| c.primary_loss).sum();
    let actual_excess: Decimal = processed_claims.iter().map(|c| c.excess_loss).sum();

    let (w, b) = rating.w_and_b(expected_losses)?;

    let numerator =
        actual_primary + w * actual_excess + (Decimal::ONE - w) * expected_excess + b;
    let denominator = expected_primary + expected_excess + b;

    let mut experience_mod = if denominator.is_zero() {
        Decimal::ONE
    } else {
        numerator / denominator
    };
    experience_mod = experience_mod.round_dp(MOD_DECIMALS);
    experience_mod.rescale(MOD_DECIMALS);

    Ok(ModCalculationResult {
        state: rating.state_code.clone(),
        expected_losses: expected_losses.round_dp(2),
        expected_primary: expected_primary.round_dp(2),
        expected_excess: expected_excess.round_dp(2),
        actual_primary: actual_primary.round_dp(2),
        actual_excess: actual_excess.round_dp(2),
        w: w.round_dp(4),
        b: b.round_dp(2),
        split_point: rating.split_point,
        sal_cap: rating.sal_per_claim,
        numerator: numerator.round_dp(2),
        denominator: denominator.round_dp(2),
        experience_mod,
    })
}
