//! Full-audit orchestration.
//!
//! Runs the engine twice over one policy's records: a current pass that
//! reproduces the mod from the raw data, and a corrected pass with
//! excludable payroll removed and denied claims dropped. The difference
//! between the two passes, together with every detected leak, becomes the
//! recovery report.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StateRegistry;
use crate::error::EngineResult;
use crate::models::{
    AuditReport, Claim, ClassCodeExposure, DetectedLeak, LeakKind, PolicyInfo,
};

use super::claim_gates::preprocess_claims;
use super::claim_leaks::detect_claim_leaks;
use super::mod_calc::calculate_experience_mod;
use super::payroll::adjust_payroll;

const ARD_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Runs the complete audit for one policy.
///
/// The current pass reproduces the mod from the raw records (the engine's
/// own recomputation, used as the baseline against the carrier-stated
/// figure on [`PolicyInfo::current_mod`]). The corrected pass re-rates
/// with excludable payroll removed and denied claims dropped per Rule
/// 4-C. Duplicate claims are reported but left in the corrected
/// calculation until the carrier confirms which record survives.
///
/// Leaks merge in detection order (payroll rules, claim gates, the
/// claim-level scan, then the ARD check) and are never deduplicated.
///
/// # Errors
///
/// Fails fast when the policy's state has no registered rating values or
/// its bureau's formula is unimplemented.
pub fn run_full_audit(
    policy: &PolicyInfo,
    raw_exposures: &[ClassCodeExposure],
    raw_claims: &[Claim],
    valuation_date: NaiveDate,
    registry: &StateRegistry,
) -> EngineResult<AuditReport> {
    let rating = registry.get(&policy.state)?;

    // Current pass: raw data as-is, reproducing the carrier's figures.
    let (current_processed, _) = preprocess_claims(raw_claims, rating);
    let current_mod = calculate_experience_mod(raw_exposures, &current_processed, rating)?;

    // Corrected pass: excludable payroll removed, gates re-run fresh over
    // the same raw claims.
    let (adjusted_exposures, payroll_leaks) = adjust_payroll(raw_exposures, rating);
    let (corrected_processed, gate_leaks) = preprocess_claims(raw_claims, rating);
    let claim_leaks = detect_claim_leaks(raw_claims, valuation_date);

    // Rule 4-C: denied claims come out of the corrected calculation.
    let final_claims: Vec<_> = corrected_processed
        .into_iter()
        .filter(|p| !p.claim.is_denied())
        .collect();

    let corrected_mod =
        calculate_experience_mod(&adjusted_exposures, &final_claims, rating)?;

    let mut leaks: Vec<DetectedLeak> = Vec::new();
    leaks.extend(payroll_leaks);
    leaks.extend(gate_leaks);
    leaks.extend(claim_leaks);

    if !policy.ard_aligned() {
        // Pricing the mis-timed mod requires a rerate, so the finding
        // carries no dollar figure of its own.
        leaks.push(DetectedLeak {
            kind: LeakKind::ArdMismatch,
            description: format!(
                "Anniversary rating date {} does not match policy effective date {}",
                policy.anniversary_rating_date, policy.policy_effective_date
            ),
            affected_items: vec![policy.policy_number.clone()],
            current_value: Decimal::ZERO,
            corrected_value: Decimal::ZERO,
            dollar_impact: Decimal::ZERO,
            recovery_probability: ARD_RECOVERY_PROBABILITY,
            evidence: "NCCI Experience Rating Plan Manual Rule 4-B".to_string(),
        });
    }

    let total_leak_impact: Decimal = leaks.iter().map(|l| l.dollar_impact).sum();
    let expected_recovery: Decimal = leaks.iter().map(|l| l.expected_recovery()).sum();
    let mod_reduction = current_mod.experience_mod - corrected_mod.experience_mod;
    let premium_savings = (mod_reduction * policy.total_manual_premium).round_dp(2);

    Ok(AuditReport {
        policy_number: policy.policy_number.clone(),
        state: rating.state_code.clone(),
        current_mod: current_mod.experience_mod,
        corrected_mod: corrected_mod.experience_mod,
        mod_reduction,
        premium_savings,
        total_leaks_found: leaks.len(),
        total_leak_impact: total_leak_impact.round_dp(2),
        expected_recovery: expected_recovery.round_dp(2),
        leaks,
        current_mod_breakdown: current_mod,
        corrected_mod_breakdown: corrected_mod,
    })
}
