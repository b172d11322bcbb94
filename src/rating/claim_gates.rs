//! Claim preprocessing through the ERA, SAL, and frequency gates.
//!
//! Every claim passes three gates before it can enter the mod formula,
//! always in the same order: the frequency ratio is resolved from each
//! accident date's incurred totals first, then ERA and SAL run per claim,
//! and the group ratio is applied last before the primary/excess split.
//! Gate reductions the carrier may have failed to honor are emitted as
//! leaks alongside the processed claims.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StateRating;
use crate::models::{Claim, DetectedLeak, LeakKind};

/// ERA is a well-established rating plan rule.
const ERA_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// The accident limitation is statutory and non-negotiable.
const SAL_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(99, 0, 0, false, 2);

/// A claim after passing through the ERA, SAL, and frequency gates.
///
/// Built once per claim per pipeline run and never mutated afterward; the
/// current and corrected audit passes each produce their own set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedClaim {
    /// The claim as it appeared on the loss run.
    pub claim: Claim,
    /// Whether the ERA medical-only discount applied.
    pub era_applied: bool,
    /// The ratable amount after the ERA gate.
    pub era_ratable_amount: Decimal,
    /// Whether the per-claim accident limitation reduced the amount.
    pub sal_applied: bool,
    /// The ratable amount after the SAL gate.
    pub sal_capped_amount: Decimal,
    /// Whether this claim's accident-date group exceeded the
    /// multiple-claim cap.
    pub frequency_cap_applied: bool,
    /// The final ratable amount after the group ratio.
    pub frequency_adjusted_amount: Decimal,
    /// Loss dollars at or below the split point.
    pub primary_loss: Decimal,
    /// Loss dollars above the split point.
    pub excess_loss: Decimal,
}

impl ProcessedClaim {
    /// Total ratable loss entering the mod formula.
    pub fn total_ratable_loss(&self) -> Decimal {
        self.primary_loss + self.excess_loss
    }
}

/// Passes all claims through the three gates.
///
/// Claims are grouped by accident date to resolve the frequency ratio
/// (one accident injuring several people shares the multiple-claim cap),
/// then each claim runs the ERA and SAL gates and is scaled by its
/// group's ratio.
///
/// Returns one [`ProcessedClaim`] per input claim plus the gate-originated
/// leaks.
pub fn preprocess_claims(
    claims: &[Claim],
    rating: &StateRating,
) -> (Vec<ProcessedClaim>, Vec<DetectedLeak>) {
    let mut processed = Vec::with_capacity(claims.len());
    let mut leaks = Vec::new();

    // Group claims by accident date for the frequency gate.
    let mut claims_by_date: BTreeMap<NaiveDate, Vec<&Claim>> = BTreeMap::new();
    for claim in claims {
        claims_by_date
            .entry(claim.accident_date)
            .or_default()
            .push(claim);
    }

    for date_claims in claims_by_date.values() {
        let (ratio, frequency_cap_applied) = if date_claims.len() > 1 {
            let total_before_cap: Decimal =
                date_claims.iter().map(|c| c.incurred_total()).sum();
            if total_before_cap > rating.sal_multiple_claim {
                (rating.sal_multiple_claim / total_before_cap, true)
            } else {
                (Decimal::ONE, false)
            }
        } else {
            (Decimal::ONE, false)
        };

        for claim in date_claims {
            // ERA gate: medical-only claims in ERA states rate at the
            // discounted portion of incurred.
            let (era_applied, era_ratable) = if rating.is_era_state && claim.is_medical_only() {
                let era_ratable = claim.incurred_total() * rating.era_discount;
                if claim.incurred_total() > era_ratable {
                    let missing_pct =
                        (Decimal::ONE - rating.era_discount) * Decimal::ONE_HUNDRED;
                    leaks.push(DetectedLeak {
                        kind: LeakKind::EraMedicalOnly,
                        description: format!(
                            "Med-only claim {} missing {}% discount",
                            claim.claim_number,
                            missing_pct.normalize()
                        ),
                        affected_items: vec![claim.claim_number.clone()],
                        current_value: claim.incurred_total(),
                        corrected_value: era_ratable,
                        dollar_impact: claim.incurred_total() - era_ratable,
                        recovery_probability: ERA_RECOVERY_PROBABILITY,
                        evidence: "NCCI Experience Rating Plan Manual Rule 2-E-1".to_string(),
                    });
                }
                (true, era_ratable)
            } else {
                (false, claim.incurred_total())
            };

            // SAL gate: cap at the per-claim accident limitation.
            let sal_capped = rating.apply_sal_cap(era_ratable);
            let sal_applied = sal_capped < era_ratable;
            if sal_applied {
                leaks.push(DetectedLeak {
                    kind: LeakKind::SplitPointCap,
                    description: format!(
                        "Claim {} exceeds state accident limitation",
                        claim.claim_number
                    ),
                    affected_items: vec![claim.claim_number.clone()],
                    current_value: era_ratable,
                    corrected_value: sal_capped,
                    dollar_impact: era_ratable - sal_capped,
                    recovery_probability: SAL_RECOVERY_PROBABILITY,
                    evidence: format!(
                        "State per-claim accident limitation = ${}",
                        rating.sal_per_claim.normalize()
                    ),
                });
            }

            // Frequency gate: scale by the accident-date group ratio.
            let frequency_adjusted = sal_capped * ratio;

            let primary = frequency_adjusted.min(rating.split_point);
            let excess = (frequency_adjusted - rating.split_point).max(Decimal::ZERO);

            processed.push(ProcessedClaim {
                claim: (*claim).clone(),
                era_applied,
                era_ratable_amount: era_ratable,
                sal_applied,
                sal_capped_amount: sal_capped,
                frequency_cap_applied,
                frequency_adjusted_amount: frequency_adjusted,
                primary_loss: primary,
                excess_loss: excess,
            });
        }
    }

    (processed, leaks)
}
