//! Claim-level leak detection outside the gate pipeline.
//!
//! An independent pass over the raw claims looking for non-formulaic
//! irregularities: subrogation recoveries never credited, stale open
//! reserves, denied claims left in the mod, second-injury-fund credits,
//! and duplicate loss-run rows. The detector never mutates claims; it
//! only returns leak records.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Claim, DetectedLeak, LeakKind};

/// Days without claim activity after which open reserves are challenged.
pub const ZOMBIE_RESERVE_INACTIVITY_DAYS: i64 = 180;

/// Conservative share of incurred assumed recoverable through subrogation.
const SUBROGATION_RECOVERY_SHARE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Share of incurred offset by a second-injury-fund credit.
const SIF_CREDIT_SHARE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

const SUBROGATION_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
const ZOMBIE_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(60, 0, 0, false, 2);
const DENIAL_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
const SIF_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(65, 0, 0, false, 2);
const DUPLICATE_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Scans raw claims for non-formulaic irregularities.
///
/// Denied claims are only reported here; the orchestrator applies the
/// exclusion to the corrected pass via [`Claim::is_denied`]. Duplicates
/// are keyed by (accident date, claimant, incurred total); the second
/// and subsequent claims sharing a key are flagged.
pub fn detect_claim_leaks(claims: &[Claim], valuation_date: NaiveDate) -> Vec<DetectedLeak> {
    let mut leaks = Vec::new();
    let mut claim_signatures: HashMap<(NaiveDate, String, Decimal), String> = HashMap::new();

    for claim in claims {
        // Subrogation recovery not credited.
        if claim.has_subrogation() && claim.incurred_total() > Decimal::ZERO {
            leaks.push(DetectedLeak {
                kind: LeakKind::Subrogation,
                description: format!(
                    "Claim {} has subrogation recovery not credited",
                    claim.claim_number
                ),
                affected_items: vec![claim.claim_number.clone()],
                current_value: claim.incurred_total(),
                corrected_value: Decimal::ZERO,
                dollar_impact: claim.incurred_total() * SUBROGATION_RECOVERY_SHARE,
                recovery_probability: SUBROGATION_RECOVERY_PROBABILITY,
                evidence: format!("Claim notes: {}", claim.claim_notes),
            });
        }

        // Zombie reserves on open claims with no recent activity.
        if claim.status == "Open" {
            if let Some(last_payment) = claim.last_payment_date {
                let days_inactive = (valuation_date - last_payment).num_days();
                if days_inactive > ZOMBIE_RESERVE_INACTIVITY_DAYS {
                    leaks.push(DetectedLeak {
                        kind: LeakKind::ZombieReserves,
                        description: format!(
                            "Claim {} open {} days with no activity",
                            claim.claim_number, days_inactive
                        ),
                        affected_items: vec![claim.claim_number.clone()],
                        current_value: claim.total_reserves(),
                        corrected_value: Decimal::ZERO,
                        dollar_impact: claim.total_reserves(),
                        recovery_probability: ZOMBIE_RECOVERY_PROBABILITY,
                        evidence: format!(
                            "Last payment: {}, no activity for {} days",
                            last_payment, days_inactive
                        ),
                    });
                }
            }
        }

        // Rule 4-C: denied claims do not belong in the mod.
        if claim.is_denied() && claim.incurred_total() > Decimal::ZERO {
            leaks.push(DetectedLeak {
                kind: LeakKind::Rule4cDenial,
                description: format!("Denied claim {} still in mod", claim.claim_number),
                affected_items: vec![claim.claim_number.clone()],
                current_value: claim.incurred_total(),
                corrected_value: Decimal::ZERO,
                dollar_impact: claim.incurred_total(),
                recovery_probability: DENIAL_RECOVERY_PROBABILITY,
                evidence: "NCCI Experience Rating Plan Manual Rule 4-C".to_string(),
            });
        }

        // Second-injury-fund credit not applied.
        if claim.has_sif_credit() {
            let credited = claim.incurred_total() * SIF_CREDIT_SHARE;
            leaks.push(DetectedLeak {
                kind: LeakKind::SifCredit,
                description: format!(
                    "Claim {} has SIF credit not applied",
                    claim.claim_number
                ),
                affected_items: vec![claim.claim_number.clone()],
                current_value: claim.incurred_total(),
                corrected_value: credited,
                dollar_impact: credited,
                recovery_probability: SIF_RECOVERY_PROBABILITY,
                evidence: format!("Claim notes: {}", claim.claim_notes),
            });
        }

        // Duplicate claims share an accident date, claimant, and amount.
        let signature = (
            claim.accident_date,
            claim.claimant_name.clone(),
            claim.incurred_total(),
        );
        if let Some(original_number) = claim_signatures.get(&signature) {
            leaks.push(DetectedLeak {
                kind: LeakKind::DuplicateClaims,
                description: format!(
                    "Claims {} and {} are duplicates",
                    original_number, claim.claim_number
                ),
                affected_items: vec![original_number.clone(), claim.claim_number.clone()],
                current_value: claim.incurred_total() * Decimal::from(2),
                corrected_value: claim.incurred_total(),
                dollar_impact: claim.incurred_total(),
                recovery_probability: DUPLICATE_RECOVERY_PROBABILITY,
                evidence: "Same accident date, claimant, and incurred amount".to_string(),
            });
        } else {
            claim_signatures.insert(signature, claim.claim_number.clone());
        }
    }

    leaks
}
