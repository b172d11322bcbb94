//! Claim model and derived predicates.
//!
//! A claim is one loss-run row. The predicates the rating gates and leak
//! detectors rely on (medical-only, denied, subrogation, SIF) are derived
//! from the row rather than stored, so they can never drift out of sync
//! with the underlying amounts and notes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Claim-note keywords indicating a third-party recovery.
const SUBROGATION_KEYWORDS: [&str; 4] = ["subro", "recovery", "third party", "reimbursement"];

/// Claim-note keywords indicating a second-injury-fund credit.
const SIF_KEYWORDS: [&str; 3] = ["sif", "second injury fund", "state fund"];

/// An individual claim from the loss run.
///
/// Injury codes follow the loss-run convention: "1" fatal, "2" permanent
/// total, "3" permanent partial, "4" temporary total, "5" minor, "6"
/// medical-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// The carrier's claim number.
    pub claim_number: String,
    /// The date of the accident.
    pub accident_date: NaiveDate,
    /// The claimant's name as reported on the loss run.
    pub claimant_name: String,
    /// The injury type code ("1" through "6").
    pub injury_code: String,
    /// Incurred indemnity (paid plus reserved).
    pub incurred_indemnity: Decimal,
    /// Incurred medical (paid plus reserved).
    pub incurred_medical: Decimal,
    /// Indemnity paid to date.
    pub paid_indemnity: Decimal,
    /// Medical paid to date.
    pub paid_medical: Decimal,
    /// Remaining indemnity reserves.
    pub reserves_indemnity: Decimal,
    /// Remaining medical reserves.
    pub reserves_medical: Decimal,
    /// Claim status as reported ("Open", "Closed", "Denied").
    pub status: String,
    /// The date of the most recent payment, if any.
    #[serde(default)]
    pub last_payment_date: Option<NaiveDate>,
    /// Free-text adjuster notes.
    #[serde(default)]
    pub claim_notes: String,
}

impl Claim {
    /// Total incurred value, always derived from the indemnity and medical
    /// components rather than stored.
    pub fn incurred_total(&self) -> Decimal {
        self.incurred_indemnity + self.incurred_medical
    }

    /// Total remaining reserves across indemnity and medical.
    pub fn total_reserves(&self) -> Decimal {
        self.reserves_indemnity + self.reserves_medical
    }

    /// Medical-only claims carry injury code "6" or zero incurred indemnity.
    pub fn is_medical_only(&self) -> bool {
        self.injury_code == "6" || self.incurred_indemnity.is_zero()
    }

    /// True when the status or notes mark the claim denied or
    /// non-compensable.
    pub fn is_denied(&self) -> bool {
        self.status.to_lowercase().contains("denied")
            || self.claim_notes.to_lowercase().contains("non-comp")
    }

    /// True when the claim notes mention a subrogation recovery.
    pub fn has_subrogation(&self) -> bool {
        let notes = self.claim_notes.to_lowercase();
        SUBROGATION_KEYWORDS.iter().any(|kw| notes.contains(kw))
    }

    /// True when the claim notes mention a second-injury-fund credit.
    pub fn has_sif_credit(&self) -> bool {
        let notes = self.claim_notes.to_lowercase();
        SIF_KEYWORDS.iter().any(|kw| notes.contains(kw))
    }
}
