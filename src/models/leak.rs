//! Leak kinds and detected-leak records.
//!
//! The twenty leak kinds are a closed set: detection code tags findings
//! with a kind and the human-readable descriptions live in one lookup,
//! keeping the detectors free of presentation strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of leak kinds the audit can report.
///
/// Each kind carries a fixed detection priority and display label; see
/// [`LeakKind::priority`] and [`LeakKind::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakKind {
    /// ERA medical-only discount missing.
    EraMedicalOnly,
    /// Subrogation recovery not credited.
    Subrogation,
    /// Reserves left open with no claim activity.
    ZombieReserves,
    /// Overtime premium included in ratable payroll.
    OvertimePremium,
    /// Executive officer payroll above the state cap.
    ExecOfficerCap,
    /// Denied claim still in the mod (Rule 4-C).
    #[serde(rename = "rule_4c_denial")]
    Rule4cDenial,
    /// Subcontractor payroll double-counted.
    SubcontractorDupes,
    /// Clerical work misclassified out of code 8810.
    #[serde(rename = "class_code_8810")]
    ClassCode8810,
    /// Anniversary rating date does not match the effective date.
    ArdMismatch,
    /// Second-injury-fund credit not applied.
    SifCredit,
    /// Duplicate claims in the loss run.
    DuplicateClaims,
    /// Severance pay included in ratable payroll.
    SeverancePay,
    /// OCIP/wrap-up payroll double-counted.
    OcipWrapUp,
    /// Claims valued outside the rating window.
    ValuationWindow,
    /// Outdated ELR/D-ratio tables used.
    TableDrift,
    /// Claims below the deductible left in the mod.
    DeductibleLeak,
    /// Ownership change applied incorrectly.
    OwnershipError,
    /// Travel expense reimbursements included in payroll.
    TravelExpense,
    /// Per-claim accident limitation not applied.
    SplitPointCap,
    /// Rating worksheet disagrees with the loss run.
    ClericalMixup,
}

impl LeakKind {
    /// Detection priority, 1 (highest) through 20.
    pub fn priority(&self) -> u8 {
        match self {
            LeakKind::EraMedicalOnly => 1,
            LeakKind::Subrogation => 2,
            LeakKind::ZombieReserves => 3,
            LeakKind::OvertimePremium => 4,
            LeakKind::ExecOfficerCap => 5,
            LeakKind::Rule4cDenial => 6,
            LeakKind::SubcontractorDupes => 7,
            LeakKind::ClassCode8810 => 8,
            LeakKind::ArdMismatch => 9,
            LeakKind::SifCredit => 10,
            LeakKind::DuplicateClaims => 11,
            LeakKind::SeverancePay => 12,
            LeakKind::OcipWrapUp => 13,
            LeakKind::ValuationWindow => 14,
            LeakKind::TableDrift => 15,
            LeakKind::DeductibleLeak => 16,
            LeakKind::OwnershipError => 17,
            LeakKind::TravelExpense => 18,
            LeakKind::SplitPointCap => 19,
            LeakKind::ClericalMixup => 20,
        }
    }

    /// Human-readable label for reports and letters.
    pub fn label(&self) -> &'static str {
        match self {
            LeakKind::EraMedicalOnly => "ERA Med-Only Discount Missing",
            LeakKind::Subrogation => "Subrogation Recovery Not Credited",
            LeakKind::ZombieReserves => "Zombie Reserves (180+ days no activity)",
            LeakKind::OvertimePremium => "Overtime Premium Included",
            LeakKind::ExecOfficerCap => "Executive Officer Payroll Exceeds Cap",
            LeakKind::Rule4cDenial => "Denied Claims in Mod",
            LeakKind::SubcontractorDupes => "Subcontractor Double-Dip",
            LeakKind::ClassCode8810 => "Clerical Misclassification",
            LeakKind::ArdMismatch => "ARD Mismatch (Illegal Mod Application)",
            LeakKind::SifCredit => "SIF Credit Not Applied",
            LeakKind::DuplicateClaims => "Duplicate Claims",
            LeakKind::SeverancePay => "Severance Pay Included",
            LeakKind::OcipWrapUp => "OCIP/Wrap-up Double-Dip",
            LeakKind::ValuationWindow => "Valuation Window Error",
            LeakKind::TableDrift => "Old ELR/D-Ratio Tables Used",
            LeakKind::DeductibleLeak => "Claims Below Deductible in Mod",
            LeakKind::OwnershipError => "Ownership Change Error",
            LeakKind::TravelExpense => "Travel Expense Reimbursements",
            LeakKind::SplitPointCap => "Split Point Cap Not Applied",
            LeakKind::ClericalMixup => "ERW vs Loss Run Data Mismatch",
        }
    }
}

/// A single detected leak with quantified impact.
///
/// Leaks are accumulation-only facts: the engine never merges,
/// deduplicates, or auto-corrects them. A human reviewer decides what to
/// pursue; `recovery_probability` is the engine's estimate of how likely
/// the carrier accepts the correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLeak {
    /// The kind of leak detected.
    #[serde(rename = "type")]
    pub kind: LeakKind,
    /// A description of the specific finding.
    pub description: String,
    /// Claim numbers, class codes, or policy numbers involved.
    pub affected_items: Vec<String>,
    /// The value the carrier currently uses.
    pub current_value: Decimal,
    /// The value the rating rules require.
    pub corrected_value: Decimal,
    /// The dollar cost of the leak.
    pub dollar_impact: Decimal,
    /// Likelihood the carrier accepts the correction, in [0, 1].
    pub recovery_probability: Decimal,
    /// Supporting documentation reference.
    pub evidence: String,
}

impl DetectedLeak {
    /// Probability-weighted recovery for this leak.
    pub fn expected_recovery(&self) -> Decimal {
        self.dollar_impact * self.recovery_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_priorities_cover_one_through_twenty() {
        let kinds = [
            LeakKind::EraMedicalOnly,
            LeakKind::Subrogation,
            LeakKind::ZombieReserves,
            LeakKind::OvertimePremium,
            LeakKind::ExecOfficerCap,
            LeakKind::Rule4cDenial,
            LeakKind::SubcontractorDupes,
            LeakKind::ClassCode8810,
            LeakKind::ArdMismatch,
            LeakKind::SifCredit,
            LeakKind::DuplicateClaims,
            LeakKind::SeverancePay,
            LeakKind::OcipWrapUp,
            LeakKind::ValuationWindow,
            LeakKind::TableDrift,
            LeakKind::DeductibleLeak,
            LeakKind::OwnershipError,
            LeakKind::TravelExpense,
            LeakKind::SplitPointCap,
            LeakKind::ClericalMixup,
        ];

        let mut priorities: Vec<u8> = kinds.iter().map(|k| k.priority()).collect();
        priorities.sort_unstable();
        assert_eq!(priorities, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_every_kind_has_a_label() {
        assert_eq!(LeakKind::EraMedicalOnly.label(), "ERA Med-Only Discount Missing");
        assert_eq!(LeakKind::Rule4cDenial.label(), "Denied Claims in Mod");
        assert_eq!(LeakKind::ClericalMixup.label(), "ERW vs Loss Run Data Mismatch");
    }

    #[test]
    fn test_leak_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&LeakKind::EraMedicalOnly).unwrap(),
            "\"era_medical_only\""
        );
        assert_eq!(
            serde_json::to_string(&LeakKind::Rule4cDenial).unwrap(),
            "\"rule_4c_denial\""
        );
        assert_eq!(
            serde_json::to_string(&LeakKind::ClassCode8810).unwrap(),
            "\"class_code_8810\""
        );
    }

    #[test]
    fn test_leak_kind_round_trip() {
        let kind: LeakKind = serde_json::from_str("\"split_point_cap\"").unwrap();
        assert_eq!(kind, LeakKind::SplitPointCap);
    }

    #[test]
    fn test_expected_recovery_weights_by_probability() {
        let leak = DetectedLeak {
            kind: LeakKind::OvertimePremium,
            description: "Class 5403: overtime premium at 1.5x not excluded".to_string(),
            affected_items: vec!["5403".to_string()],
            current_value: dec("100000"),
            corrected_value: dec("97000"),
            dollar_impact: dec("3000"),
            recovery_probability: dec("0.90"),
            evidence: "NCCI Basic Manual Rule 2-C-2 - Overtime exclusion".to_string(),
        };

        assert_eq!(leak.expected_recovery(), dec("2700"));
    }

    #[test]
    fn test_detected_leak_serializes_kind_as_type() {
        let leak = DetectedLeak {
            kind: LeakKind::SeverancePay,
            description: "Class 8810: severance pay included".to_string(),
            affected_items: vec!["8810".to_string()],
            current_value: dec("100000"),
            corrected_value: dec("95000"),
            dollar_impact: dec("5000"),
            recovery_probability: dec("0.85"),
            evidence: "NCCI Basic Manual Rule 2-B-2-e - Severance pay excluded".to_string(),
        };

        let json = serde_json::to_string(&leak).unwrap();
        assert!(json.contains("\"type\":\"severance_pay\""));
        assert!(json.contains("\"dollar_impact\":\"5000\""));
    }
}
