//! Request types for the experience mod audit engine API.
//!
//! This module defines the JSON request structures for the `/audit`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Claim, ClassCodeExposure, PolicyInfo};

/// Request body for the `/audit` endpoint.
///
/// Contains the policy record, its class-code exposures, its loss-run
/// claims, and the valuation date: everything the engine needs for a
/// full audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// The policy under audit.
    pub policy: PolicyRequest,
    /// Class-code exposures from the rating worksheet.
    pub exposures: Vec<ExposureRequest>,
    /// Claims from the loss run.
    pub claims: Vec<ClaimRequest>,
    /// The valuation date for reserve-age checks.
    pub valuation_date: NaiveDate,
}

/// Policy information in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRequest {
    /// The carrier's policy number.
    pub policy_number: String,
    /// The 2-letter code of the governing jurisdiction.
    pub state: String,
    /// The policy effective date.
    pub policy_effective_date: NaiveDate,
    /// The policy expiration date.
    pub policy_expiration_date: NaiveDate,
    /// The anniversary rating date the carrier applied.
    pub anniversary_rating_date: NaiveDate,
    /// Total manual premium across all class codes.
    pub total_manual_premium: Decimal,
    /// Total standard premium.
    pub total_standard_premium: Decimal,
    /// The mod the carrier currently has on file.
    pub current_mod: Decimal,
}

/// A class-code exposure in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureRequest {
    /// The workers' compensation class code.
    pub class_code: String,
    /// The class code's description.
    pub description: String,
    /// Reported payroll for the class code.
    pub payroll: Decimal,
    /// Expected Loss Rate per $100 of payroll.
    pub elr: Decimal,
    /// Discount Ratio.
    pub d_ratio: Decimal,
    /// Total overtime earnings included in the payroll.
    #[serde(default)]
    pub overtime_earnings: Decimal,
    /// The overtime multiplier paid.
    #[serde(default = "default_overtime_rate")]
    pub overtime_rate: Decimal,
    /// Executive officer payroll included in the payroll.
    #[serde(default)]
    pub executive_officer_payroll: Decimal,
    /// Severance pay included in the payroll.
    #[serde(default)]
    pub severance_pay: Decimal,
    /// Travel expense reimbursements included in the payroll.
    #[serde(default)]
    pub travel_reimbursements: Decimal,
    /// Subcontractor payroll included in the payroll.
    #[serde(default)]
    pub subcontractor_payroll: Decimal,
}

fn default_overtime_rate() -> Decimal {
    Decimal::new(15, 1)
}

/// A claim in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// The carrier's claim number.
    pub claim_number: String,
    /// The date of the accident.
    pub accident_date: NaiveDate,
    /// The claimant's name.
    pub claimant_name: String,
    /// The injury type code ("1" through "6").
    pub injury_code: String,
    /// Incurred indemnity.
    pub incurred_indemnity: Decimal,
    /// Incurred medical.
    pub incurred_medical: Decimal,
    /// Indemnity paid to date.
    pub paid_indemnity: Decimal,
    /// Medical paid to date.
    pub paid_medical: Decimal,
    /// Remaining indemnity reserves.
    pub reserves_indemnity: Decimal,
    /// Remaining medical reserves.
    pub reserves_medical: Decimal,
    /// Claim status as reported.
    pub status: String,
    /// The date of the most recent payment, if any.
    #[serde(default)]
    pub last_payment_date: Option<NaiveDate>,
    /// Free-text adjuster notes.
    #[serde(default)]
    pub claim_notes: String,
}

impl From<PolicyRequest> for PolicyInfo {
    fn from(req: PolicyRequest) -> Self {
        PolicyInfo {
            policy_number: req.policy_number,
            state: req.state,
            policy_effective_date: req.policy_effective_date,
            policy_expiration_date: req.policy_expiration_date,
            anniversary_rating_date: req.anniversary_rating_date,
            total_manual_premium: req.total_manual_premium,
            total_standard_premium: req.total_standard_premium,
            current_mod: req.current_mod,
        }
    }
}

impl From<ExposureRequest> for ClassCodeExposure {
    fn from(req: ExposureRequest) -> Self {
        ClassCodeExposure {
            class_code: req.class_code,
            description: req.description,
            payroll: req.payroll,
            elr: req.elr,
            d_ratio: req.d_ratio,
            overtime_earnings: req.overtime_earnings,
            overtime_rate: req.overtime_rate,
            executive_officer_payroll: req.executive_officer_payroll,
            severance_pay: req.severance_pay,
            travel_reimbursements: req.travel_reimbursements,
            subcontractor_payroll: req.subcontractor_payroll,
        }
    }
}

impl From<ClaimRequest> for Claim {
    fn from(req: ClaimRequest) -> Self {
        Claim {
            claim_number: req.claim_number,
            accident_date: req.accident_date,
            claimant_name: req.claimant_name,
            injury_code: req.injury_code,
            incurred_indemnity: req.incurred_indemnity,
            incurred_medical: req.incurred_medical,
            paid_indemnity: req.paid_indemnity,
            paid_medical: req.paid_medical,
            reserves_indemnity: req.reserves_indemnity,
            reserves_medical: req.reserves_medical,
            status: req.status,
            last_payment_date: req.last_payment_date,
            claim_notes: req.claim_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_audit_request() {
        let json = r#"{
            "policy": {
                "policy_number": "WC-123456",
                "state": "GA",
                "policy_effective_date": "2026-03-01",
                "policy_expiration_date": "2027-03-01",
                "anniversary_rating_date": "2026-03-01",
                "total_manual_premium": "250000",
                "total_standard_premium": "287500",
                "current_mod": "1.15"
            },
            "exposures": [
                {
                    "class_code": "8810",
                    "description": "Clerical Office Employees",
                    "payroll": "100000",
                    "elr": "0.05",
                    "d_ratio": "0.40"
                }
            ],
            "claims": [],
            "valuation_date": "2026-06-01"
        }"#;

        let request: AuditRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy.policy_number, "WC-123456");
        assert_eq!(request.exposures.len(), 1);
        assert!(request.claims.is_empty());
        assert_eq!(
            request.valuation_date,
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_exposure_component_defaults() {
        let json = r#"{
            "class_code": "5403",
            "description": "Carpentry",
            "payroll": "500000",
            "elr": "2.157",
            "d_ratio": "0.32"
        }"#;

        let request: ExposureRequest = serde_json::from_str(json).unwrap();
        let exposure: ClassCodeExposure = request.into();

        assert_eq!(exposure.overtime_earnings, Decimal::ZERO);
        assert_eq!(exposure.overtime_rate, Decimal::new(15, 1));
    }

    #[test]
    fn test_policy_conversion() {
        let req = PolicyRequest {
            policy_number: "WC-123456".to_string(),
            state: "GA".to_string(),
            policy_effective_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            policy_expiration_date: NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
            anniversary_rating_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            total_manual_premium: Decimal::from(250000),
            total_standard_premium: Decimal::from(287500),
            current_mod: Decimal::new(115, 2),
        };

        let policy: PolicyInfo = req.into();
        assert_eq!(policy.policy_number, "WC-123456");
        assert!(policy.ard_aligned());
    }

    #[test]
    fn test_claim_conversion_keeps_notes() {
        let req = ClaimRequest {
            claim_number: "CLM-001".to_string(),
            accident_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            claimant_name: "John Doe".to_string(),
            injury_code: "6".to_string(),
            incurred_indemnity: Decimal::ZERO,
            incurred_medical: Decimal::from(1000),
            paid_indemnity: Decimal::ZERO,
            paid_medical: Decimal::from(1000),
            reserves_indemnity: Decimal::ZERO,
            reserves_medical: Decimal::ZERO,
            status: "Closed".to_string(),
            last_payment_date: None,
            claim_notes: "Subro pending".to_string(),
        };

        let claim: Claim = req.into();
        assert!(claim.is_medical_only());
        assert!(claim.has_subrogation());
    }
}
