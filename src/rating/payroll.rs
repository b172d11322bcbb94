//! Payroll adjustment for excludable remuneration.
//!
//! Five independent rules evaluate each exposure's payroll breakdown and
//! sum their exclusions into one corrections total: overtime premium, the
//! executive officer cap, severance pay, travel reimbursements, and
//! subcontractor payroll with certificates of insurance on file.

use rust_decimal::Decimal;

use crate::config::StateRating;
use crate::models::{ClassCodeExposure, DetectedLeak, LeakKind};

const OVERTIME_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(90, 0, 0, false, 2);
const EXEC_CAP_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(99, 0, 0, false, 2);
const SEVERANCE_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(85, 0, 0, false, 2);
const TRAVEL_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(80, 0, 0, false, 2);
const SUBCONTRACTOR_RECOVERY_PROBABILITY: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Overtime premium excludable at a given overtime rate.
///
/// Only the premium portion of overtime pay is excluded: a third at
/// time-and-a-half, half at double time, and generally
/// `(rate - 1) / rate` of the overtime earnings. Rates at or below
/// straight time have no premium portion.
fn overtime_exclusion(earnings: Decimal, rate: Decimal) -> Decimal {
    if rate <= Decimal::ONE {
        return Decimal::ZERO;
    }

    if rate == Decimal::new(15, 1) {
        earnings / Decimal::from(3)
    } else if rate == Decimal::from(2) {
        earnings / Decimal::from(2)
    } else if rate == Decimal::new(25, 1) {
        earnings * Decimal::new(6, 1)
    } else {
        earnings * (rate - Decimal::ONE) / rate
    }
}

/// Re-prices each exposure with excludable payroll removed.
///
/// Each rule that fires emits one [`DetectedLeak`]; the adjusted exposure
/// keeps its class code, description, ELR, and D-ratio with payroll
/// reduced by the summed corrections. An exposure with nothing to exclude
/// is copied unchanged.
pub fn adjust_payroll(
    exposures: &[ClassCodeExposure],
    rating: &StateRating,
) -> (Vec<ClassCodeExposure>, Vec<DetectedLeak>) {
    let mut adjusted = Vec::with_capacity(exposures.len());
    let mut leaks = Vec::new();

    for exp in exposures {
        let mut corrections = Decimal::ZERO;

        // Overtime premium.
        if exp.overtime_earnings > Decimal::ZERO {
            let ot_exclusion = overtime_exclusion(exp.overtime_earnings, exp.overtime_rate);
            corrections += ot_exclusion;

            leaks.push(DetectedLeak {
                kind: LeakKind::OvertimePremium,
                description: format!(
                    "Class {}: overtime premium at {}x not excluded",
                    exp.class_code,
                    exp.overtime_rate.normalize()
                ),
                affected_items: vec![exp.class_code.clone()],
                current_value: exp.payroll,
                corrected_value: exp.payroll - ot_exclusion,
                dollar_impact: ot_exclusion,
                recovery_probability: OVERTIME_RECOVERY_PROBABILITY,
                evidence: "NCCI Basic Manual Rule 2-C-2 - Overtime exclusion".to_string(),
            });
        }

        // Executive officer payroll above the state cap.
        if exp.executive_officer_payroll > rating.exec_officer_cap {
            let excess_payroll = exp.executive_officer_payroll - rating.exec_officer_cap;
            corrections += excess_payroll;

            leaks.push(DetectedLeak {
                kind: LeakKind::ExecOfficerCap,
                description: format!(
                    "Class {}: executive officer payroll exceeds state cap",
                    exp.class_code
                ),
                affected_items: vec![exp.class_code.clone()],
                current_value: exp.executive_officer_payroll,
                corrected_value: rating.exec_officer_cap,
                dollar_impact: excess_payroll,
                recovery_probability: EXEC_CAP_RECOVERY_PROBABILITY,
                evidence: format!(
                    "State maximum ratable officer payroll = ${}",
                    rating.exec_officer_cap.normalize()
                ),
            });
        }

        // Severance pay.
        if exp.severance_pay > Decimal::ZERO {
            corrections += exp.severance_pay;

            leaks.push(DetectedLeak {
                kind: LeakKind::SeverancePay,
                description: format!("Class {}: severance pay included", exp.class_code),
                affected_items: vec![exp.class_code.clone()],
                current_value: exp.payroll,
                corrected_value: exp.payroll - exp.severance_pay,
                dollar_impact: exp.severance_pay,
                recovery_probability: SEVERANCE_RECOVERY_PROBABILITY,
                evidence: "NCCI Basic Manual Rule 2-B-2-e - Severance pay excluded".to_string(),
            });
        }

        // Travel reimbursements.
        if exp.travel_reimbursements > Decimal::ZERO {
            corrections += exp.travel_reimbursements;

            leaks.push(DetectedLeak {
                kind: LeakKind::TravelExpense,
                description: format!(
                    "Class {}: travel reimbursements included",
                    exp.class_code
                ),
                affected_items: vec![exp.class_code.clone()],
                current_value: exp.payroll,
                corrected_value: exp.payroll - exp.travel_reimbursements,
                dollar_impact: exp.travel_reimbursements,
                recovery_probability: TRAVEL_RECOVERY_PROBABILITY,
                evidence: "NCCI Basic Manual Rule 2-B-2-h - Expense reimbursements excluded"
                    .to_string(),
            });
        }

        // Subcontractor payroll.
        if exp.subcontractor_payroll > Decimal::ZERO {
            corrections += exp.subcontractor_payroll;

            leaks.push(DetectedLeak {
                kind: LeakKind::SubcontractorDupes,
                description: format!(
                    "Class {}: subcontractor payroll double-counted",
                    exp.class_code
                ),
                affected_items: vec![exp.class_code.clone()],
                current_value: exp.payroll,
                corrected_value: exp.payroll - exp.subcontractor_payroll,
                dollar_impact: exp.subcontractor_payroll,
                recovery_probability: SUBCONTRACTOR_RECOVERY_PROBABILITY,
                evidence: "Certificates of insurance on file for subcontractors".to_string(),
            });
        }

        adjusted.push(ClassCodeExposure {
            class_code: exp.class_code.clone(),
            description: exp.description.clone(),
            payroll: exp.payroll - corrections,
            elr: exp.elr,
            d_ratio: exp.d_ratio,
            overtime_earnings: Decimal::ZERO,
            overtime_rate: exp.overtime_rate,
            executive_officer_payroll: Decimal::ZERO,
            severance_pay: Decimal::ZERO,
            travel_reimbursements: Decimal::ZERO,
            subcontractor_payroll: Decimal::ZERO,
        });
    }

    (adjusted, leaks)
}
