//! Class-code exposure model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_overtime_rate() -> Decimal {
    Decimal::new(15, 1)
}

/// Payroll and expected losses for a single class code.
///
/// The payroll breakdown fields exist for leak detection: each one is a
/// remuneration component that rating rules exclude (in whole or in part)
/// from ratable payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCodeExposure {
    /// The workers' compensation class code (e.g., "8810").
    pub class_code: String,
    /// The class code's description on the rating worksheet.
    pub description: String,
    /// Reported payroll for the class code.
    pub payroll: Decimal,
    /// Expected Loss Rate per $100 of payroll.
    pub elr: Decimal,
    /// Discount Ratio: the primary share of expected losses.
    pub d_ratio: Decimal,
    /// Total overtime earnings included in the payroll.
    #[serde(default)]
    pub overtime_earnings: Decimal,
    /// The overtime multiplier paid (1.5x, 2.0x, 2.5x).
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

impl ClassCodeExposure {
    /// Expected losses: payroll per $100 times the expected loss rate.
    pub fn expected_losses(&self) -> Decimal {
        self.payroll / Decimal::ONE_HUNDRED * self.elr
    }

    /// Expected primary losses: expected losses times the D-ratio.
    pub fn expected_primary(&self) -> Decimal {
        self.expected_losses() * self.d_ratio
    }

    /// Expected excess losses: the remainder above primary.
    pub fn expected_excess(&self) -> Decimal {
        self.expected_losses() - self.expected_primary()
    }
}
