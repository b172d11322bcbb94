//! Rating-value types for a single jurisdiction.
//!
//! This module contains the strongly-typed rating values that are
//! deserialized from the per-state YAML files, together with the
//! credibility and capping operations the rest of the engine calls.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Minimum ballast value: Kp is clamped here so small risks keep a
/// stabilizing constant in the mod formula.
pub const KP_FLOOR: Decimal = Decimal::from_parts(7500, 0, 0, false, 0);

// NCCI 2026 credibility constants.
const KP_S_NUM: Decimal = Decimal::from_parts(1028, 0, 0, false, 5); // 0.01028
const KP_E_DENOM: Decimal = Decimal::from_parts(75, 0, 0, false, 2); // 0.75
const KP_S_DENOM: Decimal = Decimal::from_parts(8153, 0, 0, false, 4); // 0.8153
const KE_S_NUM: Decimal = Decimal::from_parts(204, 0, 0, false, 4); // 0.0204
const KE_E_DENOM: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1
const KE_S_DENOM: Decimal = Decimal::from_parts(5109, 0, 0, false, 4); // 0.5109

fn default_era_discount() -> Decimal {
    Decimal::new(30, 2)
}

fn default_elr_decimals() -> u32 {
    3
}

/// The rating bureau that governs a jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bureau {
    /// National Council on Compensation Insurance.
    Ncci,
    /// California Workers' Compensation Insurance Rating Bureau.
    Wcirb,
    /// New York Compensation Insurance Rating Board.
    Nycirb,
    /// Pennsylvania Compensation Rating Bureau.
    Pcrb,
}

impl Bureau {
    /// Returns the bureau's short name.
    pub fn name(&self) -> &'static str {
        match self {
            Bureau::Ncci => "NCCI",
            Bureau::Wcirb => "WCIRB",
            Bureau::Nycirb => "NYCIRB",
            Bureau::Pcrb => "PCRB",
        }
    }
}

/// Experience rating values for a single jurisdiction.
///
/// One YAML file per state; values come from the bureau's rating values
/// filing for the vintage named by `effective_date`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateRating {
    /// Uppercase 2-letter state code.
    pub state_code: String,
    /// The state's full name.
    pub state_name: String,
    /// Dollar threshold separating primary from excess loss.
    pub split_point: Decimal,
    /// State Accident Limitation: the single-claim ratable cap.
    pub sal_per_claim: Decimal,
    /// Multiple-claim cap for one accident (typically 2x SAL).
    pub sal_multiple_claim: Decimal,
    /// The G parameter from the rating values filing.
    pub g_value: Decimal,
    /// The S parameter (G x 250,000) used by the W/B formulas.
    pub s_value: Decimal,
    /// Whether the ERA medical-only discount applies in this state.
    pub is_era_state: bool,
    /// The ratable portion of a medical-only claim under ERA.
    #[serde(default = "default_era_discount")]
    pub era_discount: Decimal,
    /// The bureau that governs this state.
    pub bureau: Bureau,
    /// Whether the state follows NCCI formulas.
    pub is_ncci_state: bool,
    /// Effective date of this rating values vintage.
    pub effective_date: NaiveDate,
    /// Decimal places published for ELR values (2026 standard is 3).
    #[serde(default = "default_elr_decimals")]
    pub elr_decimals: u32,
    /// Minimum expected losses for experience rating eligibility.
    pub min_expected_losses: Decimal,
    /// Maximum ratable executive officer payroll.
    pub exec_officer_cap: Decimal,
}

impl StateRating {
    /// Calculates the weighting value W and ballast B for the given
    /// expected losses.
    ///
    /// NCCI states use the 2026 standard formulas:
    ///
    /// ```text
    /// Kp = max(7500, E(E + 0.01028 S) / (0.75 E + 0.8153 S))
    /// Ke = E(E + 0.0204 S) / (0.1 E + 0.5109 S)
    /// B  = Kp
    /// W  = (E + Ke) / (E + Kp)
    /// ```
    ///
    /// Independent bureaus keep their own formulas; asking for one that is
    /// not implemented is an error, never a silent fallback to NCCI math.
    pub fn w_and_b(&self, expected_losses: Decimal) -> EngineResult<(Decimal, Decimal)> {
        if !self.is_ncci_state || self.bureau != Bureau::Ncci {
            return Err(EngineError::BureauNotImplemented {
                state: self.state_code.clone(),
                bureau: self.bureau.name().to_string(),
            });
        }

        let e = expected_losses;
        let s = self.s_value;

        let kp = (e * (e + KP_S_NUM * s)) / (KP_E_DENOM * e + KP_S_DENOM * s);
        let kp = kp.max(KP_FLOOR);

        let ke = (e * (e + KE_S_NUM * s)) / (KE_E_DENOM * e + KE_S_DENOM * s);

        let b = kp;
        let w = (e + ke) / (e + kp);

        Ok((w, b))
    }

    /// Caps a single claim at the state per-claim accident limitation.
    pub fn apply_sal_cap(&self, amount: Decimal) -> Decimal {
        amount.min(self.sal_per_claim)
    }

    /// Applies the multiple-claim rule to claims sharing one accident.
    ///
    /// Totals at or under the cap pass through unchanged; anything larger
    /// is scaled proportionally so relative claim weights are preserved.
    pub fn apply_multiple_claim_cap(&self, amounts: &[Decimal]) -> Vec<Decimal> {
        let total: Decimal = amounts.iter().copied().sum();
        if total <= self.sal_multiple_claim {
            return amounts.to_vec();
        }

        let ratio = self.sal_multiple_claim / total;
        amounts.iter().map(|amount| *amount * ratio).collect()
    }
}
