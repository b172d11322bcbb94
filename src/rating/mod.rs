//! Rating logic for the experience mod audit engine.
//!
//! This module contains the deterministic rating pipeline: claim
//! preprocessing through the ERA, SAL, and frequency gates, payroll
//! adjustment for excludable remuneration, claim-level leak detection,
//! the NCCI weighted-credibility mod formula, and the full-audit
//! orchestration that diffs the current and corrected calculations.

mod audit;
mod claim_gates;
mod claim_leaks;
mod mod_calc;
mod payroll;

pub use audit::run_full_audit;
pub use claim_gates::{ProcessedClaim, preprocess_claims};
pub use claim_leaks::{ZOMBIE_RESERVE_INACTIVITY_DAYS, detect_claim_leaks};
pub use mod_calc::calculate_experience_mod;
pub use payroll::adjust_payroll;
