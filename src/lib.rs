//! Experience Mod Audit Engine for workers' compensation policies
//!
//! This crate recomputes a policy's Experience Modification Factor from
//! typed loss-run and payroll records, quantifies rating leaks, and produces
//! the before/after recovery report used as audit evidence.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rating;
