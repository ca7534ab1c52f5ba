//! Stable DTOs and IDs used across the typeguard workspace.
//!
//! This crate is intentionally boring:
//! - the three-state rule verdict
//! - defect records with severity and confidence
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod defect;
pub mod explain;
pub mod ids;

pub use defect::{Confidence, Defect, RuleResult, Severity};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
