//! Pure rule evaluation (no IO).
//!
//! Input: type metadata views constructed elsewhere (a host metadata reader, or the builder API).
//! Output: per-rule verdicts + defects.

#![forbid(unsafe_code)]

pub mod catalogue;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;
pub mod runner;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use catalogue::{InMemoryCatalogue, TypeCatalogue};
pub use engine::{evaluate_type, evaluate_with};
pub use model::TypeMetadataView;
pub use rules::{RuleOutcome, TypeRule};
pub use runner::{RuleRunner, RunnerError};
