use std::collections::BTreeMap;
use typeguard_types::{Defect, RuleResult, Severity};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl SeverityCounts {
    pub fn from_defects(defects: &[Defect]) -> Self {
        let mut counts = SeverityCounts::default();
        for d in defects {
            match d.severity {
                Severity::Low => counts.low += 1,
                Severity::Medium => counts.medium += 1,
                Severity::High => counts.high += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high + self.critical
    }
}

/// Every enabled rule applied to one type.
#[derive(Clone, Debug)]
pub struct TypeReport {
    pub target: String,
    /// rule_id -> verdict.
    pub results: BTreeMap<String, RuleResult>,
    pub defects: Vec<Defect>,
    pub counts: SeverityCounts,
}

impl TypeReport {
    pub fn result_for(&self, rule_id: &str) -> Option<RuleResult> {
        self.results.get(rule_id).copied()
    }

    pub fn has_failures(&self) -> bool {
        self.results.values().any(|r| *r == RuleResult::Failure)
    }
}
