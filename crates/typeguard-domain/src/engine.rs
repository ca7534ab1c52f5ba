use crate::model::TypeMetadataView;
use crate::policy::EffectiveConfig;
use crate::report::{SeverityCounts, TypeReport};
use crate::rules::{self, TypeRule};
use std::collections::BTreeMap;
use typeguard_types::Defect;

/// Apply every rule enabled by `cfg` to one type.
pub fn evaluate_type(ty: &TypeMetadataView, cfg: &EffectiveConfig) -> TypeReport {
    let rules = rules::enabled_rules(cfg);
    evaluate_with(ty, &rules)
}

/// Apply an already-built rule set to one type.
///
/// Hosts checking many types should build the rule set once and call this per type.
pub fn evaluate_with<R: TypeRule>(ty: &TypeMetadataView, rules: &[R]) -> TypeReport {
    let mut results = BTreeMap::new();
    let mut defects: Vec<Defect> = Vec::new();

    for rule in rules {
        let (result, produced) = rule.decide(ty).into_parts();
        tracing::trace!(rule = rule.id(), type_name = %ty.full_name, ?result, "evaluated");
        results.insert(rule.id().to_string(), result);
        defects.extend(produced);
    }

    // Deterministic ordering regardless of rule registration order.
    defects.sort_by(compare_defects);
    let counts = SeverityCounts::from_defects(&defects);

    TypeReport {
        target: ty.full_name.clone(),
        results,
        defects,
        counts,
    }
}

fn compare_defects(a: &Defect, b: &Defect) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (critical -> low)
    // 2) confidence (total -> low)
    // 3) rule_id
    // 4) code
    // 5) message
    b.severity
        .cmp(&a.severity)
        .then(b.confidence.cmp(&a.confidence))
        .then(a.rule_id.cmp(&b.rule_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
