use crate::model::TypeMetadataView;
use crate::policy::{EffectiveConfig, RulePolicy};
use serde_json::Value;
use std::collections::BTreeMap;
use typeguard_types::{Confidence, Defect, Severity, ids};

pub fn defect_with(
    rule_id: &str,
    ty: &TypeMetadataView,
    severity: Severity,
    confidence: Confidence,
) -> Defect {
    Defect {
        severity,
        confidence,
        rule_id: rule_id.to_string(),
        code: "test_code".to_string(),
        message: format!("'{}' violates {}", ty.full_name, rule_id),
        target: ty.full_name.clone(),
        help: None,
        fingerprint: None,
        data: Value::Null,
    }
}

pub fn defect_for(rule_id: &str, ty: &TypeMetadataView) -> Defect {
    defect_with(rule_id, ty, Severity::Medium, Confidence::Total)
}

pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        rules,
    }
}

pub fn config_all_disabled() -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(
        ids::RULE_DESIGN_ENUMS_ZERO_VALUE.to_string(),
        RulePolicy::disabled(),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        rules,
    }
}

/// `{Zero = 0, One = 1, Two = 2}`
pub fn enum_with_zero(full_name: &str) -> TypeMetadataView {
    TypeMetadataView::enumeration(full_name)
        .member("Zero", 0)
        .member("One", 1)
        .member("Two", 2)
}

/// `{One = 1, Two = 2, Three = 3}`
pub fn enum_without_zero(full_name: &str) -> TypeMetadataView {
    TypeMetadataView::enumeration(full_name)
        .member("One", 1)
        .member("Two", 2)
        .member("Three", 3)
}
