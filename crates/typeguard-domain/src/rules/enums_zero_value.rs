use super::{RuleOutcome, TypeRule};
use crate::fingerprint::fingerprint_for_type;
use crate::model::{IntegralType, TypeMetadataView};
use crate::policy::RulePolicy;
use serde_json::json;
use typeguard_types::{Confidence, Defect, Severity, ids};

/// Plain (non-flags) enums must declare a member whose value is zero.
#[derive(Clone, Debug)]
pub struct EnumsZeroValue {
    severity: Severity,
}

impl Default for EnumsZeroValue {
    fn default() -> Self {
        Self {
            severity: Severity::Medium,
        }
    }
}

impl EnumsZeroValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_policy(policy: &RulePolicy) -> Self {
        Self {
            severity: policy.severity,
        }
    }

    fn defect(&self, ty: &TypeMetadataView) -> Defect {
        let rule_id = ids::RULE_DESIGN_ENUMS_ZERO_VALUE;
        let code = ids::CODE_MISSING_ZERO_VALUE;
        Defect {
            severity: self.severity,
            confidence: Confidence::Total,
            rule_id: rule_id.to_string(),
            code: code.to_string(),
            message: format!(
                "enum '{}' does not define a member with the value 0, \
                 which is the implicit default of every enum",
                ty.full_name
            ),
            target: ty.full_name.clone(),
            help: Some("Add a zero-valued member, e.g. `None = 0`.".to_string()),
            fingerprint: Some(fingerprint_for_type(rule_id, code, &ty.full_name)),
            // Values as strings: u64/i64 extremes do not survive JSON number readers.
            data: json!({
                "type": ty.full_name,
                "underlying": ty.underlying.map(IntegralType::as_str),
                "members": ty
                    .members
                    .iter()
                    .map(|m| json!({ "name": m.name, "value": m.value.to_string() }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

impl TypeRule for EnumsZeroValue {
    fn id(&self) -> &'static str {
        ids::RULE_DESIGN_ENUMS_ZERO_VALUE
    }

    fn decide(&self, ty: &TypeMetadataView) -> RuleOutcome {
        // Flags enums use zero as "no bits set"; whether to define it is their own call.
        if !ty.is_enum() || ty.is_flags() {
            return RuleOutcome::does_not_apply();
        }

        if ty.members.iter().any(|m| m.value.is_zero()) {
            RuleOutcome::success()
        } else {
            RuleOutcome::failure(self.defect(ty))
        }
    }
}
