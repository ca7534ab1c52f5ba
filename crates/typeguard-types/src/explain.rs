//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a defect.
    pub before: &'static str,
    /// Code that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_DESIGN_ENUMS_ZERO_VALUE => Some(explain_enums_zero_value()),

        // Codes
        ids::CODE_MISSING_ZERO_VALUE => Some(explain_missing_zero_value()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[ids::RULE_DESIGN_ENUMS_ZERO_VALUE]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_MISSING_ZERO_VALUE]
}

fn explain_enums_zero_value() -> Explanation {
    Explanation {
        title: "Enums Should Define A Zero Value",
        description: "\
Detects enumerations that do not declare a member whose value is zero.

The default value of every enum field, array element and uninitialized local is zero,
whatever members the enum declares. Without a zero-valued member:
- Default-initialized values do not correspond to any named member
- Switches over the enum silently miss the default state
- Serialized defaults round-trip to an unnamed value

Enums marked with [Flags] are excluded: a zero there means \"no bits set\" and is a
separate design decision.",
        remediation: "\
Add a member with the value 0, usually named `None`, `Unknown` or `Default`:
- If the first member has no explicit value it already is zero
- If an existing member must keep its value, add a new zero member in front of it",
        examples: ExamplePair {
            before: r#"public enum Priority {
    Low = 1,
    Normal = 2,
    High = 3
}"#,
            after: r#"public enum Priority {
    None = 0,
    Low = 1,
    Normal = 2,
    High = 3
}"#,
        },
    }
}

fn explain_missing_zero_value() -> Explanation {
    let mut exp = explain_enums_zero_value();
    exp.title = "Missing zero-valued member";
    exp
}
