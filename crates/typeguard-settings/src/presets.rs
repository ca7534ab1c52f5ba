use std::collections::BTreeMap;
use typeguard_domain::policy::{EffectiveConfig, RulePolicy};
use typeguard_types::Severity;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        rules: default_rules(Severity::Medium),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        rules: default_rules(Severity::High),
    }
}

fn lenient_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "lenient".to_string(),
        rules: default_rules(Severity::Low),
    }
}

fn default_rules(default_severity: Severity) -> BTreeMap<String, RulePolicy> {
    use typeguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        RULE_DESIGN_ENUMS_ZERO_VALUE.to_string(),
        RulePolicy::enabled(default_severity),
    );

    m
}
