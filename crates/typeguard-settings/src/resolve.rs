use crate::{model::TypeguardConfigV1, presets};
use anyhow::Context;
use typeguard_domain::policy::{EffectiveConfig, RulePolicy};
use typeguard_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Rule IDs to switch off regardless of config.
    pub disable: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: TypeguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    for rule_id in &overrides.disable {
        if let Some(entry) = effective.rules.get_mut(rule_id) {
            entry.enabled = false;
        }
    }

    Ok(ResolvedConfig { effective })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "low" => Ok(Severity::Low),
        "medium" => Ok(Severity::Medium),
        "high" => Ok(Severity::High),
        "critical" => Ok(Severity::Critical),
        other => anyhow::bail!("unknown severity: {other} (expected low|medium|high|critical)"),
    }
}
