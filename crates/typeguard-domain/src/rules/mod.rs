use crate::model::TypeMetadataView;
use crate::policy::EffectiveConfig;
use typeguard_types::{Defect, RuleResult};

#[cfg(feature = "rule-enums-zero-value")]
mod enums_zero_value;

#[cfg(feature = "rule-enums-zero-value")]
pub use enums_zero_value::EnumsZeroValue;


/// A rule evaluated against one type at a time.
///
/// `decide` must be a pure function of the view: same view in, same outcome out.
pub trait TypeRule: Send + Sync {
    fn id(&self) -> &'static str;

    fn decide(&self, ty: &TypeMetadataView) -> RuleOutcome;
}

impl<R: TypeRule + ?Sized> TypeRule for Box<R> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn decide(&self, ty: &TypeMetadataView) -> RuleOutcome {
        (**self).decide(ty)
    }
}

impl<R: TypeRule + ?Sized> TypeRule for &R {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn decide(&self, ty: &TypeMetadataView) -> RuleOutcome {
        (**self).decide(ty)
    }
}

/// Verdict plus the defects backing it.
///
/// Only constructible through the three verdict constructors, so a `Failure`
/// always carries a defect and the other verdicts never do.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleOutcome {
    result: RuleResult,
    defects: Vec<Defect>,
}

impl RuleOutcome {
    pub fn does_not_apply() -> Self {
        Self {
            result: RuleResult::DoesNotApply,
            defects: Vec::new(),
        }
    }

    pub fn success() -> Self {
        Self {
            result: RuleResult::Success,
            defects: Vec::new(),
        }
    }

    pub fn failure(defect: Defect) -> Self {
        Self {
            result: RuleResult::Failure,
            defects: vec![defect],
        }
    }

    /// A failure backed by several defects, `first` leading.
    pub fn failure_with(first: Defect, rest: impl IntoIterator<Item = Defect>) -> Self {
        let mut defects = vec![first];
        defects.extend(rest);
        Self {
            result: RuleResult::Failure,
            defects,
        }
    }

    pub fn result(&self) -> RuleResult {
        self.result
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    pub fn into_parts(self) -> (RuleResult, Vec<Defect>) {
        (self.result, self.defects)
    }
}

/// Instantiate every rule that is compiled in and enabled by `cfg`.
pub fn enabled_rules(cfg: &EffectiveConfig) -> Vec<Box<dyn TypeRule>> {
    #[allow(unused_mut)]
    let mut rules: Vec<Box<dyn TypeRule>> = Vec::new();

    #[cfg(feature = "rule-enums-zero-value")]
    {
        if let Some(policy) = cfg.rule_policy(typeguard_types::ids::RULE_DESIGN_ENUMS_ZERO_VALUE)
        {
            rules.push(Box::new(EnumsZeroValue::from_policy(policy)));
        }
    }

    #[cfg(not(feature = "rule-enums-zero-value"))]
    let _ = cfg;

    rules
}
