use crate::catalogue::TypeCatalogue;
use crate::model::TypeMetadataView;
use crate::rules::TypeRule;
use typeguard_types::{Defect, RuleResult};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RunnerError {
    /// The type to check is missing or unusable. A caller bug, never a verdict.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl RunnerError {
    fn invalid(reason: impl Into<String>) -> Self {
        RunnerError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Drives one rule against one type at a time and keeps the defects of the last check.
///
/// A runner owns its defect storage; share rules between threads, not runners.
#[derive(Debug)]
pub struct RuleRunner<R> {
    rule: R,
    last_result: Option<RuleResult>,
    defects: Vec<Defect>,
}

impl<R: TypeRule> RuleRunner<R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            last_result: None,
            defects: Vec::new(),
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Apply the rule to `ty`.
    ///
    /// Defects from the previous call are dropped first, including when this call fails.
    pub fn check_type(&mut self, ty: &TypeMetadataView) -> Result<RuleResult, RunnerError> {
        self.reset();

        if ty.full_name.trim().is_empty() {
            return Err(RunnerError::invalid("type has an empty full name"));
        }

        let (result, defects) = self.rule.decide(ty).into_parts();
        tracing::debug!(
            rule = self.rule.id(),
            type_name = %ty.full_name,
            ?result,
            defects = defects.len(),
            "rule checked type"
        );

        self.last_result = Some(result);
        self.defects.extend(defects);
        Ok(result)
    }

    /// Like [`check_type`](Self::check_type), for hosts that may not have a type at hand.
    pub fn check_type_opt(
        &mut self,
        ty: Option<&TypeMetadataView>,
    ) -> Result<RuleResult, RunnerError> {
        match ty {
            Some(ty) => self.check_type(ty),
            None => {
                self.reset();
                Err(RunnerError::invalid("no type supplied"))
            }
        }
    }

    /// Look `full_name` up in `catalogue` and check it.
    pub fn check_named<C>(
        &mut self,
        catalogue: &C,
        full_name: &str,
    ) -> Result<RuleResult, RunnerError>
    where
        C: TypeCatalogue + ?Sized,
    {
        match catalogue.get(full_name) {
            Some(ty) => self.check_type(ty),
            None => {
                self.reset();
                Err(RunnerError::invalid(format!(
                    "type '{full_name}' is not in the catalogue"
                )))
            }
        }
    }

    /// Defects produced by the most recent check.
    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    /// Verdict of the most recent successful check.
    pub fn last_result(&self) -> Option<RuleResult> {
        self.last_result
    }

    fn reset(&mut self) {
        self.last_result = None;
        self.defects.clear();
    }
}
