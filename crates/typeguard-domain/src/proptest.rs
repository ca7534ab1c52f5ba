//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - The verdict/defect-count contract of rule outcomes
//! - Applicability of the enum zero-value rule
//! - Runner isolation across consecutive checks

use crate::engine::evaluate_with;
use crate::model::{ConstantValue, EnumMember, TypeKind, TypeMetadataView, Visibility};
use crate::rules::TypeRule;
use crate::runner::RuleRunner;
use proptest::prelude::*;
use typeguard_types::RuleResult;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

const FULL_NAME_PATTERN: &str =
    "[A-Z][a-z]{0,8}(\\.[A-Z][A-Za-z0-9]{0,12}){1,3}(/[A-Z][a-z]{0,8})?";

/// Strategy for dotted type names, optionally nested.
fn arb_full_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(FULL_NAME_PATTERN).unwrap()
}

fn arb_non_enum_kind() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        Just(TypeKind::Class),
        Just(TypeKind::Interface),
        Just(TypeKind::Struct),
    ]
}

fn arb_visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Internal),
        Just(Visibility::NestedPublic),
        Just(Visibility::NestedPrivate),
        Just(Visibility::NestedInternal),
        Just(Visibility::NestedProtected),
    ]
}

/// Any constant, zero included.
fn arb_value() -> impl Strategy<Value = ConstantValue> {
    prop_oneof![
        any::<i64>().prop_map(ConstantValue::Signed),
        any::<u64>().prop_map(ConstantValue::Unsigned),
        Just(ConstantValue::Signed(0)),
        Just(ConstantValue::Unsigned(0)),
    ]
}

fn arb_nonzero_value() -> impl Strategy<Value = ConstantValue> {
    prop_oneof![
        any::<i64>()
            .prop_filter("non-zero", |v| *v != 0)
            .prop_map(ConstantValue::Signed),
        (1..=u64::MAX).prop_map(ConstantValue::Unsigned),
    ]
}

fn arb_members(
    value: impl Strategy<Value = ConstantValue>,
    size: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<EnumMember>> {
    prop::collection::vec(value, size).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| EnumMember {
                name: format!("M{i}"),
                value,
            })
            .collect()
    })
}

fn view(
    name: String,
    kind: TypeKind,
    visibility: Visibility,
    flags: bool,
    members: Vec<EnumMember>,
) -> TypeMetadataView {
    let mut ty = TypeMetadataView::new(name, kind).visibility(visibility);
    if flags {
        ty = ty.flags();
    }
    ty.members = members;
    ty
}

// ============================================================================
// Enum zero-value rule
// ============================================================================

#[cfg(feature = "rule-enums-zero-value")]
mod enums_zero_value {
    use super::*;
    use crate::rules::EnumsZeroValue;

    proptest! {
        #[test]
        fn non_enum_kinds_never_apply(
            name in arb_full_name(),
            kind in arb_non_enum_kind(),
            visibility in arb_visibility(),
            flags in any::<bool>(),
            members in arb_members(arb_value(), 0..8),
        ) {
            let ty = view(name, kind, visibility, flags, members);
            let outcome = EnumsZeroValue::new().decide(&ty);
            prop_assert_eq!(outcome.result(), RuleResult::DoesNotApply);
            prop_assert!(outcome.defects().is_empty());
        }

        #[test]
        fn flags_enums_never_apply(
            name in arb_full_name(),
            visibility in arb_visibility(),
            members in arb_members(arb_value(), 0..8),
        ) {
            let ty = view(name, TypeKind::Enum, visibility, true, members);
            let outcome = EnumsZeroValue::new().decide(&ty);
            prop_assert_eq!(outcome.result(), RuleResult::DoesNotApply);
            prop_assert!(outcome.defects().is_empty());
        }

        #[test]
        fn enums_with_a_zero_member_succeed(
            name in arb_full_name(),
            visibility in arb_visibility(),
            mut members in arb_members(arb_value(), 0..8),
            zero_at in any::<prop::sample::Index>(),
            unsigned_zero in any::<bool>(),
        ) {
            let zero = if unsigned_zero {
                ConstantValue::Unsigned(0)
            } else {
                ConstantValue::Signed(0)
            };
            let at = zero_at.index(members.len() + 1);
            members.insert(at, EnumMember { name: "Zero".to_string(), value: zero });

            let ty = view(name, TypeKind::Enum, visibility, false, members);
            let outcome = EnumsZeroValue::new().decide(&ty);
            prop_assert_eq!(outcome.result(), RuleResult::Success);
            prop_assert!(outcome.defects().is_empty());
        }

        #[test]
        fn enums_without_a_zero_member_fail_with_one_defect(
            name in arb_full_name(),
            visibility in arb_visibility(),
            members in arb_members(arb_nonzero_value(), 0..8),
        ) {
            let ty = view(name.clone(), TypeKind::Enum, visibility, false, members);
            let outcome = EnumsZeroValue::new().decide(&ty);
            prop_assert_eq!(outcome.result(), RuleResult::Failure);
            prop_assert_eq!(outcome.defects().len(), 1);
            prop_assert_eq!(&outcome.defects()[0].target, &name);
        }

        #[test]
        fn decide_is_idempotent(
            name in arb_full_name(),
            flags in any::<bool>(),
            members in arb_members(arb_value(), 0..8),
        ) {
            let ty = view(name, TypeKind::Enum, Visibility::Public, flags, members);
            let rule = EnumsZeroValue::new();
            prop_assert_eq!(rule.decide(&ty), rule.decide(&ty));
        }

        /// Failure iff at least one defect, across every kind and flag combination.
        #[test]
        fn verdict_matches_defect_count(
            name in arb_full_name(),
            enum_kind in any::<bool>(),
            flags in any::<bool>(),
            members in arb_members(arb_value(), 0..8),
        ) {
            let kind = if enum_kind { TypeKind::Enum } else { TypeKind::Class };
            let ty = view(name, kind, Visibility::Public, flags, members);
            let report = evaluate_with(&ty, &[EnumsZeroValue::new()]);
            let failed = report.has_failures();
            prop_assert_eq!(failed, !report.defects.is_empty());
        }

        /// A failing check followed by a passing one leaves no defects behind.
        #[test]
        fn runner_does_not_leak_defects(
            first in arb_full_name(),
            second in arb_full_name(),
            bad in arb_members(arb_nonzero_value(), 0..6),
            good in arb_members(arb_value(), 0..6),
        ) {
            let mut runner = RuleRunner::new(EnumsZeroValue::new());

            let a = view(first, TypeKind::Enum, Visibility::Public, false, bad);
            prop_assert_eq!(runner.check_type(&a), Ok(RuleResult::Failure));
            prop_assert_eq!(runner.defects().len(), 1);

            let b = view(second, TypeKind::Enum, Visibility::Public, true, good);
            prop_assert_eq!(runner.check_type(&b), Ok(RuleResult::DoesNotApply));
            prop_assert!(runner.defects().is_empty());
        }
    }
}

// ============================================================================
// Model
// ============================================================================

proptest! {
    #[test]
    fn zero_detection_matches_numeric_zero(v in arb_value()) {
        let expected = match v {
            ConstantValue::Signed(x) => x == 0,
            ConstantValue::Unsigned(x) => x == 0,
        };
        prop_assert_eq!(v.is_zero(), expected);
    }

    #[test]
    fn simple_name_has_no_separators(name in arb_full_name()) {
        let ty = TypeMetadataView::class(name);
        prop_assert!(!ty.name().contains('.'));
        prop_assert!(!ty.name().contains('/'));
        prop_assert!(!ty.name().is_empty());
    }
}
