//! Fuzz target for the enum zero-value rule.
//!
//! Goal: `decide` never panics, and the verdict always agrees with the defect count.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_enum_rule
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeguard_domain::rules::EnumsZeroValue;
use typeguard_domain::{RuleRunner, TypeMetadataView, TypeRule};
use typeguard_types::RuleResult;

#[derive(Arbitrary, Debug)]
enum Value {
    Signed(i64),
    Unsigned(u64),
}

#[derive(Arbitrary, Debug)]
struct Input {
    name: String,
    is_enum: bool,
    flags: bool,
    members: Vec<(String, Value)>,
}

fuzz_target!(|input: Input| {
    let mut ty = if input.is_enum {
        TypeMetadataView::enumeration(input.name)
    } else {
        TypeMetadataView::class(input.name)
    };
    if input.flags {
        ty = ty.flags();
    }
    for (name, value) in input.members {
        ty = match value {
            Value::Signed(v) => ty.member(name, v),
            Value::Unsigned(v) => ty.unsigned_member(name, v),
        };
    }

    let outcome = EnumsZeroValue::new().decide(&ty);
    match outcome.result() {
        RuleResult::Failure => assert!(!outcome.defects().is_empty()),
        _ => assert!(outcome.defects().is_empty()),
    }

    let mut runner = RuleRunner::new(EnumsZeroValue::new());
    if let Ok(result) = runner.check_type(&ty) {
        assert_eq!(result, outcome.result());
        assert_eq!(runner.defects().len(), outcome.defects().len());
    }
});
