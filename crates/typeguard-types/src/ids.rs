//! Stable identifiers for rules and defect codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_DESIGN_ENUMS_ZERO_VALUE: &str = "design.enums_zero_value";

// Codes: design.enums_zero_value
pub const CODE_MISSING_ZERO_VALUE: &str = "missing_zero_value";

// Well-known attributes
pub const ATTRIBUTE_FLAGS: &str = "System.FlagsAttribute";
