use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a type-level defect.
///
/// Identity fields:
/// - rule_id
/// - code
/// - target type full name
pub fn fingerprint_for_type(rule_id: &str, code: &str, target: &str) -> String {
    let canonical = [rule_id, code, target].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
