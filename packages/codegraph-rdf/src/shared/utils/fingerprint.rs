//! Structural fingerprints
//!
//! Two sub-trees share a fingerprint exactly when they serialize to the same
//! canonical JSON, metadata included. Keys are BLAKE3 digests, truncated.

use crate::shared::models::Ast;

/// Hex digits kept from the digest
const FINGERPRINT_LENGTH: usize = 32;

/// Fingerprint of `ast` scoped to `namespace`
pub fn fingerprint(namespace: &str, ast: &Ast) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(namespace.as_bytes());
    hasher.update(&[0]);
    // Owned trees always serialize
    let encoded = serde_json::to_vec(ast).unwrap_or_default();
    hasher.update(&encoded);
    let hex = hasher.finalize().to_hex();
    hex[..FINGERPRINT_LENGTH].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tree_same_fingerprint() {
        let a = Ast::op("+", Ast::var("x"), Ast::int(1));
        let b = Ast::op("+", Ast::var("x"), Ast::int(1));
        assert_eq!(fingerprint("ns", &a), fingerprint("ns", &b));
    }

    #[test]
    fn test_namespace_scopes_fingerprint() {
        let a = Ast::int(1);
        assert_ne!(fingerprint("ns1", &a), fingerprint("ns2", &a));
    }

    #[test]
    fn test_fingerprint_length() {
        assert_eq!(fingerprint("ns", &Ast::atom("ok")).len(), FINGERPRINT_LENGTH);
    }
}
