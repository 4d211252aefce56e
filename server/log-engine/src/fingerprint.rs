//! Stable content fingerprint for a loaded log.

/// Compute a stable fingerprint of the raw log text.
///
/// Only the bytes participate, not the path, so the same capture loaded from
/// two locations hashes the same. Uses blake3 for a fast, deterministic hash.
pub fn compute(raw: &str) -> String {
  let hash = blake3::hash(raw.as_bytes());
  // First 16 bytes (32 hex chars) are enough to key a report cache.
  let hex = hash.to_hex();
  hex[..32].to_string()
}
