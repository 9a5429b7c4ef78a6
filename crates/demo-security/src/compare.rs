//! Constant-time comparison for secrets

use sha2::{Digest, Sha256};

/// Compare two secrets without leaking content or length through timing.
///
/// Both inputs are reduced to SHA-256 digests first, so the byte loop always
/// runs over 32 bytes regardless of what the caller submitted.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let da = Sha256::digest(a);
    let db = Sha256::digest(b);

    let mut diff = 0u8;
    for (x, y) in da.iter().zip(db.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
