//! Content digests
//!
//! Computes SHA256 digests of rendered target text for change reporting

use sha2::{Digest, Sha256};

/// SHA256 hex digest of `content`
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
