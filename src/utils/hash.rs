//! Content hashing using FxHash.
//!
//! Used by the site handle to skip reloads when the config bytes did not
//! change. Deterministic within a process, not a cryptographic digest.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}
