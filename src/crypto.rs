//! Memory snapshot digests.
//! BLAKE2b-256 over the little-endian bytes of each cell, for cheap comparison of final memory.

use blake2::digest::consts::U32;
use blake2::digest::Digest;
use blake2::Blake2b;

use crate::types::Word;

type Blake2b256 = Blake2b<U32>;

/// Blake2b-256 hash (32-byte output).
#[must_use]
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    Digest::update(&mut hasher, data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Digest of a memory snapshot. Equal digests mean equal cells (and equal length).
#[must_use]
pub fn memory_digest(cells: &[Word]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for cell in cells {
        Digest::update(&mut hasher, cell.to_le_bytes());
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
