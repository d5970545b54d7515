//! Per-row randomness and identifier derivation.
//!
//! Every row gets its own generator, seeded from a digest of
//! `"{seed}:{row}"`. Nothing is carried from one row to the next, so a row
//! can be rebuilt on its own, in any order, on any thread.
//!
//! Both algorithms are pinned: BLAKE2s-256 for the seed digest and ChaCha8
//! for the stream. Neither depends on platform endianness or pointer width.

use blake2::{Blake2s256, Digest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Random stream for a single row.
pub type RowRng = ChaCha8Rng;

/// Namespace for name-based record identifiers.
const RECORD_ID_NAMESPACE: Uuid = Uuid::from_u128(0x5c1e_a7d2_3b94_4f0e_9a61_d0c4_7e28_b153);

fn row_key(seed: i64, row: u64) -> String {
    format!("{seed}:{row}")
}

/// Derive the random stream for `row`.
pub fn derive_row_rng(seed: i64, row: u64) -> RowRng {
    let digest = Blake2s256::digest(row_key(seed, row).as_bytes());
    let mut key = [0u8; 32];
    key.copy_from_slice(&digest);
    RowRng::from_seed(key)
}

/// Stable identifier for `row`, as a hyphenated lowercase UUID.
///
/// Uses a different digest than [`derive_row_rng`] and draws nothing from
/// the row stream.
pub fn record_id(seed: i64, row: u64) -> String {
    Uuid::new_v3(&RECORD_ID_NAMESPACE, row_key(seed, row).as_bytes()).to_string()
}
