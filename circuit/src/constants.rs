//! Sizes of the transaction hash and of the coefficient arrays.

pub use zq::{N, Q};

/// Width of each transaction hash half.
///
/// A 256-bit transaction hash is split into two halves so each fits in one field
/// element of the proof system.
pub const TX_HASH_HALF_BITS: u32 = 128;

/// Size of a transaction hash in bytes.
pub const TX_HASH_SIZE: usize = 32;

/// Size of one transaction hash half in bytes.
pub(crate) const TX_HASH_HALF_SIZE: usize = (TX_HASH_HALF_BITS / 8) as usize;

const _: () = assert!(2 * TX_HASH_HALF_SIZE == TX_HASH_SIZE);
const _: () = assert!(TX_HASH_HALF_BITS <= u128::BITS);
