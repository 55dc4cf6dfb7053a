//! Algebraic commitments over the BN254 scalar field.
//!
//! A Falcon verification circuit receives the public key and the hash-to-point
//! polynomial as private witnesses and exposes short digests of them as public inputs.
//! This crate computes those digests off-circuit, with the same permutation the circuit
//! evaluates in-circuit:
//! - Poseidon2 over the BN254 scalar field (width 3, S-box `x^5`, HorizenLabs constants)
//! - A padding-free, overwrite-mode sponge with rate 2 and a single output element
//!
//! # Example
//!
//! ```
//! use commitment::{format_field_element, parse_field_element, CommitmentHasher};
//!
//! let hasher = CommitmentHasher::new();
//! let inputs = [
//!     parse_field_element("1").expect("valid element"),
//!     parse_field_element("2").expect("valid element"),
//! ];
//! let digest = hasher.commit(&inputs, 2).expect("arity matches");
//! assert_eq!(
//!     format_field_element(&digest),
//!     "19440202363237281411582519622441422429699333916864112080167601237210978582482"
//! );
//! ```
//!
//! The sponge does not pad, so inputs that differ only by trailing zeros in the last
//! partial block collide. Every commitment here therefore has a fixed arity that callers
//! state up front and the hasher enforces.

mod commitments;
mod constants;
mod errors;
mod field;
mod hasher;

#[cfg(test)]
mod tests;

pub use commitments::{
    commit_challenge, commit_public_key, CHALLENGE_COMMITMENT_ARITY, PUBLIC_KEY_COMMITMENT_ARITY,
};
pub use constants::{
    BN254_MODULUS_DECIMAL, POSEIDON2_OUT, POSEIDON2_RATE, POSEIDON2_ROUNDS_F, POSEIDON2_ROUNDS_P,
    POSEIDON2_WIDTH,
};
pub use errors::CommitmentError;
pub use field::{
    field_modulus, format_field_element, from_residue, parse_field_element, serde_decimal,
    FieldElement,
};
pub use hasher::{poseidon2_bn254, CommitmentHasher, Poseidon2Permutation};
