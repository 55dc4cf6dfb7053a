//! # Falcon-512 Circuit Input Derivation
//!
//! Turns the raw output of a Falcon-512 signer into the exact inputs a zero-knowledge
//! circuit needs to re-check the Falcon verification equation and the key and message
//! commitments internally.
//!
//! ## Overview
//!
//! The circuit does not compute transforms or inverses of its own; it checks claimed
//! values against cheap relations. This crate therefore precomputes, off-circuit and
//! bit-for-bit the way the circuit expects them:
//! - `h_hat`, the public key in the NTT domain
//! - `h_product_inv`, its slot-by-slot inverse modulo q
//! - `h2p_d`, the hash-to-point polynomial in the NTT domain
//! - `pk_hash_in` and `in_c_hash`, Poseidon2 commitments over the BN254 scalar field
//!
//! Any mismatch with the circuit's own conventions yields a proof the verifier rejects
//! with no further signal, which is why the golden fixture under `tests/fixtures/` is
//! compared byte for byte.
//!
//! ## Quick Start
//!
//! ```
//! use circuit::{build, Error, Component, N};
//!
//! let s1 = vec![0i16; N];
//! let h = vec![0i16; N];
//! let h2p = vec![0i16; N];
//!
//! // The zero polynomial has no inverse, so this build is rejected.
//! let err = build(&s1, &h, &h2p, "1", "2").unwrap_err();
//! assert_eq!(err, Error::NonInvertibleElement { which: Component::HHat, index: 0 });
//! ```
//!
//! ## Input Format
//!
//! [`SignerOutput`] is the JSON payload produced next to a signing session:
//!
//! ```text
//! { "s1": [...512], "h": [...512], "h2p": [...512],
//!   "in_tx_hash1": "<decimal>", "in_tx_hash2": "<decimal>" }
//! ```
//!
//! [`CircuitInput`] serializes to the proving engine's format:
//!
//! ```text
//! { "s1": [...], "h_hat": [...], "h_product_inv": [...], "h2p_d": [...],
//!   "pk_hash_in": "<decimal>", "in_tx_hash1": "<decimal>",
//!   "in_tx_hash2": "<decimal>", "in_c_hash": "<decimal>" }
//! ```
//!
//! ## Concurrency
//!
//! Builds are pure functions of their inputs. The NTT tables and the Poseidon2
//! permutation are computed once and only read afterwards, so independent builds can
//! run on any number of threads. Enable the `parallel` feature for [`build_batch`] to
//! use rayon.

mod builder;
mod circuit_input;
mod coefficients;
mod constants;
mod errors;
mod signer_output;
mod tx_hash;


pub use builder::{build, build_batch};
pub use circuit_input::CircuitInput;
pub use coefficients::parse_coefficient_list;
pub use constants::{N, Q, TX_HASH_HALF_BITS, TX_HASH_SIZE};
pub use errors::{Component, Error};
pub use signer_output::SignerOutput;
pub use tx_hash::TxHash;

// Re-export the types that appear in this crate's public API
pub use commitment::{format_field_element, parse_field_element, FieldElement};
pub use zq::{NttPoly, Poly};
