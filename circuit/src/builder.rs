//! Derivation of a [`CircuitInput`] from signer output.
//!
//! The steps run in a fixed order and each one needs the previous step's output:
//!
//! 1. Check that `s1`, `h` and `h2p` each have exactly `N` coefficients
//! 2. Check every coefficient lies in `(-q, q)`
//! 3. Parse both transaction hash halves as BN254 scalars
//! 4. `h_hat = NTT(h)`
//! 5. `h_product_inv = h_hat^{-1}`, slot by slot
//! 6. `h2p_d = NTT(h2p)`
//! 7. `pk_hash_in = Commit(h_hat)` and `in_c_hash = Commit(pk_hash_in, h2p_d, tx1, tx2)`
//!
//! The first failure aborts the build and nothing partial is returned.

use commitment::{commit_challenge, commit_public_key, format_field_element, parse_field_element};
use tracing::debug;

use crate::circuit_input::CircuitInput;
use crate::coefficients::{check_length, spatial};
use crate::errors::{Component, Error};
use crate::signer_output::SignerOutput;

/// Builds the circuit input for one signature.
///
/// `s1` is the signature component that is not multiplied by the public key in
/// `s1 + s2 * h = c`; it is stored in centered form and otherwise left in the spatial
/// domain. `h` is the public key polynomial and `h2p` the hash-to-point polynomial,
/// both spatial-domain. `tx_hash1` and `tx_hash2` are decimal strings for the low and
/// high halves of the transaction hash.
pub fn build<C: Copy + Into<i64>>(
    s1: &[C],
    h: &[C],
    h2p: &[C],
    tx_hash1: &str,
    tx_hash2: &str,
) -> Result<CircuitInput, Error> {
    check_length(Component::S1, s1.len())?;
    check_length(Component::H, h.len())?;
    check_length(Component::H2p, h2p.len())?;

    let s1 = spatial(Component::S1, s1)?;
    let h = spatial(Component::H, h)?;
    let h2p = spatial(Component::H2p, h2p)?;

    let in_tx_hash1 = parse_field_element(tx_hash1)
        .map_err(|err| Error::from_commitment(Component::InTxHash1, err))?;
    let in_tx_hash2 = parse_field_element(tx_hash2)
        .map_err(|err| Error::from_commitment(Component::InTxHash2, err))?;
    debug!("validated signer inputs");

    let h_hat = h.ntt();
    let h_product_inv = h_hat
        .inverse()
        .map_err(|err| Error::from_ring(Component::HHat, err))?;
    let h2p_d = h2p.ntt();
    debug!("derived transform-domain members");

    let pk_hash_in = commit_public_key(&h_hat)
        .map_err(|err| Error::from_commitment(Component::PkHashIn, err))?;
    let in_c_hash = commit_challenge(pk_hash_in, &h2p_d, in_tx_hash1, in_tx_hash2)
        .map_err(|err| Error::from_commitment(Component::InCHash, err))?;
    debug!(
        pk_hash_in = %format_field_element(&pk_hash_in),
        in_c_hash = %format_field_element(&in_c_hash),
        "built circuit input"
    );

    Ok(CircuitInput::assemble(
        s1,
        h_hat,
        h_product_inv,
        h2p_d,
        pk_hash_in,
        in_tx_hash1,
        in_tx_hash2,
        in_c_hash,
    ))
}

/// Builds many independent inputs, one per signer output.
///
/// Results are returned in input order. With the `parallel` feature the builds run on
/// the rayon global pool.
pub fn build_batch(requests: &[SignerOutput]) -> Vec<Result<CircuitInput, Error>> {
    debug!(count = requests.len(), "building circuit input batch");
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests.par_iter().map(|r| r.to_circuit_input()).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(|r| r.to_circuit_input()).collect()
    }
}
