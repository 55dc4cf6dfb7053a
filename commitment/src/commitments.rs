//! The two commitments a Falcon verification circuit exposes as public inputs.

use tracing::debug;
use zq::{NttPoly, N};

use crate::errors::CommitmentError;
use crate::field::{format_field_element, from_residue, FieldElement};
use crate::hasher::CommitmentHasher;

/// Inputs absorbed by [`commit_public_key`]: the transform-domain public key.
pub const PUBLIC_KEY_COMMITMENT_ARITY: usize = N;

/// Inputs absorbed by [`commit_challenge`]: the public key commitment, the
/// transform-domain hash-to-point polynomial and both transaction hash halves.
pub const CHALLENGE_COMMITMENT_ARITY: usize = 1 + N + 2;

/// Commits to a public key given in the transform domain.
///
/// Absorbs the `N` coefficients of `h_hat` in index order.
pub fn commit_public_key(h_hat: &NttPoly) -> Result<FieldElement, CommitmentError> {
    let inputs: Vec<FieldElement> = h_hat.coeffs().iter().copied().map(from_residue).collect();
    let digest = CommitmentHasher::new().commit(&inputs, PUBLIC_KEY_COMMITMENT_ARITY)?;
    debug!(digest = %format_field_element(&digest), "computed public key commitment");
    Ok(digest)
}

/// Commits to the public key commitment, the hash-to-point polynomial and the
/// transaction hash, binding all three together.
///
/// Absorption order is `pk_hash`, then the `N` coefficients of `h2p_d` in index order,
/// then `tx_hash1` and `tx_hash2`.
pub fn commit_challenge(
    pk_hash: FieldElement,
    h2p_d: &NttPoly,
    tx_hash1: FieldElement,
    tx_hash2: FieldElement,
) -> Result<FieldElement, CommitmentError> {
    let mut inputs = Vec::with_capacity(CHALLENGE_COMMITMENT_ARITY);
    inputs.push(pk_hash);
    inputs.extend(h2p_d.coeffs().iter().copied().map(from_residue));
    inputs.push(tx_hash1);
    inputs.push(tx_hash2);
    let digest = CommitmentHasher::new().commit(&inputs, CHALLENGE_COMMITMENT_ARITY)?;
    debug!(digest = %format_field_element(&digest), "computed challenge commitment");
    Ok(digest)
}
