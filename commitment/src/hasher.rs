//! The Poseidon2 sponge used for every commitment.

use core::fmt;

use once_cell::sync::Lazy;
use p3_bn254::Poseidon2Bn254;
use p3_poseidon2::ExternalLayerConstants;
use p3_symmetric::{CryptographicHasher, PaddingFreeSponge, Permutation};
use tracing::{trace, warn};

use crate::constants::{
    EXTERNAL_INITIAL, EXTERNAL_TERMINAL, INTERNAL, POSEIDON2_OUT, POSEIDON2_RATE, POSEIDON2_WIDTH,
};
use crate::errors::CommitmentError;
use crate::field::{from_u128_halves, FieldElement};

/// Poseidon2 over BN254 with the state width used for commitments.
pub type Poseidon2Permutation = Poseidon2Bn254<POSEIDON2_WIDTH>;

type Sponge = PaddingFreeSponge<Poseidon2Permutation, POSEIDON2_WIDTH, POSEIDON2_RATE, POSEIDON2_OUT>;

static POSEIDON2_BN254: Lazy<Poseidon2Permutation> = Lazy::new(build_permutation);

static SPONGE: Lazy<Sponge> = Lazy::new(|| PaddingFreeSponge::new(poseidon2_bn254().clone()));

fn build_permutation() -> Poseidon2Permutation {
    let initial = EXTERNAL_INITIAL
        .iter()
        .map(|row| row.map(from_u128_halves))
        .collect();
    let terminal = EXTERNAL_TERMINAL
        .iter()
        .map(|row| row.map(from_u128_halves))
        .collect();
    let internal = INTERNAL.iter().copied().map(from_u128_halves).collect();
    trace!(width = POSEIDON2_WIDTH, "initialized Poseidon2 BN254 permutation");
    Poseidon2Permutation::new(ExternalLayerConstants::new(initial, terminal), internal)
}

/// The process-wide Poseidon2 BN254 permutation, built on first use.
pub fn poseidon2_bn254() -> &'static Poseidon2Permutation {
    &POSEIDON2_BN254
}

/// Fixed-arity commitment hasher.
///
/// Absorbs field elements two at a time into a width-3 state, overwriting the rate
/// portion, and returns the first state element after the final permutation. The
/// hasher is a thin handle to shared immutable state, so it is `Copy` and can be used
/// from many threads at once.
#[derive(Clone, Copy)]
pub struct CommitmentHasher {
    sponge: &'static Sponge,
}

impl CommitmentHasher {
    pub fn new() -> Self {
        Self { sponge: &SPONGE }
    }

    /// Commits to `inputs`, which must contain exactly `arity` elements.
    pub fn commit(
        &self,
        inputs: &[FieldElement],
        arity: usize,
    ) -> Result<FieldElement, CommitmentError> {
        if inputs.len() != arity {
            warn!(expected = arity, absorbed = inputs.len(), "commitment arity mismatch");
            return Err(CommitmentError::HashComputationFailure {
                expected: arity,
                absorbed: inputs.len(),
            });
        }
        let [digest] = self.sponge.hash_iter(inputs.iter().copied());
        Ok(digest)
    }

    /// Applies the raw permutation to a single state.
    pub fn permute(&self, state: [FieldElement; POSEIDON2_WIDTH]) -> [FieldElement; POSEIDON2_WIDTH] {
        poseidon2_bn254().permute(state)
    }
}

impl Default for CommitmentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommitmentHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitmentHasher")
            .field("width", &POSEIDON2_WIDTH)
            .field("rate", &POSEIDON2_RATE)
            .finish()
    }
}
