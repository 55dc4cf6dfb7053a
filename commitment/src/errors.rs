//! Error types for commitment computation.

/// Errors raised while parsing field elements or computing commitments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitmentError {
    /// A string was not the canonical decimal encoding of a BN254 scalar.
    ///
    /// Accepted strings are non-empty runs of ASCII digits whose value is strictly less
    /// than the field modulus. Signs, whitespace and hex prefixes are rejected.
    #[error("{value:?} is not a decimal element of the BN254 scalar field")]
    InvalidFieldElement { value: String },

    /// The number of absorbed elements differed from the declared arity.
    #[error("commitment expected {expected} inputs, absorbed {absorbed}")]
    HashComputationFailure { expected: usize, absorbed: usize },
}
