//! Error types for ring arithmetic.

use crate::constants::Q;

/// Errors raised while constructing or transforming ring elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// A coefficient vector did not have exactly `N` entries.
    ///
    /// Vectors are never padded or truncated.
    #[error("expected {expected} coefficients, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A coefficient was outside the accepted residue range.
    ///
    /// Spatial-domain inputs must lie in `(-q, q)`; transform-domain inputs must be
    /// canonical, in `[0, q)`.
    #[error("coefficient {value} at index {index} is not a valid residue modulo {}", Q)]
    OutOfRangeCoefficient { index: usize, value: i64 },

    /// A transform-domain coefficient was zero modulo `q`, so the polynomial has no
    /// inverse in the ring.
    ///
    /// For a public key this means the key is malformed or adversarial.
    #[error("transform-domain coefficient at index {index} is zero and has no inverse modulo {}", Q)]
    NonInvertibleElement { index: usize },
}
