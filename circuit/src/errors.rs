//! Error types for circuit input derivation.

use core::fmt;

use commitment::CommitmentError;
use zq::RingError;

/// Names a coefficient array or field element taking part in a build.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    S1,
    H,
    H2p,
    HHat,
    HProductInv,
    H2pD,
    PkHashIn,
    InTxHash1,
    InTxHash2,
    InCHash,
}

impl Component {
    /// The member name used in the proving engine's input format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::S1 => "s1",
            Component::H => "h",
            Component::H2p => "h2p",
            Component::HHat => "h_hat",
            Component::HProductInv => "h_product_inv",
            Component::H2pD => "h2p_d",
            Component::PkHashIn => "pk_hash_in",
            Component::InTxHash1 => "in_tx_hash1",
            Component::InTxHash2 => "in_tx_hash2",
            Component::InCHash => "in_c_hash",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a circuit input derivation.
///
/// Every variant tied to one member of the record names it through `which`, so a caller
/// can decide whether to re-solicit that input. `InvalidTxHash` and `Json` concern a whole
/// payload rather than a single member and carry the rejected text instead. All of them are deterministic in the inputs; retrying with the same
/// inputs reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A coefficient array did not have exactly `N` entries.
    #[error("{which}: expected {expected} coefficients, got {actual}")]
    InvalidLength {
        which: Component,
        expected: usize,
        actual: usize,
    },

    /// A coefficient was outside the accepted residue range.
    #[error("{which}: coefficient {value} at index {index} is not a valid residue modulo q")]
    OutOfRangeCoefficient {
        which: Component,
        index: usize,
        value: i64,
    },

    /// A transform-domain coefficient was zero modulo q.
    ///
    /// For an honestly generated public key this never happens; it indicates a malformed
    /// or adversarial key.
    #[error("{which}: transform-domain coefficient at index {index} is zero and has no inverse")]
    NonInvertibleElement { which: Component, index: usize },

    /// A string was not a decimal element of the proof system's scalar field.
    #[error("{which}: {value:?} is not a decimal element of the BN254 scalar field")]
    InvalidFieldElement { which: Component, value: String },

    /// The commitment hasher absorbed a different number of inputs than declared.
    #[error("{which}: commitment expected {expected} inputs, absorbed {absorbed}")]
    HashComputationFailure {
        which: Component,
        expected: usize,
        absorbed: usize,
    },

    /// A transaction hash was not 32 bytes of raw or hex-encoded data.
    #[error("{value:?} is not a 32-byte transaction hash")]
    InvalidTxHash { value: String },

    /// A textual coefficient list could not be parsed.
    #[error("{which}: malformed coefficient list: {reason}")]
    MalformedCoefficientList { which: Component, reason: String },

    /// A loaded record contradicts itself.
    #[error("{which} does not match the value derived from the rest of the record")]
    Inconsistent { which: Component },

    /// A JSON payload was malformed or had the wrong shape.
    #[error("malformed JSON: {0}")]
    Json(String),
}

impl Error {
    /// Attaches the name of the offending array to a ring error.
    pub fn from_ring(which: Component, err: RingError) -> Self {
        match err {
            RingError::InvalidLength { expected, actual } => Error::InvalidLength {
                which,
                expected,
                actual,
            },
            RingError::OutOfRangeCoefficient { index, value } => Error::OutOfRangeCoefficient {
                which,
                index,
                value,
            },
            RingError::NonInvertibleElement { index } => {
                Error::NonInvertibleElement { which, index }
            }
        }
    }

    /// Attaches the name of the offending field element to a commitment error.
    pub fn from_commitment(which: Component, err: CommitmentError) -> Self {
        match err {
            CommitmentError::InvalidFieldElement { value } => {
                Error::InvalidFieldElement { which, value }
            }
            CommitmentError::HashComputationFailure { expected, absorbed } => {
                Error::HashComputationFailure {
                    which,
                    expected,
                    absorbed,
                }
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
