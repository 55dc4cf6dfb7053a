//! The payload an external Falcon signer hands to this crate.

use serde::{Deserialize, Serialize};

use crate::builder::build;
use crate::circuit_input::CircuitInput;
use crate::errors::Error;
use crate::tx_hash::TxHash;

/// Raw signer output for one transaction.
///
/// This is the "simplified" shape a caller assembles from a signing session: the three
/// spatial-domain coefficient arrays and the two transaction hash halves. Coefficients are
/// read as wide integers so that out-of-range values are reported with their index
/// instead of failing JSON decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignerOutput {
    /// Signature component paired with the hash-to-point in `s1 + s2 * h = c`.
    pub s1: Vec<i64>,
    /// Public key polynomial.
    pub h: Vec<i64>,
    /// Hash-to-point polynomial of the nonce and message.
    pub h2p: Vec<i64>,
    /// Decimal low half of the transaction hash.
    pub in_tx_hash1: String,
    /// Decimal high half of the transaction hash.
    pub in_tx_hash2: String,
}

impl SignerOutput {
    /// Pairs signer coefficient arrays with a transaction hash.
    pub fn new(s1: &[i16], h: &[i16], h2p: &[i16], tx_hash: &TxHash) -> Self {
        let widen = |v: &[i16]| -> Vec<i64> { v.iter().map(|&c| c as i64).collect() };
        let (in_tx_hash1, in_tx_hash2) = tx_hash.decimal_halves();
        Self {
            s1: widen(s1),
            h: widen(h),
            h2p: widen(h2p),
            in_tx_hash1,
            in_tx_hash2,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Runs [`build`] on this payload.
    pub fn to_circuit_input(&self) -> Result<CircuitInput, Error> {
        build(
            &self.s1,
            &self.h,
            &self.h2p,
            &self.in_tx_hash1,
            &self.in_tx_hash2,
        )
    }

    /// Consuming form of [`to_circuit_input`](Self::to_circuit_input).
    pub fn into_circuit_input(self) -> Result<CircuitInput, Error> {
        self.to_circuit_input()
    }
}
