//! Splitting a 256-bit transaction hash into two field-sized halves.

use core::fmt;
use core::str::FromStr;

use commitment::FieldElement;
use p3_bn254::Bn254;
use p3_field::PrimeCharacteristicRing;

use crate::constants::{TX_HASH_HALF_SIZE, TX_HASH_SIZE};
use crate::errors::Error;

/// A 32-byte transaction hash, big-endian.
///
/// The proof system's field is smaller than 2^256, so the hash enters the circuit as two
/// 128-bit halves. `in_tx_hash1` carries the low half and `in_tx_hash2` the high half,
/// matching the order in which the verifier contract receives them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; TX_HASH_SIZE]);

impl TxHash {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; TX_HASH_SIZE] = bytes.try_into().map_err(|_| Error::InvalidTxHash {
            value: hex::encode(bytes),
        })?;
        Ok(Self(array))
    }

    /// Parses 64 hex digits, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidTxHash {
            value: text.to_owned(),
        };
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let bytes = hex::decode(digits).map_err(|_| invalid())?;
        Self::from_bytes(&bytes).map_err(|_| invalid())
    }

    pub fn as_bytes(&self) -> &[u8; TX_HASH_SIZE] {
        &self.0
    }

    /// The most significant `TX_HASH_HALF_BITS` bits.
    pub fn high(&self) -> u128 {
        half_value(&self.0[..TX_HASH_HALF_SIZE])
    }

    /// The least significant `TX_HASH_HALF_BITS` bits.
    pub fn low(&self) -> u128 {
        half_value(&self.0[TX_HASH_HALF_SIZE..])
    }

    /// Decimal strings for `(in_tx_hash1, in_tx_hash2)`.
    pub fn decimal_halves(&self) -> (String, String) {
        (self.low().to_string(), self.high().to_string())
    }

    /// Field elements for `(in_tx_hash1, in_tx_hash2)`.
    pub fn field_halves(&self) -> (FieldElement, FieldElement) {
        (Bn254::from_u128(self.low()), Bn254::from_u128(self.high()))
    }
}

fn half_value(bytes: &[u8]) -> u128 {
    bytes
        .iter()
        .fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
}

impl FromStr for TxHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({self})")
    }
}
