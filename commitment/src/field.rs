//! BN254 scalar field elements and their decimal encoding.

use num_bigint::BigUint;
use p3_bn254::Bn254;
use p3_field::{Field, PrimeCharacteristicRing};
use tracing::warn;

use crate::errors::CommitmentError;

/// An element of the BN254 scalar field, the field the proving engine works over.
pub type FieldElement = Bn254;

/// The BN254 scalar field modulus.
pub fn field_modulus() -> BigUint {
    Bn254::order()
}

/// Parses a non-negative decimal string into a field element.
///
/// The value must be strictly less than the modulus; it is never reduced.
pub fn parse_field_element(value: &str) -> Result<FieldElement, CommitmentError> {
    let invalid = || {
        warn!(len = value.len(), "rejected field element string");
        CommitmentError::InvalidFieldElement {
            value: value.to_owned(),
        }
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let parsed = BigUint::parse_bytes(value.as_bytes(), 10).ok_or_else(invalid)?;
    if parsed >= Bn254::order() {
        return Err(invalid());
    }
    Bn254::from_biguint(parsed).ok_or_else(invalid)
}

/// Canonical decimal encoding of a field element.
pub fn format_field_element(element: &FieldElement) -> String {
    element.to_string()
}

/// Embeds a residue modulo `q` as a field element.
#[inline]
pub fn from_residue(residue: u16) -> FieldElement {
    Bn254::from_u16(residue)
}

/// Rebuilds `high * 2^128 + low`.
pub(crate) fn from_u128_halves([high, low]: [u128; 2]) -> FieldElement {
    let two_pow_128 = Bn254::from_u128(1 << 127).double();
    Bn254::from_u128(high) * two_pow_128 + Bn254::from_u128(low)
}

/// Serde adapter that encodes a [`FieldElement`] as its decimal string.
///
/// Use with `#[serde(with = "commitment::serde_decimal")]`.
pub mod serde_decimal {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_field_element, parse_field_element, FieldElement};

    pub fn serialize<S: Serializer>(
        element: &FieldElement,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_field_element(element))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<FieldElement, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_field_element(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BN254_MODULUS_DECIMAL;

    #[test]
    fn test_modulus_matches_constant() {
        assert_eq!(field_modulus().to_string(), BN254_MODULUS_DECIMAL);
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_field_element("0").unwrap(), Bn254::ZERO);
        let max = (field_modulus() - 1u32).to_string();
        assert_eq!(format_field_element(&parse_field_element(&max).unwrap()), max);
        assert!(parse_field_element(BN254_MODULUS_DECIMAL).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "-1", "+1", " 1", "1 ", "0x10", "1e3", "12a"] {
            assert_eq!(
                parse_field_element(bad),
                Err(CommitmentError::InvalidFieldElement {
                    value: bad.to_owned()
                }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_u128_max_tx_half() {
        let max = u128::MAX.to_string();
        let parsed = parse_field_element(&max).unwrap();
        assert_eq!(parsed, Bn254::from_u128(u128::MAX));
    }

    #[test]
    fn test_from_u128_halves() {
        assert_eq!(from_u128_halves([0, 7]), Bn254::from_u8(7));
        let expected = (BigUint::from(1u8) << 128u32) + 5u32;
        assert_eq!(
            format_field_element(&from_u128_halves([1, 5])),
            expected.to_string()
        );
    }
}
