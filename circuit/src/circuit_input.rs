//! The record handed to the proving engine.

use commitment::{
    commit_challenge, commit_public_key, parse_field_element, serde_decimal, FieldElement,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use zq::{mul_mod, NttPoly, Poly};

use crate::coefficients::{spatial, transform};
use crate::errors::{Component, Error};

/// Everything the Falcon-512 verification circuit consumes for one proof.
///
/// Serialized members appear in the order `s1`, `h_hat`, `h_product_inv`, `h2p_d`,
/// `pk_hash_in`, `in_tx_hash1`, `in_tx_hash2`, `in_c_hash`. Coefficient arrays are JSON
/// integer arrays; field elements are decimal strings.
///
/// A `CircuitInput` is immutable. It is produced by [`build`](crate::build) or loaded
/// with [`CircuitInput::from_json`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CircuitInput {
    s1: Poly,
    h_hat: NttPoly,
    h_product_inv: NttPoly,
    h2p_d: NttPoly,
    #[serde(with = "serde_decimal")]
    pk_hash_in: FieldElement,
    #[serde(with = "serde_decimal")]
    in_tx_hash1: FieldElement,
    #[serde(with = "serde_decimal")]
    in_tx_hash2: FieldElement,
    #[serde(with = "serde_decimal")]
    in_c_hash: FieldElement,
}

/// Wire shape accepted by [`CircuitInput::from_json`], validated member by member.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCircuitInput {
    s1: Vec<i64>,
    h_hat: Vec<i64>,
    h_product_inv: Vec<i64>,
    h2p_d: Vec<i64>,
    pk_hash_in: String,
    in_tx_hash1: String,
    in_tx_hash2: String,
    in_c_hash: String,
}

fn field(which: Component, value: &str) -> Result<FieldElement, Error> {
    parse_field_element(value).map_err(|err| Error::from_commitment(which, err))
}

impl CircuitInput {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        s1: Poly,
        h_hat: NttPoly,
        h_product_inv: NttPoly,
        h2p_d: NttPoly,
        pk_hash_in: FieldElement,
        in_tx_hash1: FieldElement,
        in_tx_hash2: FieldElement,
        in_c_hash: FieldElement,
    ) -> Self {
        Self {
            s1,
            h_hat,
            h_product_inv,
            h2p_d,
            pk_hash_in,
            in_tx_hash1,
            in_tx_hash2,
            in_c_hash,
        }
    }

    /// Spatial-domain signature component.
    pub fn s1(&self) -> &Poly {
        &self.s1
    }

    /// Transform-domain public key.
    pub fn h_hat(&self) -> &NttPoly {
        &self.h_hat
    }

    /// Pointwise inverse of [`h_hat`](Self::h_hat).
    pub fn h_product_inv(&self) -> &NttPoly {
        &self.h_product_inv
    }

    /// Transform-domain hash-to-point polynomial.
    pub fn h2p_d(&self) -> &NttPoly {
        &self.h2p_d
    }

    /// Commitment to the public key.
    pub fn pk_hash_in(&self) -> FieldElement {
        self.pk_hash_in
    }

    /// Low half of the transaction hash.
    pub fn in_tx_hash1(&self) -> FieldElement {
        self.in_tx_hash1
    }

    /// High half of the transaction hash.
    pub fn in_tx_hash2(&self) -> FieldElement {
        self.in_tx_hash2
    }

    /// Commitment binding the public key, hash-to-point and transaction hash.
    pub fn in_c_hash(&self) -> FieldElement {
        self.in_c_hash
    }

    /// Compact JSON in the proving engine's input format.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON in the proving engine's input format.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a record previously produced by [`to_json`](Self::to_json).
    ///
    /// Every member is checked for shape and range; unknown members are rejected. The
    /// derived relations between members are not checked here; see
    /// [`check_consistency`](Self::check_consistency).
    ///
    /// `s1` may hold any value in `(-q, q)` and is stored centered, so loading a record
    /// whose `s1` is not already centered and writing it back with `to_json` does not
    /// reproduce the input text. For example `12000` comes back as `-289`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: RawCircuitInput = serde_json::from_str(json)?;
        Ok(Self {
            s1: spatial(Component::S1, &raw.s1)?,
            h_hat: transform(Component::HHat, &raw.h_hat)?,
            h_product_inv: transform(Component::HProductInv, &raw.h_product_inv)?,
            h2p_d: transform(Component::H2pD, &raw.h2p_d)?,
            pk_hash_in: field(Component::PkHashIn, &raw.pk_hash_in)?,
            in_tx_hash1: field(Component::InTxHash1, &raw.in_tx_hash1)?,
            in_tx_hash2: field(Component::InTxHash2, &raw.in_tx_hash2)?,
            in_c_hash: field(Component::InCHash, &raw.in_c_hash)?,
        })
    }

    /// Re-derives the relations a built record satisfies.
    ///
    /// Checks that `h_hat[i] * h_product_inv[i] = 1 mod q` for every slot and that both
    /// commitments match the values recomputed from the record's own members. The
    /// signature component is not checked, since the circuit alone relates it to the
    /// rest.
    pub fn check_consistency(&self) -> Result<(), Error> {
        let inverse_holds = self
            .h_hat
            .coeffs()
            .iter()
            .zip(self.h_product_inv.coeffs().iter())
            .all(|(&a, &b)| mul_mod(a as u32, b as u32) == 1);
        if !inverse_holds {
            return Err(inconsistent(Component::HProductInv));
        }

        let pk_hash = commit_public_key(&self.h_hat)
            .map_err(|err| Error::from_commitment(Component::PkHashIn, err))?;
        if pk_hash != self.pk_hash_in {
            return Err(inconsistent(Component::PkHashIn));
        }

        let c_hash = commit_challenge(pk_hash, &self.h2p_d, self.in_tx_hash1, self.in_tx_hash2)
            .map_err(|err| Error::from_commitment(Component::InCHash, err))?;
        if c_hash != self.in_c_hash {
            return Err(inconsistent(Component::InCHash));
        }
        Ok(())
    }
}

fn inconsistent(which: Component) -> Error {
    warn!(%which, "circuit input failed consistency check");
    Error::Inconsistent { which }
}
