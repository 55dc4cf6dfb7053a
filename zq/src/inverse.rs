//! Pointwise modular inversion in the transform domain.
//!
//! A ring element is a unit exactly when none of its transform slots is zero, and its
//! inverse is then the slot-by-slot inverse.

use tracing::warn;

use crate::constants::N;
use crate::errors::RingError;
use crate::modq::inv_mod;
use crate::poly::NttPoly;

/// Inverts every slot of `h` modulo `q`.
///
/// Fails with [`RingError::NonInvertibleElement`] naming the first zero slot. No partial
/// result is returned in that case.
pub fn pointwise_inverse(h: &NttPoly) -> Result<NttPoly, RingError> {
    let mut out = [0u32; N];
    for (index, (&value, slot)) in h.coeffs().iter().zip(out.iter_mut()).enumerate() {
        match inv_mod(value as u32) {
            Some(inv) => *slot = inv,
            None => {
                warn!(index, "transform-domain element is not invertible");
                return Err(RingError::NonInvertibleElement { index });
            }
        }
    }
    Ok(NttPoly::from_residues(&out))
}
