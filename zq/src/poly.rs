//! Ring elements in the spatial and transform domains.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{MAX_RAW_COEFF, MIN_RAW_COEFF, N, Q};
use crate::errors::RingError;
use crate::inverse::pointwise_inverse;
use crate::modq::{add_mod, center, mul_mod, reduce, sub_mod};
use crate::ntt;

/// A ring element in the spatial (coefficient) domain.
///
/// Coefficients are stored in centered form, in `[-(q-1)/2, (q-1)/2]`. Index `i` is the
/// coefficient of `x^i`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: [i16; N],
}

/// A ring element in the transform domain.
///
/// Coefficients are canonical residues in `[0, q)`, in the bit-reversed evaluation order
/// produced by [`ntt::forward`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NttPoly {
    coeffs: [u16; N],
}

fn check_length(actual: usize) -> Result<(), RingError> {
    if actual != N {
        return Err(RingError::InvalidLength {
            expected: N,
            actual,
        });
    }
    Ok(())
}

impl Poly {
    /// The zero polynomial.
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Builds a polynomial from exactly `N` raw coefficients.
    ///
    /// Each coefficient must lie in `(-q, q)`; it is reduced and stored centered. Values
    /// outside that range, or a vector of any other length, are rejected rather than
    /// silently wrapped.
    pub fn from_coeffs(coeffs: &[i16]) -> Result<Self, RingError> {
        check_length(coeffs.len())?;
        let mut out = [0i16; N];
        for (index, (&c, slot)) in coeffs.iter().zip(out.iter_mut()).enumerate() {
            let value = c as i64;
            if !(MIN_RAW_COEFF..=MAX_RAW_COEFF).contains(&value) {
                return Err(RingError::OutOfRangeCoefficient { index, value });
            }
            *slot = center(reduce(value));
        }
        Ok(Self { coeffs: out })
    }

    pub(crate) fn from_coeffs_centered(coeffs: [i16; N]) -> Self {
        Self { coeffs }
    }

    pub(crate) fn from_residues(residues: &[u32; N]) -> Self {
        let mut coeffs = [0i16; N];
        for (c, &r) in coeffs.iter_mut().zip(residues.iter()) {
            *c = center(r);
        }
        Self { coeffs }
    }

    /// Centered coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[i16; N] {
        &self.coeffs
    }

    pub(crate) fn residues(&self) -> [u32; N] {
        let mut out = [0u32; N];
        for (r, &c) in out.iter_mut().zip(self.coeffs.iter()) {
            *r = reduce(c as i64);
        }
        out
    }

    /// Forward transform.
    pub fn ntt(&self) -> NttPoly {
        let mut a = self.residues();
        ntt::forward(&mut a);
        NttPoly::from_residues(&a)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let a = self.residues();
        let b = other.residues();
        let mut out = [0u32; N];
        for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
            *o = op(x, y);
        }
        Self::from_residues(&out)
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&&self.coeffs[..]).finish()
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        self.zip_with(rhs, add_mod)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self.zip_with(rhs, sub_mod)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let mut out = [0i16; N];
        for (o, &c) in out.iter_mut().zip(self.coeffs.iter()) {
            // Centered range is symmetric, so plain negation stays in range.
            *o = -c;
        }
        Poly { coeffs: out }
    }
}

/// Negacyclic multiplication, computed through the transform domain.
impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        self.ntt().pointwise_mul(&rhs.ntt()).intt()
    }
}

impl NttPoly {
    /// Builds a transform-domain element from exactly `N` canonical residues.
    ///
    /// Every value must already be in `[0, q)`.
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self, RingError> {
        check_length(coeffs.len())?;
        let mut out = [0u16; N];
        for (index, (&c, slot)) in coeffs.iter().zip(out.iter_mut()).enumerate() {
            if c as u32 >= Q {
                return Err(RingError::OutOfRangeCoefficient {
                    index,
                    value: c as i64,
                });
            }
            *slot = c;
        }
        Ok(Self { coeffs: out })
    }

    pub(crate) fn from_residues(residues: &[u32; N]) -> Self {
        let mut coeffs = [0u16; N];
        for (c, &r) in coeffs.iter_mut().zip(residues.iter()) {
            *c = (r % Q) as u16;
        }
        Self { coeffs }
    }

    /// Canonical coefficients, in transform slot order.
    pub fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    pub(crate) fn residues(&self) -> [u32; N] {
        let mut out = [0u32; N];
        for (r, &c) in out.iter_mut().zip(self.coeffs.iter()) {
            *r = c as u32;
        }
        out
    }

    /// Inverse transform.
    pub fn intt(&self) -> Poly {
        let mut a = self.residues();
        ntt::inverse(&mut a);
        Poly::from_residues(&a)
    }

    /// Slot-by-slot product, which is ring multiplication in this domain.
    pub fn pointwise_mul(&self, other: &Self) -> Self {
        let mut out = [0u32; N];
        for ((o, &x), &y) in out
            .iter_mut()
            .zip(self.coeffs.iter())
            .zip(other.coeffs.iter())
        {
            *o = mul_mod(x as u32, y as u32);
        }
        Self::from_residues(&out)
    }

    /// Pointwise modular inverse; see [`pointwise_inverse`].
    pub fn inverse(&self) -> Result<Self, RingError> {
        pointwise_inverse(self)
    }

    /// Index of the first zero slot, if any.
    pub fn first_zero(&self) -> Option<usize> {
        self.coeffs.iter().position(|&c| c == 0)
    }
}

impl fmt::Debug for NttPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NttPoly").field(&&self.coeffs[..]).finish()
    }
}

impl Serialize for Poly {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coeffs.iter())
    }
}

impl<'de> Deserialize<'de> for Poly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<i16>::deserialize(deserializer)?;
        Poly::from_coeffs(&raw).map_err(D::Error::custom)
    }
}

impl Serialize for NttPoly {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coeffs.iter())
    }
}

impl<'de> Deserialize<'de> for NttPoly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<u16>::deserialize(deserializer)?;
        NttPoly::from_coeffs(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monomial(degree: usize, coeff: i16) -> Poly {
        let mut c = [0i16; N];
        c[degree] = coeff;
        Poly::from_coeffs(&c).unwrap()
    }

    #[test]
    fn test_from_coeffs_rejects_wrong_length() {
        assert_eq!(
            Poly::from_coeffs(&[0i16; N - 1]),
            Err(RingError::InvalidLength {
                expected: N,
                actual: N - 1
            })
        );
        assert_eq!(
            NttPoly::from_coeffs(&[0u16; N + 1]),
            Err(RingError::InvalidLength {
                expected: N,
                actual: N + 1
            })
        );
        assert!(Poly::from_coeffs(&[]).is_err());
    }

    #[test]
    fn test_from_coeffs_range() {
        let mut c = [0i16; N];
        c[3] = 12288;
        c[4] = -12288;
        let p = Poly::from_coeffs(&c).unwrap();
        assert_eq!(p.coeffs()[3], -1);
        assert_eq!(p.coeffs()[4], 1);

        c[7] = 12289;
        assert_eq!(
            Poly::from_coeffs(&c),
            Err(RingError::OutOfRangeCoefficient {
                index: 7,
                value: 12289
            })
        );
        c[7] = -12289;
        assert_eq!(
            Poly::from_coeffs(&c),
            Err(RingError::OutOfRangeCoefficient {
                index: 7,
                value: -12289
            })
        );
    }

    #[test]
    fn test_ntt_poly_requires_canonical() {
        let mut c = [0u16; N];
        c[10] = Q as u16;
        assert_eq!(
            NttPoly::from_coeffs(&c),
            Err(RingError::OutOfRangeCoefficient {
                index: 10,
                value: Q as i64
            })
        );
    }

    #[test]
    fn test_negacyclic_wrap() {
        // x^(N-1) * x^2 = x^(N+1) = -x
        let product = &monomial(N - 1, 1) * &monomial(2, 1);
        assert_eq!(product, monomial(1, -1));
    }

    #[test]
    fn test_mul_by_one() {
        let mut c = [0i16; N];
        for (i, x) in c.iter_mut().enumerate() {
            *x = (i as i16 * 37) % 6000 - 3000;
        }
        let a = Poly::from_coeffs(&c).unwrap();
        assert_eq!(&a * &monomial(0, 1), a);
    }

    #[test]
    fn test_add_sub_neg() {
        let a = monomial(5, 6000);
        let b = monomial(5, 1000);
        // 7000 wraps to 7000 - q
        assert_eq!((&a + &b).coeffs()[5], 7000 - Q as i16);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a + &(-&a), Poly::zero());
    }

    #[test]
    fn test_serde_round_trip() {
        let a = monomial(3, -42);
        let json = serde_json::to_string(&a).unwrap();
        let back: Poly = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);

        let short = serde_json::from_str::<Poly>("[1, 2, 3]");
        assert!(short.is_err());
    }

    #[test]
    fn test_first_zero() {
        let mut c = [1u16; N];
        assert_eq!(NttPoly::from_coeffs(&c).unwrap().first_zero(), None);
        c[17] = 0;
        c[300] = 0;
        assert_eq!(NttPoly::from_coeffs(&c).unwrap().first_zero(), Some(17));
    }
}
