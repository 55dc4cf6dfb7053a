//! Uniform sampling of ring elements.

use rand::Rng;

use crate::constants::{N, Q};
use crate::modq::center;
use crate::poly::{NttPoly, Poly};

/// Types that can be sampled uniformly at random.
pub trait RandomPoly: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomPoly for Poly {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut residues = [0u32; N];
        for r in residues.iter_mut() {
            *r = rng.random_range(0..Q);
        }
        Poly::from_residues(&residues)
    }
}

impl RandomPoly for NttPoly {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut residues = [0u32; N];
        for r in residues.iter_mut() {
            *r = rng.random_range(0..Q);
        }
        NttPoly::from_residues(&residues)
    }
}

/// Samples a polynomial with coefficients uniform in `[-bound, bound]`.
///
/// Signature components are short, so this is the shape of realistic `s1` inputs.
pub fn random_short<R: Rng + ?Sized>(rng: &mut R, bound: i16) -> Poly {
    let bound = bound.clamp(0, center(Q / 2));
    let mut coeffs = [0i16; N];
    for c in coeffs.iter_mut() {
        *c = rng.random_range(-bound..=bound);
    }
    Poly::from_coeffs_centered(coeffs)
}
