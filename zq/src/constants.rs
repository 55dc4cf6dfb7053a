//! Fixed domain parameters of the Falcon-512 ring.

use crate::modq::pow_mod;

/// Ring degree. The ring is `Z_q[x]/(x^N + 1)`.
pub const N: usize = 512;

/// `log2(N)`, the number of butterfly layers in the transform.
pub const LOG_N: u32 = 9;

/// The Falcon modulus `q = 12 * 1024 + 1`.
pub const Q: u32 = 12 * 1024 + 1;

/// Primitive `2N`-th root of unity modulo `q`.
///
/// This is `7^2`, where 7 generates the 2048-th roots of unity used by the Falcon
/// reference tables, so `PSI^N = -1 mod q`.
pub const PSI: u32 = 49;

/// `N^{-1} mod q`, applied at the end of the inverse transform.
pub const N_INV: u32 = pow_mod(N as u32, Q - 2);

/// Smallest accepted raw coefficient. Inputs must lie strictly inside `(-q, q)`.
pub(crate) const MIN_RAW_COEFF: i64 = -(Q as i64) + 1;

/// Largest accepted raw coefficient.
pub(crate) const MAX_RAW_COEFF: i64 = Q as i64 - 1;
