//! Scalar arithmetic modulo `q`.
//!
//! Residues are carried as `u32` in canonical form `[0, q)`. Since `q < 2^14`, the
//! product of two canonical residues fits comfortably in a `u32`, so no widening is
//! needed anywhere in this module.

use crate::constants::Q;

/// Maps any integer to its canonical representative in `[0, q)`.
#[inline]
pub fn reduce(value: i64) -> u32 {
    value.rem_euclid(Q as i64) as u32
}

/// Maps a residue to its centered representative in `[-(q-1)/2, (q-1)/2]`.
///
/// A canonical value `c` is returned as `c - q` when `c > q/2`, otherwise as `c`.
#[inline]
pub fn center(value: u32) -> i16 {
    let v = value % Q;
    if v > Q / 2 {
        (v as i32 - Q as i32) as i16
    } else {
        v as i16
    }
}

/// Modular addition of two canonical residues.
#[inline]
pub const fn add_mod(a: u32, b: u32) -> u32 {
    let sum = a + b;
    if sum >= Q {
        sum - Q
    } else {
        sum
    }
}

/// Modular subtraction of two canonical residues.
#[inline]
pub const fn sub_mod(a: u32, b: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        a + Q - b
    }
}

/// Modular multiplication of two canonical residues.
#[inline]
pub const fn mul_mod(a: u32, b: u32) -> u32 {
    (a * b) % Q
}

/// Square-and-multiply exponentiation modulo `q`.
pub const fn pow_mod(base: u32, exp: u32) -> u32 {
    let mut result = 1u32;
    let mut base = base % Q;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse modulo `q` via Fermat's little theorem.
///
/// Returns `None` for inputs congruent to zero.
#[inline]
pub fn inv_mod(a: u32) -> Option<u32> {
    let a = a % Q;
    if a == 0 {
        None
    } else {
        Some(pow_mod(a, Q - 2))
    }
}
