//! Negacyclic number-theoretic transform over `Z_q` of length `N`.
//!
//! The forward transform runs Cooley-Tukey butterflies over twiddles stored in
//! bit-reversed order, the same schedule as the Falcon reference `mq_NTT`. The output is in
//! bit-reversed evaluation order: slot `i` holds the input evaluated at
//! `PSI^(2 * rev(i) + 1)`, where `rev` reverses the low `LOG_N` bits of `i`. Because those
//! points are exactly the roots of `x^N + 1`, multiplication in the ring becomes
//! slot-by-slot multiplication in the transform domain.
//!
//! The inverse transform runs Gentleman-Sande butterflies over the inverse twiddles and
//! scales by `N^{-1}`, so `inverse(forward(a)) == a` for every canonical input.

use once_cell::sync::Lazy;
use tracing::trace;

use crate::constants::{LOG_N, N, N_INV, PSI, Q};
use crate::modq::{add_mod, mul_mod, pow_mod, sub_mod};

/// Twiddle tables for the transform, indexed in bit-reversed order.
pub struct NttTables {
    /// `psi_rev[k] = PSI^rev(k)`.
    pub psi_rev: [u32; N],
    /// `psi_inv_rev[k] = PSI^{-rev(k)}`.
    pub psi_inv_rev: [u32; N],
}

static NTT_TABLES: Lazy<NttTables> = Lazy::new(NttTables::compute);

/// Returns the process-wide twiddle tables, computing them on first use.
pub fn tables() -> &'static NttTables {
    &NTT_TABLES
}

impl NttTables {
    fn compute() -> Self {
        let psi_inv = pow_mod(PSI, Q - 2);
        let mut psi_rev = [0u32; N];
        let mut psi_inv_rev = [0u32; N];
        for k in 0..N {
            let e = bit_reverse(k, LOG_N) as u32;
            psi_rev[k] = pow_mod(PSI, e);
            psi_inv_rev[k] = pow_mod(psi_inv, e);
        }
        trace!(n = N, q = Q, psi = PSI, "computed NTT twiddle tables");
        Self {
            psi_rev,
            psi_inv_rev,
        }
    }
}

/// Reverses the low `bits` bits of `index`. `bits` must be nonzero.
#[inline]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    index.reverse_bits() >> (usize::BITS - bits)
}

/// In-place forward transform. Inputs must be canonical residues in `[0, q)`.
pub fn forward(a: &mut [u32; N]) {
    let psi_rev = &tables().psi_rev;
    let mut t = N;
    let mut m = 1;
    while m < N {
        let ht = t >> 1;
        for i in 0..m {
            let j1 = i * t;
            let s = psi_rev[m + i];
            for j in j1..j1 + ht {
                let u = a[j];
                let v = mul_mod(a[j + ht], s);
                a[j] = add_mod(u, v);
                a[j + ht] = sub_mod(u, v);
            }
        }
        t = ht;
        m <<= 1;
    }
}

/// In-place inverse transform. Inputs must be canonical residues in `[0, q)`.
pub fn inverse(a: &mut [u32; N]) {
    let psi_inv_rev = &tables().psi_inv_rev;
    let mut t = 1;
    let mut m = N;
    while m > 1 {
        let hm = m >> 1;
        let dt = t << 1;
        for i in 0..hm {
            let j1 = i * dt;
            let s = psi_inv_rev[hm + i];
            for j in j1..j1 + t {
                let u = a[j];
                let v = a[j + t];
                a[j] = add_mod(u, v);
                a[j + t] = mul_mod(sub_mod(u, v), s);
            }
        }
        t = dt;
        m = hm;
    }
    for x in a.iter_mut() {
        *x = mul_mod(*x, N_INV);
    }
}
