//! Arithmetic in the Falcon-512 ring `Z_q[x]/(x^N + 1)`, with `N = 512` and `q = 12289`.
//!
//! This crate provides the ring-level building blocks a Falcon verification circuit
//! re-derives internally:
//! - Scalar arithmetic modulo `q` with canonical and centered representatives
//! - [`Poly`]: spatial-domain ring elements (centered coefficients)
//! - [`NttPoly`]: transform-domain ring elements (canonical coefficients in `[0, q)`)
//! - The negacyclic number-theoretic transform in [`ntt`], using the same butterfly
//!   schedule and twiddle ordering as the Falcon reference implementation
//! - Pointwise modular inversion in the transform domain in [`inverse`]
//!
//! # Example
//!
//! ```
//! use zq::{Poly, N};
//!
//! let mut a = [0i16; N];
//! a[1] = 1; // x
//! let mut b = [0i16; N];
//! b[N - 1] = 1; // x^(N-1)
//!
//! let a = Poly::from_coeffs(&a).expect("valid polynomial");
//! let b = Poly::from_coeffs(&b).expect("valid polynomial");
//!
//! // x * x^(N-1) = x^N = -1 in Z_q[x]/(x^N + 1)
//! let c = &a * &b;
//! assert_eq!(c.coeffs()[0], -1);
//! ```
//!
//! All tables are immutable process-wide state computed once on first use, so every
//! operation here is a pure function of its arguments and safe to call concurrently.

mod constants;
mod errors;
pub mod inverse;
mod modq;
pub mod ntt;
mod poly;
mod random;


pub use constants::{LOG_N, N, N_INV, PSI, Q};
pub use errors::RingError;
pub use modq::{add_mod, center, inv_mod, mul_mod, pow_mod, reduce, sub_mod};
pub use poly::{NttPoly, Poly};
pub use random::{random_short, RandomPoly};
