//! Derives a circuit input from a signer output file, or from a synthetic key and
//! signature when no file is given.
//!
//! ```text
//! cargo run -p circuit --example derive_inputs -- [signer_output.json]
//! ```

use circuit::{build, CircuitInput, NttPoly, SignerOutput, TxHash, N, Q};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use zq::{random_short, Poly, RandomPoly};

fn synthetic_request() -> SignerOutput {
    let mut rng = StdRng::seed_from_u64(42);

    let slots: Vec<u16> = (0..N).map(|_| rng.random_range(1..Q as u16)).collect();
    let h = NttPoly::from_coeffs(&slots).expect("canonical").intt();
    let s2 = random_short(&mut rng, 300);
    let c = Poly::random(&mut rng);
    let s1 = &c - &(&s2 * &h);

    let mut tx = [0u8; 32];
    rng.fill(&mut tx[..]);
    let tx_hash = TxHash::from_bytes(&tx).expect("32 bytes");
    println!("tx hash: {tx_hash}");

    SignerOutput::new(s1.coeffs(), h.coeffs(), c.coeffs(), &tx_hash)
}

fn main() {
    let request = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("read signer output");
            SignerOutput::from_json(&json).expect("parse signer output")
        }
        None => synthetic_request(),
    };

    let start = Instant::now();
    let input: CircuitInput = build(
        &request.s1,
        &request.h,
        &request.h2p,
        &request.in_tx_hash1,
        &request.in_tx_hash2,
    )
    .expect("build circuit input");
    let elapsed = start.elapsed();

    input.check_consistency().expect("consistent");
    println!("{}", input.to_json_pretty().expect("serialize"));
    eprintln!("derived in {elapsed:?}");
}
