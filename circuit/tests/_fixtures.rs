#![allow(dead_code)]

use circuit::SignerOutput;
use once_cell::sync::Lazy;

pub const SIGNER_OUTPUT_JSON: &str = include_str!("fixtures/signer_output_lcg.json");

pub const CIRCUIT_INPUT_JSON: &str = include_str!("fixtures/circuit_input_lcg.json");

pub const GOLDEN_PK_HASH_IN: &str =
    "5349572454070267351943451341397801830802174768824474736838979416791250086991";

pub const GOLDEN_IN_C_HASH: &str =
    "8241208179907809627013620843490081874949404859325825710579141548330690845262";

pub static SIGNER_OUTPUT: Lazy<SignerOutput> =
    Lazy::new(|| SignerOutput::from_json(SIGNER_OUTPUT_JSON).expect("signer output fixture"));

pub fn signer_output() -> &'static SignerOutput {
    &SIGNER_OUTPUT
}
