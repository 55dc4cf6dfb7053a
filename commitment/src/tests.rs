use super::*;
use p3_bn254::Bn254;
use p3_field::PrimeCharacteristicRing;
use proptest::prelude::*;
use zq::{NttPoly, N};

fn fe(decimal: &str) -> FieldElement {
    parse_field_element(decimal).expect("valid element")
}

fn ntt_poly(f: impl Fn(usize) -> u16) -> NttPoly {
    let coeffs: Vec<u16> = (0..N).map(f).collect();
    NttPoly::from_coeffs(&coeffs).expect("canonical")
}

#[test]
fn test_permutation_known_answer() {
    let hasher = CommitmentHasher::new();
    let out = hasher.permute([Bn254::ZERO, Bn254::ONE, Bn254::TWO]);
    assert_eq!(
        out,
        [
            fe("5297208644449048816064511434384511824916970985131888684874823260532015509555"),
            fe("21816030159894113985964609355246484851575571273661473159848781012394295965040"),
            fe("13940986381491601233448981668101586453321811870310341844570924906201623195336"),
        ]
    );
}

#[test]
fn test_commit_two_elements_is_one_permutation() {
    let hasher = CommitmentHasher::new();
    let a = fe("1");
    let b = fe("2");
    let digest = hasher.commit(&[a, b], 2).unwrap();
    assert_eq!(digest, hasher.permute([a, b, Bn254::ZERO])[0]);
    assert_eq!(
        format_field_element(&digest),
        "19440202363237281411582519622441422429699333916864112080167601237210978582482"
    );
}

#[test]
fn test_commit_overwrites_rate_then_permutes_partial_block() {
    let hasher = CommitmentHasher::new();
    let (a, b, c) = (fe("1"), fe("2"), fe("3"));
    let s = hasher.permute([a, b, Bn254::ZERO]);
    let expected = hasher.permute([c, s[1], s[2]])[0];
    let digest = hasher.commit(&[a, b, c], 3).unwrap();
    assert_eq!(digest, expected);
    assert_eq!(
        format_field_element(&digest),
        "5850313652360462911796736875180415597873569170055036699991038661033371815080"
    );
}

#[test]
fn test_commit_rejects_arity_mismatch() {
    let hasher = CommitmentHasher::new();
    assert_eq!(
        hasher.commit(&[Bn254::ONE; 3], 4),
        Err(CommitmentError::HashComputationFailure {
            expected: 4,
            absorbed: 3
        })
    );
}

#[test]
fn test_public_key_commitment_known_answers() {
    let ones = ntt_poly(|_| 1);
    assert_eq!(
        format_field_element(&commit_public_key(&ones).unwrap()),
        "353564991236656842392248964182424416115257639869273714247289490492423072130"
    );

    let index = ntt_poly(|i| i as u16);
    assert_eq!(
        format_field_element(&commit_public_key(&index).unwrap()),
        "16344333907893186463221118399750774397187875053907917069709968629405625717961"
    );
}

#[test]
fn test_challenge_commitment_known_answer() {
    let h_hat = ntt_poly(|_| 1);
    let h2p_d = ntt_poly(|i| i as u16);
    let pk_hash = commit_public_key(&h_hat).unwrap();
    let digest = commit_challenge(pk_hash, &h2p_d, fe("1"), fe("2")).unwrap();
    assert_eq!(
        format_field_element(&digest),
        "13276556366892674497789636983245634484431023601028335511201656079637436347462"
    );
}

#[test]
fn test_challenge_binds_every_component() {
    let h_hat = ntt_poly(|_| 1);
    let h2p_d = ntt_poly(|i| i as u16);
    let pk_hash = commit_public_key(&h_hat).unwrap();
    let base = commit_challenge(pk_hash, &h2p_d, fe("1"), fe("2")).unwrap();

    let other_pk = commit_public_key(&ntt_poly(|_| 2)).unwrap();
    assert_ne!(base, commit_challenge(other_pk, &h2p_d, fe("1"), fe("2")).unwrap());

    let other_h2p = ntt_poly(|i| if i == N - 1 { 0 } else { i as u16 });
    assert_ne!(base, commit_challenge(pk_hash, &other_h2p, fe("1"), fe("2")).unwrap());

    assert_ne!(base, commit_challenge(pk_hash, &h2p_d, fe("2"), fe("1")).unwrap());
}

#[test]
fn test_hasher_is_shareable_across_threads() {
    let h_hat = ntt_poly(|i| (i * 7 % 12289) as u16);
    let expected = commit_public_key(&h_hat).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let h_hat = h_hat.clone();
            std::thread::spawn(move || commit_public_key(&h_hat).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_decimal_round_trip(high in any::<u64>(), low in any::<u128>()) {
        let value = (num_bigint::BigUint::from(high) << 128u32) + num_bigint::BigUint::from(low);
        let text = value.to_string();
        let parsed = parse_field_element(&text).unwrap();
        prop_assert_eq!(format_field_element(&parsed), text);
    }

    #[test]
    fn prop_commit_is_deterministic(values in prop::collection::vec(any::<u64>(), 0..9)) {
        let inputs: Vec<FieldElement> = values.iter().map(|&v| Bn254::from_u64(v)).collect();
        let hasher = CommitmentHasher::new();
        prop_assert_eq!(
            hasher.commit(&inputs, inputs.len()).unwrap(),
            hasher.commit(&inputs, inputs.len()).unwrap()
        );
    }
}
