//! String and Array Codec Conformance Tests
//!
//! Canonical notation and flat arrays must carry every value of order <= 3
//! without loss.

use hologram_hypercomplex::prelude::*;
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (-1000i64..1000).prop_map(Scalar::from),
        (-1000i64..1000, 1i64..50).prop_map(|(n, d)| Scalar::ratio(n, d).unwrap()),
        Just(Scalar::zero()),
        Just(Scalar::one()),
        Just(Scalar::from(-1)),
    ]
}

fn flat_strategy(max_order: u32) -> impl Strategy<Value = Vec<Scalar>> {
    (1u32..=max_order).prop_flat_map(|order| prop::collection::vec(scalar_strategy(), 1usize << order))
}

proptest! {
    #[test]
    fn test_string_round_trip(flat in flat_strategy(3)) {
        let x = Hypercomplex::from_flat(&flat).unwrap();
        let text = x.to_string();
        let parsed = Hypercomplex::from_string(&text).unwrap();
        // Parsing picks the smallest order that holds every nonzero term
        prop_assert_eq!(parsed.cast(x.order()).unwrap(), x);
    }

    #[test]
    fn test_string_round_trip_with_zeros(flat in flat_strategy(3)) {
        let options = FormatOptions { show_zero_coefficients: true };
        let x = Hypercomplex::from_flat(&flat).unwrap();
        let parsed = parse(&format(&x, &options)).unwrap();
        prop_assert_eq!(parsed.cast(x.order()).unwrap(), x);
    }

    #[test]
    fn test_generated_names_round_trip(flat in prop::collection::vec(scalar_strategy(), 16)) {
        let x = Hypercomplex::from_flat(&flat).unwrap();
        let parsed = parse(&x.to_string()).unwrap();
        prop_assert_eq!(parsed.cast(4).unwrap(), x);
    }

    #[test]
    fn test_array_round_trip(flat in flat_strategy(5)) {
        let x = Hypercomplex::from_flat(&flat).unwrap();
        let back: Vec<Scalar> = flatten(&x.to_array()).cloned().collect();
        prop_assert_eq!(back, flat);
    }

    #[test]
    fn test_term_order_is_irrelevant(a in -99i64..99, b in -99i64..99, c in -99i64..99) {
        let forward = parse(&format!("{a}{b:+}j{c:+}K")).unwrap();
        let backward = parse(&format!("{c}K{b:+}j{a:+}")).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_garbage_is_rejected(text in "[a-hm-z!@#$%^&]{1,8}") {
        prop_assert_eq!(parse(&text).unwrap_err().kind(), ErrorKind::Parse);
    }
}

#[test]
fn test_full_order_values_round_trip_exactly() {
    for text in [
        "10-7i",
        "1+2i-3j-4k",
        "10-7i-10j-2k-3L-3I-6J-7K",
        "-1/2+i-j+k-L+I-J+K",
    ] {
        let x = parse(text).unwrap();
        assert_eq!(x.to_string(), text);
        assert_eq!(parse(&x.to_string()).unwrap(), x);
    }
}

#[test]
fn test_exponent_signs_survive_splitting() {
    let x = parse("1.5e+2-2.5E-1i").unwrap();
    assert_eq!(x.coefficients(), vec![Scalar::from(150), Scalar::ratio(-1, 4).unwrap()]);
}
