//! Ring Axiom Conformance Tests
//!
//! Property-based tests tracking which multiplicative laws survive each
//! doubling: commutativity to order 1, associativity to order 2,
//! alternativity and the multiplicative norm to order 3, flexibility always.

use hologram_hypercomplex::prelude::*;
use proptest::prelude::*;

fn hypercomplex_strategy(order: u32) -> impl Strategy<Value = Hypercomplex> {
    prop::collection::vec(-20i64..20, 1usize << order).prop_map(|values| {
        let leaves: Vec<Scalar> = values.into_iter().map(Scalar::from).collect();
        Hypercomplex::from_flat(&leaves).unwrap()
    })
}

fn triple(order: u32) -> impl Strategy<Value = (Hypercomplex, Hypercomplex, Hypercomplex)> {
    (
        hypercomplex_strategy(order),
        hypercomplex_strategy(order),
        hypercomplex_strategy(order),
    )
}

fn triple_up_to(max_order: u32) -> impl Strategy<Value = (Hypercomplex, Hypercomplex, Hypercomplex)> {
    (1u32..=max_order).prop_flat_map(triple)
}

fn sedenion(units: &[usize]) -> Hypercomplex {
    let mut leaves = vec![Scalar::zero(); 16];
    for &u in units {
        leaves[u] = Scalar::one();
    }
    Hypercomplex::from_flat(&leaves).unwrap()
}

proptest! {
    #[test]
    fn test_complex_commutativity((a, b, _) in triple(1)) {
        prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    }

    #[test]
    fn test_associativity_through_quaternions((a, b, c) in triple_up_to(2)) {
        prop_assert!(a.verify_ring_axioms(&b, &c).unwrap());
    }

    #[test]
    fn test_octonions_are_alternative((a, b, c) in triple(3)) {
        prop_assert!(a.verify_alternative_axioms(&b, &c).unwrap());
    }

    #[test]
    fn test_distributivity((a, b, c) in triple_up_to(4)) {
        prop_assert!(a.verify_left_distributivity(&b, &c).unwrap());
        prop_assert!(a.verify_right_distributivity(&b, &c).unwrap());
    }

    #[test]
    fn test_flexibility((a, b, _) in triple_up_to(4)) {
        prop_assert!(a.verify_flexible(&b).unwrap());
    }

    #[test]
    fn test_multiplicative_identity((a, _, _) in triple_up_to(4)) {
        prop_assert!(a.verify_mul_identity().unwrap());
        let one = Hypercomplex::one(a.order()).unwrap();
        prop_assert_eq!(a.mul(&one).unwrap(), a);
    }

    #[test]
    fn test_conjugation_reverses_products((a, b, _) in triple_up_to(4)) {
        prop_assert!(a.verify_anti_automorphism(&b).unwrap());
    }

    #[test]
    fn test_norm_is_sum_of_squares((a, _, _) in triple_up_to(4)) {
        let squares = a
            .leaves()
            .fold(Scalar::zero(), |acc, s| acc.add(&s.mul(s)));
        prop_assert_eq!(a.norm(), squares);
        prop_assert!(!a.norm().is_negative());
    }

    #[test]
    fn test_norm_is_multiplicative((a, b, _) in triple_up_to(3)) {
        let product = a.mul(&b).unwrap();
        prop_assert_eq!(product.norm(), a.norm().mul(&b.norm()));
    }

    #[test]
    fn test_power_matches_repeated_product((a, _, _) in triple_up_to(3), n in 0i64..6) {
        let mut expected = Hypercomplex::one(a.order()).unwrap();
        for _ in 0..n {
            expected = expected.mul(&a).unwrap();
        }
        prop_assert_eq!(a.pow(n).unwrap(), expected);
    }

    #[test]
    fn test_inverse((a, _, _) in triple_up_to(3)) {
        prop_assume!(!a.is_zero());
        let a = a.to_rational();
        let one = Hypercomplex::one(a.order()).unwrap();
        prop_assert_eq!(a.mul(&a.inverse().unwrap()).unwrap(), one.clone());
        prop_assert_eq!(a.pow(-2).unwrap().mul(&a.pow(2).unwrap()).unwrap(), one);
    }
}

#[test]
fn test_quaternions_do_not_commute() {
    let i = Hypercomplex::unit(2, 1).unwrap();
    let j = Hypercomplex::unit(2, 2).unwrap();
    assert!(!i.verify_mul_commutativity(&j).unwrap());
}

#[test]
fn test_octonions_do_not_associate() {
    let i = Hypercomplex::unit(3, 1).unwrap();
    let j = Hypercomplex::unit(3, 2).unwrap();
    let l = Hypercomplex::unit(3, 4).unwrap();
    assert!(!i.verify_mul_associativity(&j, &l).unwrap());
}

#[test]
fn test_sedenions_are_not_alternative() {
    let a = sedenion(&[1, 10]);
    let b = sedenion(&[4, 15]);

    assert!(!a.verify_left_alternative(&b).unwrap());
    assert_eq!(a.mul(&a).unwrap().mul(&b).unwrap(), b.scale(&Scalar::from(-2)));
    assert_eq!(
        a.mul(&a.mul(&b).unwrap()).unwrap(),
        b.scale(&Scalar::from(-4))
    );
}

#[test]
fn test_scalar_ring() {
    let a = Scalar::from(7);
    let b = Scalar::ratio(-2, 3).unwrap();
    let c = Scalar::from(5);
    assert!(a.verify_ring_axioms(&b, &c).unwrap());
    assert!(a.verify_group_axioms(&b, &c).unwrap());
}
