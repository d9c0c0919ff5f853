//! Additive Group Conformance Tests
//!
//! Property-based tests verifying the abelian group laws and conjugation at
//! every order.

use hologram_hypercomplex::prelude::*;
use proptest::prelude::*;

fn hypercomplex_strategy(order: u32) -> impl Strategy<Value = Hypercomplex> {
    prop::collection::vec(-50i64..50, 1usize << order).prop_map(|values| {
        let leaves: Vec<Scalar> = values.into_iter().map(Scalar::from).collect();
        Hypercomplex::from_flat(&leaves).unwrap()
    })
}

fn triple_strategy() -> impl Strategy<Value = (Hypercomplex, Hypercomplex, Hypercomplex)> {
    (1u32..=4).prop_flat_map(|order| {
        (
            hypercomplex_strategy(order),
            hypercomplex_strategy(order),
            hypercomplex_strategy(order),
        )
    })
}

proptest! {
    #[test]
    fn test_addition_associativity((a, b, c) in triple_strategy()) {
        let ab_c = a.add(&b).unwrap().add(&c).unwrap();
        let a_bc = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn test_addition_commutativity((a, b, _) in triple_strategy()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_zero_identity((a, _, _) in triple_strategy()) {
        let zero = Hypercomplex::zero(a.order()).unwrap();
        prop_assert_eq!(zero.add(&a).unwrap(), a.clone());
        prop_assert_eq!(a.add(&zero).unwrap(), a);
    }

    #[test]
    fn test_additive_inverse((a, _, _) in triple_strategy()) {
        let sum = a.add(&a.neg()).unwrap();
        prop_assert!(sum.is_zero());
        prop_assert_eq!(sum.order(), a.order());
        prop_assert_eq!(a.sub(&a).unwrap(), sum);
    }

    #[test]
    fn test_group_axioms_trait((a, b, c) in triple_strategy()) {
        prop_assert!(a.verify_group_axioms(&b, &c).unwrap());
    }

    #[test]
    fn test_conjugate_involution((a, _, _) in triple_strategy()) {
        prop_assert_eq!(a.conjugate().conjugate(), a.clone());
        prop_assert!(a.verify_involution());
    }

    #[test]
    fn test_conjugate_is_additive((a, b, _) in triple_strategy()) {
        let lhs = a.add(&b).unwrap().conjugate();
        let rhs = a.conjugate().add(&b.conjugate()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}

#[test]
fn test_group_axioms_specific() {
    let values = ["0", "1", "-i", "3-4j+k", "L-2K", "1/2+7/3i"];
    let parsed: Vec<Hypercomplex> = values.iter().map(|s| s.parse().unwrap()).collect();

    for a in &parsed {
        for b in &parsed {
            for c in &parsed {
                let order = a.order().max(b.order()).max(c.order());
                let (a, b, c) = (
                    a.cast(order).unwrap(),
                    b.cast(order).unwrap(),
                    c.cast(order).unwrap(),
                );
                assert!(a.verify_group_axioms(&b, &c).unwrap());
            }
        }
    }
}

#[test]
fn test_mismatched_orders_are_rejected() {
    let z = Hypercomplex::from_scalar(1, 1);
    let q = Hypercomplex::one(2).unwrap();
    assert_eq!(z.add(&q).unwrap_err().kind(), ErrorKind::Order);
    assert_eq!(z.verify_add_commutativity(&q).unwrap_err().kind(), ErrorKind::Order);
}
