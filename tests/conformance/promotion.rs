//! Promotion Conformance Tests
//!
//! Casting only ever zero-pads, composes, and never loses information.

use hologram_hypercomplex::prelude::*;
use proptest::prelude::*;

fn hypercomplex_strategy() -> impl Strategy<Value = Hypercomplex> {
    (1u32..=3).prop_flat_map(|order| {
        prop::collection::vec(-30i64..30, 1usize << order).prop_map(|values| {
            let leaves: Vec<Scalar> = values.into_iter().map(Scalar::from).collect();
            Hypercomplex::from_flat(&leaves).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn test_cast_to_own_order_is_identity(x in hypercomplex_strategy()) {
        prop_assert_eq!(x.cast(x.order()).unwrap(), x);
    }

    #[test]
    fn test_cast_composes(x in hypercomplex_strategy(), up1 in 0u32..3, up2 in 0u32..3) {
        let d2 = x.order() + up1;
        let d3 = d2 + up2;
        prop_assert_eq!(x.cast(d2).unwrap().cast(d3).unwrap(), x.cast(d3).unwrap());
    }

    #[test]
    fn test_cast_preserves_coefficients(x in hypercomplex_strategy(), up in 1u32..3) {
        let cast = x.cast(x.order() + up).unwrap();
        let coefficients = cast.coefficients();
        let before = x.coefficients();
        prop_assert_eq!(&coefficients[..x.dim()], &before[..]);
        prop_assert!(coefficients[x.dim()..].iter().all(Scalar::is_zero));
        prop_assert_eq!(cast.norm(), x.norm());
    }

    #[test]
    fn test_demotion_always_fails(x in hypercomplex_strategy()) {
        for order in 0..x.order() {
            prop_assert_eq!(x.cast(order).unwrap_err().kind(), ErrorKind::Order);
        }
    }

    #[test]
    fn test_promote_then_multiply_matches_manual_cast(x in hypercomplex_strategy(), y in hypercomplex_strategy()) {
        let target = x.order().max(y.order());
        let manual = x.cast(target).unwrap().mul(&y.cast(target).unwrap()).unwrap();
        let ctx = AlgebraContext::default();
        prop_assert_eq!(ctx.mul(&x, &y).unwrap(), manual);
    }

    #[test]
    fn test_policies_agree_on_real_factors(r in -30i64..30, y in hypercomplex_strategy()) {
        let real = Hypercomplex::real(r);
        let promote = real.mul_with(&y, MulPolicy::PromoteThenMultiply).unwrap();
        let broadcast = real.mul_with(&y, MulPolicy::ScalarBroadcast).unwrap();
        prop_assert_eq!(&promote, &broadcast);
        prop_assert_eq!(promote, y.scale(&Scalar::from(r)));
    }

    #[test]
    fn test_contexts_do_not_interfere(x in hypercomplex_strategy(), y in hypercomplex_strategy()) {
        let promote = AlgebraContext::default();
        let broadcast = AlgebraContext::default().with_mul_policy(MulPolicy::ScalarBroadcast);
        let before = promote.mul(&x, &y).unwrap();
        let _ = broadcast.mul(&x, &y).unwrap();
        prop_assert_eq!(promote.mul(&x, &y).unwrap(), before);
    }
}

#[test]
fn test_broadcast_differs_from_promotion() {
    let i = Hypercomplex::eye();
    let j = Hypercomplex::unit(2, 2).unwrap();

    let promote = j.mul_with(&i, MulPolicy::PromoteThenMultiply).unwrap();
    let broadcast = j.mul_with(&i, MulPolicy::ScalarBroadcast).unwrap();
    assert_eq!(promote, broadcast.neg());
}

#[test]
fn test_cast_beyond_limit_fails() {
    let x = Hypercomplex::eye();
    assert_eq!(x.cast(MAX_ORDER + 1).unwrap_err(), Error::InvalidOrder(MAX_ORDER + 1));
}
