//! Order Promotion
//!
//! Embeds lower-order values into higher-order towers by zero-padding, and
//! implements the two mixed-order multiplication policies. Demotion is never
//! implicit: casting to a lower order is an error.

use super::value::{Hypercomplex, Node, MAX_ORDER};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How to multiply operands of different order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MulPolicy {
    /// Cast the lower-order operand up, then apply the standard product
    #[default]
    #[serde(rename = "promote")]
    PromoteThenMultiply,

    /// Distribute the lower-order operand over the components of the higher one.
    ///
    /// Faster, but not Cayley-Dickson multiplication: `lower * (a, b)` becomes
    /// `(lower * a, lower * b)`. Agrees with promotion only when the lower
    /// operand is real.
    #[serde(rename = "broadcast")]
    ScalarBroadcast,
}

impl Hypercomplex {
    /// Embed into order `order` by pairing with zeros; `order` must not be lower
    pub fn cast(&self, order: u32) -> Result<Self> {
        let current = self.order();
        if order < current {
            return Err(Error::Demotion {
                from: current,
                to: order,
            });
        }
        if order > MAX_ORDER {
            return Err(Error::InvalidOrder(order));
        }
        if order == current {
            return Ok(self.clone());
        }

        tracing::debug!(from = current, to = order, "promoting hypercomplex value");
        let mut node = self.root.clone();
        for depth in current..order {
            node = Node::pair(node, Node::zero(depth));
        }
        Ok(Self::from_node(node))
    }

    /// Alias of [`Hypercomplex::cast`]
    pub fn increase_order(&self, order: u32) -> Result<Self> {
        self.cast(order)
    }

    /// Product of operands of any order under the given policy
    pub fn mul_with(&self, other: &Self, policy: MulPolicy) -> Result<Self> {
        let (left, right) = (self.order(), other.order());
        if left == right {
            return self.mul(other);
        }

        tracing::debug!(left, right, ?policy, "mixed-order multiplication");
        match policy {
            MulPolicy::PromoteThenMultiply => {
                let target = left.max(right);
                self.cast(target)?.mul(&other.cast(target)?)
            }
            MulPolicy::ScalarBroadcast => {
                let node = if left < right {
                    broadcast(&self.root, left, &other.root, right, Side::Left)
                } else {
                    broadcast(&other.root, right, &self.root, left, Side::Right)
                };
                Ok(Self::from_node(node))
            }
        }
    }

    /// Sum of operands of any order; the lower one is zero-padded
    pub fn add_promoted(&self, other: &Self) -> Result<Self> {
        let target = self.order().max(other.order());
        self.cast(target)?.add(&other.cast(target)?)
    }

    /// Difference of operands of any order; the lower one is zero-padded
    pub fn sub_promoted(&self, other: &Self) -> Result<Self> {
        let target = self.order().max(other.order());
        self.cast(target)?.sub(&other.cast(target)?)
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn broadcast(lower: &Node, lower_order: u32, higher: &Node, higher_order: u32, side: Side) -> Node {
    match higher {
        Node::Pair(a, b) if higher_order > lower_order => Node::pair(
            broadcast(lower, lower_order, a, higher_order - 1, side),
            broadcast(lower, lower_order, b, higher_order - 1, side),
        ),
        _ => match side {
            Side::Left => lower.mul(higher),
            Side::Right => higher.mul(lower),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::scalar::Scalar;

    fn z(re: i64, im: i64) -> Hypercomplex {
        Hypercomplex::from_scalar(re, im)
    }

    fn q(a: i64, b: i64, c: i64, d: i64) -> Hypercomplex {
        Hypercomplex::from_pair(z(a, b), z(c, d)).unwrap()
    }

    #[test]
    fn test_cast_pads_with_zero() {
        let x = z(3, 4);
        let cast = x.cast(3).unwrap();

        assert_eq!(cast.order(), 3);
        let expected: Vec<Scalar> = [3, 4, 0, 0, 0, 0, 0, 0].iter().map(|&v| Scalar::from(v)).collect();
        assert_eq!(cast.coefficients(), expected);
        assert_eq!(x.cast(1).unwrap(), x);
        assert_eq!(x.increase_order(2).unwrap(), q(3, 4, 0, 0));
    }

    #[test]
    fn test_cast_refuses_demotion() {
        let err = q(1, 2, 3, 4).cast(1).unwrap_err();
        assert_eq!(err, Error::Demotion { from: 2, to: 1 });
        assert!(q(1, 2, 3, 4).cast(0).is_err());
        assert_eq!(z(1, 1).cast(MAX_ORDER + 1), Err(Error::InvalidOrder(MAX_ORDER + 1)));
    }

    #[test]
    fn test_cast_is_transitive() {
        let x = z(-2, 5);
        assert_eq!(x.cast(2).unwrap().cast(4).unwrap(), x.cast(4).unwrap());
    }

    #[test]
    fn test_promote_then_multiply() {
        let lower = z(0, 1);
        let higher = q(0, 0, 1, 0);

        let product = lower.mul_with(&higher, MulPolicy::PromoteThenMultiply).unwrap();
        assert_eq!(product, q(0, 0, 0, 1));

        let reversed = higher.mul_with(&lower, MulPolicy::PromoteThenMultiply).unwrap();
        assert_eq!(reversed, q(0, 0, 0, -1));
    }

    #[test]
    fn test_scalar_broadcast() {
        let lower = z(0, 1);
        let higher = q(0, 0, 1, 0);

        let left = lower.mul_with(&higher, MulPolicy::ScalarBroadcast).unwrap();
        assert_eq!(left, q(0, 0, 0, 1));

        // j * i: broadcasting skips the conjugation of the promoted product
        let right = higher.mul_with(&lower, MulPolicy::ScalarBroadcast).unwrap();
        assert_eq!(right, q(0, 0, 0, 1));
        let promoted = higher.mul_with(&lower, MulPolicy::PromoteThenMultiply).unwrap();
        assert_eq!(promoted, q(0, 0, 0, -1));
    }

    #[test]
    fn test_policies_agree_for_real_operands() {
        let real = z(3, 0);
        let higher = q(1, 2, 3, 4);

        for policy in [MulPolicy::PromoteThenMultiply, MulPolicy::ScalarBroadcast] {
            assert_eq!(real.mul_with(&higher, policy).unwrap(), q(3, 6, 9, 12));
            assert_eq!(higher.mul_with(&real, policy).unwrap(), q(3, 6, 9, 12));
        }
    }

    #[test]
    fn test_promoted_addition() {
        let sum = z(1, 2).add_promoted(&q(1, 1, 1, 1)).unwrap();
        assert_eq!(sum, q(2, 3, 1, 1));
        let diff = q(1, 1, 1, 1).sub_promoted(&z(1, 2)).unwrap();
        assert_eq!(diff, q(0, -1, 1, 1));
    }
}
