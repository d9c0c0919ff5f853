//! Cayley-Dickson Arithmetic
//!
//! All operations recurse down the pair structure to the scalar leaves.
//!
//! ```text
//! conj(s)           = s
//! conj((a, b))      = (conj(a), -b)
//! (a, b) * (c, d)   = (a*c - conj(d)*b,  d*a + b*conj(c))
//! norm(x)           = first(x * conj(x))
//! x / y             = x * conj(y) / norm(y)
//! ```
//!
//! The product uses the same operand placement at every level. With this
//! placement the units multiply as the standard octonion table and the
//! alternative laws hold at order 3.

use super::value::{Hypercomplex, Node};
use crate::error::{Error, Result};
use crate::foundation::group::AdditiveGroup;
use crate::foundation::ring::{Ring, StarRing};
use crate::foundation::scalar::Scalar;
use num_traits::ToPrimitive;
use std::ops;

impl Node {
    // Leaf/Pair mixes never occur between same-order operands; they are
    // resolved by embedding the scalar at the lower level.

    pub(crate) fn add(&self, other: &Node) -> Node {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => Node::Leaf(a + b),
            (Node::Pair(a, b), Node::Pair(c, d)) => Node::pair(a.add(c), b.add(d)),
            (Node::Leaf(_), Node::Pair(c, d)) => Node::pair(self.add(c), d.as_ref().clone()),
            (Node::Pair(a, b), Node::Leaf(_)) => Node::pair(a.add(other), b.as_ref().clone()),
        }
    }

    pub(crate) fn neg(&self) -> Node {
        self.map(&Scalar::neg)
    }

    pub(crate) fn sub(&self, other: &Node) -> Node {
        self.add(&other.neg())
    }

    pub(crate) fn conj(&self) -> Node {
        match self {
            Node::Leaf(_) => self.clone(),
            Node::Pair(a, b) => Node::pair(a.conj(), b.neg()),
        }
    }

    pub(crate) fn mul(&self, other: &Node) -> Node {
        match (self, other) {
            (Node::Leaf(x), Node::Leaf(y)) => Node::Leaf(x * y),
            (Node::Pair(a, b), Node::Pair(c, d)) => {
                let re = a.mul(c).sub(&d.conj().mul(b));
                let im = d.mul(a).add(&b.mul(&c.conj()));
                Node::pair(re, im)
            }
            (Node::Leaf(_), Node::Pair(c, d)) => Node::pair(self.mul(c), self.mul(d)),
            (Node::Pair(a, b), Node::Leaf(_)) => Node::pair(a.mul(other), b.mul(other)),
        }
    }

    pub(crate) fn try_map(&self, f: &impl Fn(&Scalar) -> Result<Scalar>) -> Result<Node> {
        Ok(match self {
            Node::Leaf(s) => Node::Leaf(f(s)?),
            Node::Pair(re, im) => Node::pair(re.try_map(f)?, im.try_map(f)?),
        })
    }
}

impl Hypercomplex {
    fn same_order(&self, other: &Self) -> Result<()> {
        let (left, right) = (self.order(), other.order());
        if left != right {
            return Err(Error::OrderMismatch { left, right });
        }
        Ok(())
    }

    /// Component-wise sum of same-order values
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.same_order(other)?;
        Ok(Self::from_node(self.root.add(&other.root)))
    }

    /// Component-wise difference of same-order values
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.same_order(other)?;
        Ok(Self::from_node(self.root.sub(&other.root)))
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self::from_node(self.root.neg())
    }

    /// Cayley-Dickson conjugate
    pub fn conjugate(&self) -> Self {
        Self::from_node(self.root.conj())
    }

    /// Cayley-Dickson product of same-order values (non-commutative above order 1)
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.same_order(other)?;
        Ok(Self::from_node(self.root.mul(&other.root)))
    }

    /// Multiply every coefficient by a real scalar
    pub fn scale(&self, k: &Scalar) -> Self {
        Self::from_node(self.root.map(&|s: &Scalar| s * k))
    }

    /// Divide every coefficient by a real scalar
    pub fn scalar_div(&self, k: &Scalar) -> Result<Self> {
        if k.is_zero() {
            return Err(Error::DivisionByZero(format!("{self} / 0")));
        }
        Ok(Self::from_node(self.root.try_map(&|s: &Scalar| s.checked_div(k))?))
    }

    /// Squared magnitude, `first(x * conj(x))`
    pub fn norm(&self) -> Scalar {
        self.root.mul(&self.root.conj()).first().clone()
    }

    /// `sqrt(norm)` as a float
    pub fn magnitude(&self) -> f64 {
        self.norm().to_f64().sqrt()
    }

    /// Multiplicative inverse, `conj(x) / norm(x)`
    pub fn inverse(&self) -> Result<Self> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(Error::DivisionByZero(format!("{self} has no inverse")));
        }
        self.conjugate().scalar_div(&norm)
    }

    /// Quotient `x * conj(y) / norm(y)`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.same_order(other)?;
        let norm = other.norm();
        if norm.is_zero() {
            return Err(Error::DivisionByZero(format!("{self} / {other}")));
        }
        self.mul(&other.conjugate())?.scalar_div(&norm)
    }

    /// Integer power; negative exponents raise the inverse to `|n|`
    pub fn pow(&self, n: i64) -> Result<Self> {
        if n < 0 {
            // Fails fast on zero or integer-domain values
            Ok(self.inverse()?.pow_unsigned(n.unsigned_abs()))
        } else {
            Ok(self.pow_unsigned(n.unsigned_abs()))
        }
    }

    /// Power with an exact scalar exponent, which must be an integer
    pub fn pow_scalar(&self, exponent: &Scalar) -> Result<Self> {
        let n = exponent
            .to_integer()
            .ok_or_else(|| Error::InvalidExponent(format!("{exponent} is not an integer")))?;
        let n = n
            .to_i64()
            .ok_or_else(|| Error::InvalidExponent(format!("{exponent} does not fit in 64 bits")))?;
        self.pow(n)
    }

    // Square-and-multiply; every Cayley-Dickson algebra is power-associative
    fn pow_unsigned(&self, mut n: u64) -> Self {
        let mut result = Node::one(self.order());
        let mut base = self.root.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base);
            }
        }
        Self::from_node(result)
    }
}

impl ops::Neg for Hypercomplex {
    type Output = Hypercomplex;

    fn neg(self) -> Hypercomplex {
        Hypercomplex::neg(&self)
    }
}

impl ops::Neg for &Hypercomplex {
    type Output = Hypercomplex;

    fn neg(self) -> Hypercomplex {
        Hypercomplex::neg(self)
    }
}

impl AdditiveGroup for Hypercomplex {
    fn add(&self, other: &Self) -> Result<Self> {
        Hypercomplex::add(self, other)
    }

    fn neg(&self) -> Self {
        Hypercomplex::neg(self)
    }

    fn zero_like(&self) -> Self {
        Self::from_node(Node::zero(self.order()))
    }
}

impl Ring for Hypercomplex {
    fn mul(&self, other: &Self) -> Result<Self> {
        Hypercomplex::mul(self, other)
    }

    fn one_like(&self) -> Self {
        Self::from_node(Node::one(self.order()))
    }
}

impl StarRing for Hypercomplex {
    fn conjugate(&self) -> Self {
        Hypercomplex::conjugate(self)
    }
}

impl AdditiveGroup for Scalar {
    fn add(&self, other: &Self) -> Result<Self> {
        Ok(Scalar::add(self, other))
    }

    fn neg(&self) -> Self {
        Scalar::neg(self)
    }

    fn zero_like(&self) -> Self {
        Scalar::zero()
    }
}

impl Ring for Scalar {
    fn mul(&self, other: &Self) -> Result<Self> {
        Ok(Scalar::mul(self, other))
    }

    fn one_like(&self) -> Self {
        Scalar::one()
    }
}

impl StarRing for Scalar {
    fn conjugate(&self) -> Self {
        self.clone()
    }
}
