//! Ring Theory for Non-Associative Algebras
//!
//! A (unital, not necessarily associative) ring (R, +, ×) is an abelian group
//! under + with a bilinear × that has a two-sided identity. The Cayley-Dickson
//! tower loses one law per doubling:
//!
//! | order | algebra     | commutative | associative | alternative |
//! |-------|-------------|-------------|-------------|-------------|
//! | 1     | complex     | yes         | yes         | yes         |
//! | 2     | quaternion  | no          | yes         | yes         |
//! | 3     | octonion    | no          | no          | yes         |
//! | 4+    | sedenion... | no          | no          | no          |
//!
//! Flexibility, (a × b) × a = a × (b × a), survives at every order.

use super::group::AdditiveGroup;
use crate::error::Result;

/// Unital ring, associativity not assumed
pub trait Ring: AdditiveGroup {
    /// Multiplicative operation
    fn mul(&self, other: &Self) -> Result<Self>;

    /// Multiplicative identity compatible with `self`
    fn one_like(&self) -> Self;

    /// Verify left distributivity: a × (b + c) = (a × b) + (a × c)
    fn verify_left_distributivity(&self, b: &Self, c: &Self) -> Result<bool> {
        let lhs = self.mul(&b.add(c)?)?;
        let rhs = self.mul(b)?.add(&self.mul(c)?)?;
        Ok(lhs == rhs)
    }

    /// Verify right distributivity: (a + b) × c = (a × c) + (b × c)
    fn verify_right_distributivity(&self, b: &Self, c: &Self) -> Result<bool> {
        let lhs = self.add(b)?.mul(c)?;
        let rhs = self.mul(c)?.add(&b.mul(c)?)?;
        Ok(lhs == rhs)
    }

    /// Verify multiplicative identity: a × 1 = 1 × a = a
    fn verify_mul_identity(&self) -> Result<bool> {
        let one = self.one_like();
        Ok(self.mul(&one)? == *self && one.mul(self)? == *self)
    }

    /// Verify multiplicative associativity: (a × b) × c = a × (b × c)
    fn verify_mul_associativity(&self, b: &Self, c: &Self) -> Result<bool> {
        let lhs = self.mul(b)?.mul(c)?;
        let rhs = self.mul(&b.mul(c)?)?;
        Ok(lhs == rhs)
    }

    /// Verify multiplicative commutativity: a × b = b × a
    fn verify_mul_commutativity(&self, other: &Self) -> Result<bool> {
        Ok(self.mul(other)? == other.mul(self)?)
    }

    /// Verify the left alternative law: (a × a) × b = a × (a × b)
    fn verify_left_alternative(&self, b: &Self) -> Result<bool> {
        let lhs = self.mul(self)?.mul(b)?;
        let rhs = self.mul(&self.mul(b)?)?;
        Ok(lhs == rhs)
    }

    /// Verify the right alternative law: (b × a) × a = b × (a × a)
    fn verify_right_alternative(&self, b: &Self) -> Result<bool> {
        let lhs = b.mul(self)?.mul(self)?;
        let rhs = b.mul(&self.mul(self)?)?;
        Ok(lhs == rhs)
    }

    /// Verify the flexible law: (a × b) × a = a × (b × a)
    fn verify_flexible(&self, b: &Self) -> Result<bool> {
        let lhs = self.mul(b)?.mul(self)?;
        let rhs = self.mul(&b.mul(self)?)?;
        Ok(lhs == rhs)
    }

    /// Verify the axioms of an associative ring
    fn verify_ring_axioms(&self, b: &Self, c: &Self) -> Result<bool> {
        Ok(self.verify_left_distributivity(b, c)?
            && self.verify_right_distributivity(b, c)?
            && self.verify_mul_associativity(b, c)?
            && self.verify_mul_identity()?)
    }

    /// Verify the axioms of an alternative ring
    fn verify_alternative_axioms(&self, b: &Self, c: &Self) -> Result<bool> {
        Ok(self.verify_left_distributivity(b, c)?
            && self.verify_right_distributivity(b, c)?
            && self.verify_mul_identity()?
            && self.verify_left_alternative(b)?
            && self.verify_right_alternative(b)?
            && self.verify_flexible(b)?)
    }
}

/// Ring with an involutive anti-automorphism (conjugation)
pub trait StarRing: Ring {
    /// Conjugate
    fn conjugate(&self) -> Self;

    /// Verify involution: conj(conj(a)) = a
    fn verify_involution(&self) -> bool {
        self.conjugate().conjugate() == *self
    }

    /// Verify anti-automorphism: conj(a × b) = conj(b) × conj(a)
    fn verify_anti_automorphism(&self, b: &Self) -> Result<bool> {
        let lhs = self.mul(b)?.conjugate();
        let rhs = b.conjugate().mul(&self.conjugate())?;
        Ok(lhs == rhs)
    }
}
