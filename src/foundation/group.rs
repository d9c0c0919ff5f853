//! Additive Group Axioms
//!
//! Every Cayley-Dickson algebra is an abelian group under addition:
//! 1. Associativity: (a + b) + c = a + (b + c)
//! 2. Commutativity: a + b = b + a
//! 3. Identity: a + 0 = 0 + a = a
//! 4. Inverse: a + (-a) = 0
//!
//! The identity depends on the operand's order, so it is produced from an
//! existing element (`zero_like`) rather than from the type alone.

use crate::error::Result;
use std::fmt::Debug;

/// Abelian group under addition
pub trait AdditiveGroup: Clone + PartialEq + Debug {
    /// Group operation; fails when the operands are incompatible
    fn add(&self, other: &Self) -> Result<Self>;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Additive identity compatible with `self`
    fn zero_like(&self) -> Self;

    // Axiom verification (default implementations for testing)

    /// Verify associativity: (a + b) + c = a + (b + c)
    fn verify_add_associativity(&self, b: &Self, c: &Self) -> Result<bool> {
        let lhs = self.add(b)?.add(c)?;
        let rhs = self.add(&b.add(c)?)?;
        Ok(lhs == rhs)
    }

    /// Verify commutativity: a + b = b + a
    fn verify_add_commutativity(&self, other: &Self) -> Result<bool> {
        Ok(self.add(other)? == other.add(self)?)
    }

    /// Verify identity: a + 0 = 0 + a = a
    fn verify_add_identity(&self) -> Result<bool> {
        let zero = self.zero_like();
        Ok(self.add(&zero)? == *self && zero.add(self)? == *self)
    }

    /// Verify inverse: a + (-a) = (-a) + a = 0
    fn verify_add_inverse(&self) -> Result<bool> {
        let inv = self.neg();
        let zero = self.zero_like();
        Ok(self.add(&inv)? == zero && inv.add(self)? == zero)
    }

    /// Verify all group axioms
    fn verify_group_axioms(&self, b: &Self, c: &Self) -> Result<bool> {
        Ok(self.verify_add_associativity(b, c)?
            && self.verify_add_commutativity(b)?
            && self.verify_add_identity()?
            && self.verify_add_inverse()?)
    }
}
