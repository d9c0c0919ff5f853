//! Layer 0: Foundation
//!
//! Exact scalars and the algebraic axioms every layer above is checked against.

pub mod group;
pub mod ring;
pub mod scalar;
