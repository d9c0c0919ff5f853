//! Layer 1: Cayley-Dickson Algebra
//!
//! The recursive value type, its arithmetic, order promotion and the number
//! theory of the order 1 integers.

pub mod arithmetic;
pub mod gaussian;
pub mod promotion;
pub mod value;

pub use promotion::MulPolicy;
pub use value::{Component, Hypercomplex, MAX_ORDER};
