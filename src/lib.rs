//! Hologram Hypercomplex
//!
//! Exact Cayley-Dickson algebras: Gaussian integers and rationals, quaternions,
//! octonions and every higher doubling, over arbitrary-precision scalars.
//!
//! # Architecture
//!
//! The crate is structured in four layers:
//!
//! - **Layer 0 (Foundation)**: Exact scalars, group and ring axioms
//! - **Layer 1 (Algebra)**: The recursive value type, Cayley-Dickson arithmetic,
//!   order promotion and Gaussian integer number theory
//! - **Layer 2 (Context)**: Caller-owned policy and printer settings, TOML config
//! - **Layer 3 (Codec)**: Array interchange and canonical string notation
//!
//! # Example
//!
//! ```rust
//! use hologram_hypercomplex::prelude::*;
//!
//! let a = Hypercomplex::from_scalar(4, 5);
//! let b = Hypercomplex::from_scalar(1, -2);
//! assert_eq!(a.mul(&b)?, Hypercomplex::from_scalar(14, -3));
//!
//! let q: Hypercomplex = "1+2i-3j-4k".parse()?;
//! assert_eq!(q.order(), 2);
//! assert_eq!(q.norm(), Scalar::from(30));
//! assert_eq!(q.conjugate().to_string(), "1-2i+3j+4k");
//!
//! // Mixed orders go through an explicit context
//! let ctx = AlgebraContext::default();
//! let product = ctx.mul(&Hypercomplex::eye(), &q)?;
//! assert_eq!(product.order(), 2);
//! # Ok::<(), hologram_hypercomplex::Error>(())
//! ```

// Layer 0: Foundation
pub mod foundation;

// Layer 1: Cayley-Dickson Algebra
pub mod algebra;

// Layer 2: Context and Configuration
pub mod config;
pub mod context;

// Layer 3: Codecs
pub mod codec;

pub mod error;

pub use algebra::{Component, Hypercomplex, MulPolicy};
pub use error::{Error, ErrorKind, Result};
pub use foundation::scalar::Scalar;

/// Prelude - commonly used types and traits
pub mod prelude {
    // Foundation
    pub use crate::foundation::group::AdditiveGroup;
    pub use crate::foundation::ring::{Ring, StarRing};
    pub use crate::foundation::scalar::Scalar;

    // Algebra
    pub use crate::algebra::gaussian;
    pub use crate::algebra::promotion::MulPolicy;
    pub use crate::algebra::value::{Component, Hypercomplex, MAX_ORDER};

    // Context
    pub use crate::config::AlgebraConfig;
    pub use crate::context::{AlgebraContext, PolicyOverride};

    // Codec
    pub use crate::codec::array::{flatten, NestedArray};
    pub use crate::codec::format::{format, FormatOptions};
    pub use crate::codec::parse::parse;

    // Errors
    pub use crate::error::{Error, ErrorKind};

    // External
    pub use num_bigint::BigInt;
    pub use num_rational::BigRational;
}
