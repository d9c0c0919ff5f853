//! Layer 3: Codecs
//!
//! Interchange forms for hypercomplex values: nested and flat scalar arrays,
//! and the canonical string notation (`1+2i-3j-4k`, `-5L+8K`, `2*e9`).

pub mod array;
pub mod format;
pub mod parse;
pub mod units;

pub use array::{flatten, NestedArray};
pub use format::{format, FormatOptions};
pub use parse::parse;
