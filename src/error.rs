//! Error types for hologram-hypercomplex

use thiserror::Error;

/// Result type alias for hypercomplex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Incompatible inputs or mismatched component orders at construction
    Construction,
    /// Invalid order argument or attempted demotion
    Order,
    /// Malformed canonical string
    Parse,
    /// Non-invertible element, missing division or bad exponent
    Arithmetic,
    /// Flat array length is empty or not a power of two
    ArrayShape,
    /// Invalid configuration document
    Config,
}

/// Errors that can occur in hypercomplex operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Components of a pair have different orders
    #[error("Cannot pair components of order {real} and {imag}")]
    ComponentOrderMismatch {
        /// Order of the real component
        real: u32,
        /// Order of the imaginary component
        imag: u32,
    },

    /// Scalar input is not an integer or finite rational
    #[error("Invalid scalar input: {0}")]
    InvalidScalar(String),

    /// Operation is restricted to a particular kind of value
    #[error("Unsupported operand: {0}")]
    UnsupportedOperand(String),

    /// Order outside `1..=MAX_ORDER`
    #[error("Invalid order: {0} (must be in [1, {max}])", max = crate::algebra::value::MAX_ORDER)]
    InvalidOrder(u32),

    /// Cast target lies below the value's order
    #[error("Cannot demote a value of order {from} to order {to}")]
    Demotion {
        /// Current order
        from: u32,
        /// Requested order
        to: u32,
    },

    /// Binary operation applied to operands of different order
    #[error("Order mismatch: left operand has order {left}, right operand has order {right}")]
    OrderMismatch {
        /// Order of the left operand
        left: u32,
        /// Order of the right operand
        right: u32,
    },

    /// Basis index outside `0..dim`
    #[error("Unit index {index} out of range for order {order}")]
    UnitOutOfRange {
        /// Requested basis index
        index: usize,
        /// Order of the requested value
        order: u32,
    },

    /// String could not be parsed
    #[error("Parse error at '{fragment}': {reason}")]
    Parse {
        /// Offending substring
        fragment: String,
        /// What went wrong
        reason: String,
    },

    /// Division by a zero scalar or zero-norm element
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Scalar domain has no division
    #[error("Integer scalars have no division; convert with to_rational() first")]
    NoDivision,

    /// Exponent is not an integer, or does not fit in 64 bits
    #[error("Invalid exponent: {0}")]
    InvalidExponent(String),

    /// Flat array length is empty or not a power of two
    #[error("Invalid array length {0}: must be a power of two >= 1")]
    ArrayShape(usize),

    /// Configuration document is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ComponentOrderMismatch { .. }
            | Error::InvalidScalar(_)
            | Error::UnsupportedOperand(_) => ErrorKind::Construction,
            Error::InvalidOrder(_)
            | Error::Demotion { .. }
            | Error::OrderMismatch { .. }
            | Error::UnitOutOfRange { .. } => ErrorKind::Order,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::DivisionByZero(_) | Error::NoDivision | Error::InvalidExponent(_) => {
                ErrorKind::Arithmetic
            }
            Error::ArrayShape(_) => ErrorKind::ArrayShape,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn parse(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
