//! Exact Scalars
//!
//! Every hypercomplex value bottoms out in scalar leaves. Scalars are exact:
//! arbitrary-precision integers or reduced rationals, never floating point.
//!
//! The variant records the scalar domain. Integer ∘ Integer stays in the
//! integers; anything touching a rational is rational. Equality, ordering and
//! hashing are value-based, so `Integer(2) == Rational(2/1)`.

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Exact scalar leaf
#[derive(Clone, Debug)]
pub enum Scalar {
    /// Arbitrary-precision integer
    Integer(BigInt),

    /// Arbitrary-precision rational (p/q, always reduced)
    Rational(BigRational),
}

impl Scalar {
    /// Integer zero
    pub fn zero() -> Self {
        Scalar::Integer(BigInt::zero())
    }

    /// Integer one
    pub fn one() -> Self {
        Scalar::Integer(BigInt::one())
    }

    /// Create from integer
    pub fn from_integer(n: BigInt) -> Self {
        Scalar::Integer(n)
    }

    /// Create from rational
    pub fn from_rational(r: BigRational) -> Self {
        Scalar::Rational(r)
    }

    /// Rational `numer / denom`
    pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero("rational with zero denominator".into()));
        }
        Ok(Scalar::Rational(BigRational::new(numer.into(), denom)))
    }

    /// Exact conversion of a finite float (NaN and infinities are rejected)
    pub fn try_from_f64(value: f64) -> Result<Self> {
        BigRational::from_float(value)
            .map(Scalar::Rational)
            .ok_or_else(|| Error::InvalidScalar(format!("{value} is not a finite number")))
    }

    /// Value as a rational, whatever the domain
    pub fn as_rational(&self) -> BigRational {
        match self {
            Scalar::Integer(n) => BigRational::from_integer(n.clone()),
            Scalar::Rational(r) => r.clone(),
        }
    }

    /// Same value moved into the rational domain
    pub fn to_rational(&self) -> Self {
        Scalar::Rational(self.as_rational())
    }

    /// Integer value, if the scalar is integral
    pub fn to_integer(&self) -> Option<BigInt> {
        match self {
            Scalar::Integer(n) => Some(n.clone()),
            Scalar::Rational(r) if r.is_integer() => Some(r.to_integer()),
            Scalar::Rational(_) => None,
        }
    }

    /// Nearest float (may be infinite for huge magnitudes)
    pub fn to_f64(&self) -> f64 {
        match self {
            Scalar::Integer(n) => n.to_f64().unwrap_or(f64::NAN),
            Scalar::Rational(r) => {
                let numer = r.numer().to_f64().unwrap_or(f64::NAN);
                let denom = r.denom().to_f64().unwrap_or(f64::NAN);
                numer / denom
            }
        }
    }

    /// True for the integer domain
    pub fn is_integer_domain(&self) -> bool {
        matches!(self, Scalar::Integer(_))
    }

    /// True when the value is a whole number (in either domain)
    pub fn is_integral(&self) -> bool {
        match self {
            Scalar::Integer(_) => true,
            Scalar::Rational(r) => r.is_integer(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Integer(n) => n.is_zero(),
            Scalar::Rational(r) => r.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Scalar::Integer(n) => n.is_one(),
            Scalar::Rational(r) => r.is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Scalar::Integer(n) => n.is_negative(),
            Scalar::Rational(r) => r.is_negative(),
        }
    }

    /// -1, 0 or 1 in the integer domain
    pub fn signum(&self) -> Self {
        let sign = match self {
            Scalar::Integer(n) => n.signum(),
            Scalar::Rational(r) => r.numer().signum(),
        };
        Scalar::Integer(sign)
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        match self {
            Scalar::Integer(n) => Scalar::Integer(n.abs()),
            Scalar::Rational(r) => Scalar::Rational(r.abs()),
        }
    }

    /// Nearest integer, half-way cases rounded away from zero
    pub fn round(&self) -> Self {
        match self {
            Scalar::Integer(n) => Scalar::Integer(n.clone()),
            Scalar::Rational(r) => Scalar::Integer(r.round().to_integer()),
        }
    }

    /// Addition (exact)
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Scalar::Integer(a + b),
            _ => Scalar::Rational(self.as_rational() + other.as_rational()),
        }
    }

    /// Subtraction (exact)
    pub fn sub(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Scalar::Integer(a - b),
            _ => Scalar::Rational(self.as_rational() - other.as_rational()),
        }
    }

    /// Multiplication (exact)
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Scalar::Integer(a * b),
            _ => Scalar::Rational(self.as_rational() * other.as_rational()),
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        match self {
            Scalar::Integer(n) => Scalar::Integer(-n),
            Scalar::Rational(r) => Scalar::Rational(-r),
        }
    }

    /// Division; needs at least one rational operand and a nonzero divisor
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero(format!("{self} / 0")));
        }
        match (self, other) {
            (Scalar::Integer(_), Scalar::Integer(_)) => Err(Error::NoDivision),
            _ => Ok(Scalar::Rational(self.as_rational() / other.as_rational())),
        }
    }

    /// Integer power
    pub fn pow(&self, exp: u32) -> Self {
        match self {
            Scalar::Integer(n) => Scalar::Integer(num_traits::pow(n.clone(), exp as usize)),
            Scalar::Rational(r) => Scalar::Rational(num_traits::pow(r.clone(), exp as usize)),
        }
    }

    /// Comparison (exact)
    pub fn cmp_exact(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a.cmp(b),
            _ => self.as_rational().cmp(&other.as_rational()),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_exact(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_exact(other)
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Integral rationals hash like integers so Hash agrees with Eq
        match self.to_integer() {
            Some(n) => {
                0u8.hash(state);
                n.hash(state);
            }
            None => {
                let r = self.as_rational();
                1u8.hash(state);
                r.numer().hash(state);
                r.denom().hash(state);
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Rational(r) if r.denom().is_one() => write!(f, "{}", r.numer()),
            Scalar::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar::add(self, rhs)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar::sub(self, rhs)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar::mul(self, rhs)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::neg(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::neg(&self)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Scalar::Integer(BigInt::from(n))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<BigInt> for Scalar {
    fn from(n: BigInt) -> Self {
        Scalar::Integer(n)
    }
}

impl From<BigRational> for Scalar {
    fn from(r: BigRational) -> Self {
        Scalar::Rational(r)
    }
}
