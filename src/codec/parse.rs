//! Canonical String Parser
//!
//! Grammar (after whitespace is removed):
//!
//! ```text
//! value   := term (sign term)*
//! term    := sign? coeff? ('*'? unit)?          at least one of coeff, unit
//! coeff   := digits '/' digits
//!          | (digits ('.' digits?)? | '.' digits) (('e'|'E') sign? digits)?
//! unit    := 'i' | 'j' | 'k' | 'L' | 'I' | 'J' | 'K' | 'e' digits
//! ```
//!
//! A coefficient followed directly by `e<digits>` always reads as an exponent,
//! so `2e3` is two thousand; write `2*e3` for twice the unit `e3`.
//!
//! Decimal and exponential literals are converted exactly to rationals. Plain
//! integer literals stay integers.
//!
//! Unit indices are capped at order [`MAX_PARSE_ORDER`] and checked before the
//! coefficient array is allocated.

use super::units::unit_index;
use crate::algebra::value::Hypercomplex;
use crate::error::{Error, Result};
use crate::foundation::scalar::Scalar;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Largest accepted decimal exponent magnitude
pub const MAX_EXPONENT: u64 = 4096;

/// Highest order a parsed string may name (dimension 65536)
pub const MAX_PARSE_ORDER: u32 = 16;

static TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<sign>[+-]?)(?P<coeff>\d+/\d+|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)?(?P<star>\*)?(?P<unit>[ijkLIJK]|e\d+)?$",
    )
    .expect("term pattern is a valid regex")
});

/// Parse canonical notation into a value of the smallest fitting order
pub fn parse(text: &str) -> Result<Hypercomplex> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::parse(text, "empty input"));
    }

    let mut table: BTreeMap<usize, Scalar> = BTreeMap::new();
    for term in split_terms(&normalized) {
        let (index, coeff) = parse_term(term)?;
        tracing::trace!(term, index, %coeff, "parsed term");
        if table.insert(index, coeff).is_some() {
            return Err(Error::parse(term, "repeated unit"));
        }
    }

    let highest = table
        .iter()
        .filter(|(_, coeff)| !coeff.is_zero())
        .map(|(&index, _)| index)
        .max()
        .unwrap_or(0);
    let len = (highest + 1).next_power_of_two().max(2);

    let mut flat = vec![Scalar::zero(); len];
    for (index, coeff) in table.into_iter().filter(|(index, _)| *index < len) {
        flat[index] = coeff;
    }
    tracing::debug!(input = text, len, "parsed hypercomplex string");
    Hypercomplex::from_flat(&flat)
}

/// Strip whitespace and one pair of enclosing parentheses; fold `l` to `L`
fn normalize(text: &str) -> String {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'l' { 'L' } else { c })
        .collect();
    match compact.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => inner.to_string(),
        None => compact,
    }
}

/// Split before every sign that does not belong to an exponent
fn split_terms(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut terms = Vec::new();
    let mut start = 0;
    for (idx, &b) in bytes.iter().enumerate().skip(1) {
        if b != b'+' && b != b'-' {
            continue;
        }
        let is_exponent = matches!(bytes[idx - 1], b'e' | b'E')
            && idx >= 2
            && (bytes[idx - 2].is_ascii_digit() || bytes[idx - 2] == b'.');
        if !is_exponent {
            terms.push(&s[start..idx]);
            start = idx;
        }
    }
    terms.push(&s[start..]);
    terms
}

fn parse_term(term: &str) -> Result<(usize, Scalar)> {
    let caps = TERM
        .captures(term)
        .ok_or_else(|| Error::parse(term, "not a valid term"))?;
    let coeff = caps.name("coeff").map(|m| m.as_str());
    let unit = caps.name("unit").map(|m| m.as_str());

    if coeff.is_none() && unit.is_none() {
        return Err(Error::parse(term, "term has neither coefficient nor unit"));
    }
    if caps.name("star").is_some() && (coeff.is_none() || unit.is_none()) {
        return Err(Error::parse(term, "'*' must join a coefficient and a unit"));
    }

    let index = match unit {
        None => 0,
        Some(name) => {
            let index = unit_index(name)
                .ok_or_else(|| Error::parse(term, format!("'{name}' is not a unit")))?;
            if index >> MAX_PARSE_ORDER != 0 {
                return Err(Error::parse(
                    term,
                    format!("unit index above the parse limit of order {MAX_PARSE_ORDER}"),
                ));
            }
            index
        }
    };

    let magnitude = match coeff {
        Some(literal) => parse_literal(literal).map_err(|reason| Error::parse(term, reason))?,
        None => Scalar::one(),
    };
    let value = if caps.name("sign").map(|m| m.as_str()) == Some("-") {
        magnitude.neg()
    } else {
        magnitude
    };
    Ok((index, value))
}

/// Exact value of an unsigned numeric literal
fn parse_literal(literal: &str) -> std::result::Result<Scalar, String> {
    let bad = |_| format!("invalid number '{literal}'");

    if let Some((numer, denom)) = literal.split_once('/') {
        let numer = BigInt::from_str(numer).map_err(bad)?;
        let denom = BigInt::from_str(denom).map_err(bad)?;
        if denom.is_zero() {
            return Err(format!("zero denominator in '{literal}'"));
        }
        return Ok(Scalar::Rational(BigRational::new(numer, denom)));
    }

    let (mantissa, exponent) = match literal.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&literal[..pos], Some(&literal[pos + 1..])),
        None => (literal, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };
    if exponent.is_none() && frac_part.is_none() {
        return BigInt::from_str(int_part).map(Scalar::Integer).map_err(bad);
    }

    let frac_part = frac_part.unwrap_or("");
    let digits = format!("{int_part}{frac_part}");
    let digits = BigInt::from_str(&digits).map_err(bad)?;
    let exponent = match exponent {
        Some(exp) => exp.parse::<i64>().map_err(|_| format!("invalid exponent in '{literal}'"))?,
        None => 0,
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(format!("exponent out of range in '{literal}'"));
    }

    let shift = exponent - frac_part.len() as i64;
    let power = num_traits::pow(BigInt::from(10), shift.unsigned_abs() as usize);
    let value = if shift >= 0 {
        BigRational::from_integer(digits * power)
    } else {
        BigRational::new(digits, power)
    };
    Ok(Scalar::Rational(value))
}

impl Hypercomplex {
    /// Parse canonical notation such as `"1+2i-3j-4k"`
    pub fn from_string(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl FromStr for Hypercomplex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
