//! Gaussian Integers
//!
//! Number theory in ℤ[i]: order 1 values whose leaves are whole numbers.
//! ℤ[i] is a Euclidean domain under the norm, with division rounded to the
//! nearest lattice point.

use super::value::Hypercomplex;
use crate::error::{Error, Result};
use crate::foundation::scalar::Scalar;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Witness bases for Miller-Rabin (deterministic below 3.3e24)
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn parts(x: &Hypercomplex) -> Result<(BigInt, BigInt)> {
    if !x.is_complex() {
        return Err(Error::OrderMismatch {
            left: x.order(),
            right: 1,
        });
    }
    let coeffs = x.coefficients();
    match (coeffs[0].to_integer(), coeffs[1].to_integer()) {
        (Some(re), Some(im)) => Ok((re, im)),
        _ => Err(Error::UnsupportedOperand(format!(
            "{x} is not a Gaussian integer"
        ))),
    }
}

/// The four units of ℤ[i]: 1, -1, i, -i
pub fn units() -> [Hypercomplex; 4] {
    [
        Hypercomplex::from_scalar(1, 0),
        Hypercomplex::from_scalar(-1, 0),
        Hypercomplex::from_scalar(0, 1),
        Hypercomplex::from_scalar(0, -1),
    ]
}

/// True for the four units
pub fn is_unit(x: &Hypercomplex) -> bool {
    parts(x).is_ok() && x.norm().is_one()
}

/// The three non-trivial associates `-x`, `ix`, `-ix`
pub fn associates(x: &Hypercomplex) -> Result<[Hypercomplex; 3]> {
    parts(x)?;
    let [_, minus_one, i, minus_i] = units();
    Ok([x.mul(&minus_one)?, x.mul(&i)?, x.mul(&minus_i)?])
}

/// True when `a = u·b` for some unit `u`
pub fn is_associate(a: &Hypercomplex, b: &Hypercomplex) -> Result<bool> {
    parts(a)?;
    parts(b)?;
    for unit in units() {
        if unit.mul(b)? == *a {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Euclidean division `a = b·q + r` with `q` rounded to the nearest lattice
/// point, so that `N(r) < N(b)`
pub fn rounded_divmod(a: &Hypercomplex, b: &Hypercomplex) -> Result<(Hypercomplex, Hypercomplex)> {
    parts(a)?;
    parts(b)?;
    let norm = b.norm();
    if norm.is_zero() {
        return Err(Error::DivisionByZero(format!("{a} divmod 0")));
    }

    let numerator = a.mul(&b.conjugate())?.to_rational();
    let exact = numerator.scalar_div(&norm)?;
    let rounded: Vec<Scalar> = exact.leaves().map(Scalar::round).collect();
    let q = Hypercomplex::from_scalar(rounded[0].clone(), rounded[1].clone());
    let r = a.sub(&b.mul(&q)?)?;
    Ok((q, r))
}

/// Greatest common divisor, determined up to a unit
pub fn gcd(a: &Hypercomplex, b: &Hypercomplex) -> Result<Hypercomplex> {
    parts(a)?;
    parts(b)?;
    if a.is_zero() && b.is_zero() {
        return Err(Error::DivisionByZero("gcd(0, 0) is undefined".into()));
    }

    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let (_, r) = rounded_divmod(&a, &b)?;
        a = b;
        b = r;
    }
    Ok(a)
}

/// Extended Euclid: `(g, x, y)` with `g = a·x + b·y` and `g` a gcd of `a`, `b`
pub fn xgcd(
    a: &Hypercomplex,
    b: &Hypercomplex,
) -> Result<(Hypercomplex, Hypercomplex, Hypercomplex)> {
    parts(a)?;
    parts(b)?;
    if a.is_zero() && b.is_zero() {
        return Err(Error::DivisionByZero("xgcd(0, 0) is undefined".into()));
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (units()[0].clone(), Hypercomplex::from_scalar(0, 0));
    let (mut old_t, mut t) = (s.clone(), old_s.clone());
    while !r.is_zero() {
        let (q, rem) = rounded_divmod(&old_r, &r)?;
        old_r = std::mem::replace(&mut r, rem);
        let next_s = old_s.sub(&q.mul(&s)?)?;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = old_t.sub(&q.mul(&t)?)?;
        old_t = std::mem::replace(&mut t, next_t);
    }
    Ok((old_r, old_s, old_t))
}

/// True when the only common divisors are units
pub fn is_relatively_prime(a: &Hypercomplex, b: &Hypercomplex) -> Result<bool> {
    Ok(is_unit(&gcd(a, b)?))
}

/// Primality in ℤ[i]
///
/// `a + bi` with both parts nonzero is prime iff its norm is a rational prime;
/// a pure real or imaginary `p` is prime iff `|p|` is a rational prime with
/// `|p| ≡ 3 (mod 4)`.
pub fn is_gaussian_prime(x: &Hypercomplex) -> Result<bool> {
    let (re, im) = parts(x)?;
    let prime = match (re.is_zero(), im.is_zero()) {
        (true, true) => false,
        (false, false) => is_rational_prime(&(&re * &re + &im * &im)),
        (true, false) | (false, true) => {
            let m = if re.is_zero() { im.abs() } else { re.abs() };
            is_rational_prime(&m) && (&m % 4u32) == BigInt::from(3)
        }
    };
    Ok(prime)
}

/// Whether `m` divides `a - b`, with the exact quotient `(a - b) / m`
pub fn congruent_modulo(
    a: &Hypercomplex,
    b: &Hypercomplex,
    m: &Hypercomplex,
) -> Result<(bool, Hypercomplex)> {
    parts(a)?;
    parts(b)?;
    parts(m)?;
    let quotient = a.sub(b)?.to_rational().div(&m.to_rational())?;
    let divides = quotient.leaves().all(Scalar::is_integral);
    Ok((divides, quotient))
}

/// Miller-Rabin over the fixed witness set
fn is_rational_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if *n < two {
        return false;
    }
    for p in WITNESSES {
        let p = BigInt::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - BigInt::one();
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while (&d % &two).is_zero() {
        d /= &two;
        s += 1;
    }

    'witness: for a in WITNESSES {
        let mut x = BigInt::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
