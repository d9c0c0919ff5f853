//! Canonical String Printer
//!
//! Emits the real term first, then each nonzero unit term in index order.
//! Unit coefficients of magnitude one are left implicit, generated unit names
//! get an explicit `*`, and an all-zero value prints as `0`.

use super::units::{is_generated, unit_name};
use crate::algebra::value::Hypercomplex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Printer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Print every coefficient, zeros included
    #[serde(default)]
    pub show_zero_coefficients: bool,
}

/// Canonical notation of `x`
pub fn format(x: &Hypercomplex, options: &FormatOptions) -> String {
    let mut out = String::new();
    for (index, coeff) in x.leaves().enumerate() {
        if coeff.is_zero() && !options.show_zero_coefficients {
            continue;
        }

        if coeff.is_negative() {
            out.push('-');
        } else if !out.is_empty() {
            out.push('+');
        }

        let magnitude = coeff.abs();
        if index == 0 {
            out.push_str(&magnitude.to_string());
            continue;
        }
        if !magnitude.is_one() {
            out.push_str(&magnitude.to_string());
            if is_generated(index) {
                out.push('*');
            }
        }
        out.push_str(&unit_name(index));
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

impl Hypercomplex {
    /// Canonical notation with the given options
    pub fn format(&self, options: &FormatOptions) -> String {
        format(self, options)
    }
}

impl fmt::Display for Hypercomplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, &FormatOptions::default()))
    }
}
