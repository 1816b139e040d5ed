//! Complex number value with a literal parser
//!
//! Accepted literal forms: `(a+bj)`, `a+bj`, `a-bj`, `bj`, `a`. Exponents
//! (`1e3+2j`) are supported; whitespace inside the literal is not.

use super::value::same_float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Complex number with `f64` parts
///
/// Equality is part-wise and treats NaN as equal to NaN.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// True if the imaginary part is exactly zero
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        same_float(self.re, other.re) && same_float(self.im, other.im)
    }
}

/// Error returned when a string is not a complex literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid complex literal '{0}'")]
pub struct ParseComplexError(pub String);

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseComplexError(s.to_string());

        let trimmed = s.trim();
        let body = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(err()),
        };

        if body.is_empty() || body.chars().any(char::is_whitespace) {
            return Err(err());
        }

        let Some(imag_body) = body
            .strip_suffix('j')
            .or_else(|| body.strip_suffix('J'))
        else {
            let re = body.parse::<f64>().map_err(|_| err())?;
            return Ok(Self::new(re, 0.0));
        };

        match split_sign_position(imag_body) {
            Some(pos) => {
                let re = imag_body[..pos].parse::<f64>().map_err(|_| err())?;
                let im = parse_imaginary(&imag_body[pos..]).ok_or_else(err)?;
                Ok(Self::new(re, im))
            }
            None => {
                let im = parse_imaginary(imag_body).ok_or_else(err)?;
                Ok(Self::new(0.0, im))
            }
        }
    }
}

/// Position of the sign separating real and imaginary parts, if any.
///
/// A leading sign and signs that belong to an exponent are skipped.
fn split_sign_position(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

/// Imaginary coefficient; a bare sign means unit magnitude (`j`, `+j`, `-j`).
fn parse_imaginary(s: &str) -> Option<f64> {
    match s {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => s.parse::<f64>().ok(),
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "({}-{}j)", self.re, -self.im)
        } else {
            write!(f, "({}+{}j)", self.re, self.im)
        }
    }
}
