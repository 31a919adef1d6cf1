//! Representation of po numbers.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Primitive;
use crate::sexp::Sexp;


/// The single numeric kind; integers are floats with no fractional part.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Number(f64);

#[derive(Debug, PartialEq)]
pub enum NumberError {
    Malformed(String),
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Whether s has the shape of a number literal: -?[0-9]+(\.[0-9]+)?
    pub fn is_literal(s: &str) -> bool {
        lazy_static! {
            static ref LITERAL: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
        }
        LITERAL.is_match(s)
    }
}


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_literal(s) {
            return Err(NumberError::Malformed(s.to_string()));
        }
        // Out of range literals would print as `inf`, which can't be read.
        match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(NumberError::Malformed(s.to_string())),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl TryFrom<Sexp> for Number {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Number(num)) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for Number {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Number(num)) = value {
            Ok(*num)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!("123".parse::<Number>(), Ok(Number(123.)));
        assert_eq!("-45".parse::<Number>(), Ok(Number(-45.)));
        assert_eq!("3.5".parse::<Number>(), Ok(Number(3.5)));
        assert_eq!("-0.25".parse::<Number>(), Ok(Number(-0.25)));
    }

    #[test]
    fn malformed() {
        let huge = "9".repeat(400);
        for s in &["", "-", "1.", ".5", "12ab", "1e5", "--1", "+3", "1.2.3", &huge] {
            assert_eq!(
                s.parse::<Number>(),
                Err(NumberError::Malformed(s.to_string())),
                "{}",
                s
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Number(-45.).to_string(), "-45");
        assert_eq!(Number(3.5).to_string(), "3.5");
        assert_eq!(Number(120.).to_string(), "120");
    }
}
