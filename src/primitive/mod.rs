//! Representation of primitives.

use std::convert::TryFrom;
use std::fmt;

pub mod character;
pub mod number;
pub mod string;
pub mod symbol;

pub use self::number::Number;
pub use self::string::{LangString, ToLangString};
pub use self::symbol::{Symbol, ToSymbol};

pub mod prelude {
    pub use super::{LangString, Number, Primitive, Symbol, ToLangString, ToSymbol};
}

use crate::sexp::Sexp;


/// Atomic (non-list, non-constant) values. Each owns its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
    LangString(LangString),
    Char(char),
}


impl fmt::Display for Primitive {
    /// Alternate form ({:#}) writes characters in readable `#\c` syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::LangString(s) => write!(f, "{}", s),
            Primitive::Char(c) => {
                if f.alternate() {
                    write!(f, "{}", character::to_literal(*c))
                } else {
                    write!(f, "{}", c)
                }
            }
        }
    }
}

impl TryFrom<Sexp> for Primitive {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Primitive {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for char {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Char(c)) = value {
            Ok(*c)
        } else {
            Err(value)
        }
    }
}
