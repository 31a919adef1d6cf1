use std::convert::TryFrom;
use std::fmt;

use super::Primitive;
use crate::sexp::Sexp;


/// Identifier written as `#word`; compared by content.
///
/// The words `t` and `f` are reserved for the booleans, and words starting
/// with `\` for characters, so neither can name a Symbol.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    Reserved(String),
    InvalidChar(String, char),
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        let s = sym.as_ref();
        match s {
            "" => return Err(SymbolError::Empty),
            "t" | "f" => return Err(SymbolError::Reserved(s.to_string())),
            // `#\...` reads as a character.
            _ if s.starts_with('\\') => return Err(SymbolError::Reserved(s.to_string())),
            _ => {}
        }
        if let Some(c) = s
            .chars()
            .find(|c| c.is_whitespace() || *c == '(' || *c == ')' || *c == '"')
        {
            return Err(SymbolError::InvalidChar(s.to_string(), c));
        }

        Ok(Symbol(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<Sexp> for Symbol {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Symbol(symbol)) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Symbol {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Symbol(symbol)) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
