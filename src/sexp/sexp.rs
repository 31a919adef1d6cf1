//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use log::trace;

use super::cons::Cons;
use crate::parser::{read, ReadError};
use crate::primitive::prelude::*;
use crate::primitive::symbol::SymbolError;


/// S-exp on the heap.
///
/// Cons stores its children as HeapSexps, so this is also the unit of
/// ownership transfer when extending a list.
pub type HeapSexp = Box<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
    Constant(Constant),
}

/// The closed set of singleton values.
///
/// Each variant has exactly one meaning for the life of the process, so
/// testing for one is a variant check rather than a structural comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Constant {
    True,
    False,
    Empty,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SexpKind {
    Number,
    Symbol,
    Str,
    Char,
    Cons,
    True,
    False,
    Empty,
}

/// Process-wide singletons. Never mutated and never destroyed.
pub static TRUE: Sexp = Sexp::Constant(Constant::True);
pub static FALSE: Sexp = Sexp::Constant(Constant::False);
pub static EMPTY: Sexp = Sexp::Constant(Constant::Empty);

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

#[derive(Default)]
pub struct SexpIntoIter {
    current: Option<HeapSexp>,
}


impl Sexp {
    pub fn number(value: f64) -> Self {
        Number::new(value).into()
    }

    pub fn symbol<S: AsRef<str>>(word: S) -> Result<Self, SymbolError> {
        Ok(Symbol::new(word)?.into())
    }

    pub fn string<S: AsRef<str>>(s: S) -> Self {
        LangString::new(s).into()
    }

    pub fn character(c: char) -> Self {
        Primitive::Char(c).into()
    }

    pub fn cons<A: Into<HeapSexp>, D: Into<HeapSexp>>(car: A, cdr: D) -> Self {
        Cons::new(car, cdr).into()
    }

    pub fn boolean(b: bool) -> Self {
        if b {
            Sexp::Constant(Constant::True)
        } else {
            Sexp::Constant(Constant::False)
        }
    }

    pub fn kind(&self) -> SexpKind {
        match self {
            Sexp::Primitive(Primitive::Number(_)) => SexpKind::Number,
            Sexp::Primitive(Primitive::Symbol(_)) => SexpKind::Symbol,
            Sexp::Primitive(Primitive::LangString(_)) => SexpKind::Str,
            Sexp::Primitive(Primitive::Char(_)) => SexpKind::Char,
            Sexp::Cons(_) => SexpKind::Cons,
            Sexp::Constant(Constant::True) => SexpKind::True,
            Sexp::Constant(Constant::False) => SexpKind::False,
            Sexp::Constant(Constant::Empty) => SexpKind::Empty,
        }
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Sexp::Constant(Constant::Empty))
    }

    /// The process-wide instance of a singleton value, for identity checks.
    pub fn as_static(&self) -> Option<&'static Sexp> {
        match self {
            Sexp::Constant(Constant::True) => Some(&TRUE),
            Sexp::Constant(Constant::False) => Some(&FALSE),
            Sexp::Constant(Constant::Empty) => Some(&EMPTY),
            _ => None,
        }
    }

    /// Release this tree and everything it owns. Singletons are untouched.
    pub fn destroy(self) {
        if let Some(constant) = self.as_static() {
            trace!("destroy: skipping singleton {}", constant);
            return;
        }
        drop(self);
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }

    /// Write self, using write_primitive for every Primitive encountered.
    pub fn write_list<W, F>(&self, w: &mut W, write_primitive: &mut F) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Primitive) -> fmt::Result,
    {
        match self {
            Sexp::Primitive(primitive) => return write_primitive(w, primitive),
            Sexp::Constant(constant) => return write!(w, "{}", constant),
            Sexp::Cons(_) => {}
        }

        write!(w, "(")?;
        for (pos, (val, from_cons)) in self.iter().enumerate() {
            if pos > 0 {
                if from_cons {
                    write!(w, " ")?;
                } else {
                    write!(w, " . ")?;
                }
            }
            val.write_list(w, write_primitive)?;
        }
        write!(w, ")")
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is not the car of a Cons: either a
    // top-level atom or the non-Empty tail of an improper list. Such an
    // element is necessarily the last one.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Constant(Constant::Empty) => {
                self.current = None;
                None
            }
            _ => {
                self.current = None;
                Some((sexp, false))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See impl Iterator blocks above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Iterator for SexpIntoIter {
    // (Sexp, from_cons). See SexpIter.
    type Item = (HeapSexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current.take()?;
        match *sexp {
            Sexp::Cons(cons) => {
                let (car, cdr) = cons.consume();
                self.current = Some(cdr);
                Some((car, true))
            }
            Sexp::Constant(Constant::Empty) => None,
            _ => Some((sexp, false)),
        }
    }
}

impl IntoIterator for HeapSexp {
    // (Sexp, from_cons). See impl Iterator blocks above for more info.
    type Item = (HeapSexp, bool);
    type IntoIter = SexpIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SexpIntoIter {
            current: Some(self),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::True => write!(f, "#t"),
            Constant::False => write!(f, "#f"),
            Constant::Empty => write!(f, "()"),
        }
    }
}

impl fmt::Display for Sexp {
    /// Alternate form ({:#}) writes characters as readable literals, making
    /// the output readable back into an equal Sexp.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_list(f, &mut |writer, primitive| write!(writer, "{:#}", primitive))
        } else {
            self.write_list(f, &mut |writer, primitive| write!(writer, "{}", primitive))
        }
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self)
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Constant(Constant::Empty)
    }
}

impl FromStr for Sexp {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read(s)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
