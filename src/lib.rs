//! po: a reader for a small S-expression language.
//!
//! Text is tokenized, read into Sexp trees by recursive descent, handed to an
//! Interpreter, and printed back through Display.
//!
//! Note that the library only logs through the `log` facade; executables
//! should set up a logger. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod sexp;

pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod std_error;
pub mod token;

#[cfg(feature = "cli")]
pub mod repl;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::interpreter::{Identity, Interpreter};
    pub use crate::parser::{parse, read, ReadError, ReadErrorKind, Reader};
    pub use crate::primitive::prelude::*;
    pub use crate::sexp::{Cons, ConsList, Constant, HeapSexp, Sexp, SexpKind};
    pub use crate::std_error::StdError;
    // Macros.
    pub use crate::list;
}
