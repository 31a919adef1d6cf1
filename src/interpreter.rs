//! Seam between the reader and whatever gives read forms meaning.

use log::trace;

use crate::error::Error;
use crate::sexp::Sexp;


/// Evaluator of read forms. Takes ownership of the tree it is given and
/// returns ownership of its result.
pub trait Interpreter {
    fn eval(&mut self, structure: Sexp) -> Result<Sexp, Error>;
}


/// Interpreter whose meaning of every form is the form itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Interpreter for Identity {
    fn eval(&mut self, structure: Sexp) -> Result<Sexp, Error> {
        trace!("eval: {:?}", structure);
        Ok(structure)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read;

    #[test]
    fn identity() {
        let sexp = read("(#a (1 2) \"s\")").unwrap();
        assert_eq!(Identity.eval(sexp.clone()).unwrap(), sexp);

        let t = Identity.eval(read("#t").unwrap()).unwrap();
        assert!(t.as_static().is_some());
    }
}
