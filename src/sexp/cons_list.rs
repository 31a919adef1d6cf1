//! Module for constructing lists as S-exps in element order, without building
//! in reverse at the call site or tolerating O(n) insertion.

use super::cons::Cons;
use super::sexp::Sexp;


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Sexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList { elems: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list of the appended elements; the Empty constant if none.
    pub fn release(self) -> Sexp {
        self.release_with_tail(Sexp::default())
    }

    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        let mut list = tail;
        for elem in self.elems.into_iter().rev() {
            list = Cons::new(elem, list).into();
        }
        list
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Number;

    #[test]
    fn empty_release_is_constant() {
        let list = ConsList::new();
        assert!(list.is_empty());
        assert!(list.release().is_empty_list());
    }

    #[test]
    fn element_order() {
        let mut list = ConsList::new();
        for i in 1..=3 {
            list.append(Number::from(i));
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.release(), list!(1., 2., 3.));
    }

    #[test]
    fn with_tail() {
        let mut list = ConsList::new();
        list.append(1.);
        let expected: Sexp = Cons::new(Sexp::from(1.), Sexp::from(2.)).into();
        assert_eq!(list.release_with_tail(2.0.into()), expected);
    }
}
