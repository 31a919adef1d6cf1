use std::convert::TryFrom;
use std::fmt;

use super::cons_list::ConsList;
use super::sexp::{HeapSexp, Sexp};


/// Ordered pair owning both of its children.
///
/// Proper lists are chains of Cons linked through cdr and terminated by the
/// Empty constant.
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new<A: Into<HeapSexp>, D: Into<HeapSexp>>(car: A, cdr: D) -> Cons {
        Cons {
            car: car.into(),
            cdr: cdr.into(),
        }
    }

    pub fn car(&self) -> &Sexp {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> &Sexp {
        self.cdr.as_ref()
    }

    pub fn consume(mut self) -> (HeapSexp, HeapSexp) {
        let car = std::mem::take(&mut self.car);
        let cdr = std::mem::take(&mut self.cdr);
        (car, cdr)
    }
}


// Unlink the cdr chain one cell at a time so long lists don't recurse.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = std::mem::take(self.cdr.as_mut());
        while let Sexp::Cons(mut cons) = next {
            next = std::mem::take(cons.cdr.as_mut());
        }
    }
}

impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut rest = ConsList::new();
        let mut next = self.cdr();
        while let Sexp::Cons(cons) = next {
            rest.append(cons.car().clone());
            next = cons.cdr();
        }
        Cons::new(self.car().clone(), rest.release_with_tail(next.clone()))
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.car() != b.car() {
                return false;
            }
            match (a.cdr(), b.cdr()) {
                (Sexp::Cons(x), Sexp::Cons(y)) => {
                    a = x;
                    b = y;
                }
                (x, y) => return x == y,
            }
        }
    }
}

impl fmt::Debug for Cons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cons")
            .field("car", self.car())
            .field("cdr", self.cdr())
            .finish()
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Cons {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<HeapSexp> for Cons {
    type Error = HeapSexp;

    fn try_from(value: HeapSexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = *value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
