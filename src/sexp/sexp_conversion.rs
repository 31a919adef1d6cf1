//! Conversions into Sexp, plus the list! macro built on them.

use super::cons::Cons;
use super::cons_list::ConsList;
use super::sexp::{Constant, HeapSexp, Sexp};
use crate::primitive::{LangString, Number, Primitive, Symbol};


/// Returns the elements as a proper Sexp list.
///
/// Elements must implement Into<Sexp>; nest list! calls for sublists.
///
/// Example:
///   list!(a, list!(b, c), d)
#[macro_export]
macro_rules! list {
    () => {
        <$crate::sexp::Sexp>::default()
    };
    ($elem:expr $(, $tail:expr)* $(,)?) => {
        <$crate::sexp::Sexp>::from($crate::sexp::Cons::new(
            <$crate::sexp::Sexp>::from($elem),
            $crate::list!($($tail),*),
        ))
    };
}


impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

impl From<HeapSexp> for Sexp {
    fn from(sexp: HeapSexp) -> Self {
        *sexp
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Constant> for Sexp {
    fn from(constant: Constant) -> Self {
        Sexp::Constant(constant)
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::boolean(b)
    }
}

impl From<f64> for Sexp {
    fn from(value: f64) -> Self {
        Sexp::number(value)
    }
}

impl From<char> for Sexp {
    fn from(c: char) -> Self {
        Sexp::Primitive(Primitive::Char(c))
    }
}

// Impl From<T> over Primitive subtypes.
macro_rules! sexp_from {
    ($from:ident, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::$from(elem))
            }
        }
        impl From<$from> for HeapSexp {
            fn from(elem: $from) -> Self {
                Self::new(Sexp::Primitive(Primitive::$from(elem)))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, Symbol, LangString,);


#[cfg(test)]
mod tests {
    use crate::primitive::{Number, ToSymbol};
    use crate::sexp::{Cons, Sexp};

    #[test]
    fn list_macro_nests() {
        let expected = Sexp::cons(
            Sexp::number(1.),
            Sexp::cons(
                Sexp::cons(Sexp::from('a'), Sexp::cons(Sexp::from('b'), Sexp::default())),
                Sexp::default(),
            ),
        );
        assert_eq!(list!(1., list!('a', 'b')), expected);
        assert!(list!().is_empty_list());
    }

    #[test]
    fn vec_into_sexp() {
        let expected = list!("test".to_symbol_or_panic(), "ing".to_symbol_or_panic());
        let v = vec![
            "test".to_symbol_or_panic(),
            "ing".to_symbol_or_panic(),
        ];
        assert_eq!(<Sexp>::from(v), expected);
        assert!(<Sexp>::from(Vec::<Number>::new()).is_empty_list());
    }

    #[test]
    fn cons_into_sexp() {
        let cons = Cons::new(Sexp::from(true), Sexp::from(false));
        assert_eq!(Sexp::from(cons.clone()), Sexp::Cons(cons));
    }
}
