mod common;

use std::convert::TryFrom;

use po::interpreter::{Identity, Interpreter};
use po::list;
use po::parser::{read, ReadErrorKind, Reader};
use po::primitive::{LangString, Number, Symbol, ToSymbol};
use po::sexp::{Cons, Sexp, SexpKind, EMPTY, FALSE, TRUE};


#[test]
fn read_eval_print() {
    let forms = common::results("(#define #x 42) \"done\" #\\newline ()");
    let printed = forms
        .into_iter()
        .map(|form| Identity.eval(form).unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(printed, vec!["(#define #x 42)", "\"done\"", "\n", "()"]);
}

#[test]
fn round_trip_forms() {
    let forms = common::results(
        "123 -45 3.5 #name #t #f #\\a #\\space \"str ing\"
         (#a #b #c)
         (#a (#b #c) #d)
         (() (()) \"(\" #\\) -0.5)",
    );
    assert_eq!(forms.len(), 12);
    for form in &forms {
        assert_eq!(&common::reprint(form), form);
    }
}

#[test]
fn tree_shape() {
    common::setup();
    let sexp = read("(#a (#b #c) #d)").unwrap();

    let outer = <&Cons>::try_from(&sexp).unwrap();
    assert_eq!(<&Symbol>::try_from(outer.car()).unwrap().as_str(), "a");

    let rest = <&Cons>::try_from(outer.cdr()).unwrap();
    let inner = <&Cons>::try_from(rest.car()).unwrap();
    assert_eq!(inner.car(), &Sexp::from("b".to_symbol_or_panic()));
    assert_eq!(
        inner.cdr(),
        &list!("c".to_symbol_or_panic())
    );

    let last = <&Cons>::try_from(rest.cdr()).unwrap();
    assert_eq!(last.car().kind(), SexpKind::Symbol);
    assert!(last.cdr().is_empty_list());
}

#[test]
fn atoms_by_kind() {
    common::setup();
    assert_eq!(Number::try_from(&read("-45").unwrap()), Ok(Number::new(-45.)));
    assert_eq!(char::try_from(&read("#\\newline").unwrap()), Ok('\n'));
    assert_eq!(
        <&LangString>::try_from(&read("\"x y\"").unwrap())
            .unwrap()
            .as_str(),
        "x y"
    );
    assert_eq!(read("#t").unwrap().kind(), SexpKind::True);
}

#[test]
fn singleton_identity_across_reads() {
    common::setup();
    for (input, singleton) in &[("#t", &TRUE), ("#f", &FALSE), ("()", &EMPTY)] {
        let first = read(input).unwrap();
        let second = read(input).unwrap();
        let a = first.as_static().unwrap();
        let b = second.as_static().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, *singleton));
    }
}

#[test]
fn errors() {
    common::setup();
    let cases = vec![
        ("(#a #b", ReadErrorKind::UnterminatedList),
        ("\"abc", ReadErrorKind::UnterminatedString),
        (")", ReadErrorKind::UnexpectedCloseParen),
        ("zzz", ReadErrorKind::InvalidAtom("zzz".to_string())),
    ];
    for (input, kind) in cases {
        assert_eq!(read(input).unwrap_err().kind(), &kind, "{}", input);
    }
    assert_eq!(
        read("#zzz").unwrap(),
        Sexp::from("zzz".to_symbol_or_panic())
    );
}

#[test]
fn failed_read_leaves_input_reusable() {
    common::setup();
    let mut buffer = String::from("(#a \"b");
    assert!(read(&buffer).unwrap_err().is_incomplete());

    buffer.push_str("\")");
    assert_eq!(
        read(&buffer).unwrap(),
        list!("a".to_symbol_or_panic(), LangString::new("b"))
    );
}

#[test]
fn reader_continues_per_form() {
    common::setup();
    let mut reader = Reader::new("1 (2 3)\n#\\x");
    assert_eq!(reader.read_form().unwrap(), Some(Sexp::number(1.)));
    assert_eq!(reader.read_form().unwrap(), Some(list!(2., 3.)));
    assert_eq!(reader.read_form().unwrap(), Some(Sexp::from('x')));
    assert_eq!(reader.read_form().unwrap(), None);
}

#[test]
fn constructing_symbols() {
    assert!(Symbol::new("t").is_err());
    assert!(Sexp::symbol("ok").is_ok());
}
