use po::parser::Reader;
use po::sexp::Sexp;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn results<S: AsRef<str>>(s: S) -> Vec<Sexp> {
    setup();
    Reader::new(s.as_ref())
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

/// Print in readable form and read back.
pub fn reprint(sexp: &Sexp) -> Sexp {
    format!("{:#}", sexp).parse().unwrap()
}
