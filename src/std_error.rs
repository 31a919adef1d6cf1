use crate::error::{Error, ErrorKind};
use crate::primitive::ToLangString;
use crate::sexp::Sexp;


/// Encapsulation of Errors in rust's std module.
#[derive(Debug)]
pub enum StdError {
    Io(std::io::Error),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Sexp {
        match self {
            Self::Io(err) => list!(
                "StdError".to_lang_string(),
                "IoError".to_lang_string(),
                err.to_string().to_lang_string(),
            ),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with po::Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(StdError::Io(err))
    }
}
