//! Module for reading po tokens into Sexp trees.
//!
//! Standard recursive descent over the token stream, strictly left to right
//! with no backtracking. Every node built during a read is owned by the
//! reader until the finished form is handed to the caller; on error, the
//! partial tree is dropped before the error is returned.

use std::fmt;

use derive_getters::Getters;
use log::debug;

use crate::error::{Error, ErrorKind};
use crate::primitive::{character, LangString, Number, Symbol, ToLangString};
use crate::sexp::{ConsList, Sexp};
use crate::token::{Token, TokenKind, Tokenizer};

const MAX_DEPTH: usize = 512;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReadErrorKind {
    UnterminatedString,
    UnterminatedList,
    UnexpectedCloseParen,
    InvalidAtom(String),
    DepthOverflow,
    EmptyInput,
    TrailingInput,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct ReadError {
    kind: ReadErrorKind,
    line: usize,
    col: usize,
}

impl ReadError {
    pub fn new(kind: ReadErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    fn at(kind: ReadErrorKind, token: &Token) -> Self {
        Self::new(kind, token.line, token.col)
    }

    /// Whether more input could complete the form, rather than the input
    /// being wrong no matter what follows.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self.kind,
            ReadErrorKind::UnterminatedString | ReadErrorKind::UnterminatedList
        )
    }
}


/// Reader of successive top-level forms from one input buffer.
///
/// As an Iterator, yields each form in order and stops after the first error.
pub struct Reader<'a> {
    tokens: Tokenizer<'a>,
    depth: usize,
    failed: bool,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::from_tokens(Tokenizer::new(input))
    }

    pub fn from_tokens(tokens: Tokenizer<'a>) -> Self {
        Self {
            tokens,
            depth: 0,
            failed: false,
        }
    }

    /// Read the next top-level form, or None if only whitespace remains.
    pub fn read_form(&mut self) -> Result<Option<Sexp>, ReadError> {
        let token = match self.tokens.next() {
            Some(token) => token?,
            None => return Ok(None),
        };
        let sexp = self.read_form_from(token)?;
        debug!("read form: {:?}", sexp);
        Ok(Some(sexp))
    }

    fn read_form_from(&mut self, token: Token<'a>) -> Result<Sexp, ReadError> {
        match token.kind {
            TokenKind::LeftParen => self.read_list(token),
            TokenKind::RightParen => Err(ReadError::at(
                ReadErrorKind::UnexpectedCloseParen,
                &token,
            )),
            TokenKind::Atom => read_atom(&token),
        }
    }

    // Called with the opening paren already consumed.
    fn read_list(&mut self, open: Token<'a>) -> Result<Sexp, ReadError> {
        if self.depth >= MAX_DEPTH {
            return Err(ReadError::at(ReadErrorKind::DepthOverflow, &open));
        }

        self.depth += 1;
        let result = self.read_elements(&open);
        self.depth -= 1;
        result
    }

    fn read_elements(&mut self, open: &Token<'a>) -> Result<Sexp, ReadError> {
        let mut list = ConsList::new();
        loop {
            let token = match self.tokens.next() {
                Some(token) => token?,
                None => return Err(ReadError::at(ReadErrorKind::UnterminatedList, open)),
            };
            if token.kind == TokenKind::RightParen {
                return Ok(list.release());
            }
            list.append(self.read_form_from(token)?);
        }
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<Sexp, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_form() {
            Ok(sexp) => sexp.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}


/// Classify a single atom token by its leading characters.
fn read_atom(token: &Token) -> Result<Sexp, ReadError> {
    let text = token.text;
    let invalid = || {
        Err(ReadError::at(
            ReadErrorKind::InvalidAtom(text.to_string()),
            token,
        ))
    };

    match text.chars().next() {
        Some('"') => {
            // Tokenizer guarantees a closing quote.
            let body = &text[1..text.len() - 1];
            Ok(LangString::from_literal_body(body).into())
        }
        Some('#') => {
            let word = &text[1..];
            if let Some(name) = word.strip_prefix('\\') {
                return match character::from_literal(name) {
                    Some(c) => Ok(c.into()),
                    None => invalid(),
                };
            }
            match word {
                "t" => Ok(Sexp::boolean(true)),
                "f" => Ok(Sexp::boolean(false)),
                _ => match Symbol::new(word) {
                    Ok(symbol) => Ok(symbol.into()),
                    Err(_) => invalid(),
                },
            }
        }
        Some(c) if c.is_ascii_digit() || c == '-' => match text.parse::<Number>() {
            Ok(num) => Ok(num.into()),
            Err(_) => invalid(),
        },
        _ => invalid(),
    }
}

/// Read exactly one form from input.
pub fn read(input: &str) -> Result<Sexp, ReadError> {
    let mut reader = Reader::new(input);
    let sexp = match reader.read_form()? {
        Some(sexp) => sexp,
        None => return Err(ReadError::new(ReadErrorKind::EmptyInput, 1, 0)),
    };
    match reader.tokens.next() {
        None => Ok(sexp),
        Some(Ok(token)) if token.kind == TokenKind::RightParen => Err(ReadError::at(
            ReadErrorKind::UnexpectedCloseParen,
            &token,
        )),
        Some(Ok(token)) => Err(ReadError::at(ReadErrorKind::TrailingInput, &token)),
        Some(Err(err)) => Err(err),
    }
}

/// Read every form in input.
pub fn parse(input: &str) -> Result<Vec<Sexp>, ReadError> {
    Reader::new(input).collect()
}


impl fmt::Display for ReadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadErrorKind::UnterminatedString => write!(f, "UnterminatedString"),
            ReadErrorKind::UnterminatedList => write!(f, "UnterminatedList"),
            ReadErrorKind::UnexpectedCloseParen => write!(f, "UnexpectedCloseParen"),
            ReadErrorKind::InvalidAtom(atom) => write!(f, "InvalidAtom({})", atom),
            ReadErrorKind::DepthOverflow => write!(f, "DepthOverflow"),
            ReadErrorKind::EmptyInput => write!(f, "EmptyInput"),
            ReadErrorKind::TrailingInput => write!(f, "TrailingInput"),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Read Error]: {} @ ({}, {})", self.kind, self.line, self.col)
    }
}

impl std::error::Error for ReadError {}

impl ErrorKind for ReadError {
    fn reify(&self) -> Sexp {
        list!(
            "ReadError".to_lang_string(),
            self.kind.to_string().to_lang_string(),
            self.line as f64,
            self.col as f64,
        )
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Error::new(err)
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
