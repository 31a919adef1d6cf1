//! Module for breaking po text into tokens.
//!
//! Tokens borrow from the input rather than copying or splitting it, so the
//! input stays intact and can be inspected after a failed read.

use std::iter::Peekable;
use std::str::CharIndices;

use log::{debug, trace};

use super::token::{Token, TokenKind};
use crate::parser::{ReadError, ReadErrorKind};


/// Left-to-right scanner over a single input buffer.
///
/// Yields tokens until the input is exhausted or the first error, after
/// which it yields nothing.
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    failed: bool,

    line: usize,
    col: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            failed: false,

            line: 1,
            col: 0,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some((i, _)) => *i,
            None => self.input.len(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn scan_atom(&mut self) {
        if self.bump() == Some('#') && self.peek() == Some('\\') {
            self.bump();
            self.scan_char_name();
            return;
        }

        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.bump();
        }
    }

    // Either one alphabetic word (for named characters) or exactly one char
    // of any kind, including whitespace and parens.
    fn scan_char_name(&mut self) {
        match self.peek() {
            Some(c) if c.is_alphabetic() => {
                while let Some(c) = self.peek() {
                    if !c.is_alphabetic() {
                        break;
                    }
                    self.bump();
                }
            }
            Some(_) => {
                self.bump();
            }
            None => {}
        }
    }

    fn scan_string(&mut self) -> Result<(), ReadErrorKind> {
        // Opening quote.
        self.bump();
        loop {
            match self.bump() {
                Some('"') => return Ok(()),
                Some('\\') => {
                    if self.bump().is_none() {
                        break;
                    }
                }
                Some(_) => {}
                None => break,
            }
        }
        Err(ReadErrorKind::UnterminatedString)
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}


impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.skip_whitespace();
        let c = self.peek()?;
        let start = self.offset();
        let (line, col) = (self.line, self.col);

        let kind = match c {
            '(' => {
                self.bump();
                TokenKind::LeftParen
            }
            ')' => {
                self.bump();
                TokenKind::RightParen
            }
            '"' => {
                if let Err(kind) = self.scan_string() {
                    debug!("string opened @ ({}, {}) never closed", line, col);
                    self.failed = true;
                    return Some(Err(ReadError::new(kind, line, col)));
                }
                TokenKind::Atom
            }
            _ => {
                self.scan_atom();
                TokenKind::Atom
            }
        };

        let input = self.input;
        let token = Token {
            kind,
            text: &input[start..self.offset()],
            line,
            col,
        };
        trace!("token: {}", token);
        Some(Ok(token))
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
