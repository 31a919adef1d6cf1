use std::fmt;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// Any non-paren token, including string and character literals.
    Atom,
}

/// Span of the input a token covers, plus where it starts.
///
/// Line is 1-based, col is the 0-based char offset within that line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: usize,
    pub col: usize,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.text, self.line, self.col)
    }
}
