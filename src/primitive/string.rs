use std::convert::TryFrom;
use std::fmt;

use super::Primitive;
use crate::sexp::Sexp;


#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LangString(String);

pub trait ToLangString {
    fn to_lang_string(&self) -> LangString;
}

impl LangString {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// Build from the raw text between the quotes of a string literal,
    /// resolving backslash escapes.
    pub fn from_literal_body<S: AsRef<str>>(body: S) -> Self {
        let mut s = String::with_capacity(body.as_ref().len());
        let mut chars = body.as_ref().chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    s.push(Self::unescape_char(escaped));
                }
            } else {
                s.push(c);
            }
        }
        Self(s)
    }

    pub fn unescape_char(c: char) -> char {
        match c {
            'n' => '\n',
            't' => '\t',
            _ => c,
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToLangString for S {
    fn to_lang_string(&self) -> LangString {
        LangString::new(self)
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '"' | '\\' => write!(f, "\\{}", c)?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}

impl TryFrom<Sexp> for LangString {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::LangString(string)) = value {
            Ok(string)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a LangString {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::LangString(string)) = value {
            Ok(string)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes() {
        let s = LangString::from_literal_body(r#"a\"b\\c\nd\te\q"#);
        assert_eq!(s.as_str(), "a\"b\\c\nd\teq");
    }

    #[test]
    fn display_escapes_quotes() {
        let s = LangString::new("say \"hi\"");
        assert_eq!(s.to_string(), r#""say \"hi\"""#);
        assert_eq!(LangString::new("a (b)").to_string(), "\"a (b)\"");
    }
}
