//! Named character literals (`#\newline`, `#\space`).

const NAMED: &[(&str, char)] = &[("newline", '\n'), ("space", ' ')];


/// Character denoted by the text following `#\`.
///
/// A known name maps to its character; any other non-empty text denotes its
/// first character.
pub fn from_literal(text: &str) -> Option<char> {
    for (name, c) in NAMED {
        if *name == text {
            return Some(*c);
        }
    }
    text.chars().next()
}

/// Readable literal form of c, e.g. `#\a` or `#\newline`.
pub fn to_literal(c: char) -> String {
    for (name, named) in NAMED {
        if *named == c {
            return format!("#\\{}", name);
        }
    }
    format!("#\\{}", c)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named() {
        assert_eq!(from_literal("newline"), Some('\n'));
        assert_eq!(from_literal("space"), Some(' '));
        assert_eq!(to_literal('\n'), "#\\newline");
        assert_eq!(to_literal(' '), "#\\space");
    }

    #[test]
    fn single() {
        assert_eq!(from_literal("a"), Some('a'));
        assert_eq!(from_literal("("), Some('('));
        assert_eq!(from_literal("abc"), Some('a'));
        assert_eq!(from_literal(""), None);
        assert_eq!(to_literal('('), "#\\(");
    }
}
