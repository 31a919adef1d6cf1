use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::parser::Reader;


/// Interactive source of complete inputs.
///
/// Lines are accumulated until they form input that more lines could not
/// change: either every form is complete or the text is already wrong.
pub struct CliStream {
    editor: Editor<()>,
    prompt: String,
    continuation_prompt: String,

    curr_expr: String,
}

impl CliStream {
    pub fn new<S: Into<String>, C: Into<String>>(prompt: S, continuation_prompt: C) -> Self {
        CliStream {
            editor: Editor::<()>::new(),
            prompt: prompt.into(),
            continuation_prompt: continuation_prompt.into(),

            curr_expr: String::default(),
        }
    }

    pub fn editor_mut(&mut self) -> &mut Editor<()> {
        &mut self.editor
    }
}

/// Whether input stops partway through a form.
pub fn is_incomplete(input: &str) -> bool {
    match Reader::new(input).find_map(|result| result.err()) {
        Some(err) => err.is_incomplete(),
        None => false,
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let prompt = if self.curr_expr.is_empty() {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;

                    if self.curr_expr.trim().is_empty() {
                        self.curr_expr.clear();
                        continue;
                    }
                    if is_incomplete(&self.curr_expr) {
                        continue;
                    }

                    let expr = std::mem::take(&mut self.curr_expr);
                    self.editor.add_history_entry(expr.as_str());
                    return Some(expr);
                }
                Err(ReadlineError::Interrupted) => {
                    // Enable ^C to cancel an expression mid-read.
                    println!("^C");
                    self.curr_expr.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.curr_expr.clear();
                    return None;
                }
                Err(err) => {
                    warn!("[Readline Error]: {:?}", err);
                    self.curr_expr.clear();
                    return None;
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_inputs() {
        assert!(is_incomplete("(#a"));
        assert!(is_incomplete("(#a\n(#b)"));
        assert!(is_incomplete("\"abc"));
        assert!(is_incomplete("1 (2"));
    }

    #[test]
    fn complete_or_wrong_inputs() {
        assert!(!is_incomplete("(#a)"));
        assert!(!is_incomplete("1 2 3"));
        assert!(!is_incomplete(")"));
        assert!(!is_incomplete("(bad"));
        assert!(!is_incomplete(""));
    }
}
