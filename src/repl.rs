//! Read-eval-print loop over an Interpreter.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::*;
use derive_getters::Getters;
use log::{info, warn};

use crate::error::Error;
use crate::interpreter::Interpreter;
use crate::parser::Reader;
use crate::sexp::Sexp;
use crate::token::cli_stream::CliStream;


#[derive(Clone, Debug, Getters)]
pub struct ReplConfig {
    prompt: String,
    continuation_prompt: String,
    color: bool,
    history: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            continuation_prompt: ".. ".to_string(),
            color: true,
            history: None,
        }
    }
}

impl ReplConfig {
    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_history<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.history = Some(path.into());
        self
    }
}


pub struct Repl<I: Interpreter> {
    config: ReplConfig,
    interpreter: I,
}

impl<I: Interpreter> Repl<I> {
    pub fn new(config: ReplConfig, interpreter: I) -> Self {
        Self {
            config,
            interpreter,
        }
    }

    /// Interactive loop on the terminal, until EOF.
    pub fn run_interactive(&mut self) -> Result<(), Error> {
        let mut stream = CliStream::new(
            self.config.prompt.as_str(),
            self.config.continuation_prompt.as_str(),
        );
        if let Some(path) = &self.config.history {
            if let Err(err) = stream.editor_mut().load_history(path) {
                info!("No history loaded from {}: {}", path.display(), err);
            }
        }

        let stdout = io::stdout();
        for input in &mut stream {
            let mut out = stdout.lock();
            self.run_input(&input, &mut out)?;
            out.flush()?;
        }

        if let Some(path) = &self.config.history {
            if let Err(err) = stream.editor_mut().save_history(path) {
                warn!("Saving history to {} failed: {}", path.display(), err);
            }
        }
        Ok(())
    }

    /// Read, evaluate and print every form in input, one result per line.
    ///
    /// Read and eval errors are printed and don't stop the loop; only
    /// failures to write to out are returned.
    pub fn run_input<W: Write>(&mut self, input: &str, out: &mut W) -> io::Result<()> {
        for result in Reader::new(input) {
            match result {
                Ok(sexp) => match self.interpreter.eval(sexp) {
                    Ok(val) => self.print_result(val, out)?,
                    Err(err) => self.print_error(&err, out)?,
                },
                Err(err) => self.print_error(&err.into(), out)?,
            }
        }
        Ok(())
    }

    /// Echo each form of the file at path along with its result.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<(), Error> {
        let contents = fs::read_to_string(path)?;
        info!("Reading forms from {}", path.display());

        for result in Reader::new(&contents) {
            let sexp = match result {
                Ok(sexp) => sexp,
                Err(err) => {
                    self.print_error(&err.into(), out)?;
                    break;
                }
            };
            writeln!(out, "> {:#}", sexp)?;
            match self.interpreter.eval(sexp) {
                Ok(val) => {
                    write!(out, "-> ")?;
                    self.print_result(val, out)?;
                }
                Err(err) => self.print_error(&err, out)?,
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn print_result<W: Write>(&self, val: Sexp, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", val)?;
        val.destroy();
        Ok(())
    }

    fn print_error<W: Write>(&self, err: &Error, out: &mut W) -> io::Result<()> {
        let text = err.kind().reify().to_string();
        if self.config.color {
            writeln!(out, "{}", text.as_str().red())
        } else {
            writeln!(out, "{}", text)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Identity;

    fn run(input: &str) -> String {
        let mut repl = Repl::new(ReplConfig::default().with_color(false), Identity);
        let mut out = Vec::new();
        repl.run_input(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn echoes_each_form() {
        assert_eq!(run("1 #t (#a \"b\" #\\c)"), "1\n#t\n(#a \"b\" c)\n");
        assert_eq!(run("()\n-45 3.5"), "()\n-45\n3.5\n");
    }

    #[test]
    fn reports_errors_and_stops_input() {
        assert_eq!(
            run("1 ) 2"),
            "1\n(\"ReadError\" \"UnexpectedCloseParen\" 1 2)\n"
        );
        assert_eq!(
            run("(#a"),
            "(\"ReadError\" \"UnterminatedList\" 1 0)\n"
        );
    }

    #[test]
    fn config() {
        let config = ReplConfig::default()
            .with_prompt("po> ")
            .with_history("/tmp/po_history");
        assert_eq!(config.prompt(), "po> ");
        assert_eq!(config.continuation_prompt(), ".. ");
        assert!(*config.color());
        assert_eq!(
            config.history().as_deref(),
            Some(Path::new("/tmp/po_history"))
        );
    }
}
