//! po REPL.
//!
//! Run interactively as:      `RUST_LOG=info cargo run`.
//! Echo a file's forms as:    `cargo run -- path/to/forms.po`.

use std::io;
use std::path::Path;

use clap::{Arg, Command};
use log::LevelFilter;

use po::interpreter::Identity;
use po::repl::{Repl, ReplConfig};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("po")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read-print loop over po S-expressions")
        .arg(
            Arg::new("file")
                .value_name("SRC_FILE")
                .index(1)
                .help("Read forms from this file instead of the terminal"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("PATH")
                .takes_value(true)
                .help("Load and save line history at this path"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .takes_value(true)
                .help("Prompt shown when waiting for a new form"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored error output"),
        )
        .get_matches();

    let mut config = ReplConfig::default().with_color(!matches.is_present("no-color"));
    if let Some(prompt) = matches.value_of("prompt") {
        config = config.with_prompt(prompt);
    }
    if let Some(path) = matches.value_of("history") {
        config = config.with_history(path);
    }

    let mut repl = Repl::new(config, Identity);
    let result = match matches.value_of("file") {
        Some(path) => repl.run_file(Path::new(path), &mut io::stdout().lock()),
        None => repl.run_interactive(),
    };
    result.map_err(|err| err.to_string())
}
