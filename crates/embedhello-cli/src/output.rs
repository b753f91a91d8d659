//! Terminal output for the embedhello CLI.
//!
//! Program output goes to stdout unstyled; diagnostics go to stderr, colored
//! with the [`console`] crate when stderr is a terminal.

use console::style;

/// Print one block of program output followed by a newline.
pub fn print_block(text: &str) {
    println!("{text}");
}

/// Print an error chain to stderr, prefixed with red `[ERROR]`.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("[ERROR]").red().bold().for_stderr());
}
