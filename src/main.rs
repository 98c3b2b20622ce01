//! heroesdb entry point
//!
//! Sets up logging, then delegates to the CLI module. Errors are printed
//! to stderr and the process exits non-zero.

use heroesdb::{cli, logging};

fn main() {
    logging::init();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
