//! Interactive isotope separation calculator.
//!
//! Runs a console session on stdin/stdout. Set `RUST_LOG=debug` to trace
//! the computed parameters on stderr.

use std::io;

use isotope_separation::shell::Session;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("starting isotope separation demo");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
