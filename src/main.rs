use std::io;

use anyhow::Result;
use tracing::info;

use gambit_term::Session;

fn main() -> Result<()> {
    // stdout carries the game transcript; logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut session = Session::new(io::stdout());
    session.run(stdin.lock())?;
    Ok(())
}
