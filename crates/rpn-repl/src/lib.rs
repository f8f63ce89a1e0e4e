//! Line-oriented front end for the RPN calculator.
//!
//! Reads lines from stdin until end of input, feeding each to a single
//! session and printing whatever it emits. End of stream is a graceful
//! shutdown; only a stream fault is an error.

use std::io::{self, BufRead, Write};

use rpn_core::Session;

/// Run the calculator against stdin/stdout until end of input.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line?;
        for printed in session.eval_line(&line) {
            writeln!(out, "{printed}")?;
        }
        out.flush()?;
    }
    Ok(())
}
