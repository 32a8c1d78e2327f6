//! Command scripts.
//!
//! A script starts with a line holding the number of commands that follow,
//! then one command per line:
//!
//! ```text
//! 3
//! insert "Brandon" 45679999
//! search 45679999
//! printLevelCount
//! ```
//!
//! Every command prints its result, or the single line `unsuccessful`.
pub mod parser;
pub mod statement;
pub mod tokenizer;
pub mod validator;

pub use statement::ScriptCommand;

use crate::command::{self, Outcome, UNSUCCESSFUL};
use crate::session::Session;
use crate::{console, errors};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Parses and executes one command line.
pub fn execute_line(session: &Session, line: &str) -> Result<Outcome, errors::Error> {
    let cmd = parser::parse(line)?;
    command::execute(&session.tree, cmd)
}

/// Executes one command line and returns its output lines.
///
/// Failures are logged and rendered as `unsuccessful`.
pub fn respond(session: &Session, line: &str) -> Vec<String> {
    match execute_line(session, line) {
        Ok(outcome) => outcome.render(),
        Err(e) => {
            debug!(line, error = %e, "Command failed.");
            vec![UNSUCCESSFUL.to_string()]
        }
    }
}

/// Runs a script read from `input`, writing command output to `out`.
///
/// Lines after the announced count are ignored; a script that ends early
/// stops at the last available line.
///
/// # Returns
/// The number of commands executed, or an `errors::Error` if the count line is
/// missing or malformed, or if reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    out: &mut W,
) -> Result<usize, errors::Error> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| err!(Syntax, "Script must start with a command count"))??;
    let count: usize = header.trim().parse()?;
    info!(session_id = %session.id, count, "Running script.");

    let mut executed = 0;
    for line in lines.take(count) {
        let line = line?;
        console::echo_lines(out, &respond(session, &line))?;
        executed += 1;
    }
    if executed < count {
        info!(expected = count, executed, "Script ended early.");
    }
    Ok(executed)
}
