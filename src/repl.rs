/// The REPL (Read-Eval-Print-Loop) module.
pub mod history;

use crate::session::Session;
use crate::{console, errors, script};
use history::History;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = r#"Commands run one per line, without a leading count.
Type 'help' or '\h' for help."#;

const HELP: &str = r#"List of all commands:

insert "NAME" ID   Insert a record. NAME is letters and spaces, ID is 8 digits.
remove ID          Remove the record with this id.
removeInorder N    Remove the N-th record of an in-order traversal (from 0).
search ID          Print the name stored under ID.
search "NAME"      Print the id of every record named NAME.
printInorder       Print names in-order.
printPreorder      Print names pre-order.
printPostorder     Print names post-order.
printLevelCount    Print the number of levels in the tree.

help      (\h) Display this help.
history   (\H) Show command history.
version   (\v) Show version information.
quit      (\q) Quit."#;

/// Starts an interactive session on stdin/stdout.
pub fn start(session: &Session) -> Result<(), errors::Error> {
    info!(session_id = %session.id, "Starting REPL session...");
    let history_path = history::home_file(&format!(".{}_history", NAME));
    if history_path.is_none() {
        warn!("Home directory not found; history will not be saved.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut repl = Repl::new(session, History::open(history_path));
    let result = repl.run(stdin.lock(), &mut stdout);

    session.close()?;
    info!("REPL session ended.");
    result
}

struct Repl<'a> {
    session: &'a Session,
    history: History,
}

impl<'a> Repl<'a> {
    fn new(session: &'a Session, history: History) -> Self {
        debug!(entries = history.entries().len(), "Loaded history.");
        Self { session, history }
    }

    /// Reads commands until `quit` or end of input.
    fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<(), errors::Error> {
        console::echo_line(out, &format!("Welcome to the {} {} REPL.", NAME, VERSION))?;
        console::echo_line(out, BANNER)?;

        let mut line = String::new();
        loop {
            console::print_prompt(out)?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let cmd = line.trim();
            if cmd.is_empty() {
                continue;
            }
            if let Err(e) = self.history.push(cmd) {
                warn!("Failed to save history. {}", e);
            }

            match cmd {
                "quit" | "exit" | "\\q" => break,
                "help" | "\\h" | "?" | "\\?" => console::echo_line(out, HELP)?,
                "version" | "\\v" => {
                    console::echo_line(out, &format!("{} version: {}", NAME, VERSION))?
                }
                "history" | "\\H" => console::echo_lines(out, self.history.entries())?,
                _ => self.handle_command(cmd, out)?,
            }
        }

        console::echo_line(out, "Bye")?;
        Ok(())
    }

    fn handle_command<W: Write>(&self, cmd: &str, out: &mut W) -> io::Result<()> {
        match script::execute_line(self.session, cmd) {
            Ok(outcome) => console::echo_lines(out, &outcome.render()),
            Err(e) => console::echo_error(out, &e.to_string()),
        }
    }
}
