#[macro_use]
mod errors;
mod command;
mod console;
mod repl;
mod script;
mod session;
mod tree;

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tree::{RemovePolicy, TreeConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(
    name = "avlroster",
    version = VERSION,
    about = "Height-balanced roster of named 8-digit identifiers.",
    long_about = "Reads a command script from stdin (a count line, then one command per line) \
                  unless a single command, a script file or the interactive shell is requested."
)]
struct Cli {
    /// Execute a single command against an empty roster.
    #[arg(short, long, conflicts_with_all = ["file", "repl"])]
    command: Option<String>,

    /// Run a command script from a file instead of stdin.
    #[arg(short, long, conflicts_with = "repl")]
    file: Option<PathBuf>,

    /// Start the interactive shell.
    #[arg(long)]
    repl: bool,

    /// What a removal does to the ancestors of the removed record.
    #[arg(
        long,
        value_enum,
        env = "AVLROSTER_REMOVE_POLICY",
        default_value_t = RemovePolicy::Rebalance
    )]
    remove_policy: RemovePolicy,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TreeConfig {
        remove_policy: cli.remove_policy,
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(io_err) = console::echo_error(&mut io::stderr(), &e.to_string()) {
                error!(code = e.code(), category = e.category(), %io_err, "{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: TreeConfig) -> Result<(), errors::Error> {
    let session = session::Session::open(config);

    if let Some(line) = cli.command {
        let lines = script::respond(&session, &line);
        console::echo_lines(&mut io::stdout(), &lines)?;
        return session.close();
    }

    if cli.repl {
        return repl::start(&session);
    }

    let executed = match cli.file {
        Some(path) => {
            info!(path = %path.display(), "Reading script file.");
            let file = File::open(&path)?;
            script::run(&session, BufReader::new(file), &mut io::stdout())?
        }
        None => script::run(&session, io::stdin().lock(), &mut io::stdout())?,
    };
    info!(executed, "Script finished.");
    session.close()
}
