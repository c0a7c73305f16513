use ulrv_core::logging;

mod cli;

use crate::cli::{CliCommand, Outcome};

fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop the CLI.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(Outcome::Accepted) => {}
        Ok(Outcome::Rejected) => std::process::exit(1),
        Err(err) => {
            eprintln!("ulrv error: {:#}", err);
            std::process::exit(2);
        }
    }
}
