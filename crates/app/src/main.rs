//! Paramsub: resolve parameter store placeholders in configuration documents.
//!
//! This is the main entry point for the `paramsub` CLI. It parses arguments,
//! installs logging, dispatches to the command handler, and turns errors into
//! exit codes. Only this layer ends the process; the libraries return errors.

mod cli;
mod commands;
mod error;
mod exit_codes;
mod logging;

use std::process::ExitCode;

use cli::Cli;
use paramsub_application::ResolveError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };
    logging::init(cli.global.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            if let error::CliError::Resolve(ResolveError::PolicyViolation { references }) = &err {
                eprintln!("  refused: {}", references.join(", "));
                eprintln!("  pass --resolve-secure to allow secure parameters");
            }

            ExitCode::from(err.exit_code())
        }
    }
}

/// Prints a clap error and maps it to an exit code. Help and version output
/// succeed; every usage mistake is an input error.
fn usage_exit(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(exit_codes::INPUT_ERROR)
    } else {
        ExitCode::from(exit_codes::SUCCESS)
    }
}
