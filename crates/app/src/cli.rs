//! CLI argument parsing for paramsub.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Command implementations live in the `commands` module.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use paramsub_domain::ResolveOptions;
use paramsub_infrastructure::DEFAULT_MAX_INPUT_BYTES;

/// Paramsub: resolve `{{ parameter }}` placeholders in configuration documents.
///
/// Plain placeholders look like `{{ db/host }}`; secure ones carry a tag,
/// `{{ ssm-secure:db/pass }}`, and are only resolved with `--resolve-secure`.
#[derive(Parser, Debug)]
#[command(name = "paramsub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Parameter document (JSON or YAML) backing the parameter store.
    #[arg(long, short = 'p', global = true, env = "PARAMSUB_PARAMETERS")]
    pub parameters: Option<PathBuf>,

    /// Allow secure parameters to be resolved.
    #[arg(long, global = true, env = "PARAMSUB_RESOLVE_SECURE")]
    pub resolve_secure: bool,

    /// Largest input document accepted, in bytes.
    #[arg(
        long,
        global = true,
        env = "PARAMSUB_MAX_INPUT_BYTES",
        default_value_t = DEFAULT_MAX_INPUT_BYTES
    )]
    pub max_input_bytes: u64,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Builds the resolve options from the flags.
    #[must_use]
    pub const fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            resolve_secure_parameters: self.resolve_secure,
        }
    }
}

/// Available commands for paramsub.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve placeholders in a file and write the result to another file.
    ///
    /// The output is written atomically; on any error it is left untouched.
    Resolve(ResolveArgs),

    /// Resolve placeholders in a file and print the result to stdout.
    Render(RenderArgs),

    /// Print the parameters referenced by a file as JSON.
    Extract(ExtractArgs),

    /// Resolve the given references and print them as JSON.
    Get(GetArgs),
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Document to resolve.
    pub input: PathBuf,

    /// Where to write the resolved document. May equal the input.
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Document to resolve.
    pub input: PathBuf,
}

/// Arguments for the `extract` command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Document to scan.
    pub input: PathBuf,
}

/// Arguments for the `get` command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Parameter references, e.g. `db/host` or `ssm-secure:db/pass`.
    #[arg(required = true)]
    pub references: Vec<String>,
}

impl Cli {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Returns the clap error for usage mistakes and for `--help`/`--version`,
    /// which clap reports as errors that print to stdout.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
