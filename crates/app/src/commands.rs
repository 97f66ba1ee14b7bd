//! Command implementations.

use std::collections::BTreeMap;
use std::io::Write;

use paramsub_application::ports::TextStore;
use paramsub_application::{ParameterResolver, ResolveError, ResolveFile};
use paramsub_domain::{ParameterInfo, ResolutionMap};
use paramsub_infrastructure::{FileParameterStore, FileTextStore, to_json_stable};
use tracing::info;

use crate::cli::{Cli, Command, ExtractArgs, GetArgs, GlobalArgs, RenderArgs, ResolveArgs};
use crate::error::{CliError, Result};

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Returns the first error of the command; nothing is printed to stdout then.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve(args) => resolve(&cli.global, args).await,
        Command::Render(args) => render(&cli.global, args).await,
        Command::Extract(args) => extract(&cli.global, args).await,
        Command::Get(args) => get(&cli.global, args).await,
    }
}

fn parameter_store(global: &GlobalArgs) -> Result<FileParameterStore> {
    global
        .parameters
        .as_ref()
        .map(FileParameterStore::new)
        .ok_or(CliError::MissingParameters)
}

async fn resolve(global: &GlobalArgs, args: ResolveArgs) -> Result<()> {
    let use_case = ResolveFile::new(
        parameter_store(global)?,
        FileTextStore::new(global.max_input_bytes),
    );

    let output = use_case
        .execute(&args.input, &args.output, &global.resolve_options())
        .await?;

    info!(
        resolved = output.resolved_references,
        output = %args.output.display(),
        "resolve complete"
    );
    Ok(())
}

/// Validates and reads an input document.
async fn read_input(global: &GlobalArgs, path: &std::path::Path) -> Result<String> {
    let text_store = FileTextStore::new(global.max_input_bytes);
    text_store
        .validate(path)
        .await
        .map_err(ResolveError::Input)?;
    Ok(text_store.read(path).await.map_err(ResolveError::Input)?)
}

async fn render(global: &GlobalArgs, args: RenderArgs) -> Result<()> {
    let text = read_input(global, &args.input).await?;
    let resolver = ParameterResolver::new(parameter_store(global)?);

    let resolved = resolver
        .resolve_parameters_in_text(&text, &global.resolve_options())
        .await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(resolved.text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

async fn extract(global: &GlobalArgs, args: ExtractArgs) -> Result<()> {
    let text = read_input(global, &args.input).await?;
    let resolver = ParameterResolver::new(parameter_store(global)?);

    let parameters = resolver
        .extract_parameters_from_text(&text, &global.resolve_options())
        .await?;

    print_parameters(&parameters)
}

async fn get(global: &GlobalArgs, args: GetArgs) -> Result<()> {
    let resolver = ParameterResolver::new(parameter_store(global)?);

    let parameters = resolver
        .resolve_parameter_reference_list(&args.references, &global.resolve_options())
        .await?;

    print_parameters(&parameters)
}

/// Prints the map as JSON with references sorted.
fn print_parameters(parameters: &ResolutionMap) -> Result<()> {
    let sorted: BTreeMap<&str, &ParameterInfo> = parameters.iter().collect();
    let json = to_json_stable(&sorted)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
