//! Command handlers

use log::{debug, info};
use std::future::Future;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::Result;
use crate::explorer::filter::{Filter, FilterField};
use crate::explorer::ExplorerClient;
use crate::output::{render, Tabular};
use crate::ui::{create_spinner, finish_spinner};

/// Run the selected subcommand and print its results to stdout
pub async fn run_command(
    client: &ExplorerClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Modules(args) => {
            let filters = parse_filters(&args.filters)?;
            let records = fetch_with_spinner("modules", client, cli, client.modules(&filters))
                .await?;
            print_records(&records, args.output, cli.no_header)
        }
        Command::Providers(args) => {
            let filters = parse_filters(&args.filters)?;
            let records =
                fetch_with_spinner("providers", client, cli, client.providers(&filters)).await?;
            print_records(&records, args.output, cli.no_header)
        }
        Command::Workspaces(args) => {
            let filters = parse_filters(&args.filters)?;
            let records =
                fetch_with_spinner("workspaces", client, cli, client.workspaces(&filters)).await?;
            print_records(&records, args.output, cli.no_header)
        }
        Command::TfVersions(args) => {
            let filters = parse_filters(&args.filters)?;
            let records = fetch_with_spinner(
                "Terraform versions",
                client,
                cli,
                client.tf_versions(&filters),
            )
            .await?;
            print_records(&records, args.output, cli.no_header)
        }
        Command::RegistryModules(args) => {
            let records =
                fetch_with_spinner("registry modules", client, cli, client.registry_modules())
                    .await?;
            print_records(&records, args.output, cli.no_header)
        }
    }
}

/// Parse `FIELD:OPERATOR[:VALUE]` expressions, keeping their order
pub fn parse_filters<F: FilterField>(expressions: &[String]) -> Result<Vec<Filter<F>>> {
    let filters = expressions
        .iter()
        .map(|expr| Filter::parse(expr))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} filter(s): {:?}", filters.len(), filters);
    Ok(filters)
}

async fn fetch_with_spinner<T, Fut>(
    what: &str,
    client: &ExplorerClient,
    cli: &Cli,
    fetch: Fut,
) -> Result<Vec<T>>
where
    Fut: Future<Output = Result<Vec<T>>>,
{
    let spinner = create_spinner(
        &format!("Fetching {} for '{}'...", what, client.org()),
        cli.batch,
    );
    let result = fetch.await;
    finish_spinner(spinner);

    let records = result?;
    info!("Fetched {} {} for '{}'", records.len(), what, client.org());
    Ok(records)
}

fn print_records<T: Tabular>(
    records: &[T],
    format: OutputFormat,
    no_header: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if records.is_empty() && format == OutputFormat::Table {
        eprintln!("No {} found", T::NOUN);
        return Ok(());
    }

    println!("{}", render(records, format, no_header)?);
    Ok(())
}
