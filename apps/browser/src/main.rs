use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use catalog::{CategoryNormalizer, FilterSelection};
use clap::{Parser, Subcommand};
use client_core::{
    BrowseSession, CatalogProvider, CatalogSource, FileCatalogProvider, HttpCatalogProvider,
};
use shared::domain::FilterAxis;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod runner;
mod script;

#[derive(Parser, Debug)]
#[command(name = "browser", about = "Search a resource catalog and drive a document viewer session")]
struct Cli {
    /// Catalog service base URL.
    #[arg(long, env = "RESOURCE_HUB_URL")]
    server_url: Option<String>,
    /// Local JSON catalog, used instead of the service.
    #[arg(long, conflicts_with = "server_url")]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List resources matching a query and filter codes.
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(long = "branch")]
        branches: Vec<String>,
        #[arg(long = "year")]
        years: Vec<String>,
        #[arg(long = "type")]
        types: Vec<String>,
        /// Print the matches as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the filter codes and their labels.
    Filters,
    /// Run a viewer session script from a file, or stdin when omitted.
    Session { script: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            ref query,
            ref branches,
            ref years,
            ref types,
            json,
        } => {
            let mut selection = FilterSelection::new();
            for (axis, codes) in [
                (FilterAxis::Branch, branches),
                (FilterAxis::Year, years),
                (FilterAxis::ResourceType, types),
            ] {
                for code in codes {
                    selection.toggle(axis, code, true);
                }
            }
            let provider = catalog_provider(&cli)?;
            let session = runner::search_session(provider.as_deref(), query, &selection).await;
            report_source(&session);

            let mut out = std::io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &session.results())?;
                writeln!(out)?;
            } else {
                runner::write_results(&mut out, &session)?;
            }
        }
        Command::Filters => {
            let normalizer = CategoryNormalizer::default();
            let mut out = std::io::stdout().lock();
            for axis in FilterAxis::ALL {
                writeln!(out, "{}:", axis.query_param())?;
                for option in normalizer.options(axis) {
                    writeln!(out, "  {:<12} {}", option.code, option.label)?;
                }
            }
        }
        Command::Session { ref script } => {
            let source = match script {
                Some(path) => tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read script '{}'", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut buffer)
                        .await
                        .context("failed to read script from stdin")?;
                    buffer
                }
            };
            let provider = catalog_provider(&cli)?;
            let mut session = runner::open_session(provider.as_deref()).await;
            report_source(&session);

            let skipped = runner::run_script(
                &mut session,
                &source,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            info!(skipped, open = session.viewer().len(), "session script finished");
        }
    }

    Ok(())
}

fn catalog_provider(cli: &Cli) -> Result<Option<Box<dyn CatalogProvider>>> {
    if let Some(path) = &cli.catalog {
        let provider: Box<dyn CatalogProvider> = Box::new(FileCatalogProvider::new(path));
        return Ok(Some(provider));
    }
    if let Some(server_url) = &cli.server_url {
        let provider = HttpCatalogProvider::new(server_url)
            .with_context(|| format!("invalid server url '{server_url}'"))?;
        let provider: Box<dyn CatalogProvider> = Box::new(provider);
        return Ok(Some(provider));
    }
    Ok(None)
}

fn report_source(session: &BrowseSession) {
    if let CatalogSource::Fallback { reason } = session.catalog_source() {
        eprintln!("showing demo catalog ({reason})");
    }
}
