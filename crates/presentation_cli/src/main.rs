//! MapSearch CLI
//!
//! Command-line interface for address search: one-shot lookups, an
//! interactive keystroke-style session, and a geocoder health check.

#![allow(clippy::print_stdout)]

mod console_map;

use std::sync::Arc;
use std::time::Duration;

use application::ports::MapPort;
use application::services::{AddressSearchService, ResultListPresenter};
use clap::{Parser, Subcommand};
use domain::GeoLocation;
use infrastructure::config::AppConfig;
use infrastructure::{GeocoderAdapter, init_telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::console_map::ConsoleMapHost;

/// MapSearch CLI
#[derive(Parser)]
#[command(name = "mapsearch-cli")]
#[command(author, version, about = "Address search CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file name (without extension)
    #[arg(short, long, default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single address search and print the candidates
    Search {
        /// Free-text partial address
        query: String,

        /// Bias results toward a location, as "lat,lon"
        #[arg(short, long)]
        near: Option<String>,
    },

    /// Interactive session: type to search, enter a row number to pick
    Interactive,

    /// Check that the geocoding service is reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a "lat,lon" pair
fn parse_lat_lon(input: &str) -> anyhow::Result<GeoLocation> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("expected \"lat,lon\", got: {input}"))?;
    let lat: f64 = lat.trim().parse()?;
    let lon: f64 = lon.trim().parse()?;
    GeoLocation::new(lat, lon).map_err(|e| anyhow::anyhow!("{e}"))
}

fn print_rows(presenter: &ResultListPresenter) {
    if !presenter.is_visible() {
        println!("No matches.");
        return;
    }
    for (index, row) in presenter.rows().iter().enumerate() {
        println!("  [{index}] {}", row.primary);
        if !row.secondary.is_empty() {
            println!("      {}", row.secondary);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_telemetry(log_filter_from_verbosity(cli.verbose))
        .map_err(|e| anyhow::anyhow!("telemetry setup failed: {e}"))?;

    let config = AppConfig::load_from(&cli.config)?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let geocoder = Arc::new(GeocoderAdapter::new(config.geocoder)?);

    match cli.command {
        Commands::Search { query, near } => {
            let service = AddressSearchService::with_timeout(
                geocoder,
                Duration::from_secs(config.search.query_timeout_secs),
            );
            let (mut presenter, _selection_rx) = ResultListPresenter::new(service.subscribe());

            let bias = near.as_deref().map(parse_lat_lon).transpose()?;
            if let Some(handle) = service.on_input_changed(&query, bias, None) {
                handle.await?;
            }
            presenter.refresh();
            print_rows(&presenter);
        },

        Commands::Interactive => {
            let service = AddressSearchService::with_timeout(
                geocoder,
                Duration::from_secs(config.search.query_timeout_secs),
            );
            let (mut presenter, mut selection_rx) = ResultListPresenter::new(service.subscribe());
            let map_host = ConsoleMapHost::new();

            println!("Type a partial address to search, a row number to pick,");
            println!("an empty line to clear, or \"quit\" to exit.");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let input = line.trim();

                if input == "quit" || input == "exit" {
                    break;
                }

                if !input.is_empty()
                    && let Ok(index) = input.parse::<usize>()
                {
                    if presenter.select(index).is_some() {
                        if let Some(picked) = selection_rx.recv().await {
                            map_host.place_marker_and_center(picked.coordinate).await;
                        }
                        service.clear();
                        presenter.refresh();
                    } else {
                        println!("No row [{index}].");
                    }
                    continue;
                }

                // Viewport snapshot is taken per interaction, so the
                // bias reflects where the map currently sits.
                let bias = map_host.viewport_center();
                let bounds = map_host.viewport_bounds();
                if let Some(handle) = service.on_input_changed(input, Some(bias), bounds) {
                    handle.await?;
                }
                presenter.refresh();
                print_rows(&presenter);
            }
        },

        Commands::Health => {
            use application::ports::GeocoderPort;

            if geocoder.is_available().await {
                println!("✅ Geocoding service reachable");
            } else {
                println!("❌ Geocoding service unreachable");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
