use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;

use globetrotter::booking::{BookingController, ConfirmationSimulator, format_usd};
use globetrotter::catalog::{ConfiguredSource, FlightSource};
use globetrotter::{GlobetrotterConfig, WizardShell, logging};

#[derive(Parser, Debug)]
#[command(name = "globetrotter", version, about = "Book a flight step by step")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Flight catalog URL
    #[arg(long, value_name = "URL")]
    catalog_url: Option<String>,

    /// Read the flight catalog from a local JSON file
    #[arg(long, value_name = "PATH")]
    catalog_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Walk through a booking interactively (default)
    Wizard,
    /// List every destination with its prices and exit
    Destinations,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GlobetrotterConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if let Some(url) = cli.catalog_url {
        config.catalog.source_url = url;
    }
    if let Some(file) = cli.catalog_file {
        config.catalog.file = Some(file);
    }
    config.validate()?;

    logging::init(&config.logging, cli.verbose);
    info!("Globetrotter {} starting", globetrotter::VERSION);

    let source = ConfiguredSource::from_config(&config.catalog)
        .context("Failed to set up the flight catalog source")?;

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => run_wizard(&config, &source).await,
        Commands::Destinations => list_destinations(&source).await,
    }
}

async fn run_wizard(config: &GlobetrotterConfig, source: &ConfiguredSource) -> Result<()> {
    let mut shell = WizardShell::new(
        BookingController::new(),
        ConfirmationSimulator::from_config(&config.booking),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    shell.load_catalog(source).await?;
    shell.run().await?;
    Ok(())
}

async fn list_destinations(source: &ConfiguredSource) -> Result<()> {
    let mut controller = BookingController::new();
    controller.load_catalog(source).await;

    if controller.catalog().is_empty() {
        println!("No flights available from {}", source.describe());
        return Ok(());
    }

    for destination in controller.list_destinations() {
        let prices: Vec<String> = controller
            .catalog()
            .class_prices(&destination)
            .into_iter()
            .map(|(class, price)| format!("{class} {}", format_usd(price)))
            .collect();
        if prices.is_empty() {
            println!("{destination}: no bookable classes");
        } else {
            println!("{destination}: {}", prices.join(", "));
        }
    }
    Ok(())
}
