//! folkline - Command-line driver for the event search core

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folkline::config::Settings;
use folkline::domain::{CountryCode, Event};
use folkline::embedding::EmbeddingEngine;
use folkline::providers::embedding::HuggingFaceProvider;
use folkline::services::SearchService;
use folkline::storage::MemoryCatalog;

#[derive(Parser)]
#[command(name = "folkline")]
#[command(about = "Search Folkline events by keyword, author or country")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the embedding model and use text matching only
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search by keyword, or by author with an @ prefix
    Search {
        /// Query text
        query: String,
    },

    /// List events for a country code (e.g. RO)
    Country {
        /// Two-letter country code
        code: String,
    },

    /// List events for a country display name (e.g. România)
    CountryName {
        /// Country name as shown on the map
        name: String,
    },
}

fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events found.");
        return;
    }

    for (i, event) in events.iter().enumerate() {
        let heading = event
            .title
            .as_deref()
            .or(event.author.as_deref())
            .unwrap_or("(untitled)");
        let country = event.country.as_ref().map(CountryCode::as_str).unwrap_or("--");

        println!("#{} [{}] {} (id {})", i + 1, country, heading, event.id);
        if let Some(description) = &event.description {
            println!("    {description}");
        }
        if let Some(location) = &event.location {
            println!("    @ {location}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    }
    .context("failed to load settings")?;
    settings.apply_env_overrides();

    let engine = if cli.offline || !settings.embedding.enabled {
        tracing::info!("Embedding model disabled, using text search only");
        EmbeddingEngine::offline()
    } else {
        let provider = HuggingFaceProvider::from_settings(&settings.embedding);
        EmbeddingEngine::new(settings.embedding.engine_config(), provider)
    };

    let mut service = SearchService::new(MemoryCatalog::seeded(), engine, settings.search);

    match cli.command {
        Commands::Search { query } => {
            if service.engine().is_online() {
                service.preload().await;
            }
            let results = service.search(&query).await;
            println!("Searching '{}' ({:?} match)\n", query.trim(), results.mode);
            print_events(&results.events);
        }

        Commands::Country { code } => {
            let events = service
                .get_events_by_country(&CountryCode::from(code.trim()))
                .await;
            print_events(&events);
        }

        Commands::CountryName { name } => {
            let events = service.get_events_by_country_name(&name).await?;
            print_events(&events);
        }
    }

    Ok(())
}
