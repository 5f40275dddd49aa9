//! CLI binary for transferlead.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lead_search::{CancellationToken, PipelineEvent, ResultEvent, SearchRequest};
use tokio_stream::StreamExt;
use tracing::info;
use transferlead::{AirportDirectory, AppConfig};

/// transferlead: find airport ground-transportation companies.
#[derive(Parser)]
#[command(name = "transferlead", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search, enrich and rank transport companies near an airport.
    Search {
        /// Country to search in.
        #[arg(long)]
        country: String,

        /// Airport name, IATA code or location.
        #[arg(long)]
        airport: String,

        /// Override the airport's city.
        #[arg(long)]
        city: Option<String>,

        /// Search keyword; repeat to use several. Defaults apply when omitted.
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Print the full result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List known airports matching a query.
    Airports {
        /// Substring of the IATA code, name, city or country.
        query: Option<String>,

        /// Only airports in this country.
        #[arg(long)]
        country: Option<String>,
    },

    /// List countries with known airports.
    Countries,

    /// Write a default configuration file.
    InitConfig {
        /// Destination; defaults to the platform config directory.
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            country,
            airport,
            city,
            keywords,
            json,
        } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            let _log_guard = transferlead::logging::init(&config.logging)?;
            let request = SearchRequest {
                country,
                airport,
                city,
                keywords,
            };
            run_search(&config, request, json).await
        }
        Command::Airports { query, country } => {
            list_airports(query.as_deref().unwrap_or(""), country.as_deref());
            Ok(())
        }
        Command::Countries => {
            for country in AirportDirectory::builtin().countries() {
                println!("{country}");
            }
            Ok(())
        }
        Command::InitConfig { path, force } => init_config(path, force),
    }
}

async fn run_search(config: &AppConfig, request: SearchRequest, json: bool) -> anyhow::Result<()> {
    let pipeline = transferlead::build_pipeline(config)?;

    // Ctrl+C stops new fetches; the partial result is still reported.
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, finishing with leads found so far...");
            cancel_clone.cancel();
        }
    });

    let mut events = pipeline.run_with_cancel(request, cancel)?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{elapsed}] {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut result = None;
    while let Some(event) = events.next().await {
        match event {
            PipelineEvent::Progress(progress) => {
                spinner.set_message(format!(
                    "[{}] {} ({} leads)",
                    progress.stage, progress.message, progress.leads_found
                ));
            }
            PipelineEvent::Result(done) => result = Some(done),
        }
    }
    spinner.finish_and_clear();

    let result = result.context("pipeline ended without a result")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result);
    }
    Ok(())
}

const TABLE_COLUMNS: [(&str, usize); 6] = [
    ("#", 3),
    ("Score", 5),
    ("Company", 32),
    ("Website", 36),
    ("Email", 32),
    ("Phone", 18),
];

fn print_table(result: &ResultEvent) {
    println!("{} leads for {}\n", result.total, result.query);
    if result.leads.is_empty() {
        println!("No leads found.");
        return;
    }

    let header: Vec<String> = TABLE_COLUMNS
        .iter()
        .map(|&(name, width)| format!("{name:<width$}"))
        .collect();
    println!("{}", header.join("  "));

    for (rank, lead) in result.leads.iter().enumerate() {
        let cells = [
            (rank + 1).to_string(),
            lead.score.to_string(),
            lead.company_name.clone(),
            lead.website.clone(),
            lead.emails.first().cloned().unwrap_or_default(),
            lead.phone.clone(),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(TABLE_COLUMNS)
            .map(|(cell, (_, width))| format!("{:<width$}", fit(cell, width)))
            .collect();
        println!("{}", row.join("  ").trim_end());
    }

    if let Some(path) = &result.export_csv_path {
        println!("\nCSV:  {}", path.display());
    }
    if let Some(path) = &result.export_json_path {
        println!("JSON: {}", path.display());
    }
}

/// Clip `text` to `width` characters, marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn list_airports(query: &str, country: Option<&str>) {
    let directory = AirportDirectory::builtin();
    let matches = directory.search_airports(query, country);
    if matches.is_empty() {
        println!("No airports match.");
        return;
    }
    for airport in matches {
        println!("{:<40} {:<20} {}", airport.label(), airport.city, airport.country);
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(AppConfig::default_config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to_file(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
