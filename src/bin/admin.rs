//! CLI administration tool for the recommendations service.
//!
//! Manages recommendations directly against the database, going through the
//! same validation as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List recommendations
//! cargo run --bin admin -- list --page 1 --page-size 20
//!
//! # Show one recommendation
//! cargo run --bin admin -- show 42
//!
//! # Add a recommendation interactively
//! cargo run --bin admin -- add
//!
//! # Delete a recommendation
//! cargo run --bin admin -- delete 42
//!
//! # Test a URL against the configured pattern
//! cargo run --bin admin -- check-url https://example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`recommendations::config`].

use recommendations::application::services::RecommendationService;
use recommendations::config::{self, Config};
use recommendations::domain::entities::{Recommendation, RecommendationAttributes};
use recommendations::domain::repositories::RecommendationRepository;
use recommendations::error::AppError;
use recommendations::infrastructure::persistence::PgRecommendationRepository;
use recommendations::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

type Service = RecommendationService<dyn RecommendationRepository>;

/// CLI tool for managing recommendations.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List recommendations, newest first
    List {
        #[arg(long, default_value_t = 1)]
        page: i64,

        #[arg(long, default_value_t = 25)]
        page_size: i64,
    },

    /// Show a single recommendation
    Show { id: i64 },

    /// Add a recommendation with interactive prompts
    Add,

    /// Delete a recommendation
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Test a URL against the configured URL pattern
    CheckUrl { url: String },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if let Commands::CheckUrl { url } = &cli.command {
        return check_url(&config, url);
    }

    let service = build_service(&config).await?;

    match cli.command {
        Commands::List { page, page_size } => list(&service, page, page_size).await?,
        Commands::Show { id } => show(&service, id).await?,
        Commands::Add => add(&service).await?,
        Commands::Delete { id, yes } => delete(&service, id, yes).await?,
        Commands::Db {
            action: DbAction::Check,
        } => db_check(&service).await?,
        Commands::CheckUrl { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

async fn build_service(config: &Config) -> Result<Service> {
    let pool = connect_pool(config).await?;
    let repository: Arc<dyn RecommendationRepository> =
        Arc::new(PgRecommendationRepository::new(Arc::new(pool)));

    Ok(RecommendationService::new(
        repository,
        Arc::new(config.url_pattern()?),
    ))
}

/// Lists a page of recommendations.
///
/// # Output Format
///
/// ```text
/// Recommendations (page 1)
///
///   ID    Who                       Where                     Created
///   ─────────────────────────────────────────────────────────────────────────
///   2     Jane Doe                  Acme Corp                 2026-01-15 10:30
/// ```
async fn list(service: &Service, page: i64, page_size: i64) -> Result<()> {
    let offset = page_offset(page, page_size)?;

    println!("{}", format!("Recommendations (page {page})").bright_blue().bold());
    println!();

    let (items, total) = service
        .list(offset, page_size)
        .await
        .context("Failed to list recommendations")?;

    if items.is_empty() {
        println!("{}", "  No recommendations found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {:<25} {:<16}",
        "ID".bright_white().bold(),
        "Who".bright_white().bold(),
        "Where".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for r in &items {
        println!(
            "  {:<5} {:<25} {:<25} {}",
            r.id.to_string().bright_black(),
            truncate(&r.attributes.who, 25).cyan(),
            truncate(&r.attributes.r#where, 25),
            r.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Converts `--page`/`--page-size` into a row offset.
fn page_offset(page: i64, page_size: i64) -> Result<i64> {
    anyhow::ensure!(page >= 1, "--page must be at least 1");
    anyhow::ensure!(
        (1..=100).contains(&page_size),
        "--page-size must be between 1 and 100"
    );

    (page - 1)
        .checked_mul(page_size)
        .context("--page is too large")
}

async fn show(service: &Service, id: i64) -> Result<()> {
    let recommendation = service
        .get(id)
        .await
        .with_context(|| format!("Failed to load recommendation {id}"))?;

    print_recommendation(&recommendation);
    Ok(())
}

/// Prompts for every attribute and saves the result.
///
/// Optional fields accept an empty answer. Validation errors are printed
/// field by field and nothing is stored.
async fn add(service: &Service) -> Result<()> {
    println!("{}", "Add Recommendation".bright_blue().bold());
    println!();

    let attributes = RecommendationAttributes {
        quote: prompt("Quote", false)?,
        who: prompt("Who", false)?,
        who_url: optional(prompt("Who URL", true)?),
        r#where: prompt("Where", false)?,
        where_url: prompt("Where URL", false)?,
        position: optional(prompt("Position", true)?),
        company: optional(prompt("Company", true)?),
        company_url: optional(prompt("Company URL", true)?),
    };

    match service.create(attributes).await {
        Ok(created) => {
            println!();
            println!(
                "{} {}",
                "Saved".green().bold(),
                created.to_string().cyan()
            );
            println!("  ID: {}", created.id.to_string().bright_white().bold());
            Ok(())
        }
        Err(AppError::Validation { details, .. }) => {
            println!();
            println!("{}", "Not saved, the recommendation is invalid:".red().bold());
            if let Some(errors) = details["errors"].as_array() {
                for e in errors {
                    println!("  - {}", e["message"].as_str().unwrap_or_default().yellow());
                }
            }
            Ok(())
        }
        Err(e) => Err(e).context("Failed to save recommendation"),
    }
}

async fn delete(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    let recommendation = service
        .get(id)
        .await
        .with_context(|| format!("Failed to load recommendation {id}"))?;

    print_recommendation(&recommendation);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this recommendation?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .context("Failed to delete recommendation")?;

    println!("{}", "Deleted".green().bold());
    Ok(())
}

fn check_url(config: &Config, url: &str) -> Result<()> {
    let pattern = config.url_pattern()?;

    if pattern.is_match(url) {
        println!("{} {}", "valid".green().bold(), url);
    } else {
        println!("{} {}", "invalid".red().bold(), url);
        println!("  pattern: {}", pattern.as_str().bright_black());
    }

    Ok(())
}

async fn db_check(service: &Service) -> Result<()> {
    service
        .check_storage()
        .await
        .context("Database is not reachable")?;

    println!("{}", "Database connection OK".green().bold());
    Ok(())
}

fn print_recommendation(r: &Recommendation) {
    let a = &r.attributes;

    println!("{}", r.to_string().bright_blue().bold());
    println!("  ID:          {}", r.id);
    println!("  Quote:       {}", a.quote.cyan());
    println!("  Who:         {}", a.who);
    println!("  Who URL:     {}", a.who_url.as_deref().unwrap_or("-"));
    println!("  Where:       {}", a.r#where);
    println!("  Where URL:   {}", a.where_url);
    println!("  Position:    {}", a.position.as_deref().unwrap_or("-"));
    println!("  Company:     {}", a.company.as_deref().unwrap_or("-"));
    println!("  Company URL: {}", a.company_url.as_deref().unwrap_or("-"));
    println!(
        "  Updated:     {}",
        r.updated_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();
}

fn prompt(label: &str, allow_empty: bool) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value)
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
