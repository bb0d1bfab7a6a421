//! CLI administration tool for url-proxy.
//!
//! Registers and inspects links from the shell, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a target URL
//! cargo run --bin admin -- link create https://example.com/video.mp4
//!
//! # Show a link
//! cargo run --bin admin -- link show abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check storage connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE`, `DATABASE_URL`, `REDIS_URL`, `BASE_URL`,
//! `CODE_LENGTH`, `CODE_MAX_ATTEMPTS`. With no backend configured the
//! in-memory store is used, which only makes sense for `db check`.

use url_proxy::application::services::LinkService;
use url_proxy::config::{self, Config};
use url_proxy::infrastructure::persistence::connect_repository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing url-proxy.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a target URL and print its code
    Create {
        /// Absolute http(s) URL to proxy
        url: String,
    },

    /// Show the target behind a code
    Show {
        /// Short code
        code: String,
    },
}

/// Storage operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = connect_repository(&config).await?;
    let service = LinkService::new(repository, config.code.clone());

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service, &config).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(
    action: LinkAction,
    service: &LinkService,
    config: &Config,
) -> Result<()> {
    match action {
        LinkAction::Create { url } => create_link(service, config, &url).await,
        LinkAction::Show { code } => show_link(service, &code).await,
    }
}

/// Registers `url` and prints the allocated code.
///
/// The full short URL is printed only when `BASE_URL` is configured, since
/// there is no request to derive the host from.
async fn create_link(service: &LinkService, config: &Config, url: &str) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let link = service
        .register(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("  Code:   {}", link.code.bright_yellow().bold());
    println!("  Target: {}", link.target_url.cyan());
    if let Some(base_url) = &config.base_url {
        println!(
            "  Short:  {}",
            service.short_url(base_url, &link.code).bright_green()
        );
    }
    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();

    Ok(())
}

/// Prints the target URL and creation time of a code.
async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up '{}': {}", code, e))?;

    println!("{}", "🔎 Link".bright_blue().bold());
    println!();
    println!("  Code:    {}", link.code.bright_yellow());
    println!("  Target:  {}", link.target_url.cyan());
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(service: &LinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("  Backend: {}", service.storage_backend().bright_white());
    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, service: &LinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{}",
                format!("🔍 Checking {} connection...", service.storage_backend()).bright_blue()
            );

            if !service.storage_healthy().await {
                anyhow::bail!("Storage health check failed");
            }

            println!("{}", "✅ Storage connection OK".green().bold());
        }
    }

    Ok(())
}
