//! Entitlement glossary export/update tool.
//!
//! Exports the glossary attributes of matching entitlements to a CSV file for
//! offline review, and pushes an edited CSV back.
//!
//! Usage:
//!   glossary --config glossary.toml export --search SNOW
//!   glossary --config glossary.toml update
//!   glossary --config glossary.toml schema
//!
//! Credentials can also come from `GLOSSARY_CLIENT_ID`,
//! `GLOSSARY_CLIENT_SECRET` or `GLOSSARY_ACCESS_TOKEN`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glossary_client::{
    export_glossary, update_from_csv, GlossaryConfig, GovernanceClient, TracingSink,
};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "glossary")]
#[command(about = "Export and update entitlement glossary attributes through CSV")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "GLOSSARY_CONFIG")]
    config: Option<PathBuf>,

    /// Tenant base URL
    #[arg(long, global = true, env = "GLOSSARY_BASE_URL")]
    base_url: Option<String>,

    /// Access-management realm of the OAuth2 client
    #[arg(long, global = true, env = "GLOSSARY_REALM")]
    realm: Option<String>,

    /// OAuth2 client ID
    #[arg(long, global = true, env = "GLOSSARY_CLIENT_ID")]
    client_id: Option<String>,

    /// OAuth2 client secret
    #[arg(long, global = true, env = "GLOSSARY_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Pre-issued bearer token (skips the client-credentials exchange)
    #[arg(long, global = true, env = "GLOSSARY_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// CSV file to write (export) or read (update)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export matching entitlements' glossaries to CSV
    Export {
        /// Text matched against application, owner and entitlement names
        #[arg(short, long)]
        search: Option<String>,

        /// Comma-separated attributes exported ahead of the schema ones
        #[arg(long, value_delimiter = ',')]
        attributes: Option<Vec<String>>,

        /// Results per search page
        #[arg(long)]
        page_size: Option<u64>,
    },
    /// Push an edited CSV back to the glossary endpoint
    Update,
    /// Print the glossary schema's attribute names
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = build_config(&args)?;
    let client = GovernanceClient::new(config).context("invalid configuration")?;

    match args.command {
        Command::Export { .. } => {
            let summary = export_glossary(&client, &TracingSink)
                .await
                .context("export failed")?;
            info!(
                "Exported {} rows with {} attribute columns",
                summary.rows, summary.columns
            );
        }
        Command::Update => {
            let report = update_from_csv(&client, &TracingSink)
                .await
                .context("update failed")?;
            if !report.is_clean() {
                warn!("{} of {} rows failed to update", report.failed.len(), report.total());
                for failure in &report.failed {
                    warn!("  {}: {}", failure.id, failure.reason);
                }
            }
        }
        Command::Schema => {
            let names = client
                .resolve_schema()
                .await
                .context("schema lookup failed")?;
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line values layered on top.
fn build_config(args: &Args) -> Result<GlossaryConfig> {
    let mut config = match &args.config {
        Some(path) => GlossaryConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GlossaryConfig::default(),
    };

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(realm) = &args.realm {
        config.realm = realm.clone();
    }
    if let Some(client_id) = &args.client_id {
        config.client_id = client_id.clone();
    }
    if let Some(client_secret) = &args.client_secret {
        config.client_secret = client_secret.clone();
    }
    if let Some(access_token) = &args.access_token {
        config.access_token = Some(access_token.clone());
    }
    if let Some(csv) = &args.csv {
        config.csv_path = csv.clone();
    }

    if let Command::Export {
        search,
        attributes,
        page_size,
    } = &args.command
    {
        if let Some(search) = search {
            config.search_string = search.clone();
        }
        if let Some(attributes) = attributes {
            config.attributes = attributes.clone();
        }
        if let Some(page_size) = page_size {
            config.page_size = *page_size;
        }
    }

    Ok(config)
}
