//! Web server command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use textintel_core::meta::DEFAULT_MANIFEST;
use textintel_core::provider::deepgram::{DEFAULT_DEEPGRAM_URL, DEFAULT_TIMEOUT_SECS};
use textintel_core::{DeepgramClient, DeepgramConfig};
use textintel_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8081")]
    pub port: u16,

    /// Port of the frontend dev server, allowed through CORS
    #[arg(long, env = "FRONTEND_PORT", default_value = "8080")]
    pub frontend_port: u16,

    /// Deepgram API key
    #[arg(long, env = "DEEPGRAM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Deepgram API base URL
    #[arg(long, env = "DEEPGRAM_API_URL", default_value = DEFAULT_DEEPGRAM_URL)]
    pub api_url: String,

    /// Timeout for each Deepgram request, in seconds
    #[arg(long, env = "DEEPGRAM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// App manifest served at /api/metadata
    #[arg(long, env = "METADATA_PATH", default_value = DEFAULT_MANIFEST)]
    pub metadata: PathBuf,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let Some(api_key) = args.api_key.filter(|k| !k.trim().is_empty()) else {
        print_missing_key();
        bail!("DEEPGRAM_API_KEY environment variable is required");
    };

    let deepgram = DeepgramConfig::new(api_key)
        .with_base_url(args.api_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    tracing::debug!(?deepgram, "Provider configuration");

    let provider = Arc::new(DeepgramClient::new(&deepgram).context("Failed to create Deepgram client")?);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        frontend_port: args.frontend_port,
        metadata_path: args.metadata,
    };

    println!();
    println!(
        "  {} {}",
        "Text Intelligence".cyan().bold(),
        "API Server".bold()
    );
    println!();
    println!(
        "  {}   http://localhost:{}",
        "Backend".green(),
        config.port
    );
    println!(
        "  {}  http://localhost:{}",
        "Frontend".green(),
        config.frontend_port
    );
    println!(
        "  {}      enabled for frontend port {}",
        "CORS".green(),
        config.frontend_port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    textintel_web::run_server(provider, &config).await?;

    Ok(())
}

fn print_missing_key() {
    eprintln!();
    eprintln!("{}", "ERROR: Deepgram API key not found!".red().bold());
    eprintln!();
    eprintln!("Please set your API key using one of these methods:");
    eprintln!();
    eprintln!("  1. Create a .env file (recommended):");
    eprintln!("     {}", "DEEPGRAM_API_KEY=your_api_key_here".cyan());
    eprintln!();
    eprintln!("  2. Environment variable:");
    eprintln!("     {}", "export DEEPGRAM_API_KEY=your_api_key_here".cyan());
    eprintln!();
    eprintln!("Get your API key at: {}", "https://console.deepgram.com".underline());
    eprintln!();
}
