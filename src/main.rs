use std::path::PathBuf;

use clap::Parser;
use ragchat::config::AppConfig;
use ragchat::Result;

#[derive(Parser)]
#[command(name = "ragchat")]
#[command(about = "Retrieval-augmented chat service over a search index")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (default: config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address override
    #[arg(long)]
    host: Option<String>,

    /// Port override
    #[arg(long)]
    port: Option<u16>,

    /// Enable permissive CORS
    #[arg(long)]
    cors: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Fail fast on missing collaborator identifiers
    config.validate()?;

    ragchat::logging::init_logging_with_config(Some(&config))?;

    if config.logging.backtrace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    ragchat::api::serve_api(&config, host, port, cli.cors).await
}
