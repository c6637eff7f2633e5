use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use marquee::app::App;
use marquee::clients::{RecommenderClient, TmdbMetadataProvider};
use marquee::config::Config;
use marquee::views::Route;

/// Browse movies, view details, and fetch personalized recommendations
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Terminal movie discovery client", long_about = None)]
struct Cli {
    /// Starting route: "/" for the catalog or "/<movie id>" for a detail page
    #[arg(default_value = "/")]
    route: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep the screens clean by default; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let metadata = Arc::new(TmdbMetadataProvider::new(&config));
    let recommender = Arc::new(RecommenderClient::new(&config));

    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(metadata, recommender, tx, Route::parse(&cli.route));
    app.run(rx).await
}
