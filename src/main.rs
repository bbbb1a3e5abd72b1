//! Code Companion server entry point.

use anyhow::Result;
use clap::Parser;
use code_companion::{api::AppState, create_routes, Config};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "code-companion", about = "Code analysis and translation service")]
struct Cli {
    /// Address to listen on (overrides LISTEN_ADDR).
    #[arg(long)]
    listen: Option<String>,

    /// Directory of static assets to serve (overrides STATIC_DIR).
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "code_companion=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::default();
    let listen_addr = cli.listen.unwrap_or(config.listen_addr);
    let static_dir = cli
        .static_dir
        .unwrap_or_else(|| PathBuf::from(config.static_dir));

    code_companion::init();

    let state = Arc::new(AppState::new());
    let app = create_routes(&static_dir).with_state(state);

    let addr: SocketAddr = listen_addr.parse()?;
    tracing::info!(?addr, static_dir = %static_dir.display(), "Code Companion listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
