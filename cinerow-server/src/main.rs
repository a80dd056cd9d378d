//! Mock movie API for the Cinerow front end.

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinerow_server::{
    AppState,
    catalog::Catalog,
    infra::app_state::DEFAULT_SEARCH_LATENCY,
    routes::create_router,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cinerow-server")]
#[command(about = "Mock movie API with substring search and carousel catalog")]
struct Cli {
    /// Server host
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3001)]
    port: u16,

    /// Artificial search latency in milliseconds
    #[arg(long, env = "SEARCH_LATENCY_MS")]
    search_latency_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinerow_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let search_latency = cli
        .search_latency_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_SEARCH_LATENCY);

    let state = AppState::new(Catalog::seeded(), search_latency);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "server running");
    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
