//! Homebase Server
//!
//! Server-rendered dashboard for AI-assisted property operations in
//! Dubai/UAE. Serves full pages plus htmx fragments for:
//!
//! - Maintenance tickets and vendor assignment
//! - Tenancy renewals and the RERA rent-increase check
//! - Batch renewal actions (bulk processing, 90-day notices)
//! - English/Arabic presentation (LTR/RTL)
//!
//! ## Architecture
//!
//! One `PropertyStore` is built at startup, from the built-in demo portfolio
//! or a JSON fixture, and shared with every handler behind a read/write lock.
//! Rate limiting via tower-governor, request tracing via tower-http.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use property_store::PropertyStore;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod locale;
mod render;
mod routes;
mod state;

use state::AppState;

/// Command-line arguments for the Homebase server
#[derive(Parser, Debug)]
#[command(name = "homebase-server")]
#[command(about = "Homebase property operations dashboard")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "HOMEBASE_PORT", default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOMEBASE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Directory served under /static (defaults to the bundled assets)
    #[arg(long, env = "HOMEBASE_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// JSON fixture replacing the built-in demo portfolio
    #[arg(long, env = "HOMEBASE_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homebase server on {}:{}", args.host, args.port);

    // Seed the store
    let store = match &args.seed_file {
        Some(path) => {
            info!("Loading seed fixture from {}", path.display());
            PropertyStore::from_fixture_file(path)?
        }
        None => PropertyStore::seeded().context("Built-in seed data is invalid")?,
    };
    let state = AppState::new(store);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .with_context(|| format!("Invalid rate limit: {}", args.rate_limit))?,
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = args
        .static_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

    // Build router
    let app = routes::router(state)
        .nest_service("/static", ServeDir::new(&static_dir))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Static assets: {}", static_dir.display());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
