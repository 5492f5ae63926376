//! `profilecards-serve`: JSON profile API and server-rendered profile pages.
//!
//! Configuration comes from the environment (see [`Config::from_env`]); the
//! flags below override it for local runs, e.g.
//! `profilecards-serve --seed schema/seed.example.json --bind 127.0.0.1:8081`.

use std::path::PathBuf;

use axum::Router;
use axum::http::Request;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use profilecards_serve::{AppState, Config, router};

#[derive(Parser, Debug)]
#[command(name = "profilecards-serve")]
#[command(about = "Public profile cards: JSON API and profile pages", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: PathBuf,

    /// Listen address, overriding PROFILECARDS_BIND_ADDR.
    #[arg(long)]
    bind: Option<String>,

    /// Serve from a JSON seed file instead of ClickHouse, overriding
    /// PROFILECARDS_SEED_PATH.
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.dotenv.exists() {
        dotenvy::from_path(&args.dotenv)?;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = args.seed {
        anyhow::ensure!(seed.exists(), "seed file {} does not exist", seed.display());
        config.seed_path = Some(seed);
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config)?;
    let backend = state.store.backend();

    let app = with_http_layers(router(state));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, backend, "profile cards listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

/// Request span per call plus open CORS: the API only serves public data.
fn with_http_layers(app: Router) -> Router {
    app.layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    )
    .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
