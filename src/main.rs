use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{signal, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod fault;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::fault::BugSimulator;
use crate::store::{Catalog, OrderBook};

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<RwLock<OrderBook>>,
    pub bug: BugSimulator,
}

impl AppState {
    pub fn new(catalog: Catalog, bug_enabled: bool) -> Self {
        Self {
            catalog: Arc::new(catalog),
            orders: Arc::new(RwLock::new(OrderBook::new())),
            bug: BugSimulator::new(bug_enabled),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,ecommerce_demo_api=debug")
            }),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Demo E-Commerce API — Rust + Axum   ║");
    info!("╚══════════════════════════════════════╝");

    if config.enable_bug {
        info!("ENABLE_BUG is set: starting in bug mode, gated endpoints will return 500");
    }

    let state = AppState::new(seed::sample_catalog(), config.enable_bug);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!(
        "Demo: POST http://{}/demo/enable-bug  →  GET http://{}/api/products returns 500",
        addr, addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Status / Health ─────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))

        // ── Orders ──────────────────────────────────────────────────────────
        .route(
            "/api/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route("/api/orders/:id", get(handlers::orders::get_order))

        // ── Inventory ───────────────────────────────────────────────────────
        .route("/api/inventory", get(handlers::inventory::get_inventory))

        // ── Bug simulation (never gated) ────────────────────────────────────
        .route("/demo/enable-bug", post(handlers::demo::enable_bug))
        .route("/demo/disable-bug", post(handlers::demo::disable_bug))
        .route("/demo/status", get(handlers::demo::status))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
