//! Local HTTP dashboard over the generated consumption series.
//!
//! Serves a single HTML view plus the JSON endpoints it draws from:
//! - `/`: dashboard page
//! - `/api/summary`: headline metrics
//! - `/api/series`: daily totals with peak flags, optional date range
//! - `/api/outliers`, `/api/monthly`, `/api/categories`, `/api/weekdays`
//! - `/api/advice`: savings advisories

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::dashboard::{DashboardParams, DashboardView};

/// Immutable application state shared across all request handlers.
///
/// Built once after the series is loaded and wrapped in `Arc`; every
/// request reads the same precomputed view, so no locks are needed.
pub struct AppState {
    /// File the series was loaded from.
    pub source: PathBuf,
    /// Parameters the view was computed with.
    pub params: DashboardParams,
    /// Precomputed metrics, chart data and advice.
    pub view: DashboardView,
}

/// Builds the axum router with the page and all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/series", get(handlers::get_series))
        .route("/api/outliers", get(handlers::get_outliers))
        .route("/api/monthly", get(handlers::get_monthly))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/weekdays", get(handlers::get_weekdays))
        .route("/api/advice", get(handlers::get_advice))
        .with_state(state)
}

/// Binds to the given address and serves the dashboard until shutdown.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    println!("Dashboard disponível em http://{addr}");
    axum::serve(listener, app).await
}
