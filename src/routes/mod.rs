// HTTP routes. Admin endpoints are expected to be role-gated by the fronting auth layer.

mod admin;
mod http;

use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::history_repo::HistoryRepo;
use crate::stats::activity::RecentEventSource;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) history_repo: Arc<HistoryRepo>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) recent_events: Arc<dyn RecentEventSource>,
    pub(crate) config: AppConfig,
}

pub fn app(
    history_repo: Arc<HistoryRepo>,
    clock: Arc<dyn Clock>,
    recent_events: Arc<dyn RecentEventSource>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        history_repo,
        clock,
        recent_events,
        config,
    };
    Router::new()
        .route("/", get(|| async { "wbstats: admin statistics backend" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/admin/stats/{week_delta}", get(admin::get_stats)) // GET /api/admin/stats/{week_delta}
        .route("/api/admin/stats", delete(admin::delete_stats)) // DELETE /api/admin/stats
        .route(
            "/api/admin/anomalies",
            get(admin::get_anomalies).delete(admin::delete_anomalies),
        ) // GET, DELETE /api/admin/anomalies
        .route("/api/admin/activities/{kind}", get(admin::get_activities)) // GET /api/admin/activities/{kind}
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
