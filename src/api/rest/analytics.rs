use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Json;
use axum::Router;

use crate::analytics::dashboard::{self, DashboardSummary};
use crate::analytics::fleet::{self, FleetSummary};
use crate::analytics::performance::{self, PerformanceReport};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/fleet", get(get_fleet))
        .route("/performance", get(get_performance))
}

async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    Json(dashboard::summarize(&state.dataset))
}

async fn get_fleet(State(state): State<Arc<AppState>>) -> Json<FleetSummary> {
    Json(fleet::summarize(&state.dataset))
}

async fn get_performance(State(state): State<Arc<AppState>>) -> Json<PerformanceReport> {
    Json(performance::report(&state.dataset))
}
