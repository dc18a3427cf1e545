use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use crate::engine::matching::run_match;
use crate::error::AppError;
use crate::models::matching::MatchReport;
use crate::models::order::Order;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/matches", get(find_matches))
}

#[derive(Deserialize)]
pub struct MatchQuery {
    pub min_score: Option<u16>,
}

async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.dataset.orders.clone())
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .dataset
        .order(&id)
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    Ok(Json(order.clone()))
}

async fn find_matches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<MatchReport>, AppError> {
    let Query(query) = query?;
    let min_score = match query.min_score {
        Some(score) if score > 100 => {
            return Err(AppError::BadRequest(format!(
                "min_score must be between 0 and 100, got {score}"
            )));
        }
        Some(score) => score as u8,
        None => state.default_min_score,
    };

    let report = run_match(&state, &id, min_score)?;
    Ok(Json(report))
}
