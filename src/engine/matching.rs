use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::scoring::score_matches;
use crate::error::AppError;
use crate::models::matching::{MatchReport, MatchStatus};
use crate::state::AppState;

/// Runs one match request against the loaded tables and publishes the
/// report to live subscribers.
pub fn run_match(state: &AppState, order_id: &str, min_score: u8) -> Result<MatchReport, AppError> {
    let start = Instant::now();

    let result = build_report(state, order_id, min_score);
    let elapsed = start.elapsed().as_secs_f64();

    match &result {
        Ok(report) => {
            let outcome = match report.status {
                MatchStatus::Matched => "matched",
                MatchStatus::NoSuitableVehicle => "no_match",
            };
            record(state, outcome, elapsed);
            state
                .metrics
                .match_candidates
                .observe(report.matches.len() as f64);

            info!(
                order_id = %report.order_id,
                min_score,
                candidates = report.matches.len(),
                best_vehicle = report.best_match.as_ref().map(|m| m.vehicle.id.as_str()),
                best_score = report.best_match.as_ref().map(|m| m.score),
                "match completed"
            );

            let _ = state.match_events_tx.send(report.clone());
        }
        Err(err) => {
            record(state, "error", elapsed);
            warn!(order_id, error = %err, "match failed");
        }
    }

    result
}

fn build_report(state: &AppState, order_id: &str, min_score: u8) -> Result<MatchReport, AppError> {
    let order = state
        .dataset
        .order(order_id)
        .ok_or_else(|| AppError::NotFound(format!("order {order_id} not found")))?;

    let matches = score_matches(
        order,
        &state.dataset.vehicles,
        &state.dataset.routes,
        min_score,
    )?;

    let status = if matches.is_empty() {
        MatchStatus::NoSuitableVehicle
    } else {
        MatchStatus::Matched
    };

    Ok(MatchReport {
        id: Uuid::new_v4(),
        order_id: order.id.clone(),
        min_score,
        status,
        best_match: matches.first().cloned(),
        matches,
        generated_at: Utc::now(),
    })
}

fn record(state: &AppState, outcome: &str, elapsed: f64) {
    state
        .metrics
        .match_latency_seconds
        .with_label_values(&[outcome])
        .observe(elapsed);
    state
        .metrics
        .match_requests_total
        .with_label_values(&[outcome])
        .inc();
}
