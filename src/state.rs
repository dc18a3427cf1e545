use tokio::sync::broadcast;

use crate::data::Dataset;
use crate::models::matching::MatchReport;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub dataset: Dataset,
    pub default_min_score: u8,
    pub match_events_tx: broadcast::Sender<MatchReport>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(dataset: Dataset, default_min_score: u8, event_buffer_size: usize) -> Self {
        let (match_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        let metrics = Metrics::new();
        metrics
            .vehicles_available
            .set(dataset.available_vehicles() as i64);

        Self {
            dataset,
            default_min_score,
            match_events_tx,
            metrics,
        }
    }
}
