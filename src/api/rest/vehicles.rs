use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use crate::analytics::fleet::{filter_fleet, FleetFilter};
use crate::error::AppError;
use crate::models::vehicle::{Vehicle, VehicleStatus, VehicleType};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/vehicles", get(list_vehicles))
}

/// `types` and `statuses` are comma-separated label lists.
#[derive(Deserialize, Default)]
pub struct FleetQuery {
    pub types: Option<String>,
    pub statuses: Option<String>,
    pub min_efficiency: Option<f64>,
}

impl From<FleetQuery> for FleetFilter {
    fn from(query: FleetQuery) -> Self {
        FleetFilter {
            types: split_labels(query.types.as_deref())
                .map(VehicleType::from)
                .collect(),
            statuses: split_labels(query.statuses.as_deref())
                .map(VehicleStatus::from)
                .collect(),
            min_efficiency: query.min_efficiency,
        }
    }
}

fn split_labels(raw: Option<&str>) -> impl Iterator<Item = String> + '_ {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

async fn list_vehicles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FleetQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let Query(query) = query?;
    let filter = FleetFilter::from(query);
    let vehicles = filter_fleet(&state.dataset.vehicles, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(vehicles))
}

#[cfg(test)]
mod tests {
    use super::FleetQuery;
    use crate::analytics::fleet::FleetFilter;
    use crate::models::vehicle::{VehicleStatus, VehicleType};

    #[test]
    fn labels_are_split_and_trimmed() {
        let filter = FleetFilter::from(FleetQuery {
            types: Some("Small_Van, Refrigerated,,".to_string()),
            statuses: Some("Available".to_string()),
            min_efficiency: Some(8.5),
        });

        assert_eq!(
            filter.types,
            vec![VehicleType::SmallVan, VehicleType::Refrigerated]
        );
        assert_eq!(filter.statuses, vec![VehicleStatus::Available]);
        assert_eq!(filter.min_efficiency, Some(8.5));
    }

    #[test]
    fn missing_lists_mean_no_restriction() {
        let filter = FleetFilter::from(FleetQuery::default());
        assert!(filter.types.is_empty());
        assert!(filter.statuses.is_empty());
    }
}
