use serde::{Deserialize, Serialize};

/// Route information for an order. Matching only checks that one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename(deserialize = "Order_ID"))]
    pub order_id: String,
    #[serde(rename(deserialize = "Route"), default)]
    pub route: Option<String>,
    #[serde(
        rename(deserialize = "Distance_KM"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub distance_km: Option<f64>,
}
