use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    #[serde(rename(deserialize = "Order_ID"))]
    pub order_id: String,
    #[serde(rename(deserialize = "Carrier"))]
    pub carrier: String,
    #[serde(
        rename(deserialize = "Promised_Delivery_Days"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub promised_days: Option<f64>,
    #[serde(
        rename(deserialize = "Actual_Delivery_Days"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub actual_days: Option<f64>,
    #[serde(rename(deserialize = "Delivery_Status"))]
    pub delivery_status: String,
    #[serde(
        rename(deserialize = "Customer_Rating"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub customer_rating: Option<f64>,
    #[serde(
        rename(deserialize = "Delivery_Cost_INR"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub delivery_cost_inr: Option<f64>,
}

impl DeliveryRecord {
    pub fn delay_days(&self) -> Option<f64> {
        Some(self.actual_days? - self.promised_days?)
    }

    /// Deliveries missing either day count are never on time.
    pub fn on_time(&self) -> bool {
        match (self.actual_days, self.promised_days) {
            (Some(actual), Some(promised)) => actual <= promised,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename(deserialize = "Order_ID"))]
    pub order_id: String,
    #[serde(
        rename(deserialize = "Rating"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub rating: Option<u8>,
    #[serde(rename(deserialize = "Issue_Category"), default)]
    pub issue_category: String,
}
