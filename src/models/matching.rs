use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;

/// Points awarded per scoring rule for one order/vehicle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub special_handling: u8,
    pub priority: u8,
    pub capacity: u8,
    pub location: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.special_handling + self.priority + self.capacity + self.location
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleMatch {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Matched,
    NoSuitableVehicle,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub id: Uuid,
    pub order_id: String,
    pub min_score: u8,
    pub status: MatchStatus,
    pub best_match: Option<VehicleMatch>,
    pub matches: Vec<VehicleMatch>,
    pub generated_at: DateTime<Utc>,
}
