use std::collections::HashMap;

use tracing::debug;

use crate::engine::compat::{handling_allows, priority_vehicle_types};
use crate::error::AppError;
use crate::models::matching::{ScoreBreakdown, VehicleMatch};
use crate::models::order::Order;
use crate::models::route::Route;
use crate::models::vehicle::{Vehicle, VehicleType};

pub const HANDLING_POINTS: u8 = 40;
pub const PRIORITY_POINTS: u8 = 30;
pub const CAPACITY_FULL_POINTS: u8 = 20;
pub const CAPACITY_PARTIAL_POINTS: u8 = 10;
pub const LOCATION_POINTS: u8 = 10;

/// Order value (INR) standing in for one kilogram of shipment weight.
const VALUE_PER_KG: f64 = 100.0;
const MAX_REQUIRED_CAPACITY_KG: f64 = 1000.0;
const PARTIAL_CAPACITY_RATIO: f64 = 0.7;

/// Capacity an order needs, or `None` when its value is NaN.
pub fn required_capacity_kg(order_value: f64) -> Option<f64> {
    if order_value.is_nan() {
        return None;
    }
    Some((order_value / VALUE_PER_KG).min(MAX_REQUIRED_CAPACITY_KG))
}

/// Scores one vehicle against one order, ignoring availability.
pub fn compute_score(vehicle: &Vehicle, order: &Order) -> Result<ScoreBreakdown, AppError> {
    let priority_types = priority_vehicle_types(&order.priority)?;
    Ok(score_components(vehicle, order, priority_types))
}

/// Ranks every available vehicle for `order`, best first.
///
/// Returns an empty list when the order has no route. Vehicles scoring
/// below `min_score` are dropped; equal scores keep their table order.
pub fn score_matches(
    order: &Order,
    vehicles: &[Vehicle],
    routes: &HashMap<String, Route>,
    min_score: u8,
) -> Result<Vec<VehicleMatch>, AppError> {
    if !routes.contains_key(&order.id) {
        debug!(order_id = %order.id, "no route for order; skipping match");
        return Ok(Vec::new());
    }

    let priority_types = priority_vehicle_types(&order.priority)?;

    let mut matches: Vec<VehicleMatch> = vehicles
        .iter()
        .filter(|vehicle| vehicle.is_available())
        .filter_map(|vehicle| {
            let breakdown = score_components(vehicle, order, priority_types);
            let score = breakdown.total();

            (score >= min_score).then(|| VehicleMatch {
                vehicle: vehicle.clone(),
                score,
                breakdown,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(matches)
}

fn score_components(
    vehicle: &Vehicle,
    order: &Order,
    priority_types: &[VehicleType],
) -> ScoreBreakdown {
    ScoreBreakdown {
        special_handling: handling_score(vehicle, order),
        priority: priority_score(vehicle, priority_types),
        capacity: capacity_score(vehicle.capacity_kg, order.value_inr),
        location: location_score(vehicle, order),
    }
}

fn handling_score(vehicle: &Vehicle, order: &Order) -> u8 {
    if handling_allows(&order.special_handling, &vehicle.vehicle_type) {
        HANDLING_POINTS
    } else {
        0
    }
}

fn priority_score(vehicle: &Vehicle, priority_types: &[VehicleType]) -> u8 {
    if priority_types.contains(&vehicle.vehicle_type) {
        PRIORITY_POINTS
    } else {
        0
    }
}

fn capacity_score(capacity_kg: Option<f64>, order_value: Option<f64>) -> u8 {
    let (Some(capacity_kg), Some(required)) =
        (capacity_kg, order_value.and_then(required_capacity_kg))
    else {
        return 0;
    };

    if capacity_kg >= required {
        CAPACITY_FULL_POINTS
    } else if capacity_kg >= required * PARTIAL_CAPACITY_RATIO {
        CAPACITY_PARTIAL_POINTS
    } else {
        0
    }
}

fn location_score(vehicle: &Vehicle, order: &Order) -> u8 {
    if vehicle.current_location == order.origin {
        LOCATION_POINTS
    } else {
        0
    }
}
