use serde::Serialize;

use crate::data::costs::mean;
use crate::data::Dataset;
use crate::models::vehicle::{Vehicle, VehicleStatus, VehicleType};

#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub fleet_size: usize,
    pub available: usize,
    pub average_age_years: Option<f64>,
}

pub fn summarize(dataset: &Dataset) -> FleetSummary {
    let ages: Vec<f64> = dataset
        .vehicles
        .iter()
        .filter_map(|vehicle| vehicle.age_years)
        .collect();

    FleetSummary {
        fleet_size: dataset.vehicles.len(),
        available: dataset.available_vehicles(),
        average_age_years: mean(&ages),
    }
}

/// Empty type or status lists leave that dimension unrestricted.
#[derive(Debug, Clone, Default)]
pub struct FleetFilter {
    pub types: Vec<VehicleType>,
    pub statuses: Vec<VehicleStatus>,
    pub min_efficiency: Option<f64>,
}

impl FleetFilter {
    pub fn accepts(&self, vehicle: &Vehicle) -> bool {
        let type_ok = self.types.is_empty() || self.types.contains(&vehicle.vehicle_type);
        let status_ok = self.statuses.is_empty() || self.statuses.contains(&vehicle.status);
        let efficiency_ok = match self.min_efficiency {
            Some(min) => vehicle
                .fuel_efficiency_km_per_l
                .is_some_and(|efficiency| efficiency >= min),
            None => true,
        };

        type_ok && status_ok && efficiency_ok
    }
}

pub fn filter_fleet<'a>(vehicles: &'a [Vehicle], filter: &FleetFilter) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| filter.accepts(vehicle))
        .collect()
}
