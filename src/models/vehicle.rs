use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleType {
    ExpressBike,
    SmallVan,
    MediumTruck,
    LargeTruck,
    Refrigerated,
    Other(String),
}

impl VehicleType {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::ExpressBike => "Express_Bike",
            VehicleType::SmallVan => "Small_Van",
            VehicleType::MediumTruck => "Medium_Truck",
            VehicleType::LargeTruck => "Large_Truck",
            VehicleType::Refrigerated => "Refrigerated",
            VehicleType::Other(raw) => raw,
        }
    }
}

impl From<String> for VehicleType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Express_Bike" => VehicleType::ExpressBike,
            "Small_Van" => VehicleType::SmallVan,
            "Medium_Truck" => VehicleType::MediumTruck,
            "Large_Truck" => VehicleType::LargeTruck,
            "Refrigerated" => VehicleType::Refrigerated,
            _ => VehicleType::Other(raw),
        }
    }
}

impl From<VehicleType> for String {
    fn from(vehicle_type: VehicleType) -> Self {
        vehicle_type.as_str().to_string()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only `Available` vehicles are eligible for matching; every other
/// label is kept verbatim for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    Available,
    Unavailable(String),
}

impl VehicleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Unavailable(raw) => raw,
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(raw: String) -> Self {
        if raw == "Available" {
            VehicleStatus::Available
        } else {
            VehicleStatus::Unavailable(raw)
        }
    }
}

impl From<VehicleStatus> for String {
    fn from(status: VehicleStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename(deserialize = "Vehicle_ID"))]
    pub id: String,
    #[serde(rename(deserialize = "Vehicle_Type"))]
    pub vehicle_type: VehicleType,
    #[serde(rename(deserialize = "Status"))]
    pub status: VehicleStatus,
    #[serde(rename(deserialize = "Current_Location"))]
    pub current_location: String,
    #[serde(
        rename(deserialize = "Capacity_KG"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub capacity_kg: Option<f64>,
    #[serde(
        rename(deserialize = "Fuel_Efficiency_KM_per_L"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub fuel_efficiency_km_per_l: Option<f64>,
    #[serde(
        rename(deserialize = "Age_Years"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub age_years: Option<f64>,
    #[serde(
        rename(deserialize = "CO2_Emissions_Kg_per_KM"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub co2_emissions_kg_per_km: Option<f64>,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}
