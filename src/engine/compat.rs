use crate::error::AppError;
use crate::models::order::{Priority, SpecialHandling};
use crate::models::vehicle::VehicleType;

/// Vehicle types allowed to carry each special-handling category.
pub const SPECIAL_HANDLING_TABLE: &[(SpecialHandling, &[VehicleType])] = &[
    (
        SpecialHandling::TemperatureControlled,
        &[VehicleType::Refrigerated],
    ),
    (
        SpecialHandling::Fragile,
        &[
            VehicleType::SmallVan,
            VehicleType::MediumTruck,
            VehicleType::Refrigerated,
        ],
    ),
    (
        SpecialHandling::Hazmat,
        &[VehicleType::MediumTruck, VehicleType::LargeTruck],
    ),
    (
        SpecialHandling::None,
        &[
            VehicleType::SmallVan,
            VehicleType::MediumTruck,
            VehicleType::LargeTruck,
            VehicleType::Refrigerated,
            VehicleType::ExpressBike,
        ],
    ),
];

/// Vehicle types suited to each order priority.
pub const PRIORITY_TABLE: &[(Priority, &[VehicleType])] = &[
    (
        Priority::Express,
        &[VehicleType::ExpressBike, VehicleType::SmallVan],
    ),
    (
        Priority::Standard,
        &[VehicleType::SmallVan, VehicleType::MediumTruck],
    ),
    (
        Priority::Economy,
        &[VehicleType::MediumTruck, VehicleType::LargeTruck],
    ),
];

pub fn handling_allows(handling: &SpecialHandling, vehicle_type: &VehicleType) -> bool {
    SPECIAL_HANDLING_TABLE
        .iter()
        .find(|(category, _)| category == handling)
        .is_some_and(|(_, allowed)| allowed.contains(vehicle_type))
}

pub fn priority_vehicle_types(priority: &Priority) -> Result<&'static [VehicleType], AppError> {
    PRIORITY_TABLE
        .iter()
        .find(|(known, _)| known == priority)
        .map(|(_, allowed)| *allowed)
        .ok_or_else(|| AppError::UnknownPriority(priority.as_str().to_string()))
}
