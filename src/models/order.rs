use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Express,
    Standard,
    Economy,
    Unrecognized(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Express => "Express",
            Priority::Standard => "Standard",
            Priority::Economy => "Economy",
            Priority::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Express" => Priority::Express,
            "Standard" => Priority::Standard,
            "Economy" => Priority::Economy,
            _ => Priority::Unrecognized(raw),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling constraint attached to an order. An empty cell means no
/// special handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecialHandling {
    TemperatureControlled,
    Fragile,
    Hazmat,
    None,
    Unrecognized(String),
}

impl SpecialHandling {
    pub fn as_str(&self) -> &str {
        match self {
            SpecialHandling::TemperatureControlled => "Temperature_Controlled",
            SpecialHandling::Fragile => "Fragile",
            SpecialHandling::Hazmat => "Hazmat",
            SpecialHandling::None => "None",
            SpecialHandling::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for SpecialHandling {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Temperature_Controlled" => SpecialHandling::TemperatureControlled,
            "Fragile" => SpecialHandling::Fragile,
            "Hazmat" => SpecialHandling::Hazmat,
            "None" | "" => SpecialHandling::None,
            _ => SpecialHandling::Unrecognized(raw),
        }
    }
}

impl From<SpecialHandling> for String {
    fn from(handling: SpecialHandling) -> Self {
        handling.as_str().to_string()
    }
}

impl fmt::Display for SpecialHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename(deserialize = "Order_ID"))]
    pub id: String,
    #[serde(rename(deserialize = "Priority"))]
    pub priority: Priority,
    #[serde(rename(deserialize = "Product_Category"), default)]
    pub product_category: String,
    #[serde(rename(deserialize = "Origin"))]
    pub origin: String,
    #[serde(rename(deserialize = "Destination"))]
    pub destination: String,
    #[serde(rename(deserialize = "Special_Handling"))]
    pub special_handling: SpecialHandling,
    #[serde(
        rename(deserialize = "Order_Value_INR"),
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub value_inr: Option<f64>,
}
