use serde::Serialize;

use crate::analytics::{value_counts, CategoryCount};
use crate::data::Dataset;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub total_orders: usize,
    /// Percentage of deliveries that arrived within the promised days.
    pub on_time_rate: Option<f64>,
    pub average_delivery_cost: Option<f64>,
    pub vehicle_status: Vec<CategoryCount>,
    pub order_priority: Vec<CategoryCount>,
    pub vehicle_types: Vec<CategoryCount>,
    pub delivery_status: Vec<CategoryCount>,
}

pub fn summarize(dataset: &Dataset) -> DashboardSummary {
    DashboardSummary {
        total_vehicles: dataset.vehicles.len(),
        available_vehicles: dataset.available_vehicles(),
        total_orders: dataset.orders.len(),
        on_time_rate: on_time_rate(dataset),
        average_delivery_cost: dataset.costs.average_total(),
        vehicle_status: value_counts(dataset.vehicles.iter().map(|v| v.status.as_str())),
        order_priority: value_counts(dataset.orders.iter().map(|o| o.priority.as_str())),
        vehicle_types: value_counts(dataset.vehicles.iter().map(|v| v.vehicle_type.as_str())),
        delivery_status: value_counts(
            dataset
                .deliveries
                .iter()
                .map(|d| d.delivery_status.as_str()),
        ),
    }
}

fn on_time_rate(dataset: &Dataset) -> Option<f64> {
    if dataset.deliveries.is_empty() {
        return None;
    }

    let on_time = dataset.deliveries.iter().filter(|d| d.on_time()).count();
    Some(on_time as f64 / dataset.deliveries.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::data::{parse_rows, CostTable, Dataset};

    const ORDERS: &str = "\
Order_ID,Priority,Origin,Destination,Special_Handling,Order_Value_INR
O1,Express,Delhi,Pune,None,100
O2,Economy,Delhi,Pune,Fragile,200
O3,Express,Pune,Delhi,,300
";

    const VEHICLES: &str = "\
Vehicle_ID,Vehicle_Type,Status,Current_Location,Capacity_KG
V1,Small_Van,Available,Delhi,500
V2,Large_Truck,Maintenance,Pune,3000
V3,Small_Van,Available,Pune,500
";

    const DELIVERIES: &str = "\
Order_ID,Carrier,Promised_Delivery_Days,Actual_Delivery_Days,Delivery_Status,Customer_Rating,Delivery_Cost_INR
O1,SpeedyLogistics,3,2,On-Time,5,100
O2,QuickShip,2,4,Severely-Delayed,2,150
O3,SpeedyLogistics,4,4,On-Time,4,
O4,QuickShip,1,2,Slightly-Delayed,,90
";

    const COSTS: &str = "\
Order_ID,Fuel_Cost,Labor_Cost
O1,100,20
O2,50,30
";

    fn dataset() -> Dataset {
        Dataset::new(
            parse_rows(ORDERS.as_bytes()),
            parse_rows(VEHICLES.as_bytes()),
            Vec::new(),
            parse_rows(DELIVERIES.as_bytes()),
            Vec::new(),
            CostTable::parse(COSTS.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn headline_metrics() {
        let summary = summarize(&dataset());

        assert_eq!(summary.total_vehicles, 3);
        assert_eq!(summary.available_vehicles, 2);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.on_time_rate, Some(50.0));
        assert_eq!(summary.average_delivery_cost, Some(100.0));
    }

    #[test]
    fn distributions_follow_frequency() {
        let summary = summarize(&dataset());

        assert_eq!(summary.vehicle_status[0].label, "Available");
        assert_eq!(summary.vehicle_status[0].count, 2);
        assert_eq!(summary.order_priority[0].label, "Express");
        assert_eq!(summary.vehicle_types[0].label, "Small_Van");
        assert_eq!(summary.delivery_status[0].label, "On-Time");
        assert_eq!(summary.delivery_status.len(), 3);
    }

    #[test]
    fn empty_dataset_has_no_rates() {
        let summary = summarize(&Dataset::default());

        assert_eq!(summary.total_vehicles, 0);
        assert_eq!(summary.on_time_rate, None);
        assert_eq!(summary.average_delivery_cost, None);
    }
}
