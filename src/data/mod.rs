pub mod costs;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, info_span, warn};

use crate::error::AppError;
use crate::models::order::Order;
use crate::models::performance::{DeliveryRecord, Feedback};
use crate::models::route::Route;
use crate::models::vehicle::Vehicle;

pub use costs::CostTable;

pub const ORDERS_FILE: &str = "orders.csv";
pub const DELIVERY_PERFORMANCE_FILE: &str = "delivery_performance.csv";
pub const ROUTES_FILE: &str = "routes_distance.csv";
pub const VEHICLES_FILE: &str = "vehicle_fleet.csv";
pub const COST_BREAKDOWN_FILE: &str = "cost_breakdown.csv";
pub const CUSTOMER_FEEDBACK_FILE: &str = "customer_feedback.csv";

/// All logistics tables, loaded once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub vehicles: Vec<Vehicle>,
    pub routes: HashMap<String, Route>,
    pub deliveries: Vec<DeliveryRecord>,
    pub feedback: Vec<Feedback>,
    pub costs: CostTable,
    order_index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(
        orders: Vec<Order>,
        vehicles: Vec<Vehicle>,
        routes: Vec<Route>,
        deliveries: Vec<DeliveryRecord>,
        feedback: Vec<Feedback>,
        costs: CostTable,
    ) -> Self {
        let mut order_index = HashMap::with_capacity(orders.len());
        for (position, order) in orders.iter().enumerate() {
            if order_index.contains_key(&order.id) {
                warn!(order_id = %order.id, "duplicate order id; keeping first row");
                continue;
            }
            order_index.insert(order.id.clone(), position);
        }

        let mut route_table = HashMap::with_capacity(routes.len());
        for route in routes {
            route_table.entry(route.order_id.clone()).or_insert(route);
        }

        Self {
            orders,
            vehicles,
            routes: route_table,
            deliveries,
            feedback,
            costs,
            order_index,
        }
    }

    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let orders = read_table(dir, ORDERS_FILE)?;
        let vehicles = read_table(dir, VEHICLES_FILE)?;
        let routes = read_table(dir, ROUTES_FILE)?;
        let deliveries = read_table(dir, DELIVERY_PERFORMANCE_FILE)?;
        let feedback = read_table(dir, CUSTOMER_FEEDBACK_FILE)?;
        let costs = {
            let file = open(dir, COST_BREAKDOWN_FILE)?;
            let _span = info_span!("table", file = COST_BREAKDOWN_FILE).entered();
            CostTable::parse(file)
                .map_err(|err| AppError::Data(format!("{COST_BREAKDOWN_FILE}: {err}")))?
        };

        let dataset = Self::new(orders, vehicles, routes, deliveries, feedback, costs);

        info!(
            data_dir = %dir.display(),
            orders = dataset.orders.len(),
            vehicles = dataset.vehicles.len(),
            routes = dataset.routes.len(),
            deliveries = dataset.deliveries.len(),
            feedback = dataset.feedback.len(),
            "dataset loaded"
        );

        Ok(dataset)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.order_index
            .get(id)
            .and_then(|&position| self.orders.get(position))
    }

    pub fn available_vehicles(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.is_available())
            .count()
    }
}

/// Deserializes the rows of a headed CSV table; unknown columns are ignored.
///
/// Rows that cannot be read are logged and skipped so one bad line never
/// hides the rest of the table.
pub fn parse_rows<T, R>(reader: R) -> Vec<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in csv_reader.deserialize::<T>() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "skipping unreadable row");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = rows.len(), "table loaded with skipped rows");
    }

    rows
}

fn read_table<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, AppError> {
    let file = open(dir, file_name)?;
    let _span = info_span!("table", file = file_name).entered();
    Ok(parse_rows(file))
}

fn open(dir: &Path, file_name: &str) -> Result<File, AppError> {
    let path = dir.join(file_name);
    File::open(&path)
        .map_err(|err| AppError::Data(format!("failed to open {}: {err}", path.display())))
}
