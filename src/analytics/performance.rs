use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::{value_counts, CategoryCount};
use crate::data::costs::mean;
use crate::data::Dataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelayBucket {
    pub delay_days: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierPerformance {
    pub carrier: String,
    pub deliveries: usize,
    pub mean_actual_days: Option<f64>,
    pub mean_customer_rating: Option<f64>,
    pub mean_delivery_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComponent {
    pub component: String,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCost {
    pub order_id: Option<String>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub delay_distribution: Vec<DelayBucket>,
    pub carriers: Vec<CarrierPerformance>,
    pub rating_distribution: Vec<RatingCount>,
    pub issue_categories: Vec<CategoryCount>,
    pub cost_components: Vec<CostComponent>,
    pub order_costs: Vec<OrderCost>,
}

pub fn report(dataset: &Dataset) -> PerformanceReport {
    PerformanceReport {
        delay_distribution: delay_distribution(dataset),
        carriers: carrier_performance(dataset),
        rating_distribution: rating_distribution(dataset),
        issue_categories: value_counts(
            dataset
                .feedback
                .iter()
                .map(|feedback| feedback.issue_category.as_str()),
        ),
        cost_components: dataset
            .costs
            .component_means()
            .into_iter()
            .map(|(component, mean)| CostComponent { component, mean })
            .collect(),
        order_costs: dataset
            .costs
            .rows
            .iter()
            .map(|row| OrderCost {
                order_id: row.order_id.clone(),
                total_cost: row.total(),
            })
            .collect(),
    }
}

fn delay_distribution(dataset: &Dataset) -> Vec<DelayBucket> {
    let mut buckets: Vec<DelayBucket> = Vec::new();

    for delay in dataset.deliveries.iter().filter_map(|d| d.delay_days()) {
        match buckets.iter_mut().find(|bucket| bucket.delay_days == delay) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DelayBucket {
                delay_days: delay,
                count: 1,
            }),
        }
    }

    buckets.sort_by(|a, b| a.delay_days.total_cmp(&b.delay_days));
    buckets
}

fn carrier_performance(dataset: &Dataset) -> Vec<CarrierPerformance> {
    #[derive(Default)]
    struct Totals {
        deliveries: usize,
        actual_days: Vec<f64>,
        ratings: Vec<f64>,
        costs: Vec<f64>,
    }

    let mut by_carrier: BTreeMap<&str, Totals> = BTreeMap::new();
    for delivery in &dataset.deliveries {
        let totals = by_carrier.entry(delivery.carrier.as_str()).or_default();
        totals.deliveries += 1;
        totals.actual_days.extend(delivery.actual_days);
        totals.ratings.extend(delivery.customer_rating);
        totals.costs.extend(delivery.delivery_cost_inr);
    }

    by_carrier
        .into_iter()
        .map(|(carrier, totals)| CarrierPerformance {
            carrier: carrier.to_string(),
            deliveries: totals.deliveries,
            mean_actual_days: mean(&totals.actual_days),
            mean_customer_rating: mean(&totals.ratings),
            mean_delivery_cost: mean(&totals.costs),
        })
        .collect()
}

fn rating_distribution(dataset: &Dataset) -> Vec<RatingCount> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for rating in dataset.feedback.iter().filter_map(|feedback| feedback.rating) {
        *counts.entry(rating).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(rating, count)| RatingCount { rating, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::report;
    use crate::data::{parse_rows, CostTable, Dataset};

    const DELIVERIES: &str = "\
Order_ID,Carrier,Promised_Delivery_Days,Actual_Delivery_Days,Delivery_Status,Customer_Rating,Delivery_Cost_INR
O1,SpeedyLogistics,3,2,On-Time,5,100
O2,QuickShip,2,4,Severely-Delayed,2,150
O3,SpeedyLogistics,4,4,On-Time,4,
O4,QuickShip,1,2,Slightly-Delayed,,90
";

    const FEEDBACK: &str = "\
Order_ID,Feedback_Date,Rating,Feedback_Text,Would_Recommend,Issue_Category
O1,2024-10-01,5,Great,Yes,None
O2,2024-10-02,2,Late,No,Delivery_Delay
O4,2024-10-03,3,Meh,Maybe,Delivery_Delay
";

    const COSTS: &str = "\
Order_ID,Fuel_Cost,Labor_Cost
O1,100,20
O2,50,
";

    fn dataset() -> Dataset {
        Dataset::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            parse_rows(DELIVERIES.as_bytes()),
            parse_rows(FEEDBACK.as_bytes()),
            CostTable::parse(COSTS.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn delays_are_counted_in_ascending_order() {
        let report = report(&dataset());
        let delays: Vec<(f64, usize)> = report
            .delay_distribution
            .iter()
            .map(|bucket| (bucket.delay_days, bucket.count))
            .collect();
        assert_eq!(delays, vec![(-1.0, 1), (0.0, 1), (1.0, 1), (2.0, 1)]);
    }

    #[test]
    fn carriers_are_averaged_per_name() {
        let report = report(&dataset());

        assert_eq!(report.carriers.len(), 2);
        let quick = &report.carriers[0];
        assert_eq!(quick.carrier, "QuickShip");
        assert_eq!(quick.deliveries, 2);
        assert_eq!(quick.mean_actual_days, Some(3.0));
        assert_eq!(quick.mean_customer_rating, Some(2.0));
        assert_eq!(quick.mean_delivery_cost, Some(120.0));

        let speedy = &report.carriers[1];
        assert_eq!(speedy.mean_customer_rating, Some(4.5));
        assert_eq!(speedy.mean_delivery_cost, Some(100.0));
    }

    #[test]
    fn blank_day_counts_and_ratings_are_skipped() {
        let deliveries = "\
Order_ID,Carrier,Promised_Delivery_Days,Actual_Delivery_Days,Delivery_Status
O1,QuickShip,3,,In-Transit
O2,QuickShip,2,3,Slightly-Delayed
";
        let feedback = "\
Order_ID,Rating,Issue_Category
O1,,None
O2,4,Delivery_Delay
";
        let dataset = Dataset::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            parse_rows(deliveries.as_bytes()),
            parse_rows(feedback.as_bytes()),
            CostTable::default(),
        );
        let report = report(&dataset);

        assert_eq!(report.delay_distribution.len(), 1);
        assert_eq!(report.delay_distribution[0].delay_days, 1.0);
        assert_eq!(report.carriers[0].deliveries, 2);
        assert_eq!(report.carriers[0].mean_actual_days, Some(3.0));
        assert_eq!(report.rating_distribution.len(), 1);
        assert_eq!(report.rating_distribution[0].rating, 4);
        assert_eq!(report.issue_categories.len(), 2);
    }

    #[test]
    fn feedback_distributions() {
        let report = report(&dataset());

        let ratings: Vec<(u8, usize)> = report
            .rating_distribution
            .iter()
            .map(|entry| (entry.rating, entry.count))
            .collect();
        assert_eq!(ratings, vec![(2, 1), (3, 1), (5, 1)]);
        assert_eq!(report.issue_categories[0].label, "Delivery_Delay");
        assert_eq!(report.issue_categories[0].count, 2);
    }

    #[test]
    fn costs_per_component_and_order() {
        let report = report(&dataset());

        assert_eq!(report.cost_components[0].component, "Fuel_Cost");
        assert_eq!(report.cost_components[0].mean, Some(75.0));
        assert_eq!(report.cost_components[1].mean, Some(20.0));
        assert_eq!(report.order_costs[0].total_cost, 120.0);
        assert_eq!(report.order_costs[1].total_cost, 50.0);
    }
}
