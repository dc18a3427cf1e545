use std::io::Read;

use serde::Serialize;
use tracing::warn;

/// Per-order cost rows with a dynamic set of numeric component columns.
///
/// A column counts as a component when every non-empty cell in it parses
/// as a number. Identifier-like columns (`Order_ID`) never qualify.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostTable {
    pub components: Vec<String>,
    pub rows: Vec<CostRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostRow {
    pub order_id: Option<String>,
    pub values: Vec<Option<f64>>,
}

impl CostRow {
    /// Sum of the present component values; missing cells are skipped.
    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }
}

impl CostTable {
    pub fn parse<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let records: Vec<csv::StringRecord> = csv_reader
            .records()
            .filter_map(|record| match record {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable cost row");
                    None
                }
            })
            .collect();

        let order_column = headers.iter().position(|name| name == "Order_ID");

        let numeric_columns: Vec<usize> = (0..headers.len())
            .filter(|&column| Some(column) != order_column)
            .filter(|&column| {
                records.iter().all(|record| {
                    let cell = record.get(column).unwrap_or("");
                    cell.is_empty() || cell.parse::<f64>().is_ok()
                })
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| CostRow {
                order_id: order_column
                    .and_then(|column| record.get(column))
                    .map(str::to_string),
                values: numeric_columns
                    .iter()
                    .map(|&column| record.get(column).and_then(|cell| cell.parse::<f64>().ok()))
                    .collect(),
            })
            .collect();

        Ok(Self {
            components: numeric_columns
                .iter()
                .map(|&column| headers[column].to_string())
                .collect(),
            rows,
        })
    }

    /// Mean of each component across rows, skipping missing cells.
    pub fn component_means(&self) -> Vec<(String, Option<f64>)> {
        self.components
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let present: Vec<f64> = self
                    .rows
                    .iter()
                    .filter_map(|row| row.values.get(index).copied().flatten())
                    .collect();
                (name.clone(), mean(&present))
            })
            .collect()
    }

    pub fn average_total(&self) -> Option<f64> {
        let totals: Vec<f64> = self.rows.iter().map(CostRow::total).collect();
        mean(&totals)
    }
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
