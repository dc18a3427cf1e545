pub mod dashboard;
pub mod fleet;
pub mod performance;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Counts occurrences per label, most frequent first. Ties keep the order
/// in which labels were first seen.
pub fn value_counts<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in labels {
        match counts.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::value_counts;

    #[test]
    fn most_frequent_first_with_stable_ties() {
        let counts = value_counts(["Van", "Bike", "Truck", "Bike", "Van", "Bus"]);
        let labels: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.label.as_str(), entry.count))
            .collect();
        assert_eq!(labels, vec![("Van", 2), ("Bike", 2), ("Truck", 1), ("Bus", 1)]);
    }

    #[test]
    fn empty_input_gives_no_counts() {
        assert!(value_counts(Vec::<&str>::new()).is_empty());
    }
}
