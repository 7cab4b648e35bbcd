//! # History State Module
//!
//! Holds the recorded activities shown on the history tab together with the
//! active sort order and the summary figures for the stats strip.

use std::cmp::Ordering;

use chrono::NaiveDate;
use shared::ActivityRecord;

/// Sort orders offered above the history table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistorySort {
    /// Most recent activity first
    #[default]
    DateDesc,

    /// Largest emissions first
    EmissionsDesc,

    /// Grouped by category key, A to Z
    Category,
}

impl HistorySort {
    pub const ALL: [HistorySort; 3] = [
        HistorySort::DateDesc,
        HistorySort::EmissionsDesc,
        HistorySort::Category,
    ];

    /// Button label for this sort order
    pub fn label(&self) -> &'static str {
        match self {
            HistorySort::DateDesc => "Date",
            HistorySort::EmissionsDesc => "Émissions",
            HistorySort::Category => "Catégorie",
        }
    }
}

/// State of the history tab
#[derive(Debug, Clone)]
pub struct HistoryState {
    pub sort: HistorySort,
    pub records: Vec<ActivityRecord>,
}

impl HistoryState {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        let mut state = Self {
            sort: HistorySort::default(),
            records,
        };
        state.apply_sort();
        state
    }

    /// Switch the sort order and reorder the records
    pub fn set_sort(&mut self, sort: HistorySort) {
        self.sort = sort;
        self.apply_sort();
        log::debug!("📋 History sorted by {:?}", sort);
    }

    fn apply_sort(&mut self) {
        match self.sort {
            HistorySort::DateDesc => {
                self.records.sort_by(|a, b| b.date.cmp(&a.date));
            }
            HistorySort::EmissionsDesc => {
                self.records.sort_by(|a, b| {
                    b.emissions
                        .partial_cmp(&a.emissions)
                        .unwrap_or(Ordering::Equal)
                });
            }
            HistorySort::Category => {
                self.records
                    .sort_by(|a, b| a.category.key().cmp(b.category.key()));
            }
        }
    }

    /// Sum of emissions over every record
    pub fn total_emissions(&self) -> f64 {
        self.records.iter().map(|record| record.emissions).sum()
    }

    /// Oldest and newest activity dates, when any records exist
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let oldest = self.records.iter().map(|record| record.date).min()?;
        let newest = self.records.iter().map(|record| record.date).max()?;
        Some((oldest, newest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn create_test_record(
        id: i64,
        date: &str,
        category: Category,
        emissions: f64,
    ) -> ActivityRecord {
        ActivityRecord {
            id,
            date: date.parse().unwrap(),
            category,
            name: format!("Activité {}", id),
            quantity: 1.0,
            unit: "km".to_string(),
            emissions,
        }
    }

    fn create_test_history() -> HistoryState {
        HistoryState::new(vec![
            create_test_record(1, "2025-06-10", Category::Food, 7.5),
            create_test_record(2, "2025-06-12", Category::Transport, 2.0),
            create_test_record(3, "2025-06-08", Category::Consumption, 22.0),
            create_test_record(4, "2025-06-11", Category::Energy, 4.1),
        ])
    }

    #[test]
    fn test_new_defaults_to_most_recent_first() {
        let history = create_test_history();

        let ids: Vec<i64> = history.records.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_emissions_descending() {
        let mut history = create_test_history();
        history.set_sort(HistorySort::EmissionsDesc);

        let ids: Vec<i64> = history.records.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_sort_by_category_key() {
        let mut history = create_test_history();
        history.set_sort(HistorySort::Category);

        let keys: Vec<&str> = history
            .records
            .iter()
            .map(|record| record.category.key())
            .collect();
        assert_eq!(keys, vec!["consumption", "energy", "food", "transport"]);
    }

    #[test]
    fn test_total_emissions() {
        let history = create_test_history();
        assert!((history.total_emissions() - 35.6).abs() < 1e-9);
    }

    #[test]
    fn test_date_range_spans_oldest_to_newest() {
        let history = create_test_history();

        let (oldest, newest) = history.date_range().unwrap();
        assert_eq!(oldest, "2025-06-08".parse::<NaiveDate>().unwrap());
        assert_eq!(newest, "2025-06-12".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_empty_history_has_no_range() {
        let history = HistoryState::new(Vec::new());

        assert!(history.date_range().is_none());
        assert_eq!(history.total_emissions(), 0.0);
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(HistorySort::DateDesc.label(), "Date");
        assert_eq!(HistorySort::EmissionsDesc.label(), "Émissions");
        assert_eq!(HistorySort::Category.label(), "Catégorie");
    }
}
