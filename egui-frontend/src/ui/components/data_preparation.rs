//! # Chart Data Preparation
//!
//! Pure aggregation helpers turning recorded activities into the series the
//! history charts draw. Kept free of egui so the math is testable on its own.

use std::collections::BTreeMap;

use shared::{ActivityRecord, Category, CategoryTotal, DailyEmission};

/// Group records by day and sum emissions, oldest day first
pub fn daily_totals(records: &[ActivityRecord]) -> Vec<DailyEmission> {
    let mut by_day: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();

    for record in records {
        *by_day.entry(record.date).or_insert(0.0) += record.emissions;
    }

    by_day
        .into_iter()
        .map(|(date, emissions)| DailyEmission {
            date,
            display_date: {
                use chrono::Datelike;
                format!("{:02}/{:02}", date.day(), date.month())
            },
            emissions,
        })
        .collect()
}

/// Sum emissions per category, every category present even when zero
pub fn category_totals(records: &[ActivityRecord]) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            emissions: records
                .iter()
                .filter(|record| record.category == category)
                .map(|record| record.emissions)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(date: &str, category: Category, emissions: f64) -> ActivityRecord {
        ActivityRecord {
            id: 0,
            date: date.parse().unwrap(),
            category,
            name: "Test".to_string(),
            quantity: 1.0,
            unit: "km".to_string(),
            emissions,
        }
    }

    #[test]
    fn test_daily_totals_groups_and_sums() {
        let records = vec![
            create_test_record("2025-06-12", Category::Transport, 2.0),
            create_test_record("2025-06-10", Category::Food, 7.5),
            create_test_record("2025-06-12", Category::Energy, 1.5),
        ];

        let daily = daily_totals(&records);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].display_date, "10/06");
        assert_eq!(daily[0].emissions, 7.5);
        assert_eq!(daily[1].display_date, "12/06");
        assert!((daily[1].emissions - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_daily_totals_empty_input() {
        assert!(daily_totals(&[]).is_empty());
    }

    #[test]
    fn test_category_totals_include_zero_categories() {
        let records = vec![
            create_test_record("2025-06-12", Category::Transport, 2.0),
            create_test_record("2025-06-13", Category::Transport, 3.0),
        ];

        let totals = category_totals(&records);

        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].category, Category::Transport);
        assert_eq!(totals[0].emissions, 5.0);
        assert!(totals[1..].iter().all(|total| total.emissions == 0.0));
    }
}
