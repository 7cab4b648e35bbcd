//! # Page Data Module
//!
//! This module loads the page-embedded payload: the JSON document the server
//! renders into each page (activity catalog, history rows, dashboard
//! aggregates, recommendation cards). The desktop client compiles it in and
//! deserializes it at startup.
//!
//! ## Responsibilities:
//! - Deserialize the embedded JSON payload into shared DTOs
//! - Catalog lookups (options per category, option by id)
//!
//! ## Purpose:
//! Everything the client displays comes from this payload. Emissions are
//! pre-computed server-side; nothing here calculates them. Missing sections
//! degrade their feature to an empty state instead of failing the load.

use anyhow::Context;
use serde::Deserialize;
use shared::{
    ActivityOption, ActivityRecord, Category, CategoryTotal, DailyEmission, MonthlySummary,
    PrefilledForm, Recommendation,
};

/// Payload compiled into the binary, standing in for the server-rendered page context
const PAGE_DATA_JSON: &str = include_str!("../../data/seed.json");

/// Dashboard section of the page payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardData {
    /// Today's emissions per category (doughnut chart)
    pub today_by_category: Vec<CategoryTotal>,
    /// Last seven days of emissions (trend chart)
    pub weekly_trend: Vec<DailyEmission>,
    /// Monthly aggregates for the stat cards and bar chart
    pub monthly_summary: MonthlySummary,
}

/// Complete page payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageData {
    /// Activity catalog backing the category/activity dropdowns
    pub catalog: Vec<ActivityOption>,
    /// Pre-filled form values, if the page was rendered with any
    #[serde(default)]
    pub prefilled: PrefilledForm,
    /// Logged activities, newest first
    #[serde(default)]
    pub history: Vec<ActivityRecord>,
    /// Dashboard aggregates; absent means the dashboard shows its empty state
    #[serde(default)]
    pub dashboard: Option<DashboardData>,
    /// Reduction advice cards
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl PageData {
    /// Parse the payload compiled into the binary
    pub fn load_embedded() -> anyhow::Result<Self> {
        serde_json::from_str(PAGE_DATA_JSON).context("failed to parse embedded page payload")
    }

    /// Options belonging to one category, in catalog order
    pub fn options_for(&self, category: Category) -> impl Iterator<Item = &ActivityOption> {
        self.catalog
            .iter()
            .filter(move |option| option.category == category)
    }

    /// Look up a catalog option by its id
    pub fn option_by_id(&self, id: &str) -> Option<&ActivityOption> {
        self.catalog.iter().find(|option| option.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_payload_parses() {
        let data = PageData::load_embedded().unwrap();

        assert!(!data.catalog.is_empty());
        assert!(!data.history.is_empty());
        assert!(data.dashboard.is_some());
        assert!(!data.recommendations.is_empty());
    }

    #[test]
    fn test_every_category_has_options() {
        let data = PageData::load_embedded().unwrap();

        for category in Category::ALL {
            assert!(
                data.options_for(category).count() > 0,
                "no catalog options for {:?}",
                category
            );
        }
    }

    #[test]
    fn test_option_lookup_by_id() {
        let data = PageData::load_embedded().unwrap();

        let option = data.option_by_id("bus").unwrap();
        assert_eq!(option.category, Category::Transport);
        assert_eq!(option.unit, "km");

        assert!(data.option_by_id("inconnu").is_none());
    }

    #[test]
    fn test_minimal_payload_degrades_to_empty_sections() {
        let json = r#"{ "catalog": [] }"#;
        let data: PageData = serde_json::from_str(json).unwrap();

        assert!(data.history.is_empty());
        assert!(data.dashboard.is_none());
        assert!(data.recommendations.is_empty());
        assert_eq!(data.prefilled, PrefilledForm::default());
    }

    #[test]
    fn test_weekly_trend_is_chronological() {
        let data = PageData::load_embedded().unwrap();
        let trend = &data.dashboard.unwrap().weekly_trend;

        for window in trend.windows(2) {
            assert!(window[0].date < window[1].date);
        }
    }
}
