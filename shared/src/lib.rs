use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Activity category, matching the four sections of the add-activity form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Déplacements (voiture, transports en commun, avion...)
    Transport,
    /// Alimentation (viande, produits laitiers, végétaux...)
    Food,
    /// Énergie domestique (électricité, gaz, fioul...)
    Energy,
    /// Biens de consommation (vêtements, électronique...)
    Consumption,
}

impl Category {
    /// All categories, in form display order
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Food,
        Category::Energy,
        Category::Consumption,
    ];

    /// French display label shown on the category cards and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Food => "Alimentation",
            Category::Energy => "Énergie",
            Category::Consumption => "Consommation",
        }
    }

    /// Noun (with its preposition) for the activity dropdown placeholder
    pub fn placeholder_noun(&self) -> &'static str {
        match self {
            Category::Transport => "de transport",
            Category::Food => "d'aliment",
            Category::Energy => "d'énergie",
            Category::Consumption => "de consommation",
        }
    }

    /// Placeholder text the activity dropdown resets to when this category is picked
    pub fn placeholder(&self) -> String {
        format!("Sélectionnez un type {}", self.placeholder_noun())
    }

    /// Stable lowercase key used in the data payload
    pub fn key(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Energy => "energy",
            Category::Consumption => "consumption",
        }
    }
}

/// One selectable activity from the pre-rendered option catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityOption {
    /// Value written into the hidden activity field when chosen
    pub id: String,
    /// Category whose dropdown lists this option
    pub category: Category,
    /// French display label (e.g. "Voiture essence")
    pub label: String,
    /// Measurement unit shown next to the quantity input (e.g. "km")
    pub unit: String,
}

/// Form values pre-filled by the page payload (edit flow)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefilledForm {
    pub activity_id: Option<String>,
    /// Initial value of the bound date field (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// A logged activity as it appears in the history payload.
/// Emissions are computed server-side; this client only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Category,
    /// Activity display name (e.g. "Voiture essence")
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Pre-computed emissions in kg CO2e
    pub emissions: f64,
}

/// One point of the daily emissions trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEmission {
    pub date: NaiveDate,
    /// Short display form (dd/mm)
    pub display_date: String,
    /// Pre-computed emissions in kg CO2e
    pub emissions: f64,
}

/// Pre-computed emissions total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub emissions: f64,
}

/// Monthly aggregates computed server-side for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month total in kg CO2e
    pub total: f64,
    /// Average per day over the elapsed days of the month
    pub daily_average: f64,
    pub by_category: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Category with the highest monthly emissions, if any
    pub fn top_category(&self) -> Option<&CategoryTotal> {
        self.by_category.iter().max_by(|a, b| {
            a.emissions
                .partial_cmp(&b.emissions)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// Estimated emissions impact of following a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[serde(rename = "Faible")]
    Faible,
    #[serde(rename = "Moyen")]
    Moyen,
    #[serde(rename = "Élevé")]
    Eleve,
    #[serde(rename = "Très élevé")]
    TresEleve,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Faible => "Faible",
            ImpactLevel::Moyen => "Moyen",
            ImpactLevel::Eleve => "Élevé",
            ImpactLevel::TresEleve => "Très élevé",
        }
    }
}

/// How easy a recommendation is to put into practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EaseLevel {
    #[serde(rename = "Très facile")]
    TresFacile,
    #[serde(rename = "Facile")]
    Facile,
    #[serde(rename = "Moyen")]
    Moyen,
}

impl EaseLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EaseLevel::TresFacile => "Très facile",
            EaseLevel::Facile => "Facile",
            EaseLevel::Moyen => "Moyen",
        }
    }
}

/// One reduction-advice card shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub ease: EaseLevel,
}

/// Submit-time validation failures, one per form rule, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Veuillez sélectionner une catégorie.")]
    MissingCategory,
    #[error("Veuillez sélectionner une activité spécifique.")]
    MissingActivity,
    #[error("Veuillez saisir une quantité valide (supérieure à zéro).")]
    InvalidQuantity,
    #[error("Veuillez sélectionner une date.")]
    MissingDate,
}

/// Validated form output handed to the submit boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub category: Category,
    /// Id of the chosen catalog option
    pub activity_id: String,
    pub quantity: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        let expected = [
            (Category::Transport, "Transport"),
            (Category::Food, "Alimentation"),
            (Category::Energy, "Énergie"),
            (Category::Consumption, "Consommation"),
        ];

        for (category, label) in expected {
            assert_eq!(category.label(), label);
        }
    }

    #[test]
    fn test_category_placeholders() {
        assert_eq!(
            Category::Transport.placeholder(),
            "Sélectionnez un type de transport"
        );
        assert_eq!(
            Category::Food.placeholder(),
            "Sélectionnez un type d'aliment"
        );
        assert_eq!(
            Category::Energy.placeholder(),
            "Sélectionnez un type d'énergie"
        );
        assert_eq!(
            Category::Consumption.placeholder(),
            "Sélectionnez un type de consommation"
        );
    }

    #[test]
    fn test_category_serde_keys() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));

            let parsed: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_impact_level_serde_uses_french_literals() {
        let parsed: ImpactLevel = serde_json::from_str("\"Très élevé\"").unwrap();
        assert_eq!(parsed, ImpactLevel::TresEleve);

        let parsed: ImpactLevel = serde_json::from_str("\"Élevé\"").unwrap();
        assert_eq!(parsed, ImpactLevel::Eleve);

        assert!(serde_json::from_str::<ImpactLevel>("\"eleve\"").is_err());
    }

    #[test]
    fn test_ease_level_serde_uses_french_literals() {
        let parsed: EaseLevel = serde_json::from_str("\"Très facile\"").unwrap();
        assert_eq!(parsed, EaseLevel::TresFacile);

        let parsed: EaseLevel = serde_json::from_str("\"Facile\"").unwrap();
        assert_eq!(parsed, EaseLevel::Facile);
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::MissingCategory.to_string(),
            "Veuillez sélectionner une catégorie."
        );
        assert_eq!(
            SubmitError::MissingActivity.to_string(),
            "Veuillez sélectionner une activité spécifique."
        );
        assert_eq!(
            SubmitError::InvalidQuantity.to_string(),
            "Veuillez saisir une quantité valide (supérieure à zéro)."
        );
        assert_eq!(
            SubmitError::MissingDate.to_string(),
            "Veuillez sélectionner une date."
        );
    }

    #[test]
    fn test_monthly_summary_top_category() {
        let summary = MonthlySummary {
            total: 42.0,
            daily_average: 2.1,
            by_category: vec![
                CategoryTotal {
                    category: Category::Transport,
                    emissions: 18.5,
                },
                CategoryTotal {
                    category: Category::Food,
                    emissions: 21.2,
                },
                CategoryTotal {
                    category: Category::Energy,
                    emissions: 2.3,
                },
            ],
        };

        let top = summary.top_category().unwrap();
        assert_eq!(top.category, Category::Food);
    }

    #[test]
    fn test_monthly_summary_top_category_empty() {
        let summary = MonthlySummary {
            total: 0.0,
            daily_average: 0.0,
            by_category: vec![],
        };

        assert!(summary.top_category().is_none());
    }

    #[test]
    fn test_activity_record_from_payload_json() {
        let json = r#"{
            "id": 7,
            "date": "2025-06-15",
            "category": "transport",
            "name": "Voiture essence",
            "quantity": 12.5,
            "unit": "km",
            "emissions": 2.41
        }"#;

        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Transport);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(record.emissions, 2.41);
    }
}
