//! # Dashboard State Module
//!
//! Interaction state of the dashboard tab. The figures themselves come from
//! the page payload; the only thing the user changes here is which
//! recommendations are shown.

use shared::{EaseLevel, ImpactLevel, Recommendation};

/// Filters offered above the recommendation cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationFilter {
    #[default]
    All,

    /// Recommendations whose impact is exactly "Élevé"
    HighImpact,

    /// Recommendations whose ease is exactly "Facile"
    Easy,
}

impl RecommendationFilter {
    pub const ALL: [RecommendationFilter; 3] = [
        RecommendationFilter::All,
        RecommendationFilter::HighImpact,
        RecommendationFilter::Easy,
    ];

    /// Button label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationFilter::All => "Toutes",
            RecommendationFilter::HighImpact => "Fort impact",
            RecommendationFilter::Easy => "Faciles",
        }
    }

    /// Whether a recommendation passes this filter. The impact and ease
    /// levels are matched exactly, so "Très élevé" does not count as high
    /// impact and "Très facile" does not count as easy.
    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        match self {
            RecommendationFilter::All => true,
            RecommendationFilter::HighImpact => recommendation.impact == ImpactLevel::Eleve,
            RecommendationFilter::Easy => recommendation.ease == EaseLevel::Facile,
        }
    }
}

/// State of the dashboard tab
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub filter: RecommendationFilter,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommendations passing the active filter, in payload order
    pub fn filtered<'a>(
        &self,
        recommendations: &'a [Recommendation],
    ) -> Vec<&'a Recommendation> {
        recommendations
            .iter()
            .filter(|recommendation| self.filter.matches(recommendation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_recommendation(
        title: &str,
        impact: ImpactLevel,
        ease: EaseLevel,
    ) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("Description de {}", title),
            impact,
            ease,
        }
    }

    fn create_test_recommendations() -> Vec<Recommendation> {
        vec![
            create_test_recommendation("velo", ImpactLevel::Eleve, EaseLevel::Moyen),
            create_test_recommendation("avion", ImpactLevel::TresEleve, EaseLevel::Moyen),
            create_test_recommendation("ampoules", ImpactLevel::Faible, EaseLevel::Facile),
            create_test_recommendation("local", ImpactLevel::Moyen, EaseLevel::TresFacile),
        ]
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let recommendations = create_test_recommendations();
        let dashboard = DashboardState::new();

        assert_eq!(dashboard.filtered(&recommendations).len(), 4);
    }

    #[test]
    fn test_high_impact_excludes_tres_eleve() {
        let recommendations = create_test_recommendations();
        let mut dashboard = DashboardState::new();
        dashboard.filter = RecommendationFilter::HighImpact;

        let titles: Vec<&str> = dashboard
            .filtered(&recommendations)
            .iter()
            .map(|recommendation| recommendation.title.as_str())
            .collect();

        assert_eq!(titles, vec!["velo"]);
    }

    #[test]
    fn test_easy_excludes_tres_facile() {
        let recommendations = create_test_recommendations();
        let mut dashboard = DashboardState::new();
        dashboard.filter = RecommendationFilter::Easy;

        let titles: Vec<&str> = dashboard
            .filtered(&recommendations)
            .iter()
            .map(|recommendation| recommendation.title.as_str())
            .collect();

        assert_eq!(titles, vec!["ampoules"]);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(RecommendationFilter::All.label(), "Toutes");
        assert_eq!(RecommendationFilter::HighImpact.label(), "Fort impact");
        assert_eq!(RecommendationFilter::Easy.label(), "Faciles");
    }
}
