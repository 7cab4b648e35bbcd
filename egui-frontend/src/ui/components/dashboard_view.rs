//! # Dashboard View Module
//!
//! This module renders the dashboard tab: the monthly stat cards, today's
//! per-category donut, the weekly trend, the monthly comparison bars and
//! the filterable recommendation cards.
//!
//! ## Key Functions:
//! - `render_dashboard_tab()` - The whole dashboard page
//! - `render_recommendations()` - Filter buttons plus recommendation cards

use eframe::egui;
use shared::Recommendation;

use crate::ui::app::EcoTraceApp;
use crate::ui::components::charts::{self, DonutConfig};
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{draw_stat_card, section_heading};
use crate::ui::format;
use crate::ui::state::RecommendationFilter;

impl EcoTraceApp {
    /// Render the dashboard page
    pub fn render_dashboard_tab(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(760.0);

            let card = egui::Frame::none()
                .fill(colors::CARD_BACKGROUND)
                .rounding(egui::Rounding::same(12.0))
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .inner_margin(egui::Margin::same(20.0));

            card.show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Tableau de bord")
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(CURRENT_THEME.typography.heading),
                    )
                    .selectable(false),
                );
                ui.add_space(14.0);

                let Some(dashboard) = self.dashboard_data.clone() else {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Aucune donnée disponible.")
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                    return;
                };

                self.draw_dashboard_stats(ui, &dashboard.monthly_summary);
                ui.add_space(16.0);

                section_heading(ui, "Aujourd'hui par catégorie");
                ui.horizontal(|ui| {
                    charts::draw_category_donut(
                        ui,
                        &dashboard.today_by_category,
                        &DonutConfig::default(),
                    );
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        ui.set_width(220.0);
                        charts::draw_donut_legend(ui, &dashboard.today_by_category);
                    });
                });
                ui.add_space(16.0);

                section_heading(ui, "Tendance sur 7 jours");
                charts::draw_emissions_line_chart(
                    ui,
                    "dashboard_trend_chart",
                    &dashboard.weekly_trend,
                    150.0,
                );
                ui.add_space(16.0);

                section_heading(ui, "Comparaison mensuelle par catégorie");
                charts::draw_category_bar_chart(
                    ui,
                    "dashboard_monthly_chart",
                    &dashboard.monthly_summary.by_category,
                    150.0,
                );
                ui.add_space(20.0);

                self.render_recommendations(ui);
            });
        });
    }

    /// Monthly stat cards
    fn draw_dashboard_stats(&self, ui: &mut egui::Ui, summary: &shared::MonthlySummary) {
        let top_category = summary
            .top_category()
            .map(|total| total.category.label().to_string())
            .unwrap_or_else(|| "-".to_string());

        let gap = 10.0;
        let card_width = (ui.available_width() - 2.0 * gap) / 3.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            draw_stat_card(
                ui,
                card_width,
                "Ce mois-ci",
                &format::format_emissions_full(summary.total),
            );
            draw_stat_card(
                ui,
                card_width,
                "Moyenne journalière",
                &format::format_emissions_full(summary.daily_average),
            );
            draw_stat_card(ui, card_width, "Principale source", &top_category);
        });
    }

    /// Filter buttons plus the recommendation cards passing the filter
    fn render_recommendations(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Recommandations");

        ui.horizontal(|ui| {
            for filter in RecommendationFilter::ALL {
                let active = self.dashboard.filter == filter;

                let button = egui::Button::new(
                    egui::RichText::new(filter.label())
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(if active {
                            colors::TEXT_WHITE
                        } else {
                            colors::TEXT_SECONDARY
                        }),
                )
                .rounding(egui::Rounding::same(6.0))
                .fill(if active {
                    colors::ACTIVE_BACKGROUND
                } else {
                    colors::INACTIVE_BACKGROUND
                })
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER));

                if ui.add(button).clicked() {
                    self.dashboard.filter = filter;
                }
            }
        });
        ui.add_space(8.0);

        let visible: Vec<Recommendation> = self
            .dashboard
            .filtered(&self.recommendations)
            .into_iter()
            .cloned()
            .collect();

        if visible.is_empty() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Aucune recommandation pour ce filtre.")
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            return;
        }

        for recommendation in &visible {
            draw_recommendation_card(ui, recommendation);
            ui.add_space(8.0);
        }
    }
}

/// One recommendation card: title, description and level chips
fn draw_recommendation_card(ui: &mut egui::Ui, recommendation: &Recommendation) {
    let frame = egui::Frame::none()
        .fill(colors::INACTIVE_BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(14.0, 10.0));

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.add(
            egui::Label::new(
                egui::RichText::new(&recommendation.title)
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(&recommendation.description)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            )
            .selectable(false),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            level_chip(
                ui,
                &format!("Impact : {}", recommendation.impact.label()),
                CURRENT_THEME.banner.info_background,
                CURRENT_THEME.banner.info_text,
            );
            level_chip(
                ui,
                &format!("Facilité : {}", recommendation.ease.label()),
                CURRENT_THEME.banner.success_background,
                CURRENT_THEME.banner.success_text,
            );
        });
    });
}

/// Small rounded chip with a level label
fn level_chip(ui: &mut egui::Ui, text: &str, background: egui::Color32, color: egui::Color32) {
    let frame = egui::Frame::none()
        .fill(background)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0));

    frame.show(ui, |ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                    .color(color),
            )
            .selectable(false),
        );
    });
}
