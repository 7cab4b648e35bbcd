//! # History View Module
//!
//! This module renders the history tab: summary stat cards, the sortable
//! activity table and the two aggregate charts below it.
//!
//! ## Key Functions:
//! - `render_history_tab()` - The whole history page
//! - `render_history_table()` - TableBuilder-based activity table

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::ActivityRecord;

use crate::ui::app::EcoTraceApp;
use crate::ui::components::charts::{self, DonutConfig};
use crate::ui::components::data_preparation;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{draw_stat_card, section_heading};
use crate::ui::format;
use crate::ui::state::HistorySort;

impl EcoTraceApp {
    /// Render the history page
    pub fn render_history_tab(&mut self, ui: &mut egui::Ui) {
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
                        egui::RichText::new("Historique des activités")
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(CURRENT_THEME.typography.heading),
                    )
                    .selectable(false),
                );
                ui.add_space(14.0);

                if self.history.records.is_empty() {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Aucune activité enregistrée.")
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                    return;
                }

                self.draw_history_stats(ui);
                ui.add_space(12.0);

                self.draw_sort_buttons(ui);
                ui.add_space(8.0);

                render_history_table(ui, &self.history.records);
                ui.add_space(20.0);

                section_heading(ui, "Émissions par jour");
                let daily = data_preparation::daily_totals(&self.history.records);
                charts::draw_emissions_line_chart(ui, "history_daily_chart", &daily, 160.0);
                ui.add_space(16.0);

                section_heading(ui, "Répartition par catégorie");
                let totals = data_preparation::category_totals(&self.history.records);
                ui.horizontal(|ui| {
                    charts::draw_category_donut(ui, &totals, &DonutConfig::default());
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        ui.set_width(220.0);
                        charts::draw_donut_legend(ui, &totals);
                    });
                });
            });
        });
    }

    /// Summary cards above the table
    fn draw_history_stats(&self, ui: &mut egui::Ui) {
        let total = self.history.total_emissions();
        let count = self.history.records.len();
        let period = match self.history.date_range() {
            Some((oldest, newest)) => format!(
                "{} - {}",
                format::format_date_short_fr(oldest),
                format::format_date_short_fr(newest)
            ),
            None => "-".to_string(),
        };

        let gap = 10.0;
        let card_width = (ui.available_width() - 2.0 * gap) / 3.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            draw_stat_card(ui, card_width, "Total", &format::format_emissions_full(total));
            draw_stat_card(ui, card_width, "Activités", &count.to_string());
            draw_stat_card(ui, card_width, "Période", &period);
        });
    }

    /// Sort order buttons, the active one filled
    fn draw_sort_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Trier par :")
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                )
                .selectable(false),
            );

            for sort in HistorySort::ALL {
                let active = self.history.sort == sort;

                let button = egui::Button::new(
                    egui::RichText::new(sort.label())
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

                if ui.add(button).clicked() && !active {
                    self.history.set_sort(sort);
                }
            }
        });
    }
}

/// Render the activity table
fn render_history_table(ui: &mut egui::Ui, records: &[ActivityRecord]) {
    let header_labels = ["Date", "Activité", "Catégorie", "Quantité", "Émissions"];

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(90.0))
        .column(Column::remainder())
        .column(Column::exact(120.0))
        .column(Column::exact(90.0))
        .column(Column::exact(90.0))
        .header(30.0, |mut header| {
            for label in header_labels {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(
                        rect,
                        egui::Rounding::ZERO,
                        colors::ACTIVE_BACKGROUND,
                    );
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.colored_label(
                                colors::TEXT_WHITE,
                                egui::RichText::new(label)
                                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                    .strong(),
                            );
                        },
                    );
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(28.0, |mut row| {
                    row.col(|ui| {
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(format::format_date_short_fr(record.date))
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
                        );
                    });
                    row.col(|ui| {
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(&record.name)
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
                        );
                    });
                    row.col(|ui| {
                        ui.add_space(6.0);
                        ui.colored_label(
                            CURRENT_THEME.category_color(record.category),
                            egui::RichText::new(record.category.label())
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
                        );
                    });
                    row.col(|ui| {
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(format_quantity(record.quantity, &record.unit))
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
                        );
                    });
                    row.col(|ui| {
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(format::format_emissions(record.emissions))
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                .strong(),
                        );
                    });
                });
            }
        });
}

/// Quantity with its unit, whole numbers shown without decimals
fn format_quantity(quantity: f64, unit: &str) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0} {}", quantity, unit)
    } else {
        format!("{:.1} {}", quantity, unit)
    }
}
