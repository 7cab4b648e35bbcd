//! # Header Module
//!
//! This module handles rendering the application header: the app title, a
//! short tagline and today's date.
//!
//! ## Key Functions:
//! - `render_header()` - Main header rendering with title and date

use eframe::egui;

use crate::ui::app::EcoTraceApp;
use crate::ui::components::theme::colors;
use crate::ui::format;

impl EcoTraceApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 30))
            .inner_margin(egui::Margin::symmetric(20.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("🌱 EcoTrace")
                            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );

                ui.add_space(12.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Mon empreinte carbone")
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format::format_date_fr(self.today))
                                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                });
            });
        });
    }
}
