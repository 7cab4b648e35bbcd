//! # UI Components Module
//!
//! Small shared widgets used across tabs: the tab toggle buttons, stat
//! cards and section headings.

use eframe::egui;

use crate::ui::app::{EcoTraceApp, MainTab};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl EcoTraceApp {
    /// Draw the tab toggle buttons (for subheader)
    pub fn draw_tab_toggle_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in MainTab::ALL {
                let active = self.current_tab == tab;

                let button = egui::Button::new(
                    egui::RichText::new(format!("{} {}", tab.icon(), tab.label()))
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(if active {
                            colors::TEXT_WHITE
                        } else {
                            colors::TEXT_SECONDARY
                        }),
                )
                .min_size(egui::vec2(150.0, 30.0))
                .rounding(egui::Rounding::same(6.0))
                .fill(if active {
                    colors::ACTIVE_BACKGROUND
                } else {
                    colors::INACTIVE_BACKGROUND
                })
                .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER));

                if ui.add(button).clicked() && self.current_tab != tab {
                    log::info!("🗂️ Switched to tab: {:?}", tab);
                    self.current_tab = tab;
                }

                ui.add_space(8.0);
            }
        });
    }
}

/// Draw a small stat card: caption on top, value below
pub fn draw_stat_card(ui: &mut egui::Ui, width: f32, title: &str, value: &str) {
    let frame = egui::Frame::none()
        .fill(colors::INACTIVE_BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(12.0, 10.0));

    frame.show(ui, |ui| {
        ui.set_width(width - 24.0);
        ui.vertical(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(value)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(CURRENT_THEME.typography.heading),
                )
                .selectable(false),
            );
        });
    });
}

/// Section heading inside a card
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .strong()
                .color(CURRENT_THEME.typography.heading),
        )
        .selectable(false),
    );
    ui.add_space(6.0);
}
