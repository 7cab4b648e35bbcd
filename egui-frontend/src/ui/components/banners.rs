//! # Banner Module
//!
//! Renders the flash banner stack under the header: validation errors,
//! success confirmations and warnings. Expiry is handled by the state; this
//! module only draws what is currently visible and forwards manual closes.

use eframe::egui;

use crate::ui::app::EcoTraceApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::BannerKind;

/// Background fill for a banner kind
fn banner_background(kind: BannerKind) -> egui::Color32 {
    match kind {
        BannerKind::Success => CURRENT_THEME.banner.success_background,
        BannerKind::Danger => CURRENT_THEME.banner.danger_background,
        BannerKind::Warning => CURRENT_THEME.banner.warning_background,
        BannerKind::Info => CURRENT_THEME.banner.info_background,
    }
}

/// Text color for a banner kind
fn banner_text_color(kind: BannerKind) -> egui::Color32 {
    match kind {
        BannerKind::Success => CURRENT_THEME.banner.success_text,
        BannerKind::Danger => CURRENT_THEME.banner.danger_text,
        BannerKind::Warning => CURRENT_THEME.banner.warning_text,
        BannerKind::Info => CURRENT_THEME.banner.info_text,
    }
}

/// Leading icon for a banner kind
fn banner_icon(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "✅",
        BannerKind::Danger => "❌",
        BannerKind::Warning => "⚠️",
        BannerKind::Info => "ℹ️",
    }
}

impl EcoTraceApp {
    /// Render the visible banners, newest at the bottom
    pub fn render_banners(&mut self, ui: &mut egui::Ui) {
        if self.banners.banners().is_empty() {
            return;
        }

        // Track the close click and apply it after the loop
        let mut dismissed: Option<usize> = None;

        for (index, banner) in self.banners.banners().iter().enumerate() {
            let text_color = banner_text_color(banner.kind);

            let frame = egui::Frame::none()
                .fill(banner_background(banner.kind))
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::symmetric(12.0, 8.0));

            frame.show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} {}",
                                banner_icon(banner.kind),
                                banner.message
                            ))
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(text_color),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close = egui::Button::new(
                            egui::RichText::new("✕").size(12.0).color(text_color),
                        )
                        .frame(false);

                        if ui.add(close).clicked() {
                            dismissed = Some(index);
                        }
                    });
                });
            });

            ui.add_space(4.0);
        }

        if let Some(index) = dismissed {
            self.banners.dismiss(index);
        }
    }
}
