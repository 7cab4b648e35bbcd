//! # Styling Module
//!
//! This module contains the global styling setup and shared drawing helpers
//! for the EcoTrace app.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `draw_gradient_background()` - Draw the page gradient
//!
//! ## Purpose:
//! This module ensures visual consistency and provides a centralized place
//! for styling concerns. The theme uses calm greens and generous rounding,
//! close to the web styling it replaces.

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;

/// Setup global UI styling for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Panels stay transparent so the gradient shows through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // In egui 0.28 text edits draw with extreme_bg_color
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 250, 252);
        style.visuals.override_text_color = Some(CURRENT_THEME.typography.primary);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Draw the vertical page gradient behind all content
pub fn draw_gradient_background(ui: &mut egui::Ui, rect: egui::Rect) {
    let top = CURRENT_THEME.layout.gradient_top;
    let bottom = CURRENT_THEME.layout.gradient_bottom;

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);

    ui.painter().add(egui::Shape::mesh(mesh));
}
