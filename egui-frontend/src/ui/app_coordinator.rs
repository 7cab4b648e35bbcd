//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//!
//! ## Application Flow:
//! 1. Set up global styling
//! 2. Handle global input (ESC closes popovers)
//! 3. Expire banners and schedule the next repaint for their deadline
//! 4. Render header, subheader with tabs, banners and the active tab
//! 5. Clear the popover open-frame flag once everything rendered
//!
//! This is the main entry point that ties together all other UI modules.

use std::time::Instant;

use eframe::egui;

use crate::ui::app::{EcoTraceApp, MainTab};
use crate::ui::components::{draw_gradient_background, setup_app_style};

impl eframe::App for EcoTraceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // ESC closes whatever popover is open
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.popovers.close_all();
        }

        // Expire banners; keep repainting until the last one is gone
        let now = Instant::now();
        self.banners.sweep(now);
        if let Some(deadline) = self.banners.next_deadline(now) {
            ctx.request_repaint_after(deadline);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();
            draw_gradient_background(ui, full_rect);

            let header_height = 60.0;
            let subheader_height = 46.0;

            let header_rect = egui::Rect::from_min_size(
                full_rect.min,
                egui::vec2(full_rect.width(), header_height),
            );

            let subheader_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, full_rect.min.y + header_height),
                egui::vec2(full_rect.width(), subheader_height),
            );

            let content_y = full_rect.min.y + header_height + subheader_height;
            let content_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, content_y),
                egui::vec2(full_rect.width(), full_rect.height() - header_height - subheader_height),
            );

            // Layer 1: Header
            ui.allocate_ui_at_rect(header_rect, |ui| {
                self.render_header(ui);
            });

            // Layer 2: Subheader with the tab toggle buttons
            ui.allocate_ui_at_rect(subheader_rect, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    self.draw_tab_toggle_buttons(ui);
                });
            });

            // Layer 3: Content
            ui.allocate_ui_at_rect(content_rect, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(4.0);

                        ui.vertical_centered(|ui| {
                            ui.set_max_width(760.0);
                            self.render_banners(ui);
                        });

                        match self.current_tab {
                            MainTab::AddActivity => self.render_add_activity_tab(ui),
                            MainTab::Dashboard => self.render_dashboard_tab(ui),
                            MainTab::History => self.render_history_tab(ui),
                        }

                        ui.add_space(20.0);
                    });
            });
        });

        // Outside-click detection starts on the frame after a popover opens
        self.popovers.just_opened = false;
    }
}
