//! # Calendar Popover Module
//!
//! This module renders the floating date-picker: month navigation header,
//! Monday-first weekday row, the day grid and the today/close footer.
//!
//! ## Key Functions:
//! - `render_calendar_popover()` - The floating panel anchored to the date trigger
//!
//! ## Placement:
//! The panel opens below its trigger. When the space under the trigger would
//! put the panel past the bottom viewport margin it flips above, and its
//! horizontal position is clamped so it never leaves the window.

use eframe::egui;

use crate::ui::app::EcoTraceApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::state::calendar_state::WEEKDAY_HEADERS;
use crate::ui::state::DayCellKind;

const CALENDAR_WIDTH: f32 = 270.0;
const CALENDAR_HEIGHT: f32 = 322.0;
const DAY_CELL: egui::Vec2 = egui::vec2(32.0, 30.0);

/// Fill color for a day cell
fn day_fill(kind: DayCellKind, hovered: bool) -> egui::Color32 {
    match kind {
        DayCellKind::Selected => CURRENT_THEME.calendar.selected_background,
        DayCellKind::Future => egui::Color32::TRANSPARENT,
        DayCellKind::Today | DayCellKind::Normal => {
            if hovered {
                CURRENT_THEME.calendar.day_hover
            } else {
                egui::Color32::TRANSPARENT
            }
        }
    }
}

/// Text color for a day cell
fn day_text_color(kind: DayCellKind) -> egui::Color32 {
    match kind {
        DayCellKind::Selected => colors::TEXT_WHITE,
        DayCellKind::Future => CURRENT_THEME.calendar.disabled_text,
        DayCellKind::Today | DayCellKind::Normal => colors::TEXT_PRIMARY,
    }
}

/// Outline stroke for a day cell
fn day_stroke(kind: DayCellKind) -> egui::Stroke {
    match kind {
        DayCellKind::Selected => egui::Stroke::new(1.0, CURRENT_THEME.calendar.selected_border),
        DayCellKind::Today => egui::Stroke::new(2.0, CURRENT_THEME.calendar.today_border),
        DayCellKind::Future | DayCellKind::Normal => egui::Stroke::NONE,
    }
}

impl EcoTraceApp {
    /// Render the floating date-picker anchored to `trigger_rect`
    pub fn render_calendar_popover(&mut self, ctx: &egui::Context, trigger_rect: egui::Rect) {
        let screen = ctx.screen_rect();
        let gap = self.config.popover_gap;
        let margin = self.config.viewport_margin;

        // Flip above the trigger when the panel would cross the bottom margin
        let below_top = trigger_rect.bottom() + gap;
        let place_above = below_top + CALENDAR_HEIGHT > screen.bottom() - margin;
        let y = if place_above {
            (trigger_rect.top() - gap - CALENDAR_HEIGHT).max(screen.top() + margin)
        } else {
            below_top
        };
        let x = trigger_rect
            .left()
            .min(screen.right() - margin - CALENDAR_WIDTH)
            .max(screen.left() + margin);

        let area = egui::Area::new(egui::Id::new("date_picker_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(x, y));

        let mut picked: Option<chrono::NaiveDate> = None;
        let mut today_clicked = false;
        let mut close_clicked = false;

        let response = area.show(ctx, |ui| {
            let frame = egui::Frame::none()
                .fill(CURRENT_THEME.calendar.panel_background)
                .rounding(egui::Rounding::same(10.0))
                .stroke(egui::Stroke::new(1.0, CURRENT_THEME.calendar.panel_border))
                .inner_margin(egui::Margin::same(12.0));

            frame.show(ui, |ui| {
                ui.set_width(CALENDAR_WIDTH - 24.0);

                self.draw_calendar_header(ui);
                ui.add_space(6.0);
                draw_weekday_headers(ui);
                ui.add_space(2.0);
                picked = self.draw_day_grid(ui);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let today_button = egui::Button::new(
                        egui::RichText::new("Aujourd'hui")
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(CURRENT_THEME.typography.active),
                    )
                    .fill(CURRENT_THEME.interactive.hover_background)
                    .rounding(egui::Rounding::same(6.0));

                    if ui.add(today_button).clicked() {
                        today_clicked = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_button = egui::Button::new(
                            egui::RichText::new("Fermer")
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                .color(colors::TEXT_SECONDARY),
                        )
                        .fill(colors::INACTIVE_BACKGROUND)
                        .rounding(egui::Rounding::same(6.0));

                        if ui.add(close_button).clicked() {
                            close_clicked = true;
                        }
                    });
                });
            });
        });

        if let Some(date) = picked {
            self.select_calendar_day(date);
        } else if today_clicked {
            // Fills the field and recenters the view; the picker stays open
            self.jump_to_today();
        } else if close_clicked {
            self.popovers.close_all();
        } else if !self.popovers.just_opened && response.response.clicked_elsewhere() {
            self.popovers.close_all();
        }
    }

    /// Month navigation header: previous, title, next
    fn draw_calendar_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let prev_button = egui::Button::new("<")
                .fill(colors::INACTIVE_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .rounding(egui::Rounding::same(6.0))
                .min_size(egui::vec2(28.0, 28.0));

            if ui.add(prev_button).clicked() {
                self.calendar.navigate_previous();
            }

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    // Reserve space on the right for the next button
                    ui.set_width(ui.available_width() - 36.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calendar.month_title())
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(CURRENT_THEME.typography.heading),
                        )
                        .selectable(false),
                    );
                },
            );

            let next_button = egui::Button::new(">")
                .fill(colors::INACTIVE_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .rounding(egui::Rounding::same(6.0))
                .min_size(egui::vec2(28.0, 28.0));

            if ui.add(next_button).clicked() {
                self.calendar.navigate_next();
            }
        });
    }

    /// Day grid for the viewed month; returns the clicked day, if any
    fn draw_day_grid(&mut self, ui: &mut egui::Ui) -> Option<chrono::NaiveDate> {
        let cells = self
            .calendar
            .day_cells(self.form.selected_date, self.form.today);
        let mut picked = None;

        for week in cells.chunks(7) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;

                for slot in week {
                    match slot {
                        Some(cell) => {
                            let sense = if cell.kind == DayCellKind::Future {
                                egui::Sense::hover()
                            } else {
                                egui::Sense::click()
                            };
                            let (rect, response) = ui.allocate_exact_size(DAY_CELL, sense);

                            let fill = day_fill(cell.kind, response.hovered());
                            if fill != egui::Color32::TRANSPARENT {
                                ui.painter()
                                    .rect_filled(rect, egui::Rounding::same(6.0), fill);
                            }
                            let stroke = day_stroke(cell.kind);
                            if stroke != egui::Stroke::NONE {
                                ui.painter()
                                    .rect_stroke(rect, egui::Rounding::same(6.0), stroke);
                            }

                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                cell.day.to_string(),
                                egui::FontId::new(13.0, egui::FontFamily::Proportional),
                                day_text_color(cell.kind),
                            );

                            if response.clicked() {
                                picked = Some(cell.date);
                            }
                        }
                        None => {
                            ui.allocate_exact_size(DAY_CELL, egui::Sense::hover());
                        }
                    }
                }
            });
        }

        picked
    }
}

/// Monday-first weekday header row
fn draw_weekday_headers(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;

        for header in WEEKDAY_HEADERS {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(DAY_CELL.x, 18.0), egui::Sense::hover());
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                header,
                egui::FontId::new(11.0, egui::FontFamily::Proportional),
                CURRENT_THEME.calendar.header_text,
            );
        }
    });
}
