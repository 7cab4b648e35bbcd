//! # Activity Form Module
//!
//! This module renders the add-activity form: the category cards, the
//! dependent activity dropdown, the quantity input, the date trigger and the
//! submit button.
//!
//! ## Key Functions:
//! - `render_add_activity_tab()` - The whole form page
//! - `render_activity_dropdown()` - Trigger plus floating option list
//! - `render_date_trigger()` - Date field trigger wired to the calendar popover
//!
//! ## Interaction rules:
//! Every mutation goes through the `EcoTraceApp` methods, so the single-open
//! popover rule and the dependent-selection rules hold no matter which
//! control fired. Option lists float on the foreground layer and close on
//! outside clicks, guarded by the open-frame flag.

use eframe::egui;
use shared::{ActivityOption, Category};

use crate::ui::app::EcoTraceApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::state::PopoverId;

const FIELD_HEIGHT: f32 = 38.0;
const OPTION_ROW_HEIGHT: f32 = 34.0;

/// Icon shown on a category card
fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Transport => "🚗",
        Category::Food => "🍽️",
        Category::Energy => "⚡",
        Category::Consumption => "🛒",
    }
}

impl EcoTraceApp {
    /// Render the add-activity page
    pub fn render_add_activity_tab(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(560.0);

            let card = egui::Frame::none()
                .fill(colors::CARD_BACKGROUND)
                .rounding(egui::Rounding::same(12.0))
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .inner_margin(egui::Margin::same(20.0));

            card.show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Ajouter une activité")
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(CURRENT_THEME.typography.heading),
                    )
                    .selectable(false),
                );
                ui.add_space(16.0);

                self.render_category_cards(ui);
                ui.add_space(14.0);

                if let Some(category) = self.form.active_category {
                    self.render_activity_dropdown(ui, category);
                    ui.add_space(14.0);
                }

                self.render_quantity_field(ui);
                ui.add_space(14.0);

                self.render_date_trigger(ui);
                ui.add_space(20.0);

                self.render_submit_button(ui);
            });
        });
    }

    /// One card per category; the active one is filled
    fn render_category_cards(&mut self, ui: &mut egui::Ui) {
        field_label(ui, "Catégorie");

        let gap = 8.0;
        let card_width = (ui.available_width() - 3.0 * gap) / 4.0;
        let mut chosen: Option<Category> = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;

            for category in Category::ALL {
                let active = self.form.active_category == Some(category);

                let button = egui::Button::new(
                    egui::RichText::new(format!(
                        "{}\n{}",
                        category_icon(category),
                        category.label()
                    ))
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(if active {
                        colors::TEXT_WHITE
                    } else {
                        colors::TEXT_PRIMARY
                    }),
                )
                .min_size(egui::vec2(card_width, 56.0))
                .rounding(egui::Rounding::same(8.0))
                .fill(if active {
                    colors::ACTIVE_BACKGROUND
                } else {
                    colors::CARD_BACKGROUND
                })
                .stroke(egui::Stroke::new(
                    1.5,
                    if active {
                        CURRENT_THEME.interactive.button_border_active
                    } else {
                        CURRENT_THEME.interactive.button_border_normal
                    },
                ));

                if ui.add(button).clicked() {
                    chosen = Some(category);
                }
            }
        });

        if let Some(category) = chosen {
            self.select_category(category);
        }
    }

    /// Trigger plus floating option list for the active category
    fn render_activity_dropdown(&mut self, ui: &mut egui::Ui, category: Category) {
        field_label(ui, "Activité");

        let popover_id = PopoverId::Activity(category);
        let open = self.popovers.is_open(popover_id);

        let display_text = self
            .form
            .selected_activity_label
            .clone()
            .unwrap_or_else(|| category.placeholder());
        let is_placeholder = self.form.selected_activity_label.is_none();

        let trigger = self.draw_field_trigger(
            ui,
            &display_text,
            is_placeholder,
            self.popovers.chevron(popover_id).glyph(),
            open,
        );

        if trigger.clicked() {
            self.toggle_activity_dropdown(category);
        }

        if self.popovers.is_open(popover_id) {
            self.render_activity_options(ui.ctx(), trigger.rect, category);
        }
    }

    /// Floating option list anchored under the trigger
    fn render_activity_options(
        &mut self,
        ctx: &egui::Context,
        trigger_rect: egui::Rect,
        owner: Category,
    ) {
        let options = self.catalog_options_for(owner);
        let mut clicked: Option<String> = None;

        let area = egui::Area::new(egui::Id::new(("activity_options", owner.key())))
            .order(egui::Order::Foreground)
            .fixed_pos(trigger_rect.left_bottom() + egui::vec2(0.0, self.config.popover_gap));

        let response = area.show(ctx, |ui| {
            let frame = egui::Frame::none()
                .fill(CURRENT_THEME.calendar.panel_background)
                .rounding(egui::Rounding::same(8.0))
                .stroke(egui::Stroke::new(1.0, CURRENT_THEME.calendar.panel_border))
                .inner_margin(egui::Margin::same(6.0));

            frame.show(ui, |ui| {
                ui.set_width(trigger_rect.width() - 12.0);

                egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for option in &options {
                        let (rect, row) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), OPTION_ROW_HEIGHT),
                            egui::Sense::click(),
                        );

                        if row.hovered() {
                            ui.painter().rect_filled(
                                rect,
                                egui::Rounding::same(6.0),
                                CURRENT_THEME.interactive.hover_background,
                            );
                        }

                        ui.painter().text(
                            rect.left_center() + egui::vec2(10.0, 0.0),
                            egui::Align2::LEFT_CENTER,
                            &option.label,
                            egui::FontId::new(14.0, egui::FontFamily::Proportional),
                            colors::TEXT_PRIMARY,
                        );
                        ui.painter().text(
                            rect.right_center() + egui::vec2(-10.0, 0.0),
                            egui::Align2::RIGHT_CENTER,
                            &option.unit,
                            egui::FontId::new(12.0, egui::FontFamily::Proportional),
                            colors::TEXT_SECONDARY,
                        );

                        if row.clicked() {
                            clicked = Some(option.id.clone());
                        }
                    }
                });
            });
        });

        if let Some(option_id) = clicked {
            self.select_activity(owner, &option_id);
        } else if !self.popovers.just_opened && response.response.clicked_elsewhere() {
            self.popovers.close_all();
        }
    }

    /// Quantity input with the unit of the chosen activity
    fn render_quantity_field(&mut self, ui: &mut egui::Ui) {
        field_label(ui, "Quantité");

        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut self.form.quantity_input)
                .desired_width(140.0)
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .hint_text("0.0");
            ui.add(edit);

            let suffix = self.form.unit_suffix();
            if !suffix.is_empty() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(suffix)
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            }
        });
    }

    /// Date field trigger; the calendar itself is drawn by the popover module
    fn render_date_trigger(&mut self, ui: &mut egui::Ui) {
        field_label(ui, "Date");

        let open = self.popovers.is_open(PopoverId::DatePicker);
        let (display_text, is_placeholder) = match self.form.date_display() {
            Some(text) => (format!("📅 {}", text), false),
            None => ("📅 Choisir une date".to_string(), true),
        };

        let trigger = self.draw_field_trigger(
            ui,
            &display_text,
            is_placeholder,
            self.popovers.chevron(PopoverId::DatePicker).glyph(),
            open,
        );

        if trigger.clicked() {
            self.toggle_date_picker();
        }

        if self.popovers.is_open(PopoverId::DatePicker) {
            self.render_calendar_popover(ui.ctx(), trigger.rect);
        }
    }

    /// Full-width submit button
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            egui::RichText::new("Ajouter l'activité")
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_WHITE),
        )
        .min_size(egui::vec2(ui.available_width(), 42.0))
        .rounding(egui::Rounding::same(8.0))
        .fill(colors::ACTIVE_BACKGROUND)
        .stroke(egui::Stroke::new(
            1.0,
            CURRENT_THEME.interactive.button_border_active,
        ));

        if ui.add(button).clicked() {
            self.submit_form();
        }
    }

    /// Shared look for the dropdown and date triggers: bordered field with
    /// the value on the left and a chevron on the right
    fn draw_field_trigger(
        &self,
        ui: &mut egui::Ui,
        text: &str,
        is_placeholder: bool,
        chevron: &str,
        open: bool,
    ) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), FIELD_HEIGHT),
            egui::Sense::click(),
        );

        let border = if open || response.hovered() {
            CURRENT_THEME.interactive.hover_border
        } else {
            CURRENT_THEME.interactive.button_border_normal
        };

        ui.painter()
            .rect_filled(rect, egui::Rounding::same(8.0), colors::CARD_BACKGROUND);
        ui.painter()
            .rect_stroke(rect, egui::Rounding::same(8.0), egui::Stroke::new(1.5, border));

        ui.painter().text(
            rect.left_center() + egui::vec2(12.0, 0.0),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
            if is_placeholder {
                colors::TEXT_SECONDARY
            } else {
                colors::TEXT_PRIMARY
            },
        );
        ui.painter().text(
            rect.right_center() + egui::vec2(-12.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            chevron,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
            colors::TEXT_SECONDARY,
        );

        response
    }

    /// Catalog options of one category, cloned so rendering can borrow self
    fn catalog_options_for(&self, category: Category) -> Vec<ActivityOption> {
        self.catalog
            .iter()
            .filter(|option| option.category == category)
            .cloned()
            .collect()
    }
}

/// Small label above a form field
fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_SECONDARY),
        )
        .selectable(false),
    );
    ui.add_space(4.0);
}
