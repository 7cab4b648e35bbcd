//! # Chart Module
//!
//! Shared chart drawing for the history and dashboard tabs: an emissions
//! line chart, a per-category bar chart and a donut breakdown drawn with
//! painter primitives (egui has no native arc support, so arcs are built
//! from short line segments).

use std::f32::consts::PI;

use eframe::egui;
use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoints, Points};
use shared::{CategoryTotal, DailyEmission};

use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::format;

/// Configuration for donut chart appearance
#[derive(Debug, Clone)]
pub struct DonutConfig {
    /// Radius of the ring centerline
    pub radius: f32,
    /// Stroke width of the ring
    pub stroke_width: f32,
    /// Font size for the center total
    pub center_font_size: f32,
    /// Font size for the center caption
    pub caption_font_size: f32,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            radius: 58.0,
            stroke_width: 18.0,
            center_font_size: 16.0,
            caption_font_size: 11.0,
        }
    }
}

/// Draw the daily emissions line chart
pub fn draw_emissions_line_chart(
    ui: &mut egui::Ui,
    id: &str,
    series: &[DailyEmission],
    height: f32,
) {
    if series.is_empty() {
        draw_chart_placeholder(ui, height);
        return;
    }

    let raw_points: Vec<[f64; 2]> = series
        .iter()
        .enumerate()
        .map(|(index, point)| [index as f64, point.emissions])
        .collect();

    let line_points: PlotPoints = raw_points.iter().copied().collect();
    let line = Line::new(line_points)
        .color(CURRENT_THEME.chart.trend_line)
        .stroke(egui::Stroke::new(2.0, CURRENT_THEME.chart.trend_line));

    let marker_points: PlotPoints = raw_points.iter().copied().collect();
    let markers = Points::new(marker_points)
        .color(CURRENT_THEME.chart.trend_line)
        .filled(true)
        .radius(4.0)
        .shape(MarkerShape::Circle)
        .name("Émissions");

    let max_value = series.iter().map(|point| point.emissions).fold(0.0, f64::max);
    let y_max = (max_value * 1.15).max(1.0);

    // Labels move into the formatter closures, which must be 'static
    let axis_labels: Vec<String> = series.iter().map(|point| point.display_date.clone()).collect();
    let tooltip_labels = axis_labels.clone();

    Plot::new(id.to_owned())
        .height(height)
        .show_axes([true, true])
        .show_grid([true, true])
        .include_y(0.0)
        .include_y(y_max)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .auto_bounds(egui::Vec2b::TRUE)
        .show_background(false)
        .label_formatter(move |name, value| {
            if name == "Émissions" {
                let index = value.x.round() as usize;
                match tooltip_labels.get(index) {
                    Some(label) => format!("{}: {}", label, format::format_emissions(value.y)),
                    None => format::format_emissions(value.y),
                }
            } else {
                String::new()
            }
        })
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            axis_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("{:.0} kg", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

/// Draw a per-category bar chart, one bar per category in catalog order
pub fn draw_category_bar_chart(
    ui: &mut egui::Ui,
    id: &str,
    totals: &[CategoryTotal],
    height: f32,
) {
    if totals.iter().all(|total| total.emissions <= 0.0) {
        draw_chart_placeholder(ui, height);
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(index, total)| {
            Bar::new(index as f64, total.emissions)
                .width(0.6)
                .fill(CURRENT_THEME.category_color(total.category))
                .name(total.category.label())
        })
        .collect();

    let axis_labels: Vec<String> = totals
        .iter()
        .map(|total| total.category.label().to_string())
        .collect();

    Plot::new(id.to_owned())
        .height(height)
        .show_axes([true, true])
        .show_grid([false, true])
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .auto_bounds(egui::Vec2b::TRUE)
        .show_background(false)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}: {}", name, format::format_emissions(value.y))
            }
        })
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            axis_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("{:.0} kg", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Draw the category breakdown donut with the total in the center
pub fn draw_category_donut(ui: &mut egui::Ui, totals: &[CategoryTotal], config: &DonutConfig) {
    let side = config.radius * 2.0 + config.stroke_width + 8.0;
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let center = rect.center();

    let total: f64 = totals.iter().map(|total| total.emissions).sum();

    if total <= 0.0 {
        ui.painter().circle_stroke(
            center,
            config.radius,
            egui::Stroke::new(config.stroke_width, CURRENT_THEME.layout.card_border),
        );
        draw_donut_center(ui, center, 0.0, config);
        return;
    }

    // Slices start at 12 o'clock and run clockwise
    let mut angle = -PI / 2.0;
    for slice in totals {
        if slice.emissions <= 0.0 {
            continue;
        }
        let sweep = 2.0 * PI * (slice.emissions / total) as f32;
        draw_arc(
            ui.painter(),
            center,
            config.radius,
            config.stroke_width,
            angle,
            angle + sweep,
            CURRENT_THEME.category_color(slice.category),
        );
        angle += sweep;
    }

    draw_donut_center(ui, center, total, config);
}

/// Legend rows for the donut: color swatch, label, value
pub fn draw_donut_legend(ui: &mut egui::Ui, totals: &[CategoryTotal]) {
    for total in totals {
        ui.horizontal(|ui| {
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(
                swatch,
                egui::Rounding::same(3.0),
                CURRENT_THEME.category_color(total.category),
            );

            ui.add(
                egui::Label::new(
                    egui::RichText::new(total.category.label())
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format::format_emissions(total.emissions))
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            });
        });
    }
}

fn draw_donut_center(ui: &mut egui::Ui, center: egui::Pos2, total: f64, config: &DonutConfig) {
    ui.painter().text(
        center - egui::vec2(0.0, 6.0),
        egui::Align2::CENTER_CENTER,
        format::format_emissions(total),
        egui::FontId::new(config.center_font_size, egui::FontFamily::Proportional),
        CURRENT_THEME.typography.heading,
    );
    ui.painter().text(
        center + egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "CO₂e",
        egui::FontId::new(config.caption_font_size, egui::FontFamily::Proportional),
        colors::TEXT_SECONDARY,
    );
}

/// Draw an arc as short line segments
fn draw_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke_width: f32,
    start_angle: f32,
    end_angle: f32,
    color: egui::Color32,
) {
    let arc_length = (end_angle - start_angle).abs();
    let num_segments = ((arc_length * radius / 3.0).ceil() as i32).clamp(8, 100);
    let angle_step = (end_angle - start_angle) / num_segments as f32;

    for i in 0..num_segments {
        let angle1 = start_angle + angle_step * i as f32;
        let angle2 = start_angle + angle_step * (i + 1) as f32;

        painter.line_segment(
            [
                angle_point(center, radius, angle1),
                angle_point(center, radius, angle2),
            ],
            egui::Stroke::new(stroke_width, color),
        );
    }
}

fn angle_point(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Neutral placeholder when a chart has no data
fn draw_chart_placeholder(ui: &mut egui::Ui, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Aucune donnée à afficher",
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        colors::TEXT_SECONDARY,
    );
}
