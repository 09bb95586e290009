//! Painter-based bar chart for the score distribution

use crate::theme;
use crate::types::ChartBar;
use crate::utils::format_proportion;
use eframe::egui;

const TITLE_SPACE: f32 = 30.0;
const Y_AXIS_SPACE: f32 = 60.0;
const X_AXIS_SPACE: f32 = 46.0;
const RIGHT_PAD: f32 = 12.0;
const BAR_WIDTH_RATIO: f32 = 0.6;

/// Vertical bar chart with title and axis labels
pub struct BarChart<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    bars: &'a [ChartBar],
}

impl<'a> BarChart<'a> {
    pub fn new(title: &'a str, bars: &'a [ChartBar]) -> Self {
        Self {
            title,
            x_label: "",
            y_label: "",
            bars,
        }
    }

    pub fn x_label(mut self, label: &'a str) -> Self {
        self.x_label = label;
        self
    }

    pub fn y_label(mut self, label: &'a str) -> Self {
        self.y_label = label;
        self
    }
}

/// Top of the value axis and tick step for the largest bar value.
///
/// Steps are 0.1 up to 0.5 and 0.2 above; the top is the smallest step
/// multiple that fits the largest value, and at least one step.
pub fn axis_scale(max_value: f64) -> (f64, f64) {
    let max_value = if max_value.is_finite() { max_value.max(0.0) } else { 0.0 };
    let step = if max_value <= 0.5 { 0.1 } else { 0.2 };
    let steps = ((max_value / step) - 1e-9).ceil().max(1.0);
    (steps * step, step)
}

impl egui::Widget for BarChart<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired = egui::vec2(ui.available_width(), theme::CHART_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        let plot = egui::Rect::from_min_max(
            egui::pos2(rect.left() + Y_AXIS_SPACE, rect.top() + TITLE_SPACE),
            egui::pos2(rect.right() - RIGHT_PAD, rect.bottom() - X_AXIS_SPACE),
        );

        painter.text(
            egui::pos2(plot.center().x, rect.top() + 4.0),
            egui::Align2::CENTER_TOP,
            self.title,
            egui::FontId::proportional(theme::FONT_BODY),
            theme::TEXT_PRIMARY,
        );

        let max_value = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let (top, step) = axis_scale(max_value);
        let y_for = |v: f64| plot.bottom() - (v / top) as f32 * plot.height();

        // Gridlines and tick labels
        let tick_count = (top / step).round() as usize;
        for i in 0..=tick_count {
            let v = i as f64 * step;
            let y = y_for(v);
            painter.line_segment(
                [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
            );
            painter.text(
                egui::pos2(plot.left() - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{:.1}", v),
                egui::FontId::proportional(theme::FONT_SMALL),
                theme::TEXT_MUTED,
            );
        }

        // Bars, value labels, category labels
        if !self.bars.is_empty() {
            let slot = plot.width() / self.bars.len() as f32;
            for (i, bar) in self.bars.iter().enumerate() {
                let cx = plot.left() + slot * (i as f32 + 0.5);
                let half = slot * BAR_WIDTH_RATIO / 2.0;
                let value = bar.value.clamp(0.0, top);
                let bar_rect = egui::Rect::from_min_max(
                    egui::pos2(cx - half, y_for(value)),
                    egui::pos2(cx + half, plot.bottom()),
                );
                painter.rect_filled(bar_rect, 2.0, theme::bar_color(bar.label));
                painter.text(
                    egui::pos2(cx, bar_rect.top() - 2.0),
                    egui::Align2::CENTER_BOTTOM,
                    format_proportion(bar.value),
                    egui::FontId::monospace(theme::FONT_SMALL),
                    theme::TEXT_SECONDARY,
                );
                painter.text(
                    egui::pos2(cx, plot.bottom() + 6.0),
                    egui::Align2::CENTER_TOP,
                    bar.label,
                    egui::FontId::proportional(theme::FONT_LABEL),
                    theme::TEXT_SECONDARY,
                );
            }
        }

        // Axes
        let axis = egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT);
        painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
        painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

        painter.text(
            egui::pos2(plot.center().x, rect.bottom() - 4.0),
            egui::Align2::CENTER_BOTTOM,
            self.x_label,
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_MUTED,
        );

        // Y label reads bottom-to-top, centered on the plot height
        let galley = painter.layout_no_wrap(
            self.y_label.to_owned(),
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_MUTED,
        );
        let pos = egui::pos2(rect.left() + 2.0, plot.center().y + galley.size().x / 2.0);
        painter.add(
            egui::epaint::TextShape::new(pos, galley, theme::TEXT_MUTED)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );

        response
    }
}
