//! View rendering (input form, results, chart)

use super::App;
use crate::constants::*;
use crate::sentiment::Analysis;
use crate::theme;
use crate::types::distribution_bars;
use crate::ui::chart::BarChart;
use crate::ui::components;
use eframe::egui;

/// Widget id of the review text field
pub(crate) const INPUT_ID: &str = "review_input";

impl App {
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // Centered column, capped width
                        let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                        let side = (ui.available_width() - width) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                self.render_header(ui);
                                self.render_input(ui);
                                self.render_result(ui);
                            });
                        });
                    });
            });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(format!("{} {}", egui_phosphor::regular::CHART_BAR, APP_NAME))
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_LG);
    }

    fn render_input(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(INPUT_LABEL).color(theme::TEXT_SECONDARY));
        ui.add_space(theme::SPACING_SM);

        // Ctrl/Cmd+Enter inside the field submits; consume it before the
        // text edit inserts a newline
        let input_id = egui::Id::new(INPUT_ID);
        let shortcut = ui.memory(|m| m.has_focus(input_id))
            && ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

        ui.add(
            egui::TextEdit::multiline(&mut self.input_text)
                .id(input_id)
                .desired_rows(theme::INPUT_ROWS)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::proportional(theme::FONT_BODY))
                .margin(egui::Margin::symmetric(10, 8)),
        );
        ui.add_space(theme::SPACING_MD);

        let button = theme::button_accent(ANALYZE_BUTTON)
            .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT_LARGE));
        let clicked = ui.add(button).clicked();

        if clicked || shortcut {
            self.on_analyze();
        }
        ui.add_space(theme::SPACING_XL);
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        if let Some(message) = self.result.warning() {
            components::warning_banner(ui, message);
        } else if let Some(analysis) = self.result.analysis() {
            render_analysis(ui, analysis);
        }
    }
}

fn render_analysis(ui: &mut egui::Ui, analysis: &Analysis) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        components::subheading(ui, SCORES_HEADING);
        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new(SCORES_INTRO).color(theme::TEXT_SECONDARY));
        for (term, key, text) in SCORE_CAPTIONS {
            components::term_caption(ui, true, &format!("{} ({}):", term, key), text);
        }
        ui.add_space(theme::SPACING_MD);

        components::score_table(ui, &analysis.scores);
        components::raw_scores(ui, &analysis.scores);
        ui.add_space(theme::SPACING_MD);

        components::term_caption(ui, false, COMPOUND_TERM, COMPOUND_CAPTION);
        ui.add_space(theme::SPACING_LG);

        components::overall_heading(ui, OVERALL_PREFIX, analysis.label);
    });

    ui.add_space(theme::SPACING_LG);

    let bars = distribution_bars(&analysis.scores);
    theme::section_frame().show(ui, |ui| {
        ui.add(
            BarChart::new(CHART_TITLE, &bars)
                .x_label(CHART_X_LABEL)
                .y_label(CHART_Y_LABEL),
        );
    });
}
