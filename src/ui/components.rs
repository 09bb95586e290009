//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::sentiment::{SentimentLabel, SentimentScores};
use crate::theme;
use crate::utils::{format_compound, format_proportion};
use eframe::egui;
use tracing::warn;

/// Section subheading
pub fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
}

/// "Overall Sentiment: X" subheading, label text tinted by sentiment
pub fn overall_heading(ui: &mut egui::Ui, prefix: &str, label: SentimentLabel) {
    let icon = match label {
        SentimentLabel::Positive => egui_phosphor::regular::SMILEY,
        SentimentLabel::Neutral => egui_phosphor::regular::SMILEY_MEH,
        SentimentLabel::Negative => egui_phosphor::regular::SMILEY_SAD,
    };
    ui.horizontal(|ui| {
        subheading(ui, prefix);
        ui.label(
            egui::RichText::new(format!("{} {}", label, icon))
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::sentiment_color(label)),
        );
    });
}

/// Bold term followed by plain explanation, wrapped to the available width
pub fn term_caption(ui: &mut egui::Ui, bullet: bool, term: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        if bullet {
            ui.label(egui::RichText::new("•").color(theme::TEXT_DIM));
        }
        ui.label(egui::RichText::new(term).strong().color(theme::TEXT_PRIMARY));
        ui.label(egui::RichText::new(text).color(theme::TEXT_SECONDARY));
    });
}

/// Inline warning banner with icon
pub fn warning_banner(ui: &mut egui::Ui, message: &str) {
    theme::warning_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(egui_phosphor::regular::WARNING)
                    .size(theme::FONT_HEADING)
                    .color(theme::STATUS_WARNING),
            );
            ui.label(egui::RichText::new(message).color(theme::STATUS_WARNING));
        });
    });
}

/// Table of all four scores
pub fn score_table(ui: &mut egui::Ui, scores: &SentimentScores) {
    use egui_extras::{Column, TableBuilder};

    let rows = [
        ("Positive", "pos", format_proportion(scores.positive)),
        ("Neutral", "neu", format_proportion(scores.neutral)),
        ("Negative", "neg", format_proportion(scores.negative)),
        ("Compound", "compound", format_compound(scores.compound)),
    ];

    TableBuilder::new(ui)
        .id_salt("score_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(120.0))
        .column(Column::exact(100.0))
        .column(Column::remainder())
        .header(26.0, |mut header| {
            for title in ["CATEGORY", "KEY", "SCORE"] {
                header.col(|ui| {
                    ui.label(
                        egui::RichText::new(title)
                            .size(theme::FONT_SMALL)
                            .strong()
                            .color(theme::TEXT_MUTED),
                    );
                });
            }
        })
        .body(|mut body| {
            for (name, key, value) in rows {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(egui::RichText::new(name).color(theme::TEXT_PRIMARY));
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(key).monospace().color(theme::TEXT_DIM));
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(value).monospace().color(theme::TEXT_SECONDARY));
                    });
                });
            }
        });
}

/// Pretty JSON of the scores, keyed the way the analyzer reports them
pub fn scores_json(scores: &SentimentScores) -> String {
    serde_json::to_string_pretty(scores).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize scores");
        String::new()
    })
}

/// Collapsible raw score view with a copy button
pub fn raw_scores(ui: &mut egui::Ui, scores: &SentimentScores) {
    egui::CollapsingHeader::new(
        egui::RichText::new(format!("{} Raw scores", egui_phosphor::regular::BRACKETS_CURLY))
            .color(theme::TEXT_MUTED),
    )
    .id_salt("raw_scores")
    .default_open(false)
    .show(ui, |ui| {
        let json = scores_json(scores);
        ui.label(egui::RichText::new(&json).monospace().color(theme::TEXT_SECONDARY));
        let copy = theme::button(format!("{} Copy", egui_phosphor::regular::COPY));
        if ui.add(copy).clicked() {
            ui.ctx().copy_text(json);
        }
    });
}
