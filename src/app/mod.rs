//! App module - contains the main application state and logic

mod views;

use crate::sentiment::SentimentClassifier;
use crate::settings::Settings;
use crate::theme;
use crate::types::ResultState;
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) classifier: SentimentClassifier,
    pub(crate) input_text: String,
    pub(crate) result: ResultState,
    // Window geometry, tracked for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        classifier: SentimentClassifier,
        settings: &Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self::with_classifier(classifier, data_dir);
        app.window_pos = settings.window_pos();
        app.window_size = settings.window_size();
        app.needs_center = app.window_pos.is_none();
        app
    }

    pub(crate) fn with_classifier(classifier: SentimentClassifier, data_dir: PathBuf) -> Self {
        Self {
            classifier,
            input_text: String::new(),
            result: ResultState::Idle,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Handler for the analyze action: one classification, or one warning
    /// when the input is blank.
    pub fn on_analyze(&mut self) {
        self.result = match self.classifier.classify_text(&self.input_text) {
            Ok(analysis) => {
                info!(label = %analysis.label, "Analysis complete");
                ResultState::Ready(analysis)
            }
            Err(e) => {
                warn!(error = %e, "Analyze requested without input");
                ResultState::Warning(e.to_string())
            }
        };
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::views::INPUT_ID;
    use crate::constants::*;
    use crate::sentiment::test_support::FixedScorer;
    use crate::sentiment::{PolarityScorer, SentimentLabel, VaderScorer};
    use crate::ui::test_support::painted_texts;
    use std::sync::atomic::Ordering;

    fn app_with(scorer: impl PolarityScorer + 'static) -> App {
        let scorer: Box<dyn PolarityScorer> = Box::new(scorer);
        App::with_classifier(SentimentClassifier::new(scorer), PathBuf::from("."))
    }

    #[test]
    fn starts_idle() {
        let app = app_with(FixedScorer::with_compound(0.0));
        assert_eq!(app.result, ResultState::Idle);
        assert!(app.input_text.is_empty());
    }

    #[test]
    fn blank_input_warns_without_scoring() {
        let scorer = FixedScorer::with_compound(0.5);
        let calls = scorer.calls.clone();
        let mut app = app_with(scorer);

        app.on_analyze();
        assert_eq!(app.result.warning(), Some(EMPTY_INPUT_WARNING));

        app.input_text = "   \n ".into();
        app.on_analyze();
        assert_eq!(app.result.warning(), Some(EMPTY_INPUT_WARNING));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn each_press_scores_once() {
        let scorer = FixedScorer::with_compound(0.5);
        let calls = scorer.calls.clone();
        let mut app = app_with(scorer);
        app.input_text = "fine".into();

        app.on_analyze();
        app.on_analyze();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            app.result.analysis().map(|a| a.label),
            Some(SentimentLabel::Positive)
        );
    }

    #[test]
    fn warning_replaces_previous_result() {
        let mut app = app_with(VaderScorer::new());
        app.input_text = "I love this product, it works great!".into();
        app.on_analyze();
        assert!(app.result.analysis().is_some());

        app.input_text.clear();
        app.on_analyze();
        assert!(app.result.analysis().is_none());
        assert_eq!(app.result.warning(), Some(EMPTY_INPUT_WARNING));

        app.input_text = "This is the worst experience I've ever had.".into();
        app.on_analyze();
        assert!(app.result.warning().is_none());
        assert_eq!(
            app.result.analysis().map(|a| a.label),
            Some(SentimentLabel::Negative)
        );
    }

    #[test]
    fn geometry_round_trips_through_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(FixedScorer::with_compound(0.0));
        app.data_dir = dir.path().to_path_buf();
        app.window_pos = Some(egui::pos2(40.0, 50.0));
        app.window_size = Some(egui::vec2(900.0, 700.0));
        app.save_settings();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.window_pos(), Some(egui::pos2(40.0, 50.0)));
        assert_eq!(settings.window_size(), Some(egui::vec2(900.0, 700.0)));
    }

    /// Render two frames (the first may be a sizing pass) and return the
    /// text painted by the last one
    fn rendered_texts(app: &mut App, ctx: &egui::Context) -> Vec<String> {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
        let output = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
        painted_texts(&output)
    }

    fn contains(texts: &[String], expected: &str) -> bool {
        texts.iter().any(|t| t == expected)
    }

    fn ctrl_enter() -> egui::RawInput {
        egui::RawInput {
            modifiers: egui::Modifiers::COMMAND,
            events: vec![egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::COMMAND,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn warning_frame_shows_only_the_warning() {
        let mut app = app_with(FixedScorer::with_compound(0.5));
        app.on_analyze();

        let ctx = egui::Context::default();
        let texts = rendered_texts(&mut app, &ctx);

        assert!(contains(&texts, EMPTY_INPUT_WARNING), "{texts:?}");
        assert!(contains(&texts, INPUT_LABEL));
        assert!(contains(&texts, ANALYZE_BUTTON));
        for absent in [SCORES_HEADING, OVERALL_PREFIX, CHART_TITLE, CHART_Y_LABEL] {
            assert!(!contains(&texts, absent), "{absent:?} rendered with a warning");
        }
    }

    #[test]
    fn ready_frame_shows_scores_label_and_chart() {
        let mut app = app_with(VaderScorer::new());
        app.input_text = "The package arrived on Tuesday.".into();
        app.on_analyze();

        let ctx = egui::Context::default();
        let texts = rendered_texts(&mut app, &ctx);

        let mut expected = vec![
            SCORES_HEADING,
            SCORES_INTRO,
            COMPOUND_TERM,
            COMPOUND_CAPTION,
            OVERALL_PREFIX,
            CHART_TITLE,
            CHART_X_LABEL,
            CHART_Y_LABEL,
            "Positive (pos):",
            "Neutral (neu):",
            "Negative (neg):",
        ];
        expected.extend(SCORE_CAPTIONS.iter().map(|(_, _, text)| *text));
        for text in expected {
            assert!(contains(&texts, text), "missing {text:?} in {texts:?}");
        }
        assert!(!contains(&texts, EMPTY_INPUT_WARNING));

        // Label heading follows the prefix: name, then its icon
        let prefix_at = texts.iter().position(|t| t == OVERALL_PREFIX).unwrap();
        assert!(
            texts[prefix_at..].iter().any(|t| t.starts_with("Neutral ")),
            "{texts:?}"
        );
    }

    #[test]
    fn shortcut_needs_focused_field() {
        let mut app = app_with(FixedScorer::with_compound(0.5));
        app.input_text = "great".into();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));

        let _ = ctx.run(ctrl_enter(), |ctx| app.render(ctx));
        assert_eq!(app.result, ResultState::Idle);

        ctx.memory_mut(|m| m.request_focus(egui::Id::new(INPUT_ID)));
        let _ = ctx.run(ctrl_enter(), |ctx| app.render(ctx));
        assert_eq!(
            app.result.analysis().map(|a| a.label),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(app.input_text, "great");
    }
}
