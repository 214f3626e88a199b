use eframe::egui::{Color32, RichText, Ui};

use crate::{content::StepCard, ui::UI_CONFIG};

/// Score ring / award coloring: green from 70%, amber from 40%, red below.
pub fn score_color(percentage: f64) -> Color32 {
    if percentage >= 70.0 {
        UI_CONFIG.colors.correct
    } else if percentage >= 40.0 {
        UI_CONFIG.colors.warning
    } else {
        UI_CONFIG.colors.incorrect
    }
}

pub(crate) trait UiStyleExt {
    /// Section title + subdued subtitle block at the top of a screen.
    fn screen_heading(&mut self, title: &str, subtitle: &str);

    fn label_subdued(&mut self, text: impl Into<String>);

    /// Accent-colored bullet dot followed by text, the original's list style.
    fn bullet_line(&mut self, text: &str, dot_color: Color32);

    /// Bordered card with a bold title and arbitrary body.
    fn info_card(&mut self, title: &str, add_body: impl FnOnce(&mut Ui));

    /// Renders a [`StepCard`]: lead paragraphs, bullets, closing paragraphs.
    fn step_card(&mut self, card: &StepCard);
}

impl UiStyleExt for Ui {
    fn screen_heading(&mut self, title: &str, subtitle: &str) {
        self.label(
            RichText::new(title)
                .size(26.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        self.add_space(2.0);
        self.label(
            RichText::new(subtitle)
                .size(15.0)
                .color(UI_CONFIG.colors.subtitle),
        );
        self.add_space(12.0);
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_subdued));
    }

    fn bullet_line(&mut self, text: &str, dot_color: Color32) {
        self.horizontal_wrapped(|ui| {
            ui.label(RichText::new("●").size(8.0).color(dot_color));
            ui.label(RichText::new(text).color(UI_CONFIG.colors.label));
        });
    }

    fn info_card(&mut self, title: &str, add_body: impl FnOnce(&mut Ui)) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(title)
                    .size(17.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(8.0);
            add_body(ui);
        });
    }

    fn step_card(&mut self, card: &StepCard) {
        self.info_card(card.title, |ui| {
            for para in card.lead {
                ui.label(RichText::new(*para).color(UI_CONFIG.colors.label));
                ui.add_space(6.0);
            }
            for bullet in card.bullets {
                ui.bullet_line(bullet, UI_CONFIG.colors.accent);
            }
            if !card.bullets.is_empty() {
                ui.add_space(6.0);
            }
            for para in card.closing {
                ui.label(RichText::new(*para).color(UI_CONFIG.colors.label));
            }
        });
    }
}
