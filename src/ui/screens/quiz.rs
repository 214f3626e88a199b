use eframe::egui::{Align, Button, Layout, RichText, Stroke, Ui, Vec2};

use crate::{
    content::section_heading,
    lesson::{Command, QuizEngine, Section},
    ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
};

pub fn render_quiz(ui: &mut Ui, quiz: &QuizEngine, out: &mut Vec<Command>) {
    let heading = section_heading(Section::McqTest);
    ui.screen_heading(heading.title, heading.subtitle);

    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);

        ui.horizontal(|ui| {
            ui.label_subdued(format!(
                "Question {} of {}",
                quiz.current_index() + 1,
                quiz.question_count()
            ));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(score) = quiz.final_score() {
                    ui.label(
                        RichText::new(format!(
                            "{} {}/{}",
                            UI_TEXT.label_score,
                            score,
                            quiz.question_count()
                        ))
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                    );
                }
            });
        });
        ui.add_space(6.0);

        render_question_card(ui, quiz, out);
        ui.add_space(10.0);

        if quiz.explanation_visible() && quiz.is_current_answered() {
            render_explanation_card(ui, quiz);
            ui.add_space(10.0);
        }

        render_question_nav(ui, quiz, out);
    });
}

fn render_question_card(ui: &mut Ui, quiz: &QuizEngine, out: &mut Vec<Command>) {
    let question = quiz.current_question();
    let selected = quiz.current_selected();
    // Derived, never stored
    let is_correct = quiz.is_correct(quiz.current_index());

    ui.info_card(question.text, |ui| {
        for (i, option) in question.options.iter().enumerate() {
            let this_selected = selected == Some(i);
            let (stroke_color, mark) = match (this_selected, is_correct) {
                (true, Some(true)) => (UI_CONFIG.colors.correct, " ✔"),
                (true, Some(false)) => (UI_CONFIG.colors.incorrect, " ✘"),
                _ => (UI_CONFIG.colors.card_border, ""),
            };
            let row = Button::new(RichText::new(format!("{option}{mark}")).color(UI_CONFIG.colors.label))
                .fill(if this_selected {
                    stroke_color.linear_multiply(0.15)
                } else {
                    UI_CONFIG.colors.side_panel
                })
                .stroke(Stroke::new(1.0, stroke_color))
                .min_size(Vec2::new(ui.available_width(), 40.0));
            if ui.add(row).clicked() {
                out.push(Command::SelectAnswer(i));
            }
            ui.add_space(6.0);
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let toggle_label = if quiz.explanation_visible() {
                UI_TEXT.btn_hide_explanation
            } else {
                UI_TEXT.btn_show_explanation
            };
            if ui
                .add_enabled(quiz.is_current_answered(), Button::new(toggle_label))
                .clicked()
            {
                out.push(Command::ToggleExplanation);
            }

            // Wrong pick: show what the right answer was
            if is_correct == Some(false) {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            UI_TEXT.label_correct_answer,
                            question.options[question.correct_answer]
                        ))
                        .small()
                        .color(UI_CONFIG.colors.incorrect),
                    );
                });
            }
        });
    });
}

fn render_explanation_card(ui: &mut Ui, quiz: &QuizEngine) {
    ui.info_card(UI_TEXT.label_explanation, |ui| {
        ui.label(
            RichText::new(quiz.current_question().explanation).color(UI_CONFIG.colors.label),
        );
    });
}

fn render_question_nav(ui: &mut Ui, quiz: &QuizEngine, out: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        let prev = Button::new(UI_TEXT.btn_prev_question).min_size(Vec2::new(150.0, 30.0));
        if ui
            .add_enabled(quiz.current_index() > 0, prev)
            .clicked()
        {
            out.push(Command::PreviousQuestion);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if quiz.on_last_question() {
                let complete = Button::new(
                    RichText::new(UI_TEXT.btn_complete_test).strong(),
                )
                .fill(UI_CONFIG.colors.accent_alt)
                .min_size(Vec2::new(150.0, 30.0));
                let enabled = quiz.is_current_answered() && !quiz.completed();
                if ui.add_enabled(enabled, complete).clicked() {
                    out.push(Command::CompleteQuiz);
                }
            } else {
                let next = Button::new(UI_TEXT.btn_next_question).min_size(Vec2::new(150.0, 30.0));
                if ui.add_enabled(quiz.is_current_answered(), next).clicked() {
                    out.push(Command::NextQuestion);
                }
            }
        });
    });
}
