//! Shared layout for the three multi-step explanation sections: animated
//! diagram on the left, the current step's info card and step controls on
//! the right.

use eframe::egui::{Button, Ui, Vec2};

use crate::{
    content::{section_heading, step_cards},
    lesson::{Command, Section, StepWalker},
    ui::{UI_TEXT, screens::diagrams, styles::UiStyleExt},
};

pub fn render_explanation(
    ui: &mut Ui,
    section: Section,
    walker: &StepWalker,
    out: &mut Vec<Command>,
) {
    let heading = section_heading(section);
    ui.screen_heading(heading.title, heading.subtitle);

    let cards = step_cards(section);
    debug_assert_eq!(cards.len(), walker.total());

    ui.columns(2, |cols| {
        diagrams::render_diagram(&mut cols[0], section, walker.current());

        let ui = &mut cols[1];
        if let Some(card) = cards.get(walker.current() - 1) {
            ui.step_card(card);
        }
        ui.add_space(12.0);
        render_step_controls(ui, walker, out);
    });

    // Keep the decorative pulses moving
    ui.ctx().request_repaint();
}

fn render_step_controls(ui: &mut Ui, walker: &StepWalker, out: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        let prev = Button::new(UI_TEXT.btn_prev_step).min_size(Vec2::new(130.0, 28.0));
        if ui.add_enabled(!walker.at_start(), prev).clicked() {
            out.push(Command::StepPrevious);
        }

        ui.label_subdued(format!("Step {} of {}", walker.current(), walker.total()));

        let next = Button::new(UI_TEXT.btn_next_step).min_size(Vec2::new(130.0, 28.0));
        if ui.add_enabled(!walker.at_end(), next).clicked() {
            out.push(Command::StepNext);
        }
    });
}
