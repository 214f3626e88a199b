use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    content::{INTRO_BLURB, INTRO_TOPICS, section_heading},
    lesson::{Command, Section},
    ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
};

pub fn render_intro(ui: &mut Ui, out: &mut Vec<Command>) {
    let heading = section_heading(Section::Intro);
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.12);
        ui.label(
            RichText::new(heading.title)
                .size(32.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(16.0);
        ui.set_max_width(640.0);
        ui.label(RichText::new(INTRO_BLURB).size(16.0).color(UI_CONFIG.colors.label));
        ui.add_space(20.0);
        ui.label(RichText::new(UI_TEXT.intro_discover).color(UI_CONFIG.colors.subtitle));
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.set_max_width(420.0);
            // Last topic gets the purple dot, matching the original's branding
            let last = INTRO_TOPICS.len() - 1;
            for (i, topic) in INTRO_TOPICS.iter().enumerate() {
                let dot = if i == last {
                    UI_CONFIG.colors.accent_alt
                } else {
                    UI_CONFIG.colors.accent
                };
                ui.bullet_line(topic, dot);
            }
        });

        ui.add_space(28.0);
        let begin = Button::new(RichText::new(UI_TEXT.btn_begin).size(17.0).strong())
            .fill(UI_CONFIG.colors.accent_alt)
            .min_size(Vec2::new(200.0, 44.0));
        if ui.add(begin).clicked() {
            out.push(Command::Start);
        }
    });
}
