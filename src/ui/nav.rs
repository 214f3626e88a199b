use eframe::egui::{
    Align, Button, Context, Layout, ProgressBar, RichText, Sense, TopBottomPanel, Vec2,
};
use strum::IntoEnumIterator;

use crate::{
    lesson::{Command, LessonState, Section},
    ui::{UI_CONFIG, UI_TEXT},
};

/// Title bar with the linear progress indicator (shown once started).
pub fn render_title_bar(ctx: &Context, lesson: &LessonState) {
    TopBottomPanel::top("title_bar")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.app_title)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                if lesson.started() {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.set_max_width(ui.available_width() * 0.5);
                        ui.add(
                            ProgressBar::new(lesson.progress() as f32 / 100.0)
                                .fill(UI_CONFIG.colors.accent)
                                .desired_height(8.0),
                        );
                    });
                }
            });
        });
}

/// Bottom bar: Previous / section dots / Next. Hidden until the lesson
/// starts, like the original.
pub fn render_navigation(ctx: &Context, lesson: &LessonState, out: &mut Vec<Command>) {
    if !lesson.started() {
        return;
    }
    TopBottomPanel::bottom("navigation_bar")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.columns(3, |cols| {
                cols[0].with_layout(Layout::left_to_right(Align::Center), |ui| {
                    let prev = Button::new(UI_TEXT.btn_previous).min_size(Vec2::new(100.0, 28.0));
                    if ui.add_enabled(lesson.can_go_previous(), prev).clicked() {
                        out.push(Command::Previous);
                    }
                });
                cols[1].with_layout(
                    Layout::top_down(Align::Center),
                    |ui| render_section_dots(ui, lesson, out),
                );
                cols[2].with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let next = Button::new(UI_TEXT.btn_next).min_size(Vec2::new(100.0, 28.0));
                    if ui.add_enabled(lesson.can_go_next(), next).clicked() {
                        out.push(Command::Next);
                    }
                });
            });
        });
}

fn render_section_dots(ui: &mut eframe::egui::Ui, lesson: &LessonState, out: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        for section in Section::iter() {
            let is_current = section == lesson.current();
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::click());
            let radius = if is_current { 6.0 } else { 4.0 };
            let color = if is_current {
                UI_CONFIG.colors.accent
            } else if response.hovered() {
                UI_CONFIG.colors.label
            } else {
                UI_CONFIG.colors.text_subdued
            };
            ui.painter().circle_filled(rect.center(), radius, color);
            if response.on_hover_text(section.to_string()).clicked() {
                out.push(Command::GoTo(section));
            }
        }
    });
}
