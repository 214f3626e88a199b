use std::time::Duration;

use eframe::{
    Frame, Storage,
    egui::{Area, CentralPanel, Context, Id, Key, Order, RichText, Visuals},
};
use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    lesson::{Command, LessonController, Section},
    ui::{
        LabTab, UI_CONFIG, UI_TEXT, UiStyleExt, render_explanation, render_intro, render_navigation,
        render_quiz, render_stock_lab, render_summary, render_title_bar,
    },
    utils::AppInstant,
};

#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Cosmetic prefs persist across sessions; learner progress never does.
    lab_tab: LabTab,
    show_help: bool,
    #[serde(skip)]
    controller: LessonController,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(section) = args.target_section() {
            let now = AppInstant::now();
            for cmd in [Command::Start, Command::GoTo(section)] {
                dispatch_logged(&mut app.controller, cmd, now);
            }
        }

        app
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context, out: &mut Vec<Command>) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let started = self.controller.lesson().started();
        ctx.input(|i| {
            if started && i.key_pressed(Key::ArrowRight) {
                out.push(Command::Next);
            }
            if started && i.key_pressed(Key::ArrowLeft) {
                out.push(Command::Previous);
            }
            if i.key_pressed(Key::ArrowDown) {
                out.push(Command::StepNext);
            }
            if i.key_pressed(Key::ArrowUp) {
                out.push(Command::StepPrevious);
            }
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) {
                self.show_help = false;
            }
        });
    }

    fn render_active_section(&mut self, ctx: &Context, out: &mut Vec<Command>) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let section = self.controller.lesson().current();
                match section {
                    Section::Intro => render_intro(ui, out),
                    Section::Rnn | Section::Lstm | Section::TimeSeries => {
                        if let Some(walker) = self.controller.active_steps() {
                            render_explanation(ui, section, walker, out);
                        }
                    }
                    Section::StockPrediction => render_stock_lab(
                        ui,
                        self.controller.series(),
                        self.controller.series_params(),
                        &mut self.lab_tab,
                        out,
                    ),
                    Section::McqTest => render_quiz(ui, self.controller.quiz(), out),
                    Section::Summary => render_summary(
                        ui,
                        self.controller.lesson().test_score(),
                        self.controller.quiz().question_count(),
                    ),
                }
            });
    }

    fn render_help_overlay(&self, ctx: &Context) {
        if !self.show_help {
            return;
        }
        Area::new(Id::new("help_overlay"))
            .order(Order::Foreground)
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new(UI_TEXT.help_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.add_space(6.0);
                    for line in UI_TEXT.help_lines {
                        ui.label_subdued(*line);
                    }
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let now = AppInstant::now();
        self.controller.tick(now);

        let mut commands = Vec::new();
        self.handle_global_shortcuts(ctx, &mut commands);
        render_title_bar(ctx, self.controller.lesson());
        render_navigation(ctx, self.controller.lesson(), &mut commands);
        self.render_active_section(ctx, &mut commands);
        self.render_help_overlay(ctx);

        for cmd in commands {
            dispatch_logged(&mut self.controller, cmd, now);
        }

        if self.controller.auto_advance_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

/// Rejections can only come from a view bug; keep running, leave a trace.
fn dispatch_logged(controller: &mut LessonController, cmd: Command, now: AppInstant) {
    if let Err(err) = controller.dispatch(cmd, now) {
        log::error!("Rejected command: {err}");
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_logged_applies_valid_and_absorbs_invalid() {
        let mut controller = LessonController::default();
        let now = AppInstant::now();

        dispatch_logged(&mut controller, Command::Start, now);
        dispatch_logged(&mut controller, Command::GoTo(Section::McqTest), now);
        assert_eq!(controller.lesson().current(), Section::McqTest);

        // A rejected command must be absorbed, not panic, and leave state alone
        dispatch_logged(&mut controller, Command::SelectAnswer(9), now);
        assert_eq!(controller.quiz().current_selected(), None);
        assert_eq!(controller.lesson().current(), Section::McqTest);
    }
}
