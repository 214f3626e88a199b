use eframe::egui::{Align2, FontId, Pos2, RichText, ScrollArea, Sense, Shape, Stroke, Ui, Vec2};

use crate::{
    content::{APPLICATIONS, BOOKS, COURSES, KEY_CONCEPTS, RECAP_CARDS, section_heading},
    lesson::Section,
    ui::{UI_CONFIG, UI_TEXT, styles, styles::UiStyleExt},
};

pub fn render_summary(ui: &mut Ui, test_score: Option<usize>, question_count: usize) {
    let heading = section_heading(Section::Summary);

    ScrollArea::vertical().show(ui, |ui| {
        ui.screen_heading(heading.title, heading.subtitle);

        if let Some(score) = test_score {
            ui.label_subdued(format!(
                "{} {}/{} on the knowledge check.",
                UI_TEXT.summary_scored, score, question_count
            ));
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                render_score_ring(ui, score, question_count);
            });
            ui.add_space(16.0);
        }

        ui.columns(3, |cols| {
            for (ui, card) in cols.iter_mut().zip(RECAP_CARDS) {
                ui.info_card(card.title, |ui| {
                    ui.label_subdued(card.tagline);
                    ui.add_space(6.0);
                    for point in card.points {
                        ui.bullet_line(point, UI_CONFIG.colors.correct);
                    }
                });
            }
        });
        ui.add_space(18.0);

        ui.label(
            RichText::new(UI_TEXT.summary_learned)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            bullet_list(&mut cols[0], UI_TEXT.summary_key_concepts, KEY_CONCEPTS, true);
            bullet_list(&mut cols[1], UI_TEXT.summary_applications, APPLICATIONS, false);
        });
        ui.add_space(18.0);

        ui.label(
            RichText::new(UI_TEXT.summary_resources)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            bullet_list(&mut cols[0], UI_TEXT.summary_courses, COURSES, true);
            bullet_list(&mut cols[1], UI_TEXT.summary_books, BOOKS, false);
        });
        ui.add_space(20.0);
    });
}

fn bullet_list(ui: &mut Ui, title: &str, items: &[&str], cyan: bool) {
    let dot = if cyan {
        UI_CONFIG.colors.accent
    } else {
        UI_CONFIG.colors.accent_alt
    };
    ui.label(
        RichText::new(title)
            .size(15.0)
            .strong()
            .color(UI_CONFIG.colors.subtitle),
    );
    ui.add_space(4.0);
    for item in items {
        ui.bullet_line(item, dot);
    }
}

/// Award-style ring filled proportionally to the score, colored by band.
fn render_score_ring(ui: &mut Ui, score: usize, question_count: usize) {
    let percentage = score as f64 / question_count.max(1) as f64 * 100.0;
    let color = styles::score_color(percentage);

    let (response, painter) = ui.allocate_painter(Vec2::splat(150.0), Sense::hover());
    let center = response.rect.center();
    let radius = 62.0;

    painter.circle_stroke(center, radius, Stroke::new(10.0, UI_CONFIG.colors.card_border));

    // Filled arc from 12 o'clock, clockwise
    let sweep = std::f32::consts::TAU * (percentage / 100.0) as f32;
    if sweep > 0.0 {
        let points: Vec<Pos2> = (0..=64)
            .map(|i| {
                let a = sweep * i as f32 / 64.0 - std::f32::consts::FRAC_PI_2;
                center + radius * Vec2::new(a.cos(), a.sin())
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(10.0, color)));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        format!("{score}/{question_count}"),
        FontId::proportional(26.0),
        UI_CONFIG.colors.heading,
    );
}
