//! Painter-drawn diagrams for the explanation sections.
//!
//! The flourishes (traveling dots, the sliding window) are derived from the
//! frame clock and touch no lesson state; they exist purely to suggest data
//! flowing through the structures.

use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, StrokeKind,
    Ui, Vec2,
};

use crate::{
    config::{LSTM_PULSE_PERIOD, RNN_PULSE_PERIOD, WINDOW_SLIDE_PERIOD},
    lesson::Section,
    ui::UI_CONFIG,
};

pub fn render_diagram(ui: &mut Ui, section: Section, step: usize) {
    let size = Vec2::new(ui.available_width().min(460.0), 320.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let time = ui.input(|i| i.time);

    match section {
        Section::Rnn => draw_rnn(&painter, rect, step, time),
        Section::Lstm => draw_lstm(&painter, rect, step, time),
        Section::TimeSeries => draw_time_series(&painter, rect, step, time),
        _ => {}
    }
}

/// Smooth back-and-forth phase in [0, 1] with the given period in seconds.
fn pingpong(time: f64, period: f64) -> f32 {
    (0.5 + 0.5 * (time * std::f64::consts::TAU / (2.0 * period)).sin()) as f32
}

fn label(painter: &Painter, pos: Pos2, text: &str, size: f32, color: Color32) {
    painter.text(pos, Align2::CENTER_CENTER, text, FontId::proportional(size), color);
}

// --- RNN: input -> recurrent cell -> output, with the feedback loop ---

fn draw_rnn(painter: &Painter, rect: Rect, step: usize, time: f64) {
    let accent = UI_CONFIG.colors.accent;
    let center = rect.center();
    let cell = Rect::from_center_size(center, Vec2::new(110.0, 110.0));

    painter.rect(
        cell,
        CornerRadius::same(10),
        UI_CONFIG.colors.card_bg,
        Stroke::new(2.0, accent),
        StrokeKind::Inside,
    );
    label(painter, cell.center(), "h", 28.0, accent);

    // Input / output arrows with traveling dots
    let phase = pingpong(time, RNN_PULSE_PERIOD);
    let in_start = Pos2::new(cell.left() - 90.0, center.y);
    let in_end = Pos2::new(cell.left(), center.y);
    let out_start = Pos2::new(cell.right(), center.y);
    let out_end = Pos2::new(cell.right() + 90.0, center.y);

    painter.arrow(in_start, in_end - in_start, Stroke::new(2.0, accent));
    painter.arrow(out_start, out_end - out_start, Stroke::new(2.0, accent));
    painter.circle_filled(in_start.lerp(in_end, phase), 4.0, accent);
    painter.circle_filled(out_start.lerp(out_end, phase), 4.0, accent);
    label(painter, in_start + Vec2::new(20.0, -16.0), "xₜ", 14.0, UI_CONFIG.colors.label);
    label(painter, out_end + Vec2::new(-20.0, -16.0), "yₜ", 14.0, UI_CONFIG.colors.label);

    if step >= 2 {
        // Recurrent loop above the cell: the "memory" connection
        let loop_color = UI_CONFIG.colors.accent_alt;
        let radius = 42.0;
        let loop_center = Pos2::new(center.x, cell.top() - radius + 6.0);
        let points: Vec<Pos2> = (0..=48)
            .map(|i| {
                let a = std::f32::consts::TAU * i as f32 / 48.0;
                loop_center + radius * Vec2::new(a.sin(), -a.cos())
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(2.0, loop_color)));

        // Dot circling the loop continuously
        let a = (time / RNN_PULSE_PERIOD) as f32 * std::f32::consts::TAU;
        let dot = loop_center + radius * Vec2::new(a.sin(), -a.cos());
        painter.circle_filled(dot, 4.0, loop_color);
        label(
            painter,
            loop_center + Vec2::new(0.0, -radius - 14.0),
            "hₜ₋₁",
            13.0,
            loop_color,
        );
    }

    if step >= 3 {
        // Unrolled ghost cells fading out: the vanishing gradient
        let mut x = cell.left() - 30.0;
        let mut alpha = 140u8;
        for _ in 0..3 {
            x -= 54.0;
            let ghost = Rect::from_center_size(
                Pos2::new(x, cell.bottom() + 54.0),
                Vec2::new(44.0, 44.0),
            );
            let faded = Color32::from_rgba_unmultiplied(239, 68, 68, alpha);
            painter.rect(
                ghost,
                CornerRadius::same(6),
                Color32::TRANSPARENT,
                Stroke::new(1.5, faded),
                StrokeKind::Inside,
            );
            alpha = alpha.saturating_sub(50);
        }
        label(
            painter,
            Pos2::new(cell.left() - 100.0, cell.bottom() + 20.0),
            "∇ → 0",
            14.0,
            UI_CONFIG.colors.incorrect,
        );
    }
}

// --- LSTM: cell-state conveyor plus the three gates ---

fn draw_lstm(painter: &Painter, rect: Rect, step: usize, time: f64) {
    let colors = &UI_CONFIG.colors;
    let cell = Rect::from_center_size(rect.center(), Vec2::new(300.0, 180.0));

    painter.rect(
        cell,
        CornerRadius::same(10),
        colors.card_bg,
        Stroke::new(2.0, colors.accent),
        StrokeKind::Inside,
    );

    // Cell state: the conveyor belt across the top
    let belt_y = cell.top() + 34.0;
    let belt_start = Pos2::new(cell.left() - 50.0, belt_y);
    let belt_end = Pos2::new(cell.right() + 50.0, belt_y);
    let belt_stroke = if step == 1 {
        Stroke::new(3.0, colors.accent_alt)
    } else {
        Stroke::new(2.0, colors.text_subdued)
    };
    painter.arrow(belt_start, belt_end - belt_start, belt_stroke);
    label(painter, belt_start + Vec2::new(16.0, -14.0), "Cₜ₋₁", 13.0, colors.label);
    label(painter, belt_end + Vec2::new(-16.0, -14.0), "Cₜ", 13.0, colors.label);

    // Dot riding the belt
    let phase = (time / LSTM_PULSE_PERIOD).fract() as f32;
    painter.circle_filled(belt_start.lerp(belt_end, phase), 4.0, colors.accent_alt);

    // The three gates along the bottom of the cell
    let gates = [("forget", "σ", 2usize), ("input", "σ + tanh", 3), ("output", "σ", 4)];
    let gate_w = 78.0;
    let gap = (cell.width() - gate_w * gates.len() as f32) / (gates.len() + 1) as f32;
    let mut x = cell.left() + gap;
    for (name, formula, active_step) in gates {
        let gate = Rect::from_min_size(
            Pos2::new(x, cell.bottom() - 64.0),
            Vec2::new(gate_w, 48.0),
        );
        let active = step == active_step;
        let stroke_color = if active { colors.accent } else { colors.card_border };
        let fill = if active {
            colors.accent.linear_multiply(0.15)
        } else {
            Color32::TRANSPARENT
        };
        painter.rect(
            gate,
            CornerRadius::same(6),
            fill,
            Stroke::new(if active { 2.5 } else { 1.0 }, stroke_color),
            StrokeKind::Inside,
        );
        label(
            painter,
            gate.center() - Vec2::new(0.0, 9.0),
            name,
            13.0,
            if active { colors.heading } else { colors.text_subdued },
        );
        label(
            painter,
            gate.center() + Vec2::new(0.0, 11.0),
            formula,
            11.0,
            if active { colors.accent } else { colors.text_subdued },
        );

        // Active gate feeds the belt
        if active && active_step != 4 {
            let from = Pos2::new(gate.center().x, gate.top());
            let to = Pos2::new(gate.center().x, belt_y + 4.0);
            painter.arrow(from, to - from, Stroke::new(2.0, colors.accent));
        }
        x += gate_w + gap;
    }

    // Output gate drives the hidden state out the right side
    if step == 4 {
        let from = Pos2::new(cell.right(), cell.bottom() - 40.0);
        let to = from + Vec2::new(60.0, 0.0);
        painter.arrow(from, to - from, Stroke::new(2.0, colors.accent));
        label(painter, to + Vec2::new(2.0, -14.0), "hₜ", 13.0, colors.accent);
    }

    label(
        painter,
        Pos2::new(cell.center().x, cell.bottom() + 18.0),
        "xₜ, hₜ₋₁",
        13.0,
        colors.label,
    );
}

// --- Time series: a fixed wave with a sliding lookback window ---

fn draw_time_series(painter: &Painter, rect: Rect, step: usize, time: f64) {
    let colors = &UI_CONFIG.colors;
    let plot = rect.shrink(30.0);

    // Axes
    let axis_stroke = Stroke::new(1.5, colors.text_subdued);
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        axis_stroke,
    );
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis_stroke);
    label(
        painter,
        Pos2::new(plot.center().x, plot.bottom() + 16.0),
        "time",
        12.0,
        colors.text_subdued,
    );

    // A deterministic wavy series; no randomness in the decoration layer
    let observed_frac = if step >= 3 { 0.72 } else { 1.0 };
    let observed_w = plot.width() * observed_frac;
    let wave = |frac: f32| -> Pos2 {
        let x = plot.left() + frac * observed_w;
        let y = plot.center().y - (frac * 9.0).sin() * plot.height() * 0.22
            + (frac * 23.0).sin() * plot.height() * 0.06
            - frac * plot.height() * 0.12;
        Pos2::new(x, y)
    };
    let points: Vec<Pos2> = (0..=80).map(|i| wave(i as f32 / 80.0)).collect();
    let series_end = *points.last().unwrap();
    painter.add(Shape::line(points, Stroke::new(2.0, colors.accent)));

    if step >= 2 {
        // Sliding lookback window drifting along the observed range
        let slide = pingpong(time, WINDOW_SLIDE_PERIOD) * 0.55;
        let win = Rect::from_min_max(
            Pos2::new(plot.left() + slide * observed_w, plot.top()),
            Pos2::new(plot.left() + (slide + 0.3) * observed_w, plot.bottom()),
        );
        painter.rect(
            win,
            CornerRadius::ZERO,
            colors.accent_alt.linear_multiply(0.12),
            Stroke::new(1.5, colors.accent_alt),
            StrokeKind::Inside,
        );
        label(
            painter,
            Pos2::new(win.center().x, plot.top() + 12.0),
            "X (window)",
            12.0,
            colors.accent_alt,
        );
        // The target value sits just past the window's right edge
        let target_frac = (slide + 0.33).min(1.0);
        let target = wave(target_frac);
        painter.circle_filled(target, 5.0, colors.warning);
        label(painter, target + Vec2::new(0.0, -16.0), "y", 12.0, colors.warning);
    }

    if step >= 3 {
        // Dashed continuation: the forecast
        let forecast: Vec<Pos2> = (0..=24)
            .map(|i| {
                let frac = i as f32 / 24.0;
                let x = series_end.x + frac * (plot.right() - series_end.x);
                let y = series_end.y - frac * plot.height() * 0.10
                    + (frac * 14.0).sin() * plot.height() * 0.03;
                Pos2::new(x, y)
            })
            .collect();
        painter.extend(Shape::dashed_line(
            &forecast,
            Stroke::new(2.0, colors.accent_alt),
            6.0,
            5.0,
        ));
        label(
            painter,
            Pos2::new(series_end.x + 40.0, plot.top() + 12.0),
            "forecast",
            12.0,
            colors.accent_alt,
        );
    }
}
