use eframe::egui::{Color32, RichText, Slider, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};
use serde::{Deserialize, Serialize};

use crate::{
    config::{LOOKBACK_RANGE, TREND_RANGE, VOLATILITY_RANGE},
    content::{LAB_CARDS, section_heading},
    lesson::{Command, Section, SeriesData, SeriesParams},
    ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
};

/// Which lab view is open. Cosmetic, persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabTab {
    #[default]
    Visualization,
    Explanation,
}

pub fn render_stock_lab(
    ui: &mut Ui,
    series: &SeriesData,
    params: &SeriesParams,
    tab: &mut LabTab,
    out: &mut Vec<Command>,
) {
    let heading = section_heading(Section::StockPrediction);
    ui.screen_heading(heading.title, heading.subtitle);

    ui.horizontal(|ui| {
        ui.selectable_value(tab, LabTab::Visualization, UI_TEXT.tab_visualization);
        ui.selectable_value(tab, LabTab::Explanation, UI_TEXT.tab_explanation);
    });
    ui.add_space(10.0);

    match tab {
        LabTab::Visualization => render_visualization(ui, series, params, out),
        LabTab::Explanation => render_explanation_cards(ui),
    }
}

fn render_visualization(
    ui: &mut Ui,
    series: &SeriesData,
    params: &SeriesParams,
    out: &mut Vec<Command>,
) {
    ui.columns(2, |cols| {
        render_chart(&mut cols[0], series);

        let ui = &mut cols[1];
        render_parameters_card(ui, params, out);
        ui.add_space(12.0);
        render_insights_card(ui, series, params);
    });
}

fn render_chart(ui: &mut Ui, series: &SeriesData) {
    ui.label(
        RichText::new(UI_TEXT.plot_title)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(4.0);

    let historical: PlotPoints = series
        .historical
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, *p])
        .collect();

    // Anchor the projection to the last observed day so the lines connect
    let offset = series.historical.len().saturating_sub(1);
    let mut predicted_points: Vec<[f64; 2]> = Vec::with_capacity(series.predicted.len() + 1);
    if let Some(last) = series.last_historical() {
        predicted_points.push([offset as f64, last]);
    }
    predicted_points.extend(
        series
            .predicted
            .iter()
            .enumerate()
            .map(|(i, p)| [(offset + 1 + i) as f64, *p]),
    );

    Plot::new("stock_plot")
        .legend(Legend::default())
        .y_axis_label(UI_TEXT.plot_y_axis)
        .x_axis_label("Day")
        .allow_scroll(false)
        .height(360.0)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.series_historical, historical)
                    .color(UI_CONFIG.colors.accent)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(UI_TEXT.series_predicted, PlotPoints::new(predicted_points))
                    .color(UI_CONFIG.colors.accent_alt)
                    .style(LineStyle::Dashed { length: 6.0 })
                    .width(2.0),
            );
        });
}

fn render_parameters_card(ui: &mut Ui, params: &SeriesParams, out: &mut Vec<Command>) {
    ui.info_card(UI_TEXT.label_parameters, |ui| {
        let mut volatility = params.volatility_pct;
        ui.label_subdued(UI_TEXT.label_volatility);
        if ui
            .add(Slider::new(&mut volatility, VOLATILITY_RANGE).step_by(0.1).suffix("%"))
            .changed()
        {
            out.push(Command::SetVolatility(volatility));
        }
        ui.add_space(8.0);

        let mut trend = params.trend_pct;
        ui.label_subdued(UI_TEXT.label_trend);
        if ui
            .add(Slider::new(&mut trend, TREND_RANGE).step_by(0.1).suffix("%"))
            .changed()
        {
            out.push(Command::SetTrend(trend));
        }
        ui.add_space(8.0);

        let mut lookback = params.lookback_days;
        ui.label_subdued(UI_TEXT.label_lookback);
        if ui
            .add(
                Slider::new(&mut lookback, LOOKBACK_RANGE)
                    .suffix(format!(" {}", UI_TEXT.label_lookback_unit)),
            )
            .changed()
        {
            out.push(Command::SetLookback(lookback));
        }
        ui.add_space(10.0);

        if ui.button(UI_TEXT.btn_regenerate).clicked() {
            out.push(Command::RegenerateHistorical);
        }
    });
}

fn render_insights_card(ui: &mut Ui, series: &SeriesData, params: &SeriesParams) {
    ui.info_card(UI_TEXT.label_insights, |ui| {
        ui.label_subdued(UI_TEXT.insights_lead);
        ui.add_space(6.0);

        let bullish = params.trend_pct >= 0.0;
        let (direction, dir_color) = if bullish {
            (UI_TEXT.label_bullish, UI_CONFIG.colors.correct)
        } else {
            (UI_TEXT.label_bearish, UI_CONFIG.colors.incorrect)
        };
        metric_row(ui, UI_TEXT.label_trend_30d, direction, dir_color);

        let confidence = (100.0 - params.volatility_pct * 20.0).max(0.0);
        metric_row(
            ui,
            UI_TEXT.label_confidence,
            &format!("{confidence:.0}%"),
            UI_CONFIG.colors.label,
        );

        if let Some(change) = series.projected_change_pct() {
            let color = if change >= 0.0 {
                UI_CONFIG.colors.correct
            } else {
                UI_CONFIG.colors.incorrect
            };
            metric_row(
                ui,
                UI_TEXT.label_predicted_change,
                &format!("{change:+.2}%"),
                color,
            );
        }
    });
}

fn metric_row(ui: &mut Ui, name: &str, value: &str, value_color: Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(name).color(UI_CONFIG.colors.label));
        ui.label(RichText::new(value).strong().color(value_color));
    });
}

fn render_explanation_cards(ui: &mut Ui) {
    ui.columns(2, |cols| {
        for (i, card) in LAB_CARDS.iter().enumerate() {
            let ui = &mut cols[i % 2];
            ui.step_card(card);
            ui.add_space(12.0);
        }
    });
}
