mod nav;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use nav::{render_navigation, render_title_bar};
pub(crate) use screens::{
    LabTab, render_explanation, render_intro, render_quiz, render_stock_lab, render_summary,
};
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
