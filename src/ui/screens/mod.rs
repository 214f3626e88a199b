mod diagrams;
mod explanation;
mod intro;
mod quiz;
mod stock_lab;
mod summary;

pub(crate) use explanation::render_explanation;
pub(crate) use intro::render_intro;
pub(crate) use quiz::render_quiz;
pub(crate) use stock_lab::{LabTab, render_stock_lab};
pub(crate) use summary::render_summary;
