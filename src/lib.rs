#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod content;
pub mod lesson;
mod ui;
pub mod utils;

pub use app::App;
pub use lesson::{Command, LessonController, Section};

// CLI argument parsing
use clap::Parser;
use strum::IntoEnumIterator;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Jump straight to a section on launch (intro, rnn, lstm,
    /// timeseries, stocks, test, summary)
    #[arg(long)]
    pub section: Option<String>,
}

impl Cli {
    pub fn target_section(&self) -> Option<Section> {
        let wanted = self.section.as_deref()?;
        let found = Section::iter().find(|s| s.short_id().eq_ignore_ascii_case(wanted));
        if found.is_none() {
            log::warn!("Unknown --section value '{wanted}', starting at the intro");
        }
        found
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
