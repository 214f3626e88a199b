//! The interaction core: lesson navigation, per-section step walkers, the
//! quiz engine and the synthetic series generator. Pure state; nothing in
//! here touches egui or the frame clock, which is what keeps it testable.

mod controller;
mod navigator;
mod quiz;
mod series;
mod steps;

pub use controller::{Command, CommandError, LessonController};
pub use navigator::{LessonState, Section};
pub use quiz::{Question, QuizEngine, QuizError};
pub use series::{SeriesData, SeriesParams, generate_historical, generate_projection};
pub use steps::StepWalker;
