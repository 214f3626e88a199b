//! Fixed lesson content: the question bank and all screen copy.

mod questions;
mod sections;

pub use questions::QUESTIONS;
pub use sections::{
    APPLICATIONS, BOOKS, COURSES, INTRO_BLURB, INTRO_TOPICS, KEY_CONCEPTS, LAB_CARDS, RECAP_CARDS,
    RecapCard, SectionHeading, StepCard, section_heading, step_cards,
};
