use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::config::DF;

/// Top-level pages of the lesson, in presentation order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCountMacro,
    Display,
)]
pub enum Section {
    #[strum(to_string = "Introduction")]
    Intro,
    #[strum(to_string = "RNNs")]
    Rnn,
    #[strum(to_string = "LSTMs")]
    Lstm,
    #[strum(to_string = "Time Series")]
    TimeSeries,
    #[strum(to_string = "Stock Prediction")]
    StockPrediction,
    #[strum(to_string = "Knowledge Check")]
    McqTest,
    #[strum(to_string = "Summary")]
    Summary,
}

impl Section {
    pub fn index(self) -> usize {
        Section::iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::iter().nth(index)
    }

    /// True for sections that own a multi-step diagram walkthrough.
    pub fn has_steps(self) -> bool {
        matches!(self, Section::Rnn | Section::Lstm | Section::TimeSeries)
    }

    /// Stable lowercase identifier, used by the `--section` CLI flag.
    pub fn short_id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Rnn => "rnn",
            Section::Lstm => "lstm",
            Section::TimeSeries => "timeseries",
            Section::StockPrediction => "stocks",
            Section::McqTest => "test",
            Section::Summary => "summary",
        }
    }
}

/// Lives for the whole session; mutated only by navigation transitions
/// and by quiz completion.
#[derive(Clone, Debug)]
pub struct LessonState {
    current: Section,
    started: bool,
    test_score: Option<usize>,
}

impl Default for LessonState {
    fn default() -> Self {
        Self {
            current: Section::Intro,
            started: false,
            test_score: None,
        }
    }
}

impl LessonState {
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn test_score(&self) -> Option<usize> {
        self.test_score
    }

    /// Begin the lesson: moves off the intro screen. Ignored once started.
    pub fn start(&mut self) -> Option<Section> {
        if self.started {
            return None;
        }
        self.started = true;
        self.current = Section::from_index(Section::Intro.index() + 1)?;
        if DF.log_navigation {
            log::info!("Lesson started, entering {}", self.current);
        }
        Some(self.current)
    }

    /// Advance to the following section; staying on the last one is valid.
    pub fn next(&mut self) -> Option<Section> {
        let target = Section::from_index(self.current.index() + 1)?;
        self.current = target;
        Some(target)
    }

    /// Step back one section, clamped at the first.
    pub fn previous(&mut self) -> Option<Section> {
        let idx = self.current.index().checked_sub(1)?;
        let target = Section::from_index(idx)?;
        self.current = target;
        Some(target)
    }

    /// Direct jump, used by the dot navigation.
    pub fn go_to(&mut self, section: Section) {
        self.current = section;
    }

    pub fn can_go_next(&self) -> bool {
        self.current.index() + 1 < Section::COUNT
    }

    pub fn can_go_previous(&self) -> bool {
        self.current.index() > 0
    }

    /// Linear progress through the section list as a percentage.
    pub fn progress(&self) -> f64 {
        if Section::COUNT <= 1 {
            return 0.0;
        }
        self.current.index() as f64 / (Section::COUNT - 1) as f64 * 100.0
    }

    /// Record the knowledge-check score. First write wins.
    pub fn record_test_score(&mut self, score: usize) {
        if self.test_score.is_none() {
            self.test_score = Some(score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_is_fixed() {
        let order: Vec<Section> = Section::iter().collect();
        assert_eq!(order.len(), 7);
        assert_eq!(order[0], Section::Intro);
        assert_eq!(order[6], Section::Summary);
        for (i, s) in order.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Section::from_index(i), Some(*s));
        }
    }

    #[test]
    fn test_start_moves_past_intro_once() {
        let mut lesson = LessonState::default();
        assert_eq!(lesson.start(), Some(Section::Rnn));
        assert!(lesson.started());
        // Second start is ignored even after navigating elsewhere
        lesson.go_to(Section::Summary);
        assert_eq!(lesson.start(), None);
        assert_eq!(lesson.current(), Section::Summary);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut lesson = LessonState::default();
        assert_eq!(lesson.previous(), None);
        assert_eq!(lesson.current(), Section::Intro);

        lesson.go_to(Section::Summary);
        assert_eq!(lesson.next(), None);
        assert_eq!(lesson.current(), Section::Summary);
    }

    #[test]
    fn test_index_stays_in_bounds_under_arbitrary_walks() {
        let mut lesson = LessonState::default();
        // A jittery walk: two forward, one back, repeated well past both ends
        for _ in 0..40 {
            lesson.next();
            lesson.next();
            lesson.previous();
            assert!(lesson.current().index() < 7);
            let p = lesson.progress();
            assert!((0.0..=100.0).contains(&p));
        }
        for _ in 0..40 {
            lesson.previous();
            assert!(lesson.current().index() < 7);
        }
        assert_eq!(lesson.current(), Section::Intro);
    }

    #[test]
    fn test_progress_endpoints() {
        let mut lesson = LessonState::default();
        assert_eq!(lesson.progress(), 0.0);
        lesson.go_to(Section::Summary);
        assert_eq!(lesson.progress(), 100.0);
        lesson.go_to(Section::TimeSeries);
        assert_eq!(lesson.progress(), 50.0);
    }

    #[test]
    fn test_first_recorded_score_wins() {
        let mut lesson = LessonState::default();
        lesson.record_test_score(7);
        lesson.record_test_score(10);
        assert_eq!(lesson.test_score(), Some(7));
    }
}
