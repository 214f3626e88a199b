use rand::rngs::ThreadRng;
use thiserror::Error;

use crate::{
    config::{AUTO_ADVANCE_DELAY, DF, LSTM_STEPS, RNN_STEPS, TIMESERIES_STEPS},
    content::QUESTIONS,
    lesson::{
        navigator::{LessonState, Section},
        quiz::{QuizEngine, QuizError},
        series::{SeriesData, SeriesParams},
        steps::StepWalker,
    },
    utils::AppInstant,
};

/// The full external surface of the interaction core. The view layer
/// translates widget events into these and applies them through
/// [`LessonController::dispatch`]; it never mutates state directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Start,
    Next,
    Previous,
    GoTo(Section),
    StepNext,
    StepPrevious,
    SelectAnswer(usize),
    NextQuestion,
    PreviousQuestion,
    ToggleExplanation,
    CompleteQuiz,
    SetVolatility(f64),
    SetTrend(f64),
    SetLookback(usize),
    RegenerateHistorical,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Owns every state machine of the lesson and applies commands
/// synchronously. The one piece of timing, the 1500 ms auto-advance
/// after the knowledge check, is held as a deadline and consumed by
/// `tick`, so dropping the controller (view teardown) discards it.
pub struct LessonController {
    lesson: LessonState,
    rnn_steps: StepWalker,
    lstm_steps: StepWalker,
    timeseries_steps: StepWalker,
    quiz: QuizEngine,
    series_params: SeriesParams,
    series: SeriesData,
    pending_advance: Option<AppInstant>,
    rng: ThreadRng,
}

impl Default for LessonController {
    fn default() -> Self {
        let mut rng = rand::thread_rng();
        let series_params = SeriesParams::default();
        let series = SeriesData::generate(&mut rng, &series_params);
        Self {
            lesson: LessonState::default(),
            rnn_steps: StepWalker::new(RNN_STEPS),
            lstm_steps: StepWalker::new(LSTM_STEPS),
            timeseries_steps: StepWalker::new(TIMESERIES_STEPS),
            quiz: QuizEngine::new(QUESTIONS),
            series_params,
            series,
            pending_advance: None,
            rng,
        }
    }
}

impl LessonController {
    pub fn lesson(&self) -> &LessonState {
        &self.lesson
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn series(&self) -> &SeriesData {
        &self.series
    }

    pub fn series_params(&self) -> &SeriesParams {
        &self.series_params
    }

    /// The walker owned by the active section, if it has sub-steps.
    pub fn active_steps(&self) -> Option<&StepWalker> {
        match self.lesson.current() {
            Section::Rnn => Some(&self.rnn_steps),
            Section::Lstm => Some(&self.lstm_steps),
            Section::TimeSeries => Some(&self.timeseries_steps),
            _ => None,
        }
    }

    pub fn auto_advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    pub fn dispatch(&mut self, cmd: Command, now: AppInstant) -> Result<(), CommandError> {
        if DF.log_commands {
            log::info!("dispatch {:?} in {}", cmd, self.lesson.current());
        }
        match cmd {
            Command::Start => {
                if let Some(entered) = self.lesson.start() {
                    self.enter_section(entered);
                }
            }
            Command::Next => {
                if let Some(entered) = self.lesson.next() {
                    self.enter_section(entered);
                }
            }
            Command::Previous => {
                if let Some(entered) = self.lesson.previous() {
                    self.enter_section(entered);
                }
            }
            Command::GoTo(section) => {
                self.lesson.go_to(section);
                self.enter_section(section);
            }
            Command::StepNext => {
                if let Some(walker) = self.active_steps_mut() {
                    walker.next();
                }
            }
            Command::StepPrevious => {
                if let Some(walker) = self.active_steps_mut() {
                    walker.previous();
                }
            }
            Command::SelectAnswer(option) => self.quiz.select_answer(option)?,
            Command::NextQuestion => self.quiz.next_question(),
            Command::PreviousQuestion => self.quiz.previous_question(),
            Command::ToggleExplanation => self.quiz.toggle_explanation(),
            Command::CompleteQuiz => self.complete_quiz(now)?,
            Command::SetVolatility(pct) => {
                self.series_params.volatility_pct = pct;
                self.series.reproject(&mut self.rng, &self.series_params);
            }
            Command::SetTrend(pct) => {
                self.series_params.trend_pct = pct;
                self.series.reproject(&mut self.rng, &self.series_params);
            }
            Command::SetLookback(days) => {
                // Labeled parameter only; the walk does not consume it,
                // so no regeneration happens here.
                self.series_params.lookback_days = days;
            }
            Command::RegenerateHistorical => {
                self.series = SeriesData::generate(&mut self.rng, &self.series_params);
            }
        }
        Ok(())
    }

    /// Fire the auto-advance if its deadline has passed. Called once per
    /// frame by the shell; returns the section entered, if any.
    pub fn tick(&mut self, now: AppInstant) -> Option<Section> {
        let due = self.pending_advance?;
        if now < due {
            return None;
        }
        self.pending_advance = None;
        let entered = self.lesson.next()?;
        self.enter_section(entered);
        if DF.log_navigation {
            log::info!("Auto-advanced to {}", entered);
        }
        Some(entered)
    }

    /// Record the score and schedule the move to the summary. The quiz
    /// engine's idempotent completion makes a double-fire impossible: a
    /// repeat command finds the quiz already completed and schedules
    /// nothing.
    fn complete_quiz(&mut self, now: AppInstant) -> Result<(), CommandError> {
        if self.quiz.completed() {
            return Ok(());
        }
        let score = self.quiz.complete()?;
        self.lesson.record_test_score(score);
        self.pending_advance = Some(now + AUTO_ADVANCE_DELAY);
        Ok(())
    }

    /// Every way into a section funnels through here, so the reset policy
    /// lives in one place: a freshly entered multi-step section starts at
    /// step 1.
    fn enter_section(&mut self, section: Section) {
        match section {
            Section::Rnn => self.rnn_steps.reset(),
            Section::Lstm => self.lstm_steps.reset(),
            Section::TimeSeries => self.timeseries_steps.reset(),
            _ => {}
        }
    }

    fn active_steps_mut(&mut self) -> Option<&mut StepWalker> {
        match self.lesson.current() {
            Section::Rnn => Some(&mut self.rnn_steps),
            Section::Lstm => Some(&mut self.lstm_steps),
            Section::TimeSeries => Some(&mut self.timeseries_steps),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROJECTION_DAYS;
    use std::time::Duration;

    fn t0() -> AppInstant {
        AppInstant::now()
    }

    fn answer_all_correct(c: &mut LessonController, now: AppInstant) {
        for i in 0..c.quiz().question_count() {
            let correct = c.quiz().questions()[i].correct_answer;
            c.dispatch(Command::SelectAnswer(correct), now).unwrap();
            c.dispatch(Command::NextQuestion, now).unwrap();
        }
    }

    #[test]
    fn test_steps_reset_on_reentry() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::Rnn), now).unwrap();
        c.dispatch(Command::StepNext, now).unwrap();
        c.dispatch(Command::StepNext, now).unwrap();
        assert_eq!(c.active_steps().unwrap().current(), 3);

        c.dispatch(Command::Next, now).unwrap();
        c.dispatch(Command::Previous, now).unwrap();
        assert_eq!(
            c.active_steps().unwrap().current(),
            1,
            "re-entering a section starts over at step 1"
        );
    }

    #[test]
    fn test_step_commands_ignored_outside_step_sections() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::Summary), now).unwrap();
        c.dispatch(Command::StepNext, now).unwrap();
        assert!(c.active_steps().is_none());
    }

    #[test]
    fn test_slider_changes_reproject_only() {
        let mut c = LessonController::default();
        let now = t0();
        let history = c.series().historical.clone();

        c.dispatch(Command::SetTrend(1.5), now).unwrap();
        c.dispatch(Command::SetVolatility(4.0), now).unwrap();
        assert_eq!(c.series().historical, history);
        assert_eq!(c.series().predicted.len(), PROJECTION_DAYS);

        c.dispatch(Command::RegenerateHistorical, now).unwrap();
        assert_eq!(c.series().historical.len(), history.len());
    }

    #[test]
    fn test_lookback_is_a_label_only() {
        let mut c = LessonController::default();
        let now = t0();
        let predicted = c.series().predicted.clone();
        c.dispatch(Command::SetLookback(21), now).unwrap();
        assert_eq!(c.series_params().lookback_days, 21);
        assert_eq!(c.series().predicted, predicted);
    }

    #[test]
    fn test_auto_advance_waits_for_deadline() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::McqTest), now).unwrap();
        answer_all_correct(&mut c, now);
        c.dispatch(Command::CompleteQuiz, now).unwrap();
        assert!(c.auto_advance_pending());

        // Before the deadline nothing moves
        assert_eq!(c.tick(now + Duration::from_millis(1499)), None);
        assert_eq!(c.lesson().current(), Section::McqTest);

        // At the deadline the summary appears, exactly once
        assert_eq!(
            c.tick(now + Duration::from_millis(1500)),
            Some(Section::Summary)
        );
        assert_eq!(c.tick(now + Duration::from_secs(10)), None);
        assert_eq!(c.lesson().current(), Section::Summary);
    }

    #[test]
    fn test_double_completion_schedules_once() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::McqTest), now).unwrap();
        answer_all_correct(&mut c, now);
        c.dispatch(Command::CompleteQuiz, now).unwrap();
        c.dispatch(Command::CompleteQuiz, now).unwrap();

        assert_eq!(c.lesson().test_score(), Some(10));
        assert_eq!(
            c.tick(now + Duration::from_millis(1500)),
            Some(Section::Summary)
        );
        // A second pending advance would land here; there must be none
        assert_eq!(c.tick(now + Duration::from_secs(60)), None);
        assert_eq!(c.lesson().current(), Section::Summary);
    }

    #[test]
    fn test_teardown_discards_pending_advance() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::McqTest), now).unwrap();
        answer_all_correct(&mut c, now);
        c.dispatch(Command::CompleteQuiz, now).unwrap();
        assert!(c.auto_advance_pending());
        // The deadline lives inside the controller; dropping it is the
        // whole cancellation story
        drop(c);
    }

    #[test]
    fn test_invalid_answer_surfaces_as_command_error() {
        let mut c = LessonController::default();
        let now = t0();
        c.dispatch(Command::GoTo(Section::McqTest), now).unwrap();
        assert_eq!(
            c.dispatch(Command::SelectAnswer(7), now),
            Err(CommandError::Quiz(QuizError::OptionOutOfRange(7)))
        );
    }

    #[test]
    fn test_full_walkthrough_scenario() {
        let mut c = LessonController::default();
        let now = t0();

        c.dispatch(Command::Start, now).unwrap();
        assert_eq!(c.lesson().current(), Section::Rnn);
        assert!(c.lesson().started());

        // Walk forward to the knowledge check
        while c.lesson().current() != Section::McqTest {
            c.dispatch(Command::Next, now).unwrap();
        }

        answer_all_correct(&mut c, now);
        c.dispatch(Command::CompleteQuiz, now).unwrap();
        assert_eq!(c.lesson().test_score(), Some(10));

        c.tick(now + AUTO_ADVANCE_DELAY);
        assert_eq!(c.lesson().current(), Section::Summary);
        assert_eq!(c.lesson().progress(), 100.0);
    }
}
